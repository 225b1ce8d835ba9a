//! Built-in helpdesk tools.
//!
//! Every tool simulates an enterprise backend in memory and returns a
//! human-readable status string. Rejections (unknown ticket, invalid license)
//! are ordinary string results meant to be relayed to the user as-is.
//!
//! # Main entry points
//!
//! - [`register_builtins()`] — Register all five tools backed by the mock ticket store.
//! - [`register_builtins_with_store()`] — Same, with a custom [`TicketStore`].
//! - The plain functions [`check_ticket_status`], [`reset_password`],
//!   [`unlock_account`], [`grant_license`] and [`add_to_group`].

/// License and group membership tools.
pub mod access;
/// Password reset and account unlock tools.
pub mod identity;
/// Ticket status lookup and the mock ticket datastore.
pub mod tickets;

pub use access::{add_to_group, grant_license, AddToGroupSkill, GrantLicenseSkill, LicenseType};
pub use identity::{reset_password, unlock_account, ResetPasswordSkill, UnlockAccountSkill};
pub use tickets::{
    check_ticket_status, MockTicketStore, TicketStatusSkill, TicketStore, TICKET_NOT_FOUND,
};

use helpdesk_core::{ToolCall, ToolResult};
use helpdesk_skills::SkillRegistry;
use std::sync::Arc;

/// Register all built-in tools, with ticket lookups served by [`MockTicketStore`].
pub fn register_builtins(registry: &mut SkillRegistry) {
    register_builtins_with_store(registry, Arc::new(MockTicketStore::new()));
}

/// Register all built-in tools, with ticket lookups served by `store`.
pub fn register_builtins_with_store(registry: &mut SkillRegistry, store: Arc<dyn TicketStore>) {
    registry.register(Arc::new(TicketStatusSkill::new(store)));
    registry.register(Arc::new(ResetPasswordSkill::new()));
    registry.register(Arc::new(UnlockAccountSkill::new()));
    registry.register(Arc::new(GrantLicenseSkill::new()));
    registry.register(Arc::new(AddToGroupSkill::new()));
}

/// Fetch a required string argument, or build the error result to return.
pub(crate) fn required_arg<'a>(call: &'a ToolCall, key: &str) -> Result<&'a str, ToolResult> {
    call.str_arg(key).ok_or_else(|| {
        ToolResult::error(&call.id, format!("Missing required argument '{key}'"))
    })
}
