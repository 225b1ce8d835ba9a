//! Core types and error definitions for the helpdesk agents.
//!
//! This crate provides the foundational types shared across all helpdesk crates:
//! error handling, conversation messages, and tool call abstractions.
//!
//! # Main types
//!
//! - [`HelpdeskError`] — Unified error enum for all helpdesk subsystems.
//! - [`HelpdeskResult`] — Convenience alias for `Result<T, HelpdeskError>`.
//! - [`Role`] — Message role (user, assistant, system, tool).
//! - [`Message`] — A single message within a conversation.
//! - [`ToolCall`] — A request to invoke a tool or handoff by name.
//! - [`ToolResult`] — The result returned after executing a tool call.

/// Error type and result alias.
pub mod error;
/// Conversation message types.
pub mod message;
/// Tool call and tool result types.
pub mod tool;

pub use error::{HelpdeskError, HelpdeskResult};
pub use message::{Message, Role};
pub use tool::{ToolCall, ToolResult};
