use crate::required_arg;
use async_trait::async_trait;
use helpdesk_core::{HelpdeskResult, ToolCall, ToolResult};
use helpdesk_skills::skill::{Skill, SkillDescriptor};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Returned for any ticket id the store does not know.
pub const TICKET_NOT_FOUND: &str = "Ticket not found.";

/// Read-only source of ticket statuses.
pub trait TicketStore: Send + Sync {
    /// Status of `ticket_id`, or `None` if the ticket does not exist.
    fn status(&self, ticket_id: &str) -> Option<String>;
}

/// Fixed, in-memory ticket table standing in for the ticketing system.
#[derive(Debug, Clone)]
pub struct MockTicketStore {
    tickets: HashMap<&'static str, &'static str>,
}

impl MockTicketStore {
    pub fn new() -> Self {
        let tickets = HashMap::from([
            ("INC-1001", "Open - Pending User Info"),
            ("INC-1002", "Resolved - Password Reset Complete"),
            ("INC-1003", "In Progress - Access Request Approved"),
        ]);
        Self { tickets }
    }

    /// Known ticket ids, sorted.
    pub fn ticket_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.tickets.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for MockTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for MockTicketStore {
    fn status(&self, ticket_id: &str) -> Option<String> {
        self.tickets.get(ticket_id).map(|s| (*s).to_string())
    }
}

static MOCK_TICKETS: LazyLock<MockTicketStore> = LazyLock::new(MockTicketStore::new);

/// Checks the status of an IT support ticket in the mock datastore.
pub fn check_ticket_status(ticket_id: &str) -> String {
    lookup(&*MOCK_TICKETS, ticket_id)
}

fn lookup(store: &dyn TicketStore, ticket_id: &str) -> String {
    let status = store.status(ticket_id);
    debug!(ticket_id = %ticket_id, found = status.is_some(), "Ticket lookup");
    status.unwrap_or_else(|| TICKET_NOT_FOUND.to_string())
}

/// Skill wrapper around ticket lookups.
pub struct TicketStatusSkill {
    descriptor: SkillDescriptor,
    store: Arc<dyn TicketStore>,
}

impl TicketStatusSkill {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            descriptor: SkillDescriptor::with_string_params(
                "check_ticket_status",
                "Checks the status of an IT support ticket.",
                &[("ticket_id", "Ticket identifier, e.g. INC-1001")],
            ),
            store,
        }
    }
}

#[async_trait]
impl Skill for TicketStatusSkill {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        let ticket_id = match required_arg(&call, "ticket_id") {
            Ok(id) => id,
            Err(result) => return Ok(result),
        };
        Ok(ToolResult::success(
            &call.id,
            lookup(self.store.as_ref(), ticket_id),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tickets() {
        assert_eq!(check_ticket_status("INC-1001"), "Open - Pending User Info");
        assert_eq!(
            check_ticket_status("INC-1002"),
            "Resolved - Password Reset Complete"
        );
        assert_eq!(
            check_ticket_status("INC-1003"),
            "In Progress - Access Request Approved"
        );
    }

    #[test]
    fn test_unknown_tickets() {
        for id in ["INC-9999", "", "inc-1001", "INC-1001 "] {
            assert_eq!(check_ticket_status(id), TICKET_NOT_FOUND);
        }
    }

    #[test]
    fn test_store_has_three_entries() {
        assert_eq!(
            MockTicketStore::new().ticket_ids(),
            vec!["INC-1001", "INC-1002", "INC-1003"]
        );
    }

    struct SingleTicket;

    impl TicketStore for SingleTicket {
        fn status(&self, ticket_id: &str) -> Option<String> {
            (ticket_id == "INC-7").then(|| "Closed".to_string())
        }
    }

    #[tokio::test]
    async fn test_skill_uses_injected_store() {
        let skill = TicketStatusSkill::new(Arc::new(SingleTicket));
        let call = ToolCall::new("check_ticket_status", serde_json::json!({ "ticket_id": "INC-7" }));
        let result = skill.execute(call).await.unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content, "Closed");

        let call = ToolCall::new(
            "check_ticket_status",
            serde_json::json!({ "ticket_id": "INC-1001" }),
        );
        let result = skill.execute(call).await.unwrap();
        assert_eq!(result.content, TICKET_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_skill_missing_ticket_id() {
        let skill = TicketStatusSkill::new(Arc::new(MockTicketStore::new()));
        let call = ToolCall::new("check_ticket_status", serde_json::json!({}));
        let result = skill.execute(call).await.unwrap();
        assert!(result.is_error);
        assert!(result.content.contains("ticket_id"));
    }

    #[tokio::test]
    async fn test_skill_matches_plain_function() {
        let skill = TicketStatusSkill::new(Arc::new(MockTicketStore::new()));
        for ticket_id in ["", " INC-1001 ", "inc-1001", "INC-1002"] {
            let call = ToolCall::new(
                "check_ticket_status",
                serde_json::json!({ "ticket_id": ticket_id }),
            );
            let result = skill.execute(call).await.unwrap();
            assert!(!result.is_error);
            assert_eq!(result.content, check_ticket_status(ticket_id));
        }
    }
}
