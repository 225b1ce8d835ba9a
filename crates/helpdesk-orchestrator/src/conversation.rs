use crate::types::AgentRole;
use chrono::{DateTime, Utc};
use helpdesk_core::Message;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's conversation with the helpdesk.
///
/// Tracks which agent is currently active; every conversation starts with
/// the orchestrator and only moves on through handoffs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub active_agent: AgentRole,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            active_agent: AgentRole::Orchestrator,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_message(&mut self, message: Message) {
        self.updated_at = Utc::now();
        self.messages.push(message);
    }

    pub fn switch_to(&mut self, role: AgentRole) {
        self.updated_at = Utc::now();
        self.active_agent = role;
    }

    /// Clears the transcript and hands control back to the orchestrator.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.switch_to(AgentRole::Orchestrator);
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
