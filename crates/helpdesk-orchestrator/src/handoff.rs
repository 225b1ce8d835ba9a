use crate::profiles::profile;
use crate::types::{AgentProfile, AgentRole};
use helpdesk_skills::SkillDescriptor;
use serde::Serialize;

/// A directed edge from one agent to another.
///
/// Invoking a handoff yields the target agent's profile; the engine treats
/// that as a switch of the active agent rather than as a data result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub name: &'static str,
    pub description: &'static str,
    pub target: AgentRole,
}

pub const TRANSFER_TO_IDENTITY: Handoff = Handoff {
    name: "transfer_to_identity",
    description: "Hand off the conversation to the Identity Management agent.",
    target: AgentRole::Identity,
};

pub const TRANSFER_TO_ACCESS: Handoff = Handoff {
    name: "transfer_to_access",
    description: "Hand off the conversation to the Access Control agent.",
    target: AgentRole::Access,
};

impl Handoff {
    pub fn invoke(&self) -> &'static AgentProfile {
        profile(self.target)
    }

    /// Descriptor presented to planners alongside skill descriptors.
    pub fn descriptor(&self) -> SkillDescriptor {
        SkillDescriptor::with_string_params(self.name, self.description, &[])
    }
}

/// Hand off the conversation to the Identity Management agent.
pub fn transfer_to_identity() -> &'static AgentProfile {
    TRANSFER_TO_IDENTITY.invoke()
}

/// Hand off the conversation to the Access Control agent.
pub fn transfer_to_access() -> &'static AgentProfile {
    TRANSFER_TO_ACCESS.invoke()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoffs_are_idempotent() {
        assert!(std::ptr::eq(transfer_to_identity(), transfer_to_identity()));
        assert!(std::ptr::eq(transfer_to_access(), transfer_to_access()));
        assert!(!std::ptr::eq(transfer_to_identity(), transfer_to_access()));
    }

    #[test]
    fn test_handoff_targets() {
        assert_eq!(transfer_to_identity().name, "Identity Manager");
        assert_eq!(transfer_to_access().name, "Access Controller");
    }

    #[test]
    fn test_descriptor_takes_no_arguments() {
        let desc = TRANSFER_TO_IDENTITY.descriptor();
        assert_eq!(desc.name, "transfer_to_identity");
        assert!(desc.parameters().is_empty());
    }
}
