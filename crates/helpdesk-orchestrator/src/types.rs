use crate::handoff::Handoff;
use serde::{Deserialize, Serialize};

/// Role of each agent in the helpdesk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Triages requests, answers ticket questions, hands off to specialists.
    Orchestrator,
    /// Resets passwords and unlocks accounts.
    Identity,
    /// Grants licenses and manages group membership.
    Access,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::Orchestrator => write!(f, "orchestrator"),
            AgentRole::Identity => write!(f, "identity"),
            AgentRole::Access => write!(f, "access"),
        }
    }
}

/// A callable exposed to an agent: either a registered skill or a handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AgentTool {
    Skill { name: String },
    Handoff(Handoff),
}

impl AgentTool {
    pub fn skill(name: impl Into<String>) -> Self {
        AgentTool::Skill { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            AgentTool::Skill { name } => name,
            AgentTool::Handoff(handoff) => handoff.name,
        }
    }
}

/// Configuration for one agent. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    pub role: AgentRole,
    /// Human-readable, unique name.
    pub name: String,
    pub instructions: String,
    /// Ordered list of callables the agent may invoke.
    pub tools: Vec<AgentTool>,
}

impl AgentProfile {
    /// Names of every callable, in declaration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(AgentTool::name).collect()
    }

    /// Names of the registered skills this agent may call.
    pub fn skill_names(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter_map(|tool| match tool {
                AgentTool::Skill { name } => Some(name.as_str()),
                AgentTool::Handoff(_) => None,
            })
            .collect()
    }

    pub fn handoffs(&self) -> impl Iterator<Item = &Handoff> {
        self.tools.iter().filter_map(|tool| match tool {
            AgentTool::Handoff(handoff) => Some(handoff),
            AgentTool::Skill { .. } => None,
        })
    }

    pub fn find_handoff(&self, name: &str) -> Option<&Handoff> {
        self.handoffs().find(|handoff| handoff.name == name)
    }
}
