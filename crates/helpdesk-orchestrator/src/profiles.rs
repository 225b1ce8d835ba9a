use crate::handoff::{TRANSFER_TO_ACCESS, TRANSFER_TO_IDENTITY};
use crate::types::{AgentProfile, AgentRole, AgentTool};
use std::sync::LazyLock;

static IT_SUPPORT: LazyLock<AgentProfile> = LazyLock::new(orchestrator_profile);
static IDENTITY: LazyLock<AgentProfile> = LazyLock::new(identity_profile);
static ACCESS: LazyLock<AgentProfile> = LazyLock::new(access_profile);

/// The front-line orchestrator; every conversation starts here.
pub fn it_support_agent() -> &'static AgentProfile {
    &IT_SUPPORT
}

pub fn identity_agent() -> &'static AgentProfile {
    &IDENTITY
}

pub fn access_agent() -> &'static AgentProfile {
    &ACCESS
}

/// The singleton profile for `role`.
pub fn profile(role: AgentRole) -> &'static AgentProfile {
    match role {
        AgentRole::Orchestrator => it_support_agent(),
        AgentRole::Identity => identity_agent(),
        AgentRole::Access => access_agent(),
    }
}

/// All agent profiles, orchestrator first.
pub fn default_profiles() -> Vec<&'static AgentProfile> {
    vec![it_support_agent(), identity_agent(), access_agent()]
}

fn orchestrator_profile() -> AgentProfile {
    AgentProfile {
        role: AgentRole::Orchestrator,
        name: "IT Support Orchestrator".to_string(),
        instructions: ORCHESTRATOR_PROMPT.to_string(),
        tools: vec![
            AgentTool::skill("check_ticket_status"),
            AgentTool::Handoff(TRANSFER_TO_IDENTITY),
            AgentTool::Handoff(TRANSFER_TO_ACCESS),
        ],
    }
}

fn identity_profile() -> AgentProfile {
    AgentProfile {
        role: AgentRole::Identity,
        name: "Identity Manager".to_string(),
        instructions: IDENTITY_PROMPT.to_string(),
        tools: vec![
            AgentTool::skill("reset_password"),
            AgentTool::skill("unlock_account"),
        ],
    }
}

fn access_profile() -> AgentProfile {
    AgentProfile {
        role: AgentRole::Access,
        name: "Access Controller".to_string(),
        instructions: ACCESS_PROMPT.to_string(),
        tools: vec![
            AgentTool::skill("grant_license"),
            AgentTool::skill("add_to_group"),
        ],
    }
}

const ORCHESTRATOR_PROMPT: &str = "\
You are the front-line IT Support Orchestrator for Enterprise Corp. \
Your job is to triage user requests and direct them to the correct specialist.

Routing rules:
1. Password issues, account lockouts or login problems: transfer to the Identity Manager.
2. Software, licenses or group access: transfer to the Access Controller.
3. Questions about an existing ticket: call check_ticket_status yourself.
4. If the request is unclear, ask clarifying questions.

Always be professional and concise.
";

const IDENTITY_PROMPT: &str = "\
You are the Identity Management specialist at Enterprise Corp.

Responsibilities:
1. Reset user passwords.
2. Unlock locked accounts.
3. Verify user identity status.

Always confirm the username before taking action. \
Report success or failure clearly.
";

const ACCESS_PROMPT: &str = "\
You are the Access Control specialist at Enterprise Corp.

Responsibilities:
1. Grant software licenses (Office365, Adobe, Visio).
2. Manage group memberships.

If a license type is unknown, list the valid ones.
";
