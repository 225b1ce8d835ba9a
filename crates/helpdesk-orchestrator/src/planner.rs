use crate::extract::{self, AccessAction, IdentityAction};
use crate::triage::{triage, Triage};
use crate::types::{AgentProfile, AgentRole};
use async_trait::async_trait;
use helpdesk_builtins::LicenseType;
use helpdesk_core::{HelpdeskResult, Message, Role};
use helpdesk_skills::SkillDescriptor;
use serde_json::json;

/// The next step an agent takes.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanStep {
    /// Answer the user and end the turn.
    Reply(String),
    /// Invoke a skill or handoff by name.
    Call {
        name: String,
        arguments: serde_json::Value,
    },
}

impl PlanStep {
    pub fn call(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        PlanStep::Call {
            name: name.into(),
            arguments,
        }
    }
}

/// Decides what the active agent does next.
///
/// Implementations receive the agent's profile, the whole transcript and
/// the descriptors of every callable (skills and handoffs) the agent owns.
/// A language-model backend would plug in here.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(
        &self,
        agent: &AgentProfile,
        messages: &[Message],
        tools: &[SkillDescriptor],
    ) -> HelpdeskResult<PlanStep>;
}

pub(crate) const ASK_USERNAME: &str =
    "Before I take action, please confirm the username of the account.";
pub(crate) const ASK_GROUP: &str = "Which security group should the user be added to?";
pub(crate) const ASK_TICKET_ID: &str =
    "Which ticket would you like me to check? Please share its ID, for example INC-1001.";
pub(crate) const ASK_CLARIFY: &str = "I can help with password resets and account lockouts, \
    software licenses and group access, or the status of an existing ticket. \
    Could you tell me a bit more about what you need?";
pub(crate) const ASK_IDENTITY_ACTION: &str =
    "I can reset a password or unlock a locked account. Which do you need?";

fn ask_license() -> String {
    format!(
        "Which license do you need? Available: {}",
        LicenseType::allow_list()
    )
}

fn ask_access_action() -> String {
    format!(
        "I can grant software licenses ({}) or add users to security groups. What do you need?",
        LicenseType::allow_list()
    )
}

/// Keyword-rule planner standing in for a reasoning backend.
///
/// - After a tool result, relays the result text verbatim.
/// - The orchestrator routes with [`triage`].
/// - Specialists gather the arguments they need from the user messages of the
///   current request, asking for whatever is missing (the username is always
///   confirmed before acting).
#[derive(Debug, Default, Clone, Copy)]
pub struct RulePlanner;

impl RulePlanner {
    pub fn new() -> Self {
        Self
    }

    fn orchestrate(&self, request: &Request<'_>) -> PlanStep {
        match triage(request.latest) {
            Triage::TicketStatus { ticket_id } => {
                PlanStep::call("check_ticket_status", json!({ "ticket_id": ticket_id }))
            }
            Triage::Identity => PlanStep::call("transfer_to_identity", json!({})),
            Triage::Access => PlanStep::call("transfer_to_access", json!({})),
            Triage::MissingTicketId => PlanStep::Reply(ASK_TICKET_ID.to_string()),
            Triage::Unclear => PlanStep::Reply(ASK_CLARIFY.to_string()),
        }
    }

    fn identity(&self, request: &Request<'_>) -> PlanStep {
        let Some(action) = request.find(extract::identity_action) else {
            return PlanStep::Reply(ASK_IDENTITY_ACTION.to_string());
        };
        let Some(username) = request.username(&[]) else {
            return PlanStep::Reply(ASK_USERNAME.to_string());
        };

        let tool = match action {
            IdentityAction::ResetPassword => "reset_password",
            IdentityAction::UnlockAccount => "unlock_account",
        };
        PlanStep::call(tool, json!({ "username": username }))
    }

    fn access(&self, request: &Request<'_>) -> PlanStep {
        let Some(action) = request.find(extract::access_action) else {
            return PlanStep::Reply(ask_access_action());
        };

        match action {
            AccessAction::GrantLicense => {
                let license = request
                    .find(extract::license)
                    .or_else(|| request.answer_to(&ask_license()).map(str::to_string));
                let Some(license) = license else {
                    return PlanStep::Reply(ask_license());
                };
                let Some(username) = request.username(&[license.as_str()]) else {
                    return PlanStep::Reply(ASK_USERNAME.to_string());
                };
                PlanStep::call(
                    "grant_license",
                    json!({ "username": username, "license_type": license }),
                )
            }
            AccessAction::AddToGroup => {
                let group = request.find(extract::group).or_else(|| {
                    request.answer_to(ASK_GROUP).and_then(extract::bare_group)
                });
                let Some(group) = group else {
                    return PlanStep::Reply(ASK_GROUP.to_string());
                };
                let Some(username) = request.username(&[group.as_str()]) else {
                    return PlanStep::Reply(ASK_USERNAME.to_string());
                };
                PlanStep::call(
                    "add_to_group",
                    json!({ "username": username, "group_name": group }),
                )
            }
        }
    }
}

#[async_trait]
impl Planner for RulePlanner {
    async fn plan(
        &self,
        agent: &AgentProfile,
        messages: &[Message],
        _tools: &[SkillDescriptor],
    ) -> HelpdeskResult<PlanStep> {
        if let Some(last) = messages.last() {
            if last.role == Role::Tool {
                return Ok(PlanStep::Reply(last.content.clone()));
            }
        }

        let request = Request::from_transcript(messages);
        Ok(match agent.role {
            AgentRole::Orchestrator => self.orchestrate(&request),
            AgentRole::Identity => self.identity(&request),
            AgentRole::Access => self.access(&request),
        })
    }
}

/// The messages of the request currently being worked on: everything after
/// the last tool result.
struct Request<'a> {
    /// User messages, newest first.
    user: Vec<&'a str>,
    /// The newest user message.
    latest: &'a str,
    /// The agent's last question, if it was the most recent reply.
    last_question: Option<&'a str>,
}

impl<'a> Request<'a> {
    fn from_transcript(messages: &'a [Message]) -> Self {
        let start = messages
            .iter()
            .rposition(|m| m.role == Role::Tool)
            .map_or(0, |i| i + 1);
        let window = &messages[start..];

        let user: Vec<&str> = window
            .iter()
            .rev()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .collect();
        let latest = user.first().copied().unwrap_or_default();

        // The reply that precedes the newest user message.
        let last_question = window
            .iter()
            .rev()
            .skip_while(|m| m.role != Role::User)
            .skip(1)
            .find(|m| m.role != Role::System)
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str());

        Self {
            user,
            latest,
            last_question,
        }
    }

    /// First hit scanning user messages newest to oldest.
    fn find<T>(&self, f: impl Fn(&'a str) -> Option<T>) -> Option<T> {
        self.user.iter().find_map(|&text| f(text))
    }

    /// The newest user message, if it answers `question`.
    fn answer_to(&self, question: &str) -> Option<&'a str> {
        (self.last_question == Some(question)).then_some(self.latest)
    }

    fn username(&self, exclude: &[&str]) -> Option<String> {
        if let Some(name) = self.answer_to(ASK_USERNAME).and_then(extract::bare_username) {
            return Some(name);
        }
        self.find(|text| extract::username(text).filter(|name| !exclude.contains(&name.as_str())))
    }
}
