use crate::conversation::Conversation;
use crate::planner::{PlanStep, Planner, RulePlanner};
use crate::profiles::{default_profiles, profile};
use crate::types::{AgentProfile, AgentRole};
use helpdesk_core::{HelpdeskError, HelpdeskResult, Message, ToolCall, ToolResult};
use helpdesk_skills::{SkillDescriptor, SkillRegistry};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Something that happened while processing a turn.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    Handoff { from: AgentRole, to: AgentRole },
    ToolCalled { call: ToolCall, result: ToolResult },
}

/// Result of one user turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub reply: String,
    /// The agent that produced the reply (active after the turn).
    pub agent: AgentRole,
    pub events: Vec<TurnEvent>,
}

/// The conversation engine: Input → Planner → Handoff / Tool → Backfill → Repeat.
pub struct Orchestrator {
    skills: Arc<SkillRegistry>,
    planner: Box<dyn Planner>,
    max_turns: u32,
}

impl Orchestrator {
    /// Builds the engine, checking that every skill an agent lists is registered.
    pub fn new(
        skills: Arc<SkillRegistry>,
        planner: Box<dyn Planner>,
        max_turns: u32,
    ) -> HelpdeskResult<Self> {
        if max_turns == 0 {
            return Err(HelpdeskError::Config(
                "max_turns must be at least 1".to_string(),
            ));
        }
        for agent in default_profiles() {
            for skill in agent.skill_names() {
                if !skills.contains(skill) {
                    return Err(HelpdeskError::Config(format!(
                        "Agent '{}' lists unknown tool '{skill}'",
                        agent.name
                    )));
                }
            }
        }

        Ok(Self {
            skills,
            planner,
            max_turns,
        })
    }

    /// Engine driven by the keyword-rule planner.
    pub fn with_rules(skills: Arc<SkillRegistry>, max_turns: u32) -> HelpdeskResult<Self> {
        Self::new(skills, Box::new(RulePlanner::new()), max_turns)
    }

    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }

    /// Descriptors for everything `agent` may call, in declaration order.
    pub fn descriptors_for(&self, agent: &AgentProfile) -> Vec<SkillDescriptor> {
        let mut descriptors: Vec<SkillDescriptor> = agent
            .skill_names()
            .into_iter()
            .filter_map(|name| self.skills.get(name))
            .map(|skill| skill.descriptor().clone())
            .collect();
        descriptors.extend(agent.handoffs().map(|handoff| handoff.descriptor()));
        descriptors
    }

    /// Runs one user turn and returns the reply.
    pub async fn run(
        &self,
        conversation: &mut Conversation,
        input: &str,
    ) -> HelpdeskResult<TurnOutcome> {
        let session_id = conversation.id;
        conversation.add_message(Message::user(input, session_id));

        let mut events = Vec::new();

        info!(
            session_id = %session_id,
            agent = %conversation.active_agent,
            "Starting turn"
        );

        for step in 0..self.max_turns {
            let agent = profile(conversation.active_agent);
            let tools = self.descriptors_for(agent);

            let next = self
                .planner
                .plan(agent, &conversation.messages, &tools)
                .await?;

            match next {
                PlanStep::Reply(reply) => {
                    conversation.add_message(
                        Message::assistant(&reply, session_id)
                            .with_metadata("agent", serde_json::json!(agent.name)),
                    );
                    info!(
                        session_id = %session_id,
                        agent = %agent.role,
                        steps = step + 1,
                        "Turn completed"
                    );
                    return Ok(TurnOutcome {
                        reply,
                        agent: agent.role,
                        events,
                    });
                }

                PlanStep::Call { name, arguments } => {
                    let call = ToolCall::new(name, arguments);

                    if let Some(handoff) = agent.find_handoff(&call.name) {
                        let target = handoff.invoke();
                        info!(
                            session_id = %session_id,
                            from = %agent.role,
                            to = %target.role,
                            "Handing off conversation"
                        );
                        conversation.switch_to(target.role);
                        conversation.add_message(Message::system(
                            format!("Transferred to {}", target.name),
                            session_id,
                        ));
                        events.push(TurnEvent::Handoff {
                            from: agent.role,
                            to: target.role,
                        });
                        continue;
                    }

                    info!(
                        session_id = %session_id,
                        agent = %agent.role,
                        tool = %call.name,
                        call_id = %call.id,
                        "Executing tool call"
                    );
                    let result = self
                        .skills
                        .execute_scoped(call.clone(), &agent.name, &agent.skill_names())
                        .await?;

                    conversation.add_message(
                        Message::tool(&result.content, session_id)
                            .with_metadata("tool", serde_json::json!(call.name))
                            .with_metadata("is_error", serde_json::json!(result.is_error)),
                    );
                    events.push(TurnEvent::ToolCalled { call, result });
                }
            }
        }

        warn!(
            session_id = %session_id,
            max_turns = self.max_turns,
            "Turn reached max steps"
        );

        Err(HelpdeskError::Agent(format!(
            "Turn exceeded maximum of {} steps",
            self.max_turns
        )))
    }
}
