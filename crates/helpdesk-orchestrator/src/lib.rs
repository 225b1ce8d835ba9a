//! Multi-agent triage for the IT helpdesk.
//!
//! A front-line orchestrator agent either answers ticket-status questions
//! itself or hands the conversation off to one of two specialists: the
//! Identity Manager (password resets, account unlocks) or the Access
//! Controller (software licenses, group membership).
//!
//! # Main types
//!
//! - [`AgentProfile`] — Immutable agent configuration: name, instructions, callables.
//! - [`Handoff`] — Zero-argument callable returning another agent's profile.
//! - [`Planner`] — Seam where a reasoning backend picks the next step; [`RulePlanner`]
//!   is the built-in keyword-rule implementation.
//! - [`Orchestrator`] — Drives a [`Conversation`] turn by turn, switching the
//!   active agent on handoffs and executing tools through the skill registry.

/// Conversation state.
pub mod conversation;
/// Conversation engine.
pub mod engine;
/// Parsing helpers for usernames, license types and group names.
pub mod extract;
/// Handoff edges between agents.
pub mod handoff;
/// Planner trait and the rule-based planner.
pub mod planner;
/// The three agent profiles and their instructions.
pub mod profiles;
/// Orchestrator routing rules.
pub mod triage;
/// Shared types (AgentRole, AgentProfile, AgentTool).
pub mod types;

pub use conversation::Conversation;
pub use engine::{Orchestrator, TurnEvent, TurnOutcome};
pub use handoff::{transfer_to_access, transfer_to_identity, Handoff};
pub use planner::{PlanStep, Planner, RulePlanner};
pub use profiles::{access_agent, default_profiles, identity_agent, it_support_agent, profile};
pub use triage::{triage, Triage};
pub use types::{AgentProfile, AgentRole, AgentTool};
