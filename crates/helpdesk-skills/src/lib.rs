//! Skill abstraction and registry.
//!
//! A skill is a named, self-describing callable the conversation engine can
//! invoke on an agent's behalf. Descriptors carry a JSON schema of the
//! arguments so planners can introspect names and types.

/// Skill registry and scoped execution.
pub mod registry;
/// The `Skill` trait and its descriptor.
pub mod skill;

pub use registry::SkillRegistry;
pub use skill::{Skill, SkillDescriptor};
