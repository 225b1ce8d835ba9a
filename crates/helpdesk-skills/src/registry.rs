use crate::skill::{Skill, SkillDescriptor};
use helpdesk_core::{HelpdeskResult, ToolCall, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Central registry for all available skills.
pub struct SkillRegistry {
    skills: HashMap<String, Arc<dyn Skill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self {
            skills: HashMap::new(),
        }
    }

    pub fn register(&mut self, skill: Arc<dyn Skill>) {
        let name = skill.descriptor().name.clone();
        info!(skill = %name, "Registered skill");
        self.skills.insert(name, skill);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Skill>> {
        self.skills.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// All descriptors, sorted by skill name.
    pub fn list_descriptors(&self) -> Vec<&SkillDescriptor> {
        let mut descriptors: Vec<_> = self.skills.values().map(|s| s.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Execute a tool call against any registered skill.
    pub async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        match self.skills.get(&call.name) {
            Some(skill) => skill.execute(call).await,
            None => {
                warn!(skill = %call.name, "Unknown skill requested");
                let message = format!("Unknown tool: {}", call.name);
                Ok(ToolResult::error(&call.id, message))
            }
        }
    }

    /// Execute a tool call on behalf of an agent, refusing skills outside
    /// its tool list.
    pub async fn execute_scoped(
        &self,
        call: ToolCall,
        agent: &str,
        allowed: &[&str],
    ) -> HelpdeskResult<ToolResult> {
        if !allowed.contains(&call.name.as_str()) {
            warn!(
                skill = %call.name,
                agent = %agent,
                "Skill not available to agent"
            );
            let message = format!("Tool '{}' is not available to agent '{agent}'", call.name);
            return Ok(ToolResult::error(&call.id, message));
        }

        self.execute(call).await
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}
