use helpdesk_core::{HelpdeskResult, ToolCall, ToolResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata describing a skill's interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDescriptor {
    pub name: String,
    pub description: String,
    pub parameters_schema: serde_json::Value,
}

impl SkillDescriptor {
    /// Descriptor for a skill whose arguments are all required strings.
    pub fn with_string_params(
        name: impl Into<String>,
        description: impl Into<String>,
        params: &[(&str, &str)],
    ) -> Self {
        let mut properties = serde_json::Map::new();
        for (param, doc) in params {
            properties.insert(
                (*param).to_string(),
                serde_json::json!({ "type": "string", "description": doc }),
            );
        }
        let required: Vec<&str> = params.iter().map(|(param, _)| *param).collect();

        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema: serde_json::json!({
                "type": "object",
                "properties": properties,
                "required": required
            }),
        }
    }

    /// Argument names and their JSON types, ordered by name.
    pub fn parameters(&self) -> Vec<(String, String)> {
        self.parameters_schema["properties"]
            .as_object()
            .map(|props| {
                props
                    .iter()
                    .map(|(name, spec)| {
                        let ty = spec["type"].as_str().unwrap_or("any").to_string();
                        (name.clone(), ty)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Trait that all helpdesk tools implement.
#[async_trait]
pub trait Skill: Send + Sync {
    fn descriptor(&self) -> &SkillDescriptor;

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult>;
}
