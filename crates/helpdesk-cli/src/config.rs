use serde::Deserialize;
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "helpdesk.toml";

#[derive(Debug, Deserialize, Default)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Planner steps allowed per user turn.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_max_turns() -> u32 {
    8
}
fn default_level() -> String {
    "info".to_string()
}

impl HelpdeskConfig {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Loads `explicit` (which must exist), or `helpdesk.toml` if present,
    /// or the defaults.
    pub async fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if !tokio::fs::try_exists(fallback).await.unwrap_or(false) {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;
        Self::parse(&raw)
    }
}
