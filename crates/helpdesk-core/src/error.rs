use thiserror::Error;

/// A convenience `Result` alias using [`HelpdeskError`].
pub type HelpdeskResult<T> = Result<T, HelpdeskError>;

/// Top-level error type for the helpdesk crates.
///
/// Tool-level rejections (unknown ticket, invalid license, missing argument)
/// are reported as [`ToolResult`](crate::ToolResult) content, not as errors.
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// An error from the conversation engine (e.g. turn limit exceeded).
    #[error("Agent error: {0}")]
    Agent(String),

    /// An error raised by a skill during invocation.
    #[error("Skill error: {0}")]
    Skill(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
