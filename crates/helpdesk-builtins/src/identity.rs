use crate::required_arg;
use async_trait::async_trait;
use helpdesk_core::{HelpdeskResult, ToolCall, ToolResult};
use helpdesk_skills::skill::{Skill, SkillDescriptor};
use tracing::info;

/// Resets the password for a given user account.
///
/// The username is not validated; whatever is passed is echoed back.
pub fn reset_password(username: &str) -> String {
    info!(username = %username, "Resetting password");
    format!(
        "Password for {username} has been reset. \
         A temporary password has been sent to their manager."
    )
}

/// Unlocks a locked user account.
pub fn unlock_account(username: &str) -> String {
    info!(username = %username, "Unlocking account");
    format!("Account {username} is now unlocked.")
}

pub struct ResetPasswordSkill {
    descriptor: SkillDescriptor,
}

impl ResetPasswordSkill {
    pub fn new() -> Self {
        Self {
            descriptor: SkillDescriptor::with_string_params(
                "reset_password",
                "Resets the password for a given user account.",
                &[("username", "Account whose password is reset")],
            ),
        }
    }
}

impl Default for ResetPasswordSkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for ResetPasswordSkill {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        match required_arg(&call, "username") {
            Ok(username) => Ok(ToolResult::success(&call.id, reset_password(username))),
            Err(result) => Ok(result),
        }
    }
}

pub struct UnlockAccountSkill {
    descriptor: SkillDescriptor,
}

impl UnlockAccountSkill {
    pub fn new() -> Self {
        Self {
            descriptor: SkillDescriptor::with_string_params(
                "unlock_account",
                "Unlocks a locked user account.",
                &[("username", "Account to unlock")],
            ),
        }
    }
}

impl Default for UnlockAccountSkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for UnlockAccountSkill {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        match required_arg(&call, "username") {
            Ok(username) => Ok(ToolResult::success(&call.id, unlock_account(username))),
            Err(result) => Ok(result),
        }
    }
}
