use crate::required_arg;
use async_trait::async_trait;
use helpdesk_core::{HelpdeskResult, ToolCall, ToolResult};
use helpdesk_skills::skill::{Skill, SkillDescriptor};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// The licenses the helpdesk is allowed to assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LicenseType {
    #[serde(rename = "Office365_E5")]
    Office365E5,
    #[serde(rename = "Adobe_Creative_Cloud")]
    AdobeCreativeCloud,
    #[serde(rename = "Visio_Pro")]
    VisioPro,
}

impl LicenseType {
    /// Allow-list, in the order it is presented to users.
    pub const ALL: [LicenseType; 3] = [
        LicenseType::Office365E5,
        LicenseType::AdobeCreativeCloud,
        LicenseType::VisioPro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LicenseType::Office365E5 => "Office365_E5",
            LicenseType::AdobeCreativeCloud => "Adobe_Creative_Cloud",
            LicenseType::VisioPro => "Visio_Pro",
        }
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|license| license.as_str() == name)
    }

    /// Comma separated allow-list, e.g. for prompts and rejections.
    pub fn allow_list() -> String {
        Self::ALL
            .iter()
            .map(|license| license.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grants a specific software license to a user.
///
/// An unknown `license_type` is rejected with a message listing the valid
/// options; this is a normal return value, not an error.
pub fn grant_license(username: &str, license_type: &str) -> String {
    let Some(license) = LicenseType::parse(license_type) else {
        warn!(license_type = %license_type, "Rejected unknown license type");
        return format!(
            "Error: License type '{license_type}' is invalid. Available: {}",
            LicenseType::allow_list()
        );
    };

    info!(username = %username, license = %license, "Granting license");
    format!("License {license} successfully assigned to {username}.")
}

/// Adds a user to an Active Directory security group.
pub fn add_to_group(username: &str, group_name: &str) -> String {
    info!(username = %username, group = %group_name, "Adding user to AD group");
    format!("User {username} added to {group_name}.")
}

pub struct GrantLicenseSkill {
    descriptor: SkillDescriptor,
}

impl GrantLicenseSkill {
    pub fn new() -> Self {
        let license_doc = format!("One of: {}", LicenseType::allow_list());
        Self {
            descriptor: SkillDescriptor::with_string_params(
                "grant_license",
                "Grants a specific software license to a user.",
                &[
                    ("username", "Account receiving the license"),
                    ("license_type", license_doc.as_str()),
                ],
            ),
        }
    }
}

impl Default for GrantLicenseSkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for GrantLicenseSkill {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        let username = match required_arg(&call, "username") {
            Ok(username) => username,
            Err(result) => return Ok(result),
        };
        let license_type = match required_arg(&call, "license_type") {
            Ok(license_type) => license_type,
            Err(result) => return Ok(result),
        };
        Ok(ToolResult::success(
            &call.id,
            grant_license(username, license_type),
        ))
    }
}

pub struct AddToGroupSkill {
    descriptor: SkillDescriptor,
}

impl AddToGroupSkill {
    pub fn new() -> Self {
        Self {
            descriptor: SkillDescriptor::with_string_params(
                "add_to_group",
                "Adds a user to an Active Directory security group.",
                &[
                    ("username", "Account to add"),
                    ("group_name", "Security group name"),
                ],
            ),
        }
    }
}

impl Default for AddToGroupSkill {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Skill for AddToGroupSkill {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    async fn execute(&self, call: ToolCall) -> HelpdeskResult<ToolResult> {
        let username = match required_arg(&call, "username") {
            Ok(username) => username,
            Err(result) => return Ok(result),
        };
        let group_name = match required_arg(&call, "group_name") {
            Ok(group_name) => group_name,
            Err(result) => return Ok(result),
        };
        Ok(ToolResult::success(
            &call.id,
            add_to_group(username, group_name),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_each_valid_license() {
        for license in LicenseType::ALL {
            let out = grant_license("jdoe", license.as_str());
            assert_eq!(
                out,
                format!("License {} successfully assigned to jdoe.", license.as_str())
            );
        }
    }

    #[test]
    fn test_grant_invalid_license() {
        let out = grant_license("jdoe", "Slack_Pro");
        assert_eq!(
            out,
            "Error: License type 'Slack_Pro' is invalid. \
             Available: Office365_E5, Adobe_Creative_Cloud, Visio_Pro"
        );
        assert!(!out.contains("successfully"));
    }

    #[test]
    fn test_license_match_is_case_sensitive() {
        assert_eq!(LicenseType::parse("visio_pro"), None);
        assert_eq!(LicenseType::parse("Visio_Pro"), Some(LicenseType::VisioPro));
        assert!(grant_license("jdoe", "office365_e5").starts_with("Error:"));
    }

    #[test]
    fn test_license_serializes_as_sku() {
        let json = serde_json::to_string(&LicenseType::AdobeCreativeCloud).unwrap();
        assert_eq!(json, "\"Adobe_Creative_Cloud\"");
    }

    #[test]
    fn test_add_to_group_message() {
        assert_eq!(add_to_group("jdoe", "Finance"), "User jdoe added to Finance.");
    }

    #[tokio::test]
    async fn test_group_skill_requires_group_name() {
        let skill = AddToGroupSkill::new();
        let call = ToolCall::new("add_to_group", serde_json::json!({ "username": "jdoe" }));
        let result = skill.execute(call).await.unwrap();
        assert!(result.is_error);
        assert!(result.content.contains("group_name"));
    }

    #[tokio::test]
    async fn test_grant_skill_relays_rejection_as_success_result() {
        let skill = GrantLicenseSkill::new();
        let call = ToolCall::new(
            "grant_license",
            serde_json::json!({ "username": "jdoe", "license_type": "Slack_Pro" }),
        );
        let result = skill.execute(call).await.unwrap();
        assert!(!result.is_error);
        assert!(result.content.starts_with("Error: License type 'Slack_Pro' is invalid."));
    }
}
