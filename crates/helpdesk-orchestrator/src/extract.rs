use helpdesk_builtins::LicenseType;
use regex::Regex;
use std::sync::LazyLock;

/// Compiles a pattern literal.
#[allow(clippy::expect_used)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("regex literal must compile")
}

static USERNAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\w[\w.@-]*$"));
static ADD_USER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\badd\s+(?:user\s+)?(\w[\w.@-]*)\s+to\b"));
static GRANT_TO: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:grant|assign|give)\s+(?:\S+\s+){1,3}?to\s+(?:user\s+)?(\w[\w.@-]*)")
});

static UNLOCK_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(unlock|locked|lockout|lock\s+out)\b"));
static RESET_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(passwords?|passwd|passcode|reset|forgot|log\s?in|sign\s?in|credentials?|expired)\b")
});

static LICENSE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(licen[cs]es?|subscriptions?|software|seats?)\b"));
static GROUP_WORDS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(groups?|membership)\b"));

// Case-sensitive: SKUs are capitalised, usernames usually are not.
static LICENSE_SKU: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b([A-Z][A-Za-z0-9]*(?:_[A-Za-z0-9]+)+)\b"));
static OFFICE_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(office\s?365|o365|office|e5)\b"));
static ADOBE_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(adobe|creative\s+cloud|photoshop|illustrator)\b"));
static VISIO_ALIAS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bvisio\b"));

static GROUP_THE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\bthe\s+(\w[\w.&-]*(?:\s+\w[\w.&-]*){0,2}?)\s+(?:security\s+|ad\s+|distribution\s+)?group\b",
    )
});
static GROUP_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?i)\bgroup\s+(?:named\s+|called\s+)?["']?(\w[\w.&-]*)"#)
});
static GROUP_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(\w[\w.&-]*)\s+(?:security\s+|ad\s+|distribution\s+)?group\b")
});

/// Words directly naming an account; the username follows them.
const USERNAME_MARKERS: &[&str] = &["user", "username", "userid", "account"];

/// Filler passed over between a marker and the username.
const FILLER: &[&str] = &[
    "is", "my", "the", "a", "an", "named", "called", "name", "user", "username", "userid",
    "account", "id", "please", "=",
];

/// Words that never name an account.
const NOT_A_USERNAME: &[&str] = &[
    "me", "myself", "i", "it", "this", "that", "to", "in", "out", "and", "or", "now", "today",
    "yes", "no", "ok", "okay", "thanks", "thank", "hi", "hello", "help", "password",
    "passwords", "reset", "unlock", "unlocked", "locked", "license", "licence", "group",
    "access", "software", "office", "office365", "o365", "adobe", "visio", "photoshop", "was",
    "has", "been", "be", "can", "cannot", "can't", "need", "want", "for", "of", "with", "on",
    "under", "at", "from", "by", "again", "still", "not", "isn't", "won't", "doesn't",
    "keeps", "got", "gets", "disabled", "blocked", "suspended", "expired", "frozen",
    "settings", "details", "info", "team", "their", "his", "her", "our",
];

/// Words that never name a group.
const NOT_A_GROUP: &[&str] = &[
    "the", "a", "an", "my", "this", "that", "same", "security", "ad", "distribution", "access",
    "membership", "for", "to", "and", "please", "new", "right", "correct", "which", "what",
    "any", "need", "want", "into", "in", "join", "some", "our", "your", "their", "me", "is",
];

/// What the identity specialist is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAction {
    ResetPassword,
    UnlockAccount,
}

/// What the access specialist is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    GrantLicense,
    AddToGroup,
}

/// Unlock wins when a message mentions both a lockout and a password.
pub fn identity_action(text: &str) -> Option<IdentityAction> {
    if UNLOCK_WORDS.is_match(text) {
        Some(IdentityAction::UnlockAccount)
    } else if RESET_WORDS.is_match(text) {
        Some(IdentityAction::ResetPassword)
    } else {
        None
    }
}

/// An explicit license mention ("license", an allowed SKU) wins over a group
/// mention. Product names alone do not, as group names often contain them
/// ("the Office-Users group").
pub fn access_action(text: &str) -> Option<AccessAction> {
    let names_license = LICENSE_WORDS.is_match(text) || names_allowed_sku(text);
    if GROUP_WORDS.is_match(text) && !names_license {
        Some(AccessAction::AddToGroup)
    } else if names_license || license(text).is_some() {
        Some(AccessAction::GrantLicense)
    } else {
        None
    }
}

fn names_allowed_sku(text: &str) -> bool {
    LICENSE_SKU
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .any(|sku| LicenseType::parse(sku.as_str()).is_some())
}

fn clean(token: &str) -> &str {
    token
        .trim_matches(|c: char| !(c.is_alphanumeric() || "._@-'".contains(c)))
        .trim_end_matches(['.', '\''])
        .trim_start_matches('\'')
}

fn is_username(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    USERNAME_SHAPE.is_match(candidate)
        && !NOT_A_USERNAME.contains(&lower.as_str())
        && !FILLER.contains(&lower.as_str())
}

/// Finds an account name the user stated explicitly: after a marker
/// ("username jdoe", "my account is jdoe", "user asmith"), or as the object of
/// "add jdoe to ..." / "grant Visio_Pro to jdoe".
///
/// Anything looser ("my password for work") is not a username.
pub fn username(text: &str) -> Option<String> {
    for re in [&*ADD_USER, &*GRANT_TO] {
        if let Some(name) = re
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .find(|name| is_username(name))
        {
            return Some(name.to_string());
        }
    }

    let tokens: Vec<&str> = text
        .split_whitespace()
        .map(clean)
        .filter(|t| !t.is_empty())
        .collect();

    for (i, token) in tokens.iter().enumerate() {
        if !USERNAME_MARKERS.contains(&token.to_lowercase().as_str()) {
            continue;
        }
        for next in &tokens[i + 1..] {
            if FILLER.contains(&next.to_lowercase().as_str()) {
                continue;
            }
            if is_username(next) {
                return Some((*next).to_string());
            }
            break;
        }
    }

    None
}

/// A reply consisting of exactly one username-shaped word.
pub fn bare_username(text: &str) -> Option<String> {
    let mut tokens = text.split_whitespace().map(clean).filter(|t| !t.is_empty());
    match (tokens.next(), tokens.next()) {
        (Some(only), None) if is_username(only) => Some(only.to_string()),
        _ => None,
    }
}

/// Resolves a license name: an explicit `Name_With_Underscores` token is taken
/// verbatim, otherwise product aliases map onto the allow-list.
pub fn license(text: &str) -> Option<String> {
    if let Some(sku) = LICENSE_SKU.captures(text).and_then(|c| c.get(1)) {
        return Some(sku.as_str().to_string());
    }
    let alias = if OFFICE_ALIAS.is_match(text) {
        "Office365_E5"
    } else if ADOBE_ALIAS.is_match(text) {
        "Adobe_Creative_Cloud"
    } else if VISIO_ALIAS.is_match(text) {
        "Visio_Pro"
    } else {
        return None;
    };
    Some(alias.to_string())
}

/// Finds a group name ("the Visio Reviewers group", "group VPN-Users",
/// "Finance group").
pub fn group(text: &str) -> Option<String> {
    [&*GROUP_THE, &*GROUP_AFTER, &*GROUP_BEFORE].into_iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim_end_matches('.'))
            .find(|name| !NOT_A_GROUP.contains(&name.to_lowercase().as_str()))
            .map(str::to_string)
    })
}

/// A reply naming a group outright, e.g. "Finance" or "VPN Users".
pub fn bare_group(text: &str) -> Option<String> {
    let name = text.trim().trim_end_matches(['.', '!', '?']).trim();
    let words = name.split_whitespace().count();
    (words > 0 && words <= 3).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_after_markers() {
        assert_eq!(username("reset the password for user jdoe"), Some("jdoe".into()));
        assert_eq!(username("I forgot my password, username jdoe"), Some("jdoe".into()));
        assert_eq!(username("my account name is asmith"), Some("asmith".into()));
        assert_eq!(username("my username is j.doe."), Some("j.doe".into()));
        assert_eq!(username("please unlock account for user asmith"), Some("asmith".into()));
        assert_eq!(username("username: jdoe"), Some("jdoe".into()));
    }

    #[test]
    fn test_username_absent() {
        assert_eq!(username("I forgot my password"), None);
        assert_eq!(username("I need to reset my password"), None);
        assert_eq!(username("my account is locked"), None);
        assert_eq!(username("add me to the Finance group"), None);
    }

    #[test]
    fn test_loose_phrases_are_not_usernames() {
        for text in [
            "I need Adobe for a design project",
            "I forgot my password for work",
            "I forgot the password for my email",
            "I want to log in",
            "reset the password for jdoe",
            "unlock my account for me",
            "my account is disabled",
            "give me access to adobe",
        ] {
            assert_eq!(username(text), None, "{text}");
        }
    }

    #[test]
    fn test_non_ascii_usernames() {
        assert_eq!(username("username józef.nowak"), Some("józef.nowak".into()));
        assert_eq!(username("add Zoë to the Finance group"), Some("Zoë".into()));
        assert_eq!(bare_username("Zoë"), Some("Zoë".into()));
    }

    #[test]
    fn test_username_in_access_requests() {
        assert_eq!(username("add jdoe to the Finance group"), Some("jdoe".into()));
        assert_eq!(username("grant Visio_Pro to jdoe"), Some("jdoe".into()));
        assert_eq!(username("add user asmith to group VPN-Users"), Some("asmith".into()));
        assert_eq!(username("I need a license for Visio"), None);
    }

    #[test]
    fn test_bare_username() {
        assert_eq!(bare_username("jdoe"), Some("jdoe".into()));
        assert_eq!(bare_username("  jdoe. "), Some("jdoe".into()));
        assert_eq!(bare_username("thanks"), None);
        assert_eq!(bare_username("it is jdoe"), None);
        assert_eq!(bare_username(""), None);
    }

    #[test]
    fn test_identity_action() {
        assert_eq!(identity_action("I'm locked out"), Some(IdentityAction::UnlockAccount));
        assert_eq!(
            identity_action("locked out after a password change"),
            Some(IdentityAction::UnlockAccount)
        );
        assert_eq!(identity_action("forgot my password"), Some(IdentityAction::ResetPassword));
        assert_eq!(identity_action("jdoe"), None);
    }

    #[test]
    fn test_access_action() {
        assert_eq!(access_action("I need a license"), Some(AccessAction::GrantLicense));
        assert_eq!(access_action("get me Visio"), Some(AccessAction::GrantLicense));
        assert_eq!(access_action("add me to a group"), Some(AccessAction::AddToGroup));
        assert_eq!(access_action("jdoe"), None);
    }

    #[test]
    fn test_group_names_containing_products() {
        for text in [
            "add jdoe to the Office-Users group",
            "add jdoe to the Visio Reviewers group",
            "add jdoe to group Adobe_Designers",
            "put asmith in the E5 pilot group",
        ] {
            assert_eq!(access_action(text), Some(AccessAction::AddToGroup), "{text}");
        }
        assert_eq!(
            access_action("I need an Office license and the Sales group"),
            Some(AccessAction::GrantLicense)
        );
        assert_eq!(
            access_action("grant Visio_Pro and add me to a group"),
            Some(AccessAction::GrantLicense)
        );
    }

    #[test]
    fn test_license_resolution() {
        assert_eq!(license("I need Slack_Pro"), Some("Slack_Pro".into()));
        assert_eq!(license("grant Visio_Pro to john_doe"), Some("Visio_Pro".into()));
        assert_eq!(license("an Office 365 license"), Some("Office365_E5".into()));
        assert_eq!(license("Adobe Creative Cloud please"), Some("Adobe_Creative_Cloud".into()));
        assert_eq!(license("visio"), Some("Visio_Pro".into()));
        assert_eq!(license("a license for john_doe"), None);
    }

    #[test]
    fn test_group_resolution() {
        assert_eq!(group("add jdoe to group Finance"), Some("Finance".into()));
        assert_eq!(group("add me to the Finance group"), Some("Finance".into()));
        assert_eq!(group("add jdoe to AD group VPN-Users"), Some("VPN-Users".into()));
        assert_eq!(group("put jdoe in the Sales security group"), Some("Sales".into()));
        assert_eq!(
            group("add jdoe to the Visio Reviewers group"),
            Some("Visio Reviewers".into())
        );
        assert_eq!(group("add jdoe to the Office-Users group"), Some("Office-Users".into()));
        assert_eq!(group("I need group access"), None);
        assert_eq!(group("add me to a group"), None);
    }

    #[test]
    fn test_bare_group() {
        assert_eq!(bare_group("Finance."), Some("Finance".into()));
        assert_eq!(bare_group("VPN Users"), Some("VPN Users".into()));
        assert_eq!(bare_group("   "), None);
    }
}
