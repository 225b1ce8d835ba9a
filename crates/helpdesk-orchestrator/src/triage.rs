use crate::extract::compile;
use regex::Regex;
use std::sync::LazyLock;

static TICKET_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(INC-\d+)\b"));
static TICKET_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(tickets?|incidents?)\b"));
static IDENTITY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(passwords?|passwd|passcode|locked|lockout|lock\s+out|unlock|log\s?in|sign\s?in|credentials?)\b",
    )
});
static ACCESS_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(licen[cs]es?|software|groups?|subscriptions?|office\s?365|o365|office|adobe|visio|install)\b",
    )
});

/// Where the orchestrator sends a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Triage {
    /// Answer directly with `check_ticket_status`.
    TicketStatus { ticket_id: String },
    /// Hand off to the Identity Manager.
    Identity,
    /// Hand off to the Access Controller.
    Access,
    /// A ticket was mentioned but no id given.
    MissingTicketId,
    /// No domain, or both domains, matched.
    Unclear,
}

/// Routes a user request using the orchestrator's routing rules.
pub fn triage(text: &str) -> Triage {
    if let Some(id) = TICKET_ID.captures(text).and_then(|c| c.get(1)) {
        return Triage::TicketStatus {
            ticket_id: id.as_str().to_uppercase(),
        };
    }
    if TICKET_WORD.is_match(text) {
        return Triage::MissingTicketId;
    }

    match (IDENTITY_WORDS.is_match(text), ACCESS_WORDS.is_match(text)) {
        (true, false) => Triage::Identity,
        (false, true) => Triage::Access,
        _ => Triage::Unclear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_ids_are_normalised() {
        assert_eq!(
            triage("What's the status of inc-1002?"),
            Triage::TicketStatus {
                ticket_id: "INC-1002".to_string()
            }
        );
    }

    #[test]
    fn test_ticket_id_wins_over_domain_words() {
        assert_eq!(
            triage("Is my password reset INC-1002 done?"),
            Triage::TicketStatus {
                ticket_id: "INC-1002".to_string()
            }
        );
    }

    #[test]
    fn test_ticket_without_id() {
        assert_eq!(triage("Any update on my ticket?"), Triage::MissingTicketId);
    }

    #[test]
    fn test_identity_requests() {
        for text in [
            "I forgot my password",
            "My account is locked out",
            "I can't log in this morning",
            "please unlock me",
            "sign in keeps failing",
            "login page rejects me",
            "I can't login",
            "signin is broken",
        ] {
            assert_eq!(triage(text), Triage::Identity, "{text}");
        }
    }

    #[test]
    fn test_access_requests() {
        for text in [
            "I need a Visio license",
            "Can you add me to the Finance group?",
            "I need Adobe for a design project",
            "Please install some software for me",
        ] {
            assert_eq!(triage(text), Triage::Access, "{text}");
        }
    }

    #[test]
    fn test_unclear_requests() {
        assert_eq!(triage("hello"), Triage::Unclear);
        assert_eq!(triage("My computer is slow"), Triage::Unclear);
        assert_eq!(
            triage("reset my password and give me a Visio license"),
            Triage::Unclear
        );
    }
}
