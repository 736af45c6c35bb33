//! Collaborator-side input checks the matching engine does not perform.

use giftmatch::Participant;

/// Basic email shape check, good enough for roster input.
///
/// Accepts one `@` with a non-empty, whitespace-free local part and a
/// domain containing at least one dot between non-empty labels.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Case-insensitive duplicate check so the same address can't join twice.
pub fn is_email_duplicate(email: &str, participants: &[Participant]) -> bool {
    participants
        .iter()
        .any(|p| p.email.eq_ignore_ascii_case(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("alice@example.com"));
        assert!(validate_email("bob.smith@mail.example.co.uk"));
    }

    #[test]
    fn test_validate_email_rejects_malformed_input() {
        assert!(!validate_email("alice"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("alice@"));
        assert!(!validate_email("alice@example"));
        assert!(!validate_email("alice@exa mple.com"));
        assert!(!validate_email("alice@@example.com"));
        assert!(!validate_email("alice@example..com"));
    }

    #[test]
    fn test_duplicate_detection_ignores_case() {
        let participants = vec![Participant::new("p1", "Alice", "Alice@Example.com")];
        assert!(is_email_duplicate("alice@example.com", &participants));
        assert!(!is_email_duplicate("bob@example.com", &participants));
    }
}
