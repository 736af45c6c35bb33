//! Roster file loading and collaborator-side cleanup.
//!
//! The engine expects clean input: unique identifiers, deduplicated
//! exclusion pairs, emails already vetted. That cleanup happens here,
//! before anything reaches the matcher.

use std::collections::HashSet;
use std::path::Path;

use giftmatch::{ExclusionRule, GiftmatchError, Participant};
use serde::Deserialize;

use crate::validation;
use crate::CliError;

/// On-disk roster: participants plus optional exclusions, in TOML.
///
/// ```toml
/// [[participants]]
/// name = "Alice Johnson"
/// email = "alice@example.com"
///
/// [[participants]]
/// id = "bob"
/// name = "Bob Smith"
/// email = "bob@example.com"
///
/// [[exclusions]]
/// giver = "p1"
/// receiver = "bob"
/// ```
#[derive(Debug, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub participants: Vec<RosterParticipant>,
    #[serde(default)]
    pub exclusions: Vec<RosterExclusion>,
}

/// One participant entry; the id defaults to its position (`p1`, `p2`, ...).
#[derive(Debug, Deserialize)]
pub struct RosterParticipant {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

/// One exclusion entry, referencing participants by id.
#[derive(Debug, Deserialize)]
pub struct RosterExclusion {
    pub giver: String,
    pub receiver: String,
}

impl Roster {
    /// Parses a roster from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Validates the roster and converts it into engine input.
    ///
    /// # Errors
    ///
    /// Returns `GiftmatchError::Roster` for malformed emails, duplicate
    /// emails (case-insensitive), or duplicate participant identifiers.
    pub fn into_parts(self) -> Result<(Vec<Participant>, Vec<ExclusionRule>), GiftmatchError> {
        let mut participants: Vec<Participant> = Vec::with_capacity(self.participants.len());
        let mut ids = HashSet::new();

        for (position, entry) in self.participants.into_iter().enumerate() {
            if !validation::validate_email(&entry.email) {
                return Err(GiftmatchError::Roster(format!(
                    "invalid email for {}: {}",
                    entry.name, entry.email
                )));
            }
            if validation::is_email_duplicate(&entry.email, &participants) {
                return Err(GiftmatchError::Roster(format!(
                    "duplicate email: {}",
                    entry.email
                )));
            }
            let id = entry.id.unwrap_or_else(|| format!("p{}", position + 1));
            if !ids.insert(id.clone()) {
                return Err(GiftmatchError::Roster(format!(
                    "duplicate participant id: {id}"
                )));
            }
            participants.push(Participant::new(id, entry.name, entry.email));
        }

        let mut exclusions: Vec<ExclusionRule> = Vec::with_capacity(self.exclusions.len());
        let mut seen_pairs = HashSet::new();
        for entry in self.exclusions {
            if !seen_pairs.insert((entry.giver.clone(), entry.receiver.clone())) {
                continue;
            }
            exclusions.push(ExclusionRule::new(
                format!("x{}", exclusions.len() + 1),
                entry.giver,
                entry.receiver,
            ));
        }

        Ok((participants, exclusions))
    }
}

/// Reads and validates a roster file.
pub fn load(path: &Path) -> Result<(Vec<Participant>, Vec<ExclusionRule>), CliError> {
    let contents = std::fs::read_to_string(path)?;
    let roster = Roster::from_toml_str(&contents)?;
    Ok(roster.into_parts()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [[participants]]
        name = "Alice Johnson"
        email = "alice@example.com"

        [[participants]]
        id = "bob"
        name = "Bob Smith"
        email = "bob@example.com"

        [[exclusions]]
        giver = "p1"
        receiver = "bob"

        [[exclusions]]
        giver = "p1"
        receiver = "bob"
    "#;

    #[test]
    fn test_parse_and_convert() {
        let roster = Roster::from_toml_str(SAMPLE).unwrap();
        let (participants, exclusions) = roster.into_parts().unwrap();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].id.as_str(), "p1");
        assert_eq!(participants[1].id.as_str(), "bob");
        // The duplicate pair collapses.
        assert_eq!(exclusions.len(), 1);
        assert_eq!(exclusions[0].giver.as_str(), "p1");
        assert_eq!(exclusions[0].receiver.as_str(), "bob");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let toml = r#"
            [[participants]]
            name = "Alice"
            email = "alice@example.com"

            [[participants]]
            name = "Alias"
            email = "ALICE@example.com"
        "#;
        let err = Roster::from_toml_str(toml).unwrap().into_parts().unwrap_err();
        assert!(err.to_string().contains("duplicate email"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let toml = r#"
            [[participants]]
            name = "Alice"
            email = "not-an-email"
        "#;
        let err = Roster::from_toml_str(toml).unwrap().into_parts().unwrap_err();
        assert!(err.to_string().contains("invalid email"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml = r#"
            [[participants]]
            id = "dup"
            name = "Alice"
            email = "alice@example.com"

            [[participants]]
            id = "dup"
            name = "Bob"
            email = "bob@example.com"
        "#;
        let err = Roster::from_toml_str(toml).unwrap().into_parts().unwrap_err();
        assert!(err.to_string().contains("duplicate participant id"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let (participants, exclusions) = load(file.path()).unwrap();
        assert_eq!(participants.len(), 2);
        assert_eq!(exclusions.len(), 1);
    }

    #[test]
    fn test_load_malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[participants]\nname = ").unwrap();
        assert!(load(file.path()).is_err());
    }
}
