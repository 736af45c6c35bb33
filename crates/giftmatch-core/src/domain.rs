//! Participant and exclusion-rule domain types.
//!
//! These types are owned by the caller and never mutated by the matcher.
//! Identifier uniqueness within a roster is the caller's responsibility.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque, session-stable identifier for a participant.
///
/// # Example
///
/// ```
/// use giftmatch_core::ParticipantId;
///
/// let id = ParticipantId::new("p1");
/// assert_eq!(id.as_str(), "p1");
/// assert_eq!(id.to_string(), "p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new participant identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One person eligible to give and receive.
///
/// The email is used only for display and collaborator-side uniqueness
/// checks; the matcher never validates or contacts it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    /// Unique identifier within the roster.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Contact address, for display and uniqueness checks only.
    pub email: String,
}

impl Participant {
    /// Creates a new participant.
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Directed constraint: `giver` must not be assigned `receiver`.
///
/// Self-pairing is forbidden unconditionally by the matcher, so a rule with
/// `giver == receiver` is redundant but harmless. Duplicate rules for the
/// same pair are tolerated; rules referencing identifiers absent from the
/// roster are ignored.
///
/// # Example
///
/// ```
/// use giftmatch_core::ExclusionRule;
///
/// let rule = ExclusionRule::new("x1", "alice", "bob");
/// assert_eq!(rule.giver.as_str(), "alice");
/// assert_eq!(rule.receiver.as_str(), "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExclusionRule {
    /// Unique identifier of the rule itself.
    pub id: String,
    /// The participant acting as giver.
    pub giver: ParticipantId,
    /// The receiver the giver must not be assigned.
    pub receiver: ParticipantId,
}

impl ExclusionRule {
    /// Creates a new exclusion rule.
    pub fn new(
        id: impl Into<String>,
        giver: impl Into<ParticipantId>,
        receiver: impl Into<ParticipantId>,
    ) -> Self {
        Self {
            id: id.into(),
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }
}
