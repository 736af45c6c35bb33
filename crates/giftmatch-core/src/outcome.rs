//! Outcome types for match generation and feasibility estimation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::Participant;

/// One resolved giver -> receiver relationship.
///
/// Carries the full participant records, not just identifiers, so callers
/// can render results without a lookup back into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pairing {
    /// The participant giving a gift.
    pub giver: Participant,
    /// The participant receiving it.
    pub receiver: Participant,
}

/// Short label classifying why match generation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// Fewer participants than the configured minimum group size.
    NotEnoughParticipants,
    /// The search exhausted every candidate assignment.
    NoValidAssignment,
    /// A configured node budget ran out before the search completed.
    BudgetExhausted,
}

impl FailureKind {
    /// Returns the human-readable label for this failure kind.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::NotEnoughParticipants => "Not enough participants",
            FailureKind::NoValidAssignment => "No valid pairing could be found",
            FailureKind::BudgetExhausted => "Search budget exhausted",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed match generation: the failure kind plus at least one
/// human-readable diagnostic reason.
///
/// Reasons are insertion-ordered and deduplicated by exact text; the list is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchFailure {
    /// Classification of the failure.
    pub kind: FailureKind,
    /// Ordered, deduplicated diagnostic reasons.
    pub reasons: Vec<String>,
}

/// Outcome of one match generation.
///
/// # Example
///
/// ```
/// use giftmatch_core::{FailureKind, GenerationResult, MatchFailure};
///
/// let result = GenerationResult::Unmatched(MatchFailure {
///     kind: FailureKind::NotEnoughParticipants,
///     reasons: vec!["At least 3 participants are required".into()],
/// });
/// assert!(!result.is_matched());
/// assert!(result.pairings().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GenerationResult {
    /// A complete assignment, in original-participant order by giver.
    Matched(Vec<Pairing>),
    /// No assignment exists (or the search was cut short), with reasons.
    Unmatched(MatchFailure),
}

impl GenerationResult {
    /// Returns true if a complete assignment was found.
    pub fn is_matched(&self) -> bool {
        matches!(self, GenerationResult::Matched(_))
    }

    /// Returns the pairings if generation succeeded.
    pub fn pairings(&self) -> Option<&[Pairing]> {
        match self {
            GenerationResult::Matched(pairings) => Some(pairings),
            GenerationResult::Unmatched(_) => None,
        }
    }

    /// Returns the failure if generation did not succeed.
    pub fn failure(&self) -> Option<&MatchFailure> {
        match self {
            GenerationResult::Matched(_) => None,
            GenerationResult::Unmatched(failure) => Some(failure),
        }
    }
}

/// Advisory verdict on whether the current configuration is likely solvable.
///
/// Produced by a cheap heuristic that never runs the full search; it is not
/// a guarantee in either direction. The matcher remains the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feasibility {
    /// Heuristically likely to be solvable.
    Solvable,
    /// Heuristically risky: a giver is fully blocked or exclusions are dense.
    Warning,
    /// Too few participants to evaluate.
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NotApplicable,
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feasibility::Solvable => write!(f, "solvable"),
            Feasibility::Warning => write!(f, "warning"),
            Feasibility::NotApplicable => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Participant;

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(
            FailureKind::NotEnoughParticipants.label(),
            "Not enough participants"
        );
        assert_eq!(
            FailureKind::NoValidAssignment.label(),
            "No valid pairing could be found"
        );
        assert_eq!(FailureKind::BudgetExhausted.label(), "Search budget exhausted");
    }

    #[test]
    fn test_generation_result_accessors() {
        let giver = Participant::new("p1", "A", "a@example.com");
        let receiver = Participant::new("p2", "B", "b@example.com");
        let matched = GenerationResult::Matched(vec![Pairing {
            giver: giver.clone(),
            receiver,
        }]);
        assert!(matched.is_matched());
        assert_eq!(matched.pairings().map(|p| p.len()), Some(1));
        assert!(matched.failure().is_none());

        let unmatched = GenerationResult::Unmatched(MatchFailure {
            kind: FailureKind::NoValidAssignment,
            reasons: vec!["blocked".into()],
        });
        assert!(!unmatched.is_matched());
        assert!(unmatched.pairings().is_none());
        assert_eq!(
            unmatched.failure().map(|f| f.kind),
            Some(FailureKind::NoValidAssignment)
        );
    }

    #[test]
    fn test_feasibility_display() {
        assert_eq!(Feasibility::Solvable.to_string(), "solvable");
        assert_eq!(Feasibility::Warning.to_string(), "warning");
        assert_eq!(Feasibility::NotApplicable.to_string(), "none");
    }
}
