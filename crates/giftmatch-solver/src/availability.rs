//! Receiver-side availability analysis.
//!
//! Answers "who can still give to each person" after self- and explicit
//! exclusions, for advisory display while a roster is being configured.
//! Pure and read-only, like the rest of the engine.

use std::collections::HashMap;

use giftmatch_core::{ExclusionRule, Participant, ParticipantId};

use crate::exclusions::ExclusionIndex;

/// How many people can still give to one receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverAvailability {
    /// The participant viewed as receiver.
    pub participant: Participant,
    /// Count of givers not excluding them.
    pub eligible_givers: usize,
    /// The best case: everyone but themselves.
    pub max_possible: usize,
}

/// Computes per-receiver eligible-giver counts, in roster order.
///
/// # Example
///
/// ```
/// use giftmatch_core::test_utils::{exclusion, trio};
/// use giftmatch_solver::receiver_availability;
///
/// let rows = receiver_availability(&trio(), &[exclusion("a", "b")]);
/// assert_eq!(rows[1].eligible_givers, 1);
/// assert_eq!(rows[1].max_possible, 2);
/// ```
pub fn receiver_availability(
    participants: &[Participant],
    exclusions: &[ExclusionRule],
) -> Vec<ReceiverAvailability> {
    let index = ExclusionIndex::build(participants, exclusions);
    let max_possible = participants.len().saturating_sub(1);
    participants
        .iter()
        .enumerate()
        .map(|(receiver, person)| ReceiverAvailability {
            participant: person.clone(),
            eligible_givers: index.eligible_givers(receiver).len(),
            max_possible,
        })
        .collect()
}

/// The full directed can-give relation for a roster.
///
/// `can_give` is false for self-pairs, excluded pairs, and identifiers not
/// present in the roster.
pub struct EligibilityMatrix {
    position: HashMap<ParticipantId, usize>,
    count: usize,
    /// Row-major: `can[giver * count + receiver]`.
    can: Vec<bool>,
}

impl EligibilityMatrix {
    /// Builds the matrix in O(P² + E).
    pub fn build(participants: &[Participant], exclusions: &[ExclusionRule]) -> Self {
        let index = ExclusionIndex::build(participants, exclusions);
        let count = participants.len();
        let mut can = vec![false; count * count];
        for giver in 0..count {
            for &receiver in index.allowed(giver) {
                can[giver * count + receiver] = true;
            }
        }
        let position = participants
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            position,
            count,
            can,
        }
    }

    /// Whether `giver` may be assigned `receiver`.
    pub fn can_give(&self, giver: &ParticipantId, receiver: &ParticipantId) -> bool {
        match (self.position.get(giver), self.position.get(receiver)) {
            (Some(&g), Some(&r)) => self.can[g * self.count + r],
            _ => false,
        }
    }

    /// Number of participants the matrix was built over.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True if the matrix covers no participants.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
