//! Forbidden-receiver index built from a roster and its exclusion rules.
//!
//! Self-pairing is modeled as a synthetic, always-present exclusion seeded
//! before the explicit rules, so forbidden-set construction is uniform and
//! the search loop needs no special case for it.

use std::collections::{HashMap, HashSet};

use giftmatch_core::{ExclusionRule, Participant};
use smallvec::SmallVec;

/// Inline capacity for candidate lists; rosters are tens of people at most.
pub(crate) type IndexVec = SmallVec<[usize; 8]>;

/// Dense-index view of a roster's exclusion constraints.
///
/// Participants are addressed by their position in the input slice, which is
/// also the tie-break order everywhere in the engine. Rules referencing
/// identifiers absent from the roster are ignored; duplicate rules collapse.
pub(crate) struct ExclusionIndex {
    /// Forbidden receiver positions per giver, self always included.
    forbidden: Vec<HashSet<usize>>,
    /// Allowed receiver positions per giver, in roster order.
    allowed: Vec<IndexVec>,
}

impl ExclusionIndex {
    /// Builds the index in O(P + E).
    pub(crate) fn build(participants: &[Participant], exclusions: &[ExclusionRule]) -> Self {
        let position: HashMap<_, _> = participants
            .iter()
            .enumerate()
            .map(|(i, p)| (&p.id, i))
            .collect();

        let mut forbidden: Vec<HashSet<usize>> = (0..participants.len())
            .map(|i| HashSet::from([i]))
            .collect();
        for rule in exclusions {
            let (Some(&giver), Some(&receiver)) =
                (position.get(&rule.giver), position.get(&rule.receiver))
            else {
                continue;
            };
            forbidden[giver].insert(receiver);
        }

        let allowed = forbidden
            .iter()
            .map(|set| {
                (0..participants.len())
                    .filter(|receiver| !set.contains(receiver))
                    .collect()
            })
            .collect();

        Self { forbidden, allowed }
    }

    /// Allowed receivers for a giver, in roster order.
    pub(crate) fn allowed(&self, giver: usize) -> &[usize] {
        &self.allowed[giver]
    }

    /// Whether `giver` is forbidden from being assigned `receiver`.
    ///
    /// Always true for `giver == receiver`.
    pub(crate) fn forbids(&self, giver: usize, receiver: usize) -> bool {
        self.forbidden[giver].contains(&receiver)
    }

    /// Receivers a giver is barred from, excluding themselves, in roster order.
    pub(crate) fn forbidden_receivers(&self, giver: usize) -> IndexVec {
        (0..self.forbidden.len())
            .filter(|&receiver| receiver != giver && self.forbids(giver, receiver))
            .collect()
    }

    /// Givers still eligible to give to a receiver, in roster order.
    pub(crate) fn eligible_givers(&self, receiver: usize) -> IndexVec {
        (0..self.forbidden.len())
            .filter(|&giver| !self.forbids(giver, receiver))
            .collect()
    }

    /// Givers barred from a receiver, excluding the receiver, in roster order.
    pub(crate) fn excluders_of(&self, receiver: usize) -> IndexVec {
        (0..self.forbidden.len())
            .filter(|&giver| giver != receiver && self.forbids(giver, receiver))
            .collect()
    }
}
