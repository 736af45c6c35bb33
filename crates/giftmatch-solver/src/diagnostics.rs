//! Failure diagnostics: why no valid assignment exists.
//!
//! Reasons are accumulated in insertion order and deduplicated by exact
//! text, so repeated dead ends collapse to one entry and output is stable
//! across runs with identical input.

use std::collections::HashSet;

use giftmatch_core::Participant;

use crate::exclusions::ExclusionIndex;

/// Insertion-ordered, deduplicated list of diagnostic reasons.
pub(crate) struct ReasonLog {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl ReasonLog {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends a reason unless the exact text is already present.
    pub(crate) fn push(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if self.seen.insert(reason.clone()) {
            self.entries.push(reason);
        }
    }

    /// Appends every reason from another log, preserving order.
    pub(crate) fn extend(&mut self, other: ReasonLog) {
        for reason in other.entries {
            self.push(reason);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

/// Joins participant names at the given roster positions with ", ".
fn names(participants: &[Participant], positions: &[usize]) -> String {
    positions
        .iter()
        .map(|&i| participants[i].name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assembles the reason list for an exhausted search.
///
/// Combines static per-giver and per-receiver bottleneck analysis with the
/// dead ends recorded during the failed search. If nothing specific was
/// identified, the blockage is a structural cycle; a generic explanation and
/// a retry suggestion keep the list non-empty.
pub(crate) fn failure_reasons(
    participants: &[Participant],
    index: &ExclusionIndex,
    dead_ends: ReasonLog,
) -> Vec<String> {
    let mut reasons = ReasonLog::new();

    for (giver, person) in participants.iter().enumerate() {
        let allowed = index.allowed(giver);
        match allowed {
            [] => reasons.push(format!(
                "{} has no allowed receivers because they are excluded from everyone ({}).",
                person.name,
                names(participants, &index.forbidden_receivers(giver)),
            )),
            [only] => reasons.push(format!(
                "{} can only give to {} based on current exclusions.",
                person.name, participants[*only].name,
            )),
            _ => {}
        }
    }

    for (receiver, person) in participants.iter().enumerate() {
        let eligible = index.eligible_givers(receiver);
        match eligible.as_slice() {
            [] => reasons.push(format!(
                "{} cannot receive from anyone because every potential giver excludes them ({}).",
                person.name,
                names(participants, &index.excluders_of(receiver)),
            )),
            [only] => reasons.push(format!(
                "{} can only receive from {} based on current exclusions.",
                person.name, participants[*only].name,
            )),
            _ => {}
        }
    }

    reasons.extend(dead_ends);

    if reasons.is_empty() {
        reasons.push("The exclusion rules create a cycle that blocks a valid assignment.");
        reasons.push("Try removing or relaxing one of the exclusions and generate again.");
    }

    reasons.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftmatch_core::test_utils::{exclusion, trio};

    #[test]
    fn test_reason_log_dedup_preserves_insertion_order() {
        let mut log = ReasonLog::new();
        log.push("b");
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_giver_with_no_options_names_excluded_set() {
        let roster = trio();
        let rules = vec![exclusion("a", "b"), exclusion("a", "c")];
        let index = ExclusionIndex::build(&roster, &rules);
        let reasons = failure_reasons(&roster, &index, ReasonLog::new());
        assert!(reasons.iter().any(|r| r
            == "Alice has no allowed receivers because they are excluded from everyone (Bob, Carol)."));
    }

    #[test]
    fn test_receiver_with_no_givers_names_excluders() {
        let roster = trio();
        let rules = vec![exclusion("b", "a"), exclusion("c", "a")];
        let index = ExclusionIndex::build(&roster, &rules);
        let reasons = failure_reasons(&roster, &index, ReasonLog::new());
        assert!(reasons.iter().any(|r| r
            == "Alice cannot receive from anyone because every potential giver excludes them (Bob, Carol)."));
    }

    #[test]
    fn test_cycle_fallback_when_nothing_specific() {
        let roster = trio();
        let index = ExclusionIndex::build(&roster, &[]);
        let reasons = failure_reasons(&roster, &index, ReasonLog::new());
        assert_eq!(
            reasons,
            vec![
                "The exclusion rules create a cycle that blocks a valid assignment.".to_string(),
                "Try removing or relaxing one of the exclusions and generate again.".to_string(),
            ]
        );
    }

    #[test]
    fn test_bottleneck_giver_flagged() {
        let roster = trio();
        let rules = vec![exclusion("a", "b")];
        let index = ExclusionIndex::build(&roster, &rules);
        let reasons = failure_reasons(&roster, &index, ReasonLog::new());
        assert!(reasons
            .iter()
            .any(|r| r == "Alice can only give to Carol based on current exclusions."));
    }
}
