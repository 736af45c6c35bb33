//! Cheap solvability estimate for a roster under construction.
//!
//! Runs in O(P + E) and never touches the exponential search, so it is safe
//! to call on every edit. The verdict is advisory only: a dense but valid
//! exclusion graph can still hide an unsolvable cycle this heuristic misses,
//! and near the density threshold it can flag rosters the matcher would
//! happily solve. The matcher is the source of truth.

use std::collections::HashMap;

use giftmatch_config::MatchConfig;
use giftmatch_core::{ExclusionRule, Feasibility, Participant};

/// Classifies the current roster as likely solvable, risky, or too small to
/// evaluate.
///
/// A giver whose exclusion count (explicit rules plus the implicit
/// self-exclusion) reaches the roster size minus one structurally cannot be
/// assigned anyone, which is an immediate warning. Beyond that, a warning is
/// raised when more than half of all ordered giver -> receiver slots are
/// already ruled out.
///
/// # Example
///
/// ```
/// use giftmatch_config::MatchConfig;
/// use giftmatch_core::test_utils::{exclusion, sample_roster};
/// use giftmatch_core::Feasibility;
/// use giftmatch_solver::estimate_feasibility;
///
/// let verdict = estimate_feasibility(
///     &sample_roster(),
///     &[exclusion("p1", "p2")],
///     &MatchConfig::default(),
/// );
/// assert_eq!(verdict, Feasibility::Solvable);
/// ```
pub fn estimate_feasibility(
    participants: &[Participant],
    exclusions: &[ExclusionRule],
    config: &MatchConfig,
) -> Feasibility {
    let count = participants.len();
    if count < config.min_group_size {
        return Feasibility::NotApplicable;
    }

    let position: HashMap<_, _> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| (&p.id, i))
        .collect();

    // Seeded at 1: the implicit self-exclusion.
    let mut exclusions_per_giver = vec![1usize; count];
    for rule in exclusions {
        if let Some(&giver) = position.get(&rule.giver) {
            exclusions_per_giver[giver] += 1;
        }
    }

    if exclusions_per_giver.iter().any(|&c| c >= count - 1) {
        return Feasibility::Warning;
    }

    // Density: (rules + self-pairs) over all ordered giver -> receiver slots.
    let ruled_out = exclusions.len() + count;
    let slots = count * (count - 1);
    if ruled_out * 2 > slots {
        return Feasibility::Warning;
    }

    Feasibility::Solvable
}
