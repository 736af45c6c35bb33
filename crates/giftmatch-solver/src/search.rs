//! Constrained backtracking search for a complete giver -> receiver matching.
//!
//! The search walks givers in roster order and tries each giver's allowed
//! receivers in roster order, so identical input always produces the same
//! assignment or the same failure reasons. There is no randomization; the
//! result favors reproducibility over shuffled fairness.
//!
//! The search runs on an explicit frame stack with snapshot/undo of the
//! partial assignment rather than recursion, which keeps deep rosters off
//! the call stack and lets an optional node budget cut the walk short.

use giftmatch_config::MatchConfig;
use giftmatch_core::{
    ExclusionRule, FailureKind, GenerationResult, MatchFailure, Pairing, Participant,
};
use tracing::{debug, info, trace};

use crate::diagnostics::{failure_reasons, ReasonLog};
use crate::exclusions::ExclusionIndex;

/// One giver's position in the search, with a cursor into their allowed list.
struct Frame {
    giver: usize,
    cursor: usize,
    picked_any: bool,
}

impl Frame {
    fn enter(giver: usize) -> Self {
        Self {
            giver,
            cursor: 0,
            picked_any: false,
        }
    }
}

/// Finds one valid assignment, or explains why none exists.
///
/// Every participant gives exactly once and receives exactly once; nobody
/// gives to themselves; no excluded pair appears. On success the pairings
/// are returned in roster order by giver, carrying full participant records.
///
/// Rosters below the configured minimum group size fail immediately with a
/// single fixed reason, without any search.
///
/// # Example
///
/// ```
/// use giftmatch_config::MatchConfig;
/// use giftmatch_core::test_utils::trio;
/// use giftmatch_solver::find_pairings;
///
/// let result = find_pairings(&trio(), &[], &MatchConfig::default());
/// assert!(result.is_matched());
/// ```
pub fn find_pairings(
    participants: &[Participant],
    exclusions: &[ExclusionRule],
    config: &MatchConfig,
) -> GenerationResult {
    info!(
        event = "match_start",
        participants = participants.len(),
        exclusions = exclusions.len(),
    );

    if participants.len() < config.min_group_size {
        info!(event = "match_end", outcome = "unmatched", nodes = 0u64);
        return GenerationResult::Unmatched(MatchFailure {
            kind: FailureKind::NotEnoughParticipants,
            reasons: vec![format!(
                "At least {} participants are required for Secret Santa",
                config.min_group_size
            )],
        });
    }

    let index = ExclusionIndex::build(participants, exclusions);
    let outcome = search(participants, &index, config.node_limit());

    match outcome {
        SearchOutcome::Assigned(receiver_of) => {
            let pairings = resolve_pairings(participants, &receiver_of);
            info!(event = "match_end", outcome = "matched");
            GenerationResult::Matched(pairings)
        }
        SearchOutcome::Exhausted(dead_ends) => {
            info!(event = "match_end", outcome = "unmatched");
            GenerationResult::Unmatched(MatchFailure {
                kind: FailureKind::NoValidAssignment,
                reasons: failure_reasons(participants, &index, dead_ends),
            })
        }
        SearchOutcome::OverBudget(limit) => {
            info!(event = "match_end", outcome = "over_budget");
            GenerationResult::Unmatched(MatchFailure {
                kind: FailureKind::BudgetExhausted,
                reasons: vec![format!(
                    "The search was cut short after {limit} explored assignments; \
                     no conclusion was reached."
                )],
            })
        }
    }
}

enum SearchOutcome {
    /// Receiver position chosen for each giver position.
    Assigned(Vec<usize>),
    /// Every branch failed; dead ends recorded along the way.
    Exhausted(ReasonLog),
    /// The configured node budget ran out mid-search.
    OverBudget(u64),
}

/// Depth-first walk over givers with tentative commit and undo.
fn search(
    participants: &[Participant],
    index: &ExclusionIndex,
    node_limit: Option<u64>,
) -> SearchOutcome {
    let count = participants.len();
    // chosen[g] is the receiver tentatively assigned to giver g.
    let mut chosen: Vec<Option<usize>> = vec![None; count];
    let mut taken = vec![false; count];
    let mut stack = Vec::with_capacity(count);
    stack.push(Frame::enter(0));

    let mut dead_ends = ReasonLog::new();
    let mut nodes: u64 = 0;
    let mut backtracks: u64 = 0;

    while let Some(frame) = stack.last_mut() {
        let giver = frame.giver;
        // Returning from a failed deeper frame: release this giver's pick.
        if let Some(receiver) = chosen[giver].take() {
            taken[receiver] = false;
        }

        let allowed = index.allowed(giver);
        let mut picked = None;
        while frame.cursor < allowed.len() {
            let receiver = allowed[frame.cursor];
            frame.cursor += 1;
            if !taken[receiver] {
                picked = Some(receiver);
                break;
            }
        }

        let Some(receiver) = picked else {
            // Availability at a frame is fixed by earlier givers, so a frame
            // that never picked anything had no options on entry either.
            if !frame.picked_any {
                record_dead_end(&mut dead_ends, participants, index, giver, &taken);
            }
            debug!(event = "backtrack", giver = %participants[giver].id);
            backtracks += 1;
            stack.pop();
            continue;
        };

        if let Some(limit) = node_limit {
            if nodes >= limit {
                info!(event = "budget_exhausted", nodes, limit);
                return SearchOutcome::OverBudget(limit);
            }
        }
        nodes += 1;

        frame.picked_any = true;
        chosen[giver] = Some(receiver);
        taken[receiver] = true;
        trace!(
            event = "assign",
            giver = %participants[giver].id,
            receiver = %participants[receiver].id,
        );

        if giver + 1 == count {
            info!(event = "search_stats", nodes, backtracks);
            let receiver_of = chosen
                .iter()
                .enumerate()
                .map(|(g, r)| {
                    r.unwrap_or_else(|| {
                        panic!(
                            "search reported success but giver {} has no assigned receiver",
                            participants[g].id
                        )
                    })
                })
                .collect();
            return SearchOutcome::Assigned(receiver_of);
        }
        stack.push(Frame::enter(giver + 1));
    }

    info!(event = "search_stats", nodes, backtracks);
    SearchOutcome::Exhausted(dead_ends)
}

/// Records why a giver had no candidate: either their allowed list is empty
/// outright, or every allowed receiver was already claimed upstream.
fn record_dead_end(
    dead_ends: &mut ReasonLog,
    participants: &[Participant],
    index: &ExclusionIndex,
    giver: usize,
    taken: &[bool],
) {
    let allowed = index.allowed(giver);
    if allowed.is_empty() {
        dead_ends.push(format!(
            "{} cannot give to anyone because all recipients are excluded by the rules.",
            participants[giver].name
        ));
    } else {
        debug_assert!(allowed.iter().all(|&r| taken[r]));
        let allowed_names = allowed
            .iter()
            .map(|&r| participants[r].name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        dead_ends.push(format!(
            "{} ran out of available receivers (only allowed: {allowed_names}).",
            participants[giver].name
        ));
    }
}

/// Resolves chosen receiver positions back to full participant records.
fn resolve_pairings(participants: &[Participant], receiver_of: &[usize]) -> Vec<Pairing> {
    participants
        .iter()
        .zip(receiver_of)
        .map(|(giver, &receiver)| Pairing {
            giver: giver.clone(),
            receiver: participants[receiver].clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
