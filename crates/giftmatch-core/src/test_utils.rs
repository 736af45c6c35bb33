//! Test utilities for giftmatch
//!
//! Provides common fixtures used across the workspace's test modules.

use crate::domain::{ExclusionRule, Participant};

/// Creates a participant with an email derived from the name.
pub fn participant(id: &str, name: &str) -> Participant {
    let local = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    Participant::new(id, name, format!("{local}@example.com"))
}

/// Creates an exclusion rule with a derived rule id.
pub fn exclusion(giver: &str, receiver: &str) -> ExclusionRule {
    ExclusionRule::new(format!("x-{giver}-{receiver}"), giver, receiver)
}

/// A six-person sample roster.
pub fn sample_roster() -> Vec<Participant> {
    vec![
        participant("p1", "Alice Johnson"),
        participant("p2", "Bob Smith"),
        participant("p3", "Carol Williams"),
        participant("p4", "David Brown"),
        participant("p5", "Eve Davis"),
        participant("p6", "Frank Miller"),
    ]
}

/// A minimal three-person roster.
pub fn trio() -> Vec<Participant> {
    vec![
        participant("a", "Alice"),
        participant("b", "Bob"),
        participant("c", "Carol"),
    ]
}
