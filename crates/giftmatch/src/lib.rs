//! Giftmatch - A Secret Santa matching engine in Rust
//!
//! Supply participants and exclusion rules, get back either a complete
//! giver -> receiver assignment or the reasons none exists.
//!
//! # Example
//!
//! ```rust
//! use giftmatch::prelude::*;
//!
//! let participants = vec![
//!     Participant::new("a", "Alice", "alice@example.com"),
//!     Participant::new("b", "Bob", "bob@example.com"),
//!     Participant::new("c", "Carol", "carol@example.com"),
//! ];
//! let exclusions = vec![ExclusionRule::new("x1", "a", "b")];
//!
//! assert_eq!(estimate(&participants, &exclusions), Feasibility::Solvable);
//!
//! let result = match_participants(&participants, &exclusions);
//! for pairing in result.pairings().unwrap() {
//!     println!("{} gives to {}", pairing.giver.name, pairing.receiver.name);
//! }
//! ```

// Domain and outcome types
pub use giftmatch_core::{
    ExclusionRule, Feasibility, FailureKind, GenerationResult, GiftmatchError, MatchFailure,
    Pairing, Participant, ParticipantId,
};

// Configuration
pub use giftmatch_config::{ConfigError, MatchConfig};

// Engine entry points
pub use giftmatch_solver::{
    estimate_feasibility, find_pairings, receiver_availability, EligibilityMatrix,
    ReceiverAvailability,
};

/// Finds one valid assignment under the default configuration.
///
/// Convenience wrapper over [`find_pairings`] for callers without a config
/// file; invoked on demand, never automatically.
pub fn match_participants(
    participants: &[Participant],
    exclusions: &[ExclusionRule],
) -> GenerationResult {
    find_pairings(participants, exclusions, &MatchConfig::default())
}

/// Estimates solvability under the default configuration.
///
/// Cheap enough to call on every roster edit; advisory only.
pub fn estimate(participants: &[Participant], exclusions: &[ExclusionRule]) -> Feasibility {
    estimate_feasibility(participants, exclusions, &MatchConfig::default())
}

pub mod prelude {
    pub use super::{estimate, match_participants};
    pub use super::{
        ExclusionRule, Feasibility, FailureKind, GenerationResult, MatchConfig, Pairing,
        Participant, ParticipantId,
    };
}
