//! Giftmatch Solver Engine
//!
//! This crate provides the matching engine:
//! - The matcher: constrained backtracking search over giver -> receiver
//!   assignments, with human-readable failure diagnostics
//! - The feasibility estimator: a cheap advisory classification of the
//!   current roster, without running the search
//! - Availability analysis: per-receiver eligible-giver counts and the full
//!   directed eligibility relation
//!
//! Logging levels:
//! - **INFO**: Match start/end, problem scale, node statistics
//! - **DEBUG**: Dead ends and backtracking
//! - **TRACE**: Individual tentative assignments

mod diagnostics;
mod exclusions;

pub mod availability;
pub mod feasibility;
pub mod search;

pub use availability::{receiver_availability, EligibilityMatrix, ReceiverAvailability};
pub use feasibility::estimate_feasibility;
pub use search::find_pairings;
