//! Giftmatch Core - Domain types for gift-exchange matching
//!
//! This crate provides the fundamental types shared by the matcher and its
//! collaborators:
//! - Participant and exclusion-rule domain types
//! - Outcome types for match generation and feasibility estimation
//! - The crate-wide error type

pub mod domain;
pub mod error;
pub mod outcome;
pub mod test_utils;

pub use domain::{ExclusionRule, Participant, ParticipantId};
pub use error::{GiftmatchError, Result};
pub use outcome::{Feasibility, FailureKind, GenerationResult, MatchFailure, Pairing};
