//! Error types for giftmatch.
//!
//! Expected match failures are data (`GenerationResult::Unmatched`), never
//! errors. This type covers everything else: malformed rosters supplied by a
//! collaborator, and internal defects.

use thiserror::Error;

/// Main error type for giftmatch operations
#[derive(Debug, Error)]
pub enum GiftmatchError {
    /// Roster supplied by a collaborator is unusable.
    #[error("Invalid roster: {0}")]
    Roster(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for giftmatch operations
pub type Result<T> = std::result::Result<T, GiftmatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GiftmatchError::Roster("duplicate email".into());
        assert_eq!(err.to_string(), "Invalid roster: duplicate email");
    }
}
