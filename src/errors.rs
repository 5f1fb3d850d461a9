//! Error types for interval identification
//!
//! Splits user-facing validation failures (bad or missing notes) from
//! internal errors that mean a caller skipped validation or broke a contract.

use thiserror::Error;

/// Top-level error type for the interval engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// Request had the wrong shape (not an array, non-string tokens, wrong count)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// One or more tokens are not valid note names
    #[error("Invalid notes: {0:?}")]
    InvalidNotes(Vec<String>),

    /// At least one of the two notes was left empty
    #[error("Two notes are required")]
    EmptyInput,

    /// Letter outside A-G reached pitch arithmetic
    #[error("Note could not be converted into integer: invalid note '{0}'")]
    InvalidNote(char),

    /// Accidental outside the recognized set reached pitch arithmetic
    #[error("Invalid accidental: '{0}'")]
    InvalidAccidental(String),

    /// Arithmetic produced a value no valid pair of notes can produce
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// Presentation adapter failed (template or MIDI writer)
    #[error("Render error: {0}")]
    Render(String),
}

impl IntervalError {
    /// True for errors that are reported to the user as a normal message
    pub fn is_user_facing(&self) -> bool {
        matches!(self, IntervalError::InvalidNotes(_) | IntervalError::EmptyInput)
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_split() {
        assert!(IntervalError::EmptyInput.is_user_facing());
        assert!(IntervalError::InvalidNotes(vec!["H".to_string()]).is_user_facing());
        assert!(!IntervalError::MalformedInput("x".to_string()).is_user_facing());
        assert!(!IntervalError::InvalidNote('H').is_user_facing());
        assert!(!IntervalError::InternalInconsistency("x".to_string()).is_user_facing());
    }

    #[test]
    fn test_display() {
        assert_eq!(IntervalError::InvalidAccidental("b#".to_string()).to_string(), "Invalid accidental: 'b#'");
        assert_eq!(IntervalError::EmptyInput.to_string(), "Two notes are required");
    }
}
