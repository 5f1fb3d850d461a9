//! Note token validation and parsing
//!
//! Accepted tokens are an uppercase letter A-G followed by one of the
//! accidentals "", "b", "bb", "#", "##" or "*" (double sharp).

use serde::{Deserialize, Serialize};

use crate::errors::{IntervalError, Result};
use crate::models::elements::{Accidental, Letter};
use crate::models::note::Note;

/// Result of validating a batch of tokens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", content = "invalid", rename_all = "camelCase")]
pub enum NoteValidation {
    /// Every non-empty token is a valid note
    AllValid,
    /// Invalid non-empty tokens, deduplicated, in order of first appearance
    Invalid(Vec<String>),
}

impl NoteValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, NoteValidation::AllValid)
    }
}

/// Validate a single token's lexical form
///
/// The empty string counts as valid (an absent note); requiring both notes
/// is the request handler's job.
pub fn validate_note(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [] => true,
        [letter] => is_letter(*letter),
        [letter, accidental] => is_letter(*letter) && matches!(accidental, 'b' | '#' | '*'),
        [letter, first, second] => {
            is_letter(*letter) && matches!((first, second), ('b', 'b') | ('#', '#'))
        }
        _ => false,
    }
}

fn is_letter(c: char) -> bool {
    ('A'..='G').contains(&c)
}

/// Validate every token, collecting the invalid non-empty ones
pub fn validate_notes<S: AsRef<str>>(tokens: &[S]) -> NoteValidation {
    let mut invalid: Vec<String> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        if !validate_note(token) && !invalid.iter().any(|t| t == token) {
            invalid.push(token.to_string());
        }
    }

    if invalid.is_empty() {
        NoteValidation::AllValid
    } else {
        log::debug!("Invalid note tokens: {:?}", invalid);
        NoteValidation::Invalid(invalid)
    }
}

/// Parse a token into a typed note
pub fn parse_note(token: &str) -> Result<Note> {
    if token.is_empty() || !validate_note(token) {
        return Err(IntervalError::InvalidNotes(vec![token.to_string()]));
    }

    let mut chars = token.chars();
    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| IntervalError::InvalidNotes(vec![token.to_string()]))?;
    let accidental = Accidental::parse(chars.as_str())
        .ok_or_else(|| IntervalError::InvalidAccidental(chars.as_str().to_string()))?;

    Ok(Note::new(letter, accidental))
}

/// Parse a token the caller has already validated
///
/// A failure here means validation was skipped, so it is reported as an
/// internal error rather than as invalid user input.
pub fn parse_validated_note(token: &str) -> Result<Note> {
    parse_note(token).map_err(|_| {
        IntervalError::InternalInconsistency(format!("'{}' reached the engine unvalidated", token))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_all_forms() {
        for letter in ["A", "B", "C", "D", "E", "F", "G"] {
            for accidental in ["", "b", "bb", "#", "##", "*"] {
                let token = format!("{}{}", letter, accidental);
                assert!(validate_note(&token), "{} should be valid", token);
            }
        }
    }

    #[test]
    fn test_validate_empty_is_absent() {
        assert!(validate_note(""));
    }

    #[test]
    fn test_validate_rejects() {
        assert!(!validate_note("H"));
        assert!(!validate_note("c"));
        assert!(!validate_note("Cx"));
        assert!(!validate_note("Cb#"));
        assert!(!validate_note("C#b"));
        assert!(!validate_note("C**"));
        assert!(!validate_note("C*#"));
        assert!(!validate_note("C###"));
        assert!(!validate_note("Cbbb"));
        assert!(!validate_note("#C"));
    }

    #[test]
    fn test_validate_notes_ignores_empty() {
        assert_eq!(validate_notes(&["H", ""]), NoteValidation::Invalid(vec!["H".to_string()]));
        assert_eq!(validate_notes(&["", ""]), NoteValidation::AllValid);
        assert_eq!(validate_notes(&["C", "G"]), NoteValidation::AllValid);
    }

    #[test]
    fn test_validate_notes_deduplicates_in_order() {
        let result = validate_notes(&["X", "H", "X"]);
        assert_eq!(result, NoteValidation::Invalid(vec!["X".to_string(), "H".to_string()]));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_parse_note() {
        let note = parse_note("Bbb").unwrap();
        assert_eq!(note.letter, Letter::B);
        assert_eq!(note.accidental, Accidental::DoubleFlat);

        let note = parse_note("G*").unwrap();
        assert_eq!(note.accidental, Accidental::DoubleSharp);

        assert_eq!(parse_note("H"), Err(IntervalError::InvalidNotes(vec!["H".to_string()])));
        assert!(parse_note("").is_err());
    }

    #[test]
    fn test_parse_validated_note_reports_internal_error() {
        assert_eq!(parse_validated_note("F#").unwrap(), parse_note("F#").unwrap());
        assert!(matches!(parse_validated_note("H"), Err(IntervalError::InternalInconsistency(_))));
        assert!(matches!(parse_validated_note(""), Err(IntervalError::InternalInconsistency(_))));
    }

    #[test]
    fn test_validation_serializes_for_js() {
        let json = serde_json::to_string(&NoteValidation::Invalid(vec!["H".to_string()])).unwrap();
        assert_eq!(json, r#"{"status":"invalid","invalid":["H"]}"#);
        let json = serde_json::to_string(&NoteValidation::AllValid).unwrap();
        assert_eq!(json, r#"{"status":"allValid"}"#);
    }
}
