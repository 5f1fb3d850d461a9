//! Text output for the interval identifier

use crate::errors::IntervalError;
use crate::models::IntervalName;

pub const EMPTY_INPUT_MESSAGE: &str = "You must input two notes!";
pub const TYPE_ERROR_MESSAGE: &str = "[DEBUG] A type error has occurred.";
pub const INTERNAL_ERROR_MESSAGE: &str = "[DEBUG] An error occurred while calculating interval.";

/// "C → E is a Major Third", with "an" before names starting with A
pub fn interval_sentence(bottom: &str, top: &str, name: &IntervalName) -> String {
    let name = name.to_string();
    let article = if name.starts_with('A') { "an" } else { "a" };
    format!("{} → {} is {} {}", bottom, top, article, name)
}

/// `"H" is not a valid note!` / `"H" and "X" are not valid notes!`
pub fn invalid_notes_message(invalid: &[String]) -> String {
    let quoted: Vec<String> = invalid.iter().map(|n| format!("\"{}\"", n)).collect();

    let list = match quoted.as_slice() {
        [] => return String::new(),
        [only] => return format!("{} is not a valid note!", only),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    };

    format!("{} are not valid notes!", list)
}

/// Message shown to the user for any error
pub fn error_message(error: &IntervalError) -> String {
    match error {
        IntervalError::InvalidNotes(invalid) => invalid_notes_message(invalid),
        IntervalError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
        IntervalError::MalformedInput(_) => TYPE_ERROR_MESSAGE.to_string(),
        _ => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classify;

    #[test]
    fn test_sentence_articles() {
        assert_eq!(interval_sentence("C", "E", &classify("C", "E").unwrap()), "C → E is a Major Third");
        assert_eq!(interval_sentence("C", "F#", &classify("C", "F#").unwrap()), "C → F# is an Augmented Fourth");
        assert_eq!(
            interval_sentence("Cb", "G#", &classify("Cb", "G#").unwrap()),
            "Cb → G# is a Double-Augmented Fifth"
        );
    }

    #[test]
    fn test_invalid_messages() {
        let notes = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(invalid_notes_message(&notes(&["H"])), "\"H\" is not a valid note!");
        assert_eq!(invalid_notes_message(&notes(&["H", "X"])), "\"H\" and \"X\" are not valid notes!");
        assert_eq!(
            invalid_notes_message(&notes(&["H", "X", "Y"])),
            "\"H\", \"X\", and \"Y\" are not valid notes!"
        );
        assert_eq!(invalid_notes_message(&[]), "");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(error_message(&IntervalError::EmptyInput), EMPTY_INPUT_MESSAGE);
        assert_eq!(error_message(&IntervalError::MalformedInput("x".to_string())), TYPE_ERROR_MESSAGE);
        assert_eq!(error_message(&IntervalError::InvalidNote('H')), INTERNAL_ERROR_MESSAGE);
    }
}
