//! Interval request handling
//!
//! The policy layer between raw text input and the engine: trim, validate,
//! require both notes, then classify and voice. Validation failures become a
//! rejected report; internal errors are returned as `Err`.

use crate::errors::{IntervalError, Result};
use crate::models::interval::classify_notes;
use crate::models::spn::voice_notes;
use crate::parse::note::{parse_note, validate_notes, NoteValidation};
use crate::renderers::{
    audio_cues, error_message, interval_sentence, staff_description, IdentifierSettings,
};

use super::types::IntervalReport;

/// Check two raw tokens, returning the trimmed pair when both are usable notes
///
/// Invalid notes take priority over empty input.
pub fn check_notes<'a>(bottom: &'a str, top: &'a str) -> Result<(&'a str, &'a str)> {
    let bottom = bottom.trim();
    let top = top.trim();

    if let NoteValidation::Invalid(invalid) = validate_notes(&[bottom, top]) {
        return Err(IntervalError::InvalidNotes(invalid));
    }
    if bottom.is_empty() || top.is_empty() {
        return Err(IntervalError::EmptyInput);
    }

    Ok((bottom, top))
}

/// Identify the interval between two raw tokens
pub fn identify_interval(bottom: &str, top: &str, settings: &IdentifierSettings) -> Result<IntervalReport> {
    let (bottom, top) = match check_notes(bottom, top) {
        Ok(pair) => pair,
        Err(e) if e.is_user_facing() => {
            log::debug!("Rejected interval request: {}", e);
            return Ok(IntervalReport::rejected(error_message(&e)));
        }
        Err(e) => return Err(e),
    };

    let bottom_note = parse_note(bottom)?;
    let top_note = parse_note(top)?;

    let name = classify_notes(&bottom_note, &top_note)?;
    let (bottom_spn, top_spn) = voice_notes(&bottom_note, &top_note);
    log::info!("{} -> {}: {} ({} {})", bottom, top, name, bottom_spn, top_spn);

    Ok(IntervalReport {
        ok: true,
        message: interval_sentence(bottom, top, &name),
        interval_name: Some(name.to_string()),
        spn: Some([bottom_spn.to_string(), top_spn.to_string()]),
        staff: Some(staff_description(&bottom_spn, &top_spn, settings)),
        audio: Some(audio_cues(&bottom_spn, &top_spn, settings)),
    })
}

/// Identify the interval for a list of tokens, which must hold exactly two
pub fn identify_tokens<S: AsRef<str>>(tokens: &[S], settings: &IdentifierSettings) -> Result<IntervalReport> {
    match tokens {
        [bottom, top] => identify_interval(bottom.as_ref(), top.as_ref(), settings),
        _ => Err(IntervalError::MalformedInput(format!(
            "expected 2 notes, got {}",
            tokens.len()
        ))),
    }
}
