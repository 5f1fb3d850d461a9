//! Interval operations for the WASM API
//!
//! JavaScript-facing entry points. The page calls `identifyInterval` on
//! button click and hands the report's staff and audio parts to VexFlow and
//! the Audio element; the other functions expose single engine steps.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, interval_error, serialize};
use crate::api::request::{check_notes, identify_interval};
use crate::models::interval::classify_notes;
use crate::models::spn::{audio_index, voice_notes, Spn};
use crate::models::Note;
use crate::parse::note::{parse_note, validate_note, validate_notes};
use crate::renderers::{interval_to_lilypond, interval_to_midi, IdentifierSettings};
use crate::{wasm_info, wasm_log};

/// Validated, voiced pair of notes for the export functions
fn voiced(bottom: &str, top: &str) -> Result<(Note, Note, Spn, Spn), JsValue> {
    let (bottom, top) = check_notes(bottom, top).map_err(interval_error)?;
    let bottom = parse_note(bottom).map_err(interval_error)?;
    let top = parse_note(top).map_err(interval_error)?;
    let (bottom_spn, top_spn) = voice_notes(&bottom, &top);
    Ok((bottom, top, bottom_spn, top_spn))
}

/// Identify the interval between two raw note inputs with default settings
///
/// # Returns
/// IntervalReport object: `{ ok, message, intervalName?, spn?, staff?, audio? }`
#[wasm_bindgen(js_name = identifyInterval)]
pub fn identify_interval_js(bottom: &str, top: &str) -> Result<JsValue, JsValue> {
    identify_with(bottom, top, &IdentifierSettings::default())
}

/// Identify the interval using page-supplied settings
///
/// Missing settings fields fall back to their defaults.
#[wasm_bindgen(js_name = identifyIntervalWithSettings)]
pub fn identify_interval_with_settings(bottom: &str, top: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: IdentifierSettings = if settings_js.is_undefined() || settings_js.is_null() {
        IdentifierSettings::default()
    } else {
        deserialize(settings_js, "Settings deserialization error")?
    };
    identify_with(bottom, top, &settings)
}

fn identify_with(bottom: &str, top: &str, settings: &IdentifierSettings) -> Result<JsValue, JsValue> {
    wasm_info!("identifyInterval called: bottom='{}', top='{}'", bottom, top);

    let report = identify_interval(bottom, top, settings).map_err(interval_error)?;
    wasm_log!("  {}", report.message);

    serialize(&report, "Report serialization error")
}

/// Validate a list of note strings
///
/// # Returns
/// `{ status: "allValid" }` or `{ status: "invalid", invalid: [...] }`;
/// throws a debug error when `notes` is not an array of strings
#[wasm_bindgen(js_name = validateNotes)]
pub fn validate_notes_js(notes: JsValue) -> Result<JsValue, JsValue> {
    let notes: Vec<String> = deserialize(notes, "validateNotes expects an array of strings")?;
    serialize(&validate_notes(&notes), "Validation serialization error")
}

/// Validate a single note string (empty counts as valid)
#[wasm_bindgen(js_name = validateNote)]
pub fn validate_note_js(note: &str) -> bool {
    validate_note(note)
}

/// Interval name for two notes, e.g. "Minor Third"
#[wasm_bindgen(js_name = intervalName)]
pub fn interval_name_js(bottom: &str, top: &str) -> Result<String, JsValue> {
    let (bottom, top, _, _) = voiced(bottom, top)?;
    let name = classify_notes(&bottom, &top).map_err(interval_error)?;
    Ok(name.to_string())
}

/// Closed-position SPN strings, e.g. ["G4", "C5"]
#[wasm_bindgen(js_name = intervalToSpns)]
pub fn interval_to_spns_js(bottom: &str, top: &str) -> Result<js_sys::Array, JsValue> {
    let (_, _, bottom_spn, top_spn) = voiced(bottom, top)?;

    let result = js_sys::Array::new();
    result.push(&JsValue::from_str(&bottom_spn.to_string()));
    result.push(&JsValue::from_str(&top_spn.to_string()));
    Ok(result)
}

/// Audio sample number for an SPN string (C4 = 0)
#[wasm_bindgen(js_name = spnAudioNumber)]
pub fn spn_audio_number_js(spn: &str) -> Result<i32, JsValue> {
    audio_index(spn.trim()).map(i32::from).map_err(interval_error)
}

/// Export the interval as a Standard MIDI File
///
/// # Returns
/// MIDI file bytes (Uint8Array)
#[wasm_bindgen(js_name = exportIntervalMidi)]
pub fn export_interval_midi(bottom: &str, top: &str) -> Result<Vec<u8>, JsValue> {
    wasm_info!("exportIntervalMidi called: bottom='{}', top='{}'", bottom, top);
    let (_, _, bottom_spn, top_spn) = voiced(bottom, top)?;

    let bytes = interval_to_midi(&bottom_spn, &top_spn, &IdentifierSettings::default())
        .map_err(interval_error)?;
    wasm_info!("  MIDI generated: {} bytes", bytes.len());
    Ok(bytes)
}

/// Export the interval as LilyPond source
#[wasm_bindgen(js_name = exportIntervalLilyPond)]
pub fn export_interval_lilypond(bottom: &str, top: &str) -> Result<String, JsValue> {
    wasm_info!("exportIntervalLilyPond called: bottom='{}', top='{}'", bottom, top);
    let (bottom, top, bottom_spn, top_spn) = voiced(bottom, top)?;

    let name = classify_notes(&bottom, &top).map_err(interval_error)?;
    interval_to_lilypond(&bottom_spn, &top_spn, Some(&name), &IdentifierSettings::default())
        .map_err(interval_error)
}
