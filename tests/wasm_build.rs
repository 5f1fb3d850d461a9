//! WASM build test
//!
//! Exercises the JavaScript-facing exports in a browser.

use interval_wasm::api::*;
use interval_wasm::NoteValidation;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_identify_interval() {
    let report = identify_interval_js("C", "E").unwrap();
    let report: IntervalReport = serde_wasm_bindgen::from_value(report).unwrap();
    assert!(report.ok);
    assert_eq!(report.message, "C → E is a Major Third");
}

#[wasm_bindgen_test]
fn test_identify_interval_rejects_invalid() {
    let report = identify_interval_js("H", "").unwrap();
    let report: IntervalReport = serde_wasm_bindgen::from_value(report).unwrap();
    assert!(!report.ok);
    assert_eq!(report.message, "\"H\" is not a valid note!");
}

#[wasm_bindgen_test]
fn test_validate_notes_type_error() {
    let result = validate_notes_js(JsValue::from_f64(3.0));
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().as_string().unwrap(), "[DEBUG] A type error has occurred.");
}

#[wasm_bindgen_test]
fn test_validate_notes_non_string_element() {
    let notes = js_sys::Array::new();
    notes.push(&JsValue::from_str("C"));
    notes.push(&JsValue::from_f64(1.0));

    let result = validate_notes_js(notes.into());
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().as_string().unwrap(), "[DEBUG] A type error has occurred.");
}

#[wasm_bindgen_test]
fn test_validate_notes_string_array() {
    let notes = js_sys::Array::new();
    notes.push(&JsValue::from_str("C"));
    notes.push(&JsValue::from_str("H"));

    let result: NoteValidation = serde_wasm_bindgen::from_value(validate_notes_js(notes.into()).unwrap()).unwrap();
    assert_eq!(result, NoteValidation::Invalid(vec!["H".to_string()]));
}

#[wasm_bindgen_test]
fn test_spn_functions() {
    let spns = interval_to_spns_js("G", "C").unwrap();
    assert_eq!(spns.get(0).as_string().unwrap(), "G4");
    assert_eq!(spns.get(1).as_string().unwrap(), "C5");
    assert_eq!(spn_audio_number_js("G3").unwrap(), -5);
}

#[wasm_bindgen_test]
fn test_exports() {
    assert_eq!(interval_name_js("C", "Fb").unwrap(), "Diminished Fourth");
    assert!(export_interval_midi("C", "G").unwrap().starts_with(b"MThd"));
    assert!(export_interval_lilypond("C", "G").unwrap().contains("<c' g'>1"));
    assert!(export_interval_midi("C", "").is_err());
}
