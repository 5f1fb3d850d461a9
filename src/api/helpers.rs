//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization, deserialization
//! and error reporting across the API functions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::IntervalError;
use crate::renderers::error_message;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&format!("[WASM] {}", msg).into());
}

pub fn log_info(msg: &str) {
    web_sys::console::info_1(&format!("[WASM] {}", msg).into());
}

pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&format!("[WASM] ⚠️ {}", msg).into());
}

pub fn log_error(msg: &str) {
    web_sys::console::error_1(&format!("[WASM] ❌ {}", msg).into());
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript; a shape mismatch is malformed input
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        interval_error(IntervalError::MalformedInput(format!("{}: {}", error_context, e)))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an engine error to a JsValue carrying its display message
///
/// User-facing errors are logged as warnings; everything else is logged
/// with full detail at error level since it means a broken caller.
pub fn interval_error(error: IntervalError) -> JsValue {
    if error.is_user_facing() {
        log_warn(&error.to_string());
    } else {
        log_error(&error.to_string());
    }
    JsValue::from_str(&error_message(&error))
}
