//! Shared types for the WASM API
//!
//! This module contains the result type returned to the page for one
//! interval request.

use serde::{Deserialize, Serialize};

use crate::renderers::{AudioCue, StaffDescription};

/// Result of one interval request
///
/// Validation problems are not errors at this level: they come back with
/// `ok == false` and a message for the text panel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalReport {
    pub ok: bool,
    /// Sentence or validation message for the text panel
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,

    /// Bottom and top pitches in scientific pitch notation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spn: Option<[String; 2]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<StaffDescription>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<[AudioCue; 2]>,
}

impl IntervalReport {
    /// Report carrying only a user-facing message
    pub fn rejected(message: String) -> Self {
        Self {
            ok: false,
            message,
            interval_name: None,
            spn: None,
            staff: None,
            audio: None,
        }
    }
}
