//! Interval Identifier WASM API
//!
//! This module provides the JavaScript-facing API for the interval
//! identifier page.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `types`: The report returned for one request
//! - `request`: Request policy (trim, validate, require two notes); plain Rust
//! - `interval`: `#[wasm_bindgen]` exports

pub mod helpers;
pub mod interval;
pub mod request;
pub mod types;

pub use interval::*;
pub use request::{identify_interval, identify_tokens};
pub use types::IntervalReport;
