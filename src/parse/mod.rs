//! Parsing module for the interval engine
//!
//! This module contains the note token validation that runs before
//! any pitch arithmetic.

pub mod note;

// Re-export commonly used types
pub use note::*;
