//! LilyPond export
//!
//! Engraves the interval as a two-note chord on a treble staff.

pub mod notation;
pub mod templates;

pub use notation::*;
pub use templates::*;

use crate::errors::Result;
use crate::models::{IntervalName, Spn};
use crate::renderers::settings::IdentifierSettings;

/// LilyPond source for an interval, titled with its name
pub fn interval_to_lilypond(
    bottom: &Spn,
    top: &Spn,
    name: Option<&IntervalName>,
    settings: &IdentifierSettings,
) -> Result<String> {
    let context = TemplateContext::new(settings.lilypond_version.clone(), lilypond_chord(bottom, top))
        .title(name.map(|n| n.to_string()));
    render_lilypond(&context)
}
