//! Staff description for the VexFlow renderer
//!
//! The browser draws the staff with VexFlow's EasyScore API; this module
//! only produces the values it needs.

use serde::{Deserialize, Serialize};

use super::settings::IdentifierSettings;
use crate::models::Spn;

/// Everything the JavaScript side needs to draw the interval on one staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDescription {
    /// EasyScore chord notation, e.g. "(C4 G4)/1"
    pub chord: String,
    pub clef: String,
    pub stem: String,
    pub width: u32,
    pub height: u32,
    pub svg_width: u32,
}

/// EasyScore chord for two pitches as a whole note
pub fn easyscore_chord(bottom: &Spn, top: &Spn) -> String {
    format!("({} {})/1", bottom, top)
}

pub fn staff_description(bottom: &Spn, top: &Spn, settings: &IdentifierSettings) -> StaffDescription {
    StaffDescription {
        chord: easyscore_chord(bottom, top),
        clef: "treble".to_string(),
        stem: "up".to_string(),
        width: settings.staff_width,
        height: settings.staff_height,
        svg_width: settings.svg_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easyscore_chord() {
        let chord = easyscore_chord(&"C4".parse().unwrap(), &"G4".parse().unwrap());
        assert_eq!(chord, "(C4 G4)/1");
    }

    #[test]
    fn test_description_uses_settings() {
        let description = staff_description(
            &"F##4".parse().unwrap(),
            &"A4".parse().unwrap(),
            &IdentifierSettings::default(),
        );
        assert_eq!(description.chord, "(F##4 A4)/1");
        assert_eq!(description.clef, "treble");
        assert_eq!((description.width, description.height, description.svg_width), (100, 150, 250));
    }
}
