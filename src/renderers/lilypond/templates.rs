//! LilyPond template rendering
//!
//! Mustache template for a single treble staff holding the interval chord.

use serde::Serialize;

use crate::errors::{IntervalError, Result};

const INTERVAL_TEMPLATE: &str = include_str!("templates/interval.ly.mustache");

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// LilyPond version (e.g., "2.24.0")
    pub version: String,

    /// Title shown above the staff (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Chord in LilyPond syntax, e.g. "<c' g'>1"
    pub chord: String,
}

impl TemplateContext {
    pub fn new(version: String, chord: String) -> Self {
        Self {
            version,
            title: None,
            chord,
        }
    }

    /// Set the title (accepts Option or String)
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

/// Render a LilyPond document for an interval
pub fn render_lilypond(context: &TemplateContext) -> Result<String> {
    let template = mustache::compile_str(INTERVAL_TEMPLATE)
        .map_err(|e| IntervalError::Render(format!("LilyPond template error: {}", e)))?;
    template
        .render_to_string(context)
        .map_err(|e| IntervalError::Render(format!("LilyPond render error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_title() {
        let context = TemplateContext::new("2.24.0".to_string(), "<c' g'>1".to_string());
        let rendered = render_lilypond(&context).unwrap();
        assert!(rendered.contains("\\version \"2.24.0\""));
        assert!(rendered.contains("<c' g'>1"));
        assert!(!rendered.contains("\\header"));
    }

    #[test]
    fn test_render_with_title() {
        let context = TemplateContext::new("2.24.0".to_string(), "<g' c''>1".to_string())
            .title(Some("Perfect Fourth".to_string()));
        let rendered = render_lilypond(&context).unwrap();
        assert!(rendered.contains("title = \"Perfect Fourth\""));
        assert!(rendered.contains("<g' c''>1"));
    }
}
