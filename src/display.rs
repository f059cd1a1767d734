//! Display rendering.

use crate::config::DisplayConfig;

/// Renders the calculator display as a framed, right-aligned text field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRenderer {
    max_length: usize,
    width: usize,
}

impl DisplayRenderer {
    pub fn new(max_length: usize, width: usize) -> Self {
        Self {
            max_length: max_length.max(1),
            // The field is never narrower than the text it may hold.
            width: width.max(max_length),
        }
    }

    /// Cut the display down to the field's maximum length.
    pub fn visible_text<'a>(&self, display: &'a str) -> &'a str {
        match display.char_indices().nth(self.max_length) {
            Some((end, _)) => &display[..end],
            None => display,
        }
    }

    /// Render the display as a single framed line.
    pub fn render(&self, display: &str) -> String {
        format!(
            "[ {:>width$} ]",
            self.visible_text(display),
            width = self.width
        )
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        DisplayConfig::default().into()
    }
}

impl From<DisplayConfig> for DisplayRenderer {
    fn from(config: DisplayConfig) -> Self {
        Self::new(config.max_length, config.width)
    }
}
