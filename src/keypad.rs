//! Keypad layout and button dispatch.
//!
//! The keypad is a 5x4 grid. `0` spans two columns and `=` spans two rows,
//! covering the bottom-right corner.

use crate::calculator::{Digit, Input, Operator};

/// Visual class of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Digits and the decimal point
    Digit,
    /// Arithmetic operators and equals
    Operator,
    /// The clear key
    Clear,
    /// Backspace
    Edit,
}

impl KeyKind {
    /// Get the style class name for this key kind.
    pub fn style_class(&self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Operator => "operator",
            Self::Clear => "clear",
            Self::Edit => "edit",
        }
    }

    /// Wrap a label in this kind's cell decoration.
    ///
    /// Operator, clear and edit keys are set apart from digits the way the
    /// keypad colors them differently.
    pub fn decorate(&self, label: &str) -> String {
        match self {
            Self::Digit => label.to_string(),
            Self::Operator => format!("({})", label),
            Self::Clear => format!("[{}]", label),
            Self::Edit => format!("<{}>", label),
        }
    }
}

/// Every key kind, in legend order.
pub const KEY_KINDS: [KeyKind; 4] = [
    KeyKind::Digit,
    KeyKind::Operator,
    KeyKind::Clear,
    KeyKind::Edit,
];

/// A key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub input: Input,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl Key {
    const fn new(label: &'static str, input: Input, row: usize, col: usize) -> Self {
        Self {
            label,
            input,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    const fn spanning(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    /// Get the visual class of this key.
    pub fn kind(&self) -> KeyKind {
        match self.input {
            Input::Digit(_) | Input::Decimal => KeyKind::Digit,
            Input::Operator(_) | Input::Equals => KeyKind::Operator,
            Input::Clear => KeyKind::Clear,
            Input::Backspace => KeyKind::Edit,
        }
    }

    /// Check if this key covers the grid cell at `row`, `col`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// Number of grid rows.
pub const ROWS: usize = 5;
/// Number of grid columns.
pub const COLS: usize = 4;

const fn digit(value: u8) -> Input {
    Input::Digit(Digit::from_const(value))
}

/// Every key of the keypad in row-major order.
pub static KEYPAD: [Key; 18] = [
    Key::new("C", Input::Clear, 0, 0),
    Key::new("⌫", Input::Backspace, 0, 1),
    Key::new("/", Input::Operator(Operator::Divide), 0, 2),
    Key::new("*", Input::Operator(Operator::Multiply), 0, 3),
    Key::new("7", digit(7), 1, 0),
    Key::new("8", digit(8), 1, 1),
    Key::new("9", digit(9), 1, 2),
    Key::new("-", Input::Operator(Operator::Subtract), 1, 3),
    Key::new("4", digit(4), 2, 0),
    Key::new("5", digit(5), 2, 1),
    Key::new("6", digit(6), 2, 2),
    Key::new("+", Input::Operator(Operator::Add), 2, 3),
    Key::new("1", digit(1), 3, 0),
    Key::new("2", digit(2), 3, 1),
    Key::new("3", digit(3), 3, 2),
    Key::new("=", Input::Equals, 3, 3).spanning(2, 1),
    Key::new("0", digit(0), 4, 0).spanning(1, 2),
    Key::new(".", Input::Decimal, 4, 2),
];

/// Find the key at a grid cell, including cells covered by a spanning key.
pub fn key_at(row: usize, col: usize) -> Option<&'static Key> {
    KEYPAD.iter().find(|key| key.covers(row, col))
}

/// Width of one rendered cell, borders excluded.
const CELL_WIDTH: usize = 5;

/// Render the keypad as a text grid.
///
/// Spanning keys are drawn once, centered across the cells they cover. Each
/// label is decorated by its key kind and a legend follows the grid.
pub fn render_layout() -> String {
    let mut out = String::new();
    let rule = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(COLS));

    for row in 0..ROWS {
        out.push_str(&rule);
        out.push('\n');
        out.push('|');

        let mut col = 0;
        while col < COLS {
            match key_at(row, col) {
                Some(key) => {
                    let span = key.col_span;
                    let width = CELL_WIDTH * span + (span - 1);
                    // Label only on the top row of a tall key.
                    let label = if key.row == row {
                        key.kind().decorate(key.label)
                    } else {
                        String::new()
                    };
                    out.push_str(&format!("{:^width$}|", label, width = width));
                    col += span;
                }
                None => {
                    out.push_str(&format!("{}|", " ".repeat(CELL_WIDTH)));
                    col += 1;
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');

    for kind in KEY_KINDS {
        out.push_str(&format!("{:>5}  {}\n", kind.decorate("x"), kind.style_class()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_covered_once() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let count = KEYPAD.iter().filter(|key| key.covers(row, col)).count();
                // Bottom-right is the lower half of `=`.
                assert_eq!(count, 1, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_labels_match_inputs() {
        for key in KEYPAD.iter() {
            assert_eq!(key.label.parse::<Input>(), Ok(key.input));
            assert_eq!(key.input.label(), key.label);
        }
    }

    #[test]
    fn test_spanning_keys() {
        assert_eq!(key_at(4, 1).map(|key| key.label), Some("0"));
        assert_eq!(key_at(4, 3).map(|key| key.label), Some("="));
        assert_eq!(key_at(3, 3).map(|key| key.label), Some("="));
    }

    #[test]
    fn test_key_kinds() {
        let kind_of = |label: &str| KEYPAD.iter().find(|key| key.label == label).map(Key::kind);
        assert_eq!(kind_of("="), Some(KeyKind::Operator));
        assert_eq!(kind_of("C"), Some(KeyKind::Clear));
        assert_eq!(kind_of("⌫"), Some(KeyKind::Edit));
        assert_eq!(kind_of("."), Some(KeyKind::Digit));
        assert_eq!(KeyKind::Operator.style_class(), "operator");
    }

    #[test]
    fn test_render_layout() {
        let layout = render_layout();
        let lines: Vec<&str> = layout.lines().collect();
        assert_eq!(lines.len(), ROWS * 2 + 1 + KEY_KINDS.len());
        for label in ["[C]", "<⌫>", "(/)", "(=)", " 7 ", " 0 ", " . "] {
            assert!(layout.contains(label), "missing {}", label);
        }
        assert_eq!(layout.matches('=').count(), 1);
    }

    #[test]
    fn test_render_layout_legend() {
        let layout = render_layout();
        for kind in KEY_KINDS {
            assert!(layout.contains(kind.style_class()), "missing {:?}", kind);
        }
        assert!(layout.contains("(x)  operator"));
        assert!(layout.contains("[x]  clear"));
    }
}
