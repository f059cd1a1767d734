//! A calculator session: one calculator, one display, one press at a time.

use serde::Serialize;
use tracing::{debug, warn};

use crate::calculator::{Calculator, Input};
use crate::config::Config;
use crate::display::DisplayRenderer;

/// Record of a single button press.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label of the key that was pressed.
    pub key: String,
    /// Display text after the press.
    pub display: String,
    /// Error message if the press failed an arithmetic operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Step {
    /// Check if this press ended in an arithmetic error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Owns the calculator state and re-renders after every press.
#[derive(Clone, Debug, Default)]
pub struct Session {
    calculator: Calculator,
    renderer: DisplayRenderer,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::new(),
            renderer: config.display.clone().into(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Apply one press. Arithmetic failures are recorded, not propagated; the
    /// calculator has already reset itself by then.
    pub fn press(&mut self, input: Input) -> Step {
        let error = match self.calculator.apply(input) {
            Ok(()) => None,
            Err(err) => {
                warn!(key = %input, %err, "arithmetic error");
                Some(err.to_string())
            }
        };

        let shown = self.calculator.current_display().to_string();
        debug!(key = %input, %shown, "pressed");

        Step {
            key: input.label(),
            display: shown,
            error,
        }
    }

    /// Apply a sequence of presses in order.
    pub fn run(&mut self, inputs: impl IntoIterator<Item = Input>) -> Vec<Step> {
        inputs.into_iter().map(|input| self.press(input)).collect()
    }

    /// Render the current display.
    pub fn render(&self) -> String {
        self.renderer.render(self.calculator.current_display())
    }

    /// Render the display as it stood after a given step.
    pub fn render_step(&self, step: &Step) -> String {
        self.renderer.render(&step.display)
    }
}
