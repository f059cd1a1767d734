//! The calculator's input state machine.

use tracing::{debug, trace};

use super::error::ArithmeticError;
use super::format::{ERROR_MARKER, format_value, parse_display};
use super::input::{Digit, Input, Operator};

/// State of a four-function calculator.
///
/// The calculator is either building up a number digit by digit, or it is
/// awaiting a new entry right after an operator or equals, in which case the
/// next digit replaces the display instead of extending it.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_new_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_new_entry: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on the display.
    pub fn current_display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand held for the pending operation.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Operation waiting for its right-hand operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Check if the next digit starts a fresh number.
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Check if the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Feed one input through the state machine.
    pub fn apply(&mut self, input: Input) -> Result<(), ArithmeticError> {
        trace!(?input, display = %self.display, "applying input");

        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.set_operator(op)?,
            Input::Equals => {
                self.calculate()?;
            }
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
        }

        Ok(())
    }

    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_new_entry {
            self.display = digit.to_string();
            self.awaiting_new_entry = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    pub fn input_decimal(&mut self) {
        if self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Choose the next operation.
    ///
    /// With an operation already pending and a fresh right-hand operand typed,
    /// the pending operation is evaluated first so that chains run left to
    /// right.
    pub fn set_operator(&mut self, op: Operator) -> Result<(), ArithmeticError> {
        match self.pending_operand {
            None => self.pending_operand = Some(parse_display(&self.display)),
            Some(_) if !self.awaiting_new_entry => {
                let result = self.evaluate()?;
                // The chained operand is whatever the display shows, not the
                // unrounded value.
                self.pending_operand = Some(parse_display(&result));
                self.display = result;
            }
            Some(_) => {}
        }

        debug!(operator = %op, operand = ?self.pending_operand, "operator set");
        self.pending_operator = Some(op);
        self.awaiting_new_entry = true;
        Ok(())
    }

    /// Evaluate the pending operation and show its result.
    ///
    /// Without a pending operation this leaves the state alone and returns the
    /// current display.
    pub fn calculate(&mut self) -> Result<String, ArithmeticError> {
        if self.pending_operator.is_none() || self.pending_operand.is_none() {
            return Ok(self.display.clone());
        }

        let result = self.evaluate()?;
        debug!(%result, "calculated");

        self.display = result.clone();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_new_entry = true;
        Ok(result)
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Remove the last character of the current entry.
    pub fn backspace(&mut self) {
        if self.is_error() {
            self.display = "0".to_string();
            self.awaiting_new_entry = false;
            return;
        }

        if self.awaiting_new_entry {
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Run the pending operation against the display.
    ///
    /// On failure every bit of pending state is dropped and the error marker
    /// takes over the display; the next digit starts over.
    fn evaluate(&mut self) -> Result<String, ArithmeticError> {
        let (Some(lhs), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return Ok(self.display.clone());
        };
        let rhs = parse_display(&self.display);

        match op.apply(lhs, rhs) {
            Ok(value) => Ok(format_value(value)),
            Err(err) => {
                debug!(%lhs, %op, %rhs, %err, "evaluation failed");
                self.clear();
                self.display = ERROR_MARKER.to_string();
                self.awaiting_new_entry = true;
                Err(err)
            }
        }
    }
}
