//! Calculator module for the four-function keypad calculator.
//!
//! This module provides functionality to:
//! - Run button presses through the arithmetic state machine
//! - Split compact key tapes into individual presses
//! - Format results for the display
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod error;
mod format;
mod input;
mod state;

pub use clipboard::copy_to_clipboard;
pub use detection::{looks_like_tape, split_keys};
pub use error::{ArithmeticError, KeyError};
pub use format::{ERROR_MARKER, format_value, parse_display};
pub use input::{Digit, Input, Operator};
pub use state::Calculator;
