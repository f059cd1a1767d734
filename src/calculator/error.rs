//! Errors raised by the calculator and its key parser.

use thiserror::Error;

/// Failure while evaluating a pending operation.
///
/// Whenever one of these is returned the calculator has already discarded
/// its pending state and shows the error marker.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Result does not fit in a finite `f64`.
    #[error("Result is out of range")]
    Overflow,
}

/// Failure while turning a key label into an input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("not a decimal digit: {0:?}")]
    InvalidDigit(char),
}
