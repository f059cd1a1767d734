//! Input vocabulary of the calculator.
//!
//! Every button press is turned into one [`Input`] before it reaches the
//! state machine, so the state machine never sees raw labels.

use std::fmt;
use std::str::FromStr;

use super::error::{ArithmeticError, KeyError};

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Const constructor for fixed tables. Panics at compile time above 9.
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= 9, "digit out of range");
        Self(value)
    }

    /// The digit as an ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(KeyError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary operation waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the keypad.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero and non-finite results are errors; everything else is
    /// plain `f64` arithmetic.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ArithmeticError::Overflow)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Input {
    /// Canonical keypad label for this input.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Input {
    type Err = KeyError;

    /// Parse a keypad label, including a few common aliases.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let input = match label {
            "." | "," => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "x" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "C" | "c" => Self::Clear,
            "⌫" | "DEL" | "del" | "BS" => Self::Backspace,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(Digit::try_from(c)?),
                    _ => return Err(KeyError::UnknownKey(label.to_string())),
                }
            }
        };

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(7).map(Digit::as_char), Some('7'));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::try_from('a'), Err(KeyError::InvalidDigit('a')));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("5".parse::<Input>(), Ok(Input::Digit(Digit(5))));
        assert_eq!(".".parse::<Input>(), Ok(Input::Decimal));
        assert_eq!("÷".parse::<Input>(), Ok(Input::Operator(Operator::Divide)));
        assert_eq!("×".parse::<Input>(), Ok(Input::Operator(Operator::Multiply)));
        assert_eq!("DEL".parse::<Input>(), Ok(Input::Backspace));
        assert_eq!("c".parse::<Input>(), Ok(Input::Clear));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(
            "42".parse::<Input>(),
            Err(KeyError::UnknownKey("42".to_string()))
        );
        assert!("%".parse::<Input>().is_err());
        assert!("".parse::<Input>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["0", "9", ".", "+", "-", "*", "/", "=", "C", "⌫"] {
            let input: Input = label.parse().unwrap();
            assert_eq!(input.label(), label);
        }
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_operator_errors() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 10.0),
            Err(ArithmeticError::Overflow)
        );
    }
}
