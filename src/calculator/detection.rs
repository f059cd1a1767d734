//! Key tape detection and splitting.
//!
//! A key tape is a compact string of keypad labels, one per character, such
//! as `12+3=`. Word aliases like `DEL` are accepted when they make up a whole
//! argument.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::KeyError;
use super::input::Input;

lazy_static! {
    /// Matches strings made only of single-character keypad labels.
    /// Allows: digits, whitespace, operators, decimal point, equals, clear, backspace.
    static ref TAPE_CHARS: Regex = Regex::new(
        r"^[\d\s\.,\+\-−\*x×/÷=Cc⌫]+$"
    ).unwrap();
}

/// Check if input looks like a key tape.
///
/// This is a fast pre-check before actually splitting the tape.
pub fn looks_like_tape(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && TAPE_CHARS.is_match(trimmed)
}

/// Split a key tape or a single key label into inputs.
pub fn split_keys(tape: &str) -> Result<Vec<Input>, KeyError> {
    let trimmed = tape.trim();

    // A whole-word label such as `DEL` wins over splitting it into characters.
    if let Ok(input) = trimmed.parse::<Input>() {
        return Ok(vec![input]);
    }

    if !looks_like_tape(trimmed) {
        return Err(KeyError::UnknownKey(trimmed.to_string()));
    }

    trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operator};

    fn digit(d: u8) -> Input {
        Input::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn test_tapes_accepted() {
        assert!(looks_like_tape("12+3="));
        assert!(looks_like_tape(" 5 / 0 = "));
        assert!(looks_like_tape("1.5×2⌫C"));
    }

    #[test]
    fn test_invalid_tapes_rejected() {
        assert!(!looks_like_tape(""));
        assert!(!looks_like_tape("   "));
        assert!(!looks_like_tape("2^8"));
        assert!(!looks_like_tape("sin(0)"));
        assert!(!looks_like_tape("hello"));
    }

    #[test]
    fn test_split_tape() {
        assert_eq!(
            split_keys("12+3="),
            Ok(vec![
                digit(1),
                digit(2),
                Input::Operator(Operator::Add),
                digit(3),
                Input::Equals,
            ])
        );
    }

    #[test]
    fn test_split_ignores_whitespace() {
        assert_eq!(split_keys("1 . 5"), Ok(vec![digit(1), Input::Decimal, digit(5)]));
    }

    #[test]
    fn test_split_word_label() {
        assert_eq!(split_keys("DEL"), Ok(vec![Input::Backspace]));
        assert_eq!(split_keys(" C "), Ok(vec![Input::Clear]));
    }

    #[test]
    fn test_split_unknown() {
        assert_eq!(
            split_keys("2^8"),
            Err(KeyError::UnknownKey("2^8".to_string()))
        );
    }
}
