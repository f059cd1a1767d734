//! zcalc: a four-function keypad calculator.
//!
//! The [`calculator`] module holds the input state machine. [`keypad`] maps
//! buttons onto its inputs, [`display`] renders its output and [`session`]
//! ties the two together one press at a time.

pub mod calculator;
pub mod config;
pub mod display;
pub mod keypad;
pub mod session;

pub use calculator::{ArithmeticError, Calculator, Input, KeyError, Operator};
pub use config::Config;
pub use session::{Session, Step};
