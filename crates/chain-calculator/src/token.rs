//! Input tokens
//!
//! Every button press or typed key a front end receives is translated into
//! one [`Token`]. Anything that does not map to a token is dropped before it
//! reaches the engine.

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// One discrete calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A digit. Only 0-9 come out of the label and key mappings; larger
    /// values are ignored by the engine.
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the display and pending operation
    Clear,
    /// Remove the last typed character
    Backspace,
}

impl Token {
    /// The full keypad in layout order
    #[must_use]
    pub fn keypad() -> Vec<Self> {
        let mut tokens: Vec<Self> = (0..=9).map(Self::Digit).collect();
        tokens.push(Self::Decimal);
        tokens.extend(Operator::ALL.map(Self::Operator));
        tokens.extend([Self::Equals, Self::Clear, Self::Backspace]);
        tokens
    }

    /// Parses a button label (`"7"`, `"."`, `"+"`, `"C"`, `"="`, `"⌫"`)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c {
                '0'..='9' => Self::digit_from_char(c),
                '.' => Some(Self::Decimal),
                '=' => Some(Self::Equals),
                'C' => Some(Self::Clear),
                '⌫' => Some(Self::Backspace),
                _ => Operator::from_char(c).map(Self::Operator),
            },
            _ => None,
        }
    }

    /// Maps a typed key to a token.
    ///
    /// Enter evaluates, `c`/`C` clears, and backspace/delete erase.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => Self::digit_from_char(key),
            '.' => Some(Self::Decimal),
            '=' | '\r' | '\n' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => Operator::from_char(key).map(Self::Operator),
        }
    }

    /// Button label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    fn digit_from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }
}
