//! Display text and result formatting
//!
//! [`DisplayText`] is the one buffer a front end shows. It always holds a
//! plain decimal literal (`-?digits[.digits]`) or the `"Error"` sentinel,
//! and [`format`] is the only way a computed `f64` gets into it.

use crate::core::{CalcError, CalcResult};
use serde::Serialize;
use std::str::FromStr;

/// Text currently shown on the calculator display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayText(String);

impl Default for DisplayText {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayText {
    /// Sentinel shown after a failed calculation
    pub const ERROR: &'static str = "Error";

    /// The reset display, `"0"`
    #[must_use]
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// The error sentinel
    #[must_use]
    pub fn error() -> Self {
        Self(Self::ERROR.to_string())
    }

    /// Display holding a single digit
    pub(crate) fn digit(d: u8) -> Self {
        Self(char::from(b'0' + d).to_string())
    }

    /// Returns the display as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the `"Error"` sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0 == Self::ERROR
    }

    /// Returns true if the display is exactly `"0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Returns true if the operand already has a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Parses the display as an operand
    pub fn value(&self) -> CalcResult<f64> {
        if self.is_error() {
            return Err(CalcError::MalformedOperand(self.0.clone()));
        }
        self.0
            .parse::<f64>()
            .map_err(|_| CalcError::MalformedOperand(self.0.clone()))
    }

    pub(crate) fn push_digit(&mut self, d: u8) {
        self.0.push(char::from(b'0' + d));
    }

    pub(crate) fn push_decimal_point(&mut self) {
        self.0.push('.');
    }

    /// Drops the last character, falling back to `"0"` when nothing numeric
    /// is left or only a signed zero remains.
    pub(crate) fn pop(&mut self) {
        self.0.pop();
        if matches!(self.0.as_str(), "" | "-" | "-0") {
            *self = Self::zero();
        }
    }

    fn is_decimal_literal(s: &str) -> bool {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let (int, frac) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (unsigned, ""),
        };
        !int.is_empty()
            && int.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for DisplayText {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ERROR || Self::is_decimal_literal(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CalcError::MalformedOperand(s.to_string()))
        }
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DisplayText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DisplayText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Formats a numeric result for the display.
///
/// Integral values have no fractional part (`6`, not `6.0`); everything else
/// uses the shortest decimal that parses back to the same `f64`. Negative
/// zero shows as `"0"`. Non-finite values become the `"Error"` sentinel.
#[must_use]
pub fn format(result: f64) -> DisplayText {
    if !result.is_finite() {
        return DisplayText::error();
    }
    if result == 0.0 {
        return DisplayText::zero();
    }
    DisplayText(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== format tests =====

    #[test]
    fn test_format_integral() {
        assert_eq!(format(6.0), "6");
        assert_eq!(format(-42.0), "-42");
        assert_eq!(format(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format(0.5), "0.5");
        assert_eq!(format(-2.25), "-2.25");
        assert_eq!(format(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_tiny_has_no_exponent() {
        assert_eq!(format(1e-7), "0.0000001");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format(-0.0), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert!(format(f64::INFINITY).is_error());
        assert!(format(f64::NEG_INFINITY).is_error());
        assert!(format(f64::NAN).is_error());
    }

    // ===== DisplayText tests =====

    #[test]
    fn test_display_default_is_zero() {
        let display = DisplayText::default();
        assert!(display.is_zero());
        assert!(!display.has_decimal_point());
    }

    #[test]
    fn test_display_value() {
        let display: DisplayText = "12.5".parse().unwrap();
        assert_eq!(display.value(), Ok(12.5));
    }

    #[test]
    fn test_display_value_trailing_point() {
        let display: DisplayText = "5.".parse().unwrap();
        assert_eq!(display.value(), Ok(5.0));
    }

    #[test]
    fn test_display_value_of_error_sentinel() {
        assert_eq!(
            DisplayText::error().value(),
            Err(CalcError::MalformedOperand("Error".into()))
        );
    }

    #[test]
    fn test_display_from_str_accepts_literals() {
        for s in ["0", "7", "-3", "0.", "3.14", "-0.5", "Error"] {
            assert!(s.parse::<DisplayText>().is_ok(), "{s} should parse");
        }
    }

    #[test]
    fn test_display_from_str_rejects_garbage() {
        for s in ["", ".", "-", "1.2.3", "+5", "1e5", "inf", "NaN", "5-"] {
            assert!(s.parse::<DisplayText>().is_err(), "{s} should not parse");
        }
    }

    #[test]
    fn test_display_push_and_pop() {
        let mut display = DisplayText::digit(1);
        display.push_digit(2);
        display.push_decimal_point();
        display.push_digit(5);
        assert_eq!(display, "12.5");
        display.pop();
        display.pop();
        assert_eq!(display, "12");
        display.pop();
        display.pop();
        assert!(display.is_zero());
    }

    #[test]
    fn test_display_pop_negative_single_digit() {
        let mut display = format(-7.0);
        display.pop();
        assert!(display.is_zero());
    }

    #[test]
    fn test_display_pop_to_signed_zero() {
        let mut display = format(-0.5);
        display.pop();
        assert_eq!(display, "-0.");
        display.pop();
        assert!(display.is_zero());
    }

    #[test]
    fn test_display_serializes_as_string() {
        let json = serde_json::to_string(&format(2.5)).unwrap();
        assert_eq!(json, "\"2.5\"");
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_format_round_trips(x in any::<f64>()) {
            prop_assume!(x.is_finite());
            let shown = format(x);
            let reparsed = format(shown.value().unwrap());
            prop_assert_eq!(reparsed, shown);
        }

        #[test]
        fn prop_format_is_valid_display(x in any::<f64>()) {
            let shown = format(x);
            prop_assert!(shown.as_str().parse::<DisplayText>().is_ok());
        }

        #[test]
        fn prop_integral_has_no_point(n in -1_000_000_000i64..1_000_000_000i64) {
            let shown = format(n as f64);
            prop_assert!(!shown.has_decimal_point());
            prop_assert_eq!(shown.as_str(), n.to_string());
        }
    }
}
