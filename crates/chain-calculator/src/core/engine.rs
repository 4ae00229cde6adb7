//! Calculator engine: the display buffer and the pending operation
//!
//! The engine is a small state machine:
//!
//! ```text
//!            set_operator                 set_operator / digit / decimal
//!   Idle ─────────────────▶ OperandPending ◀──────────────┐
//!    ▲                         │     └────────────────────┘
//!    └──── calculate / clear ──┘
//! ```
//!
//! Chaining is left-associative but lazy on screen: in `5 + 3 -` the
//! pending `5 + 3` is folded into the new left operand (`8`), yet the display
//! keeps showing `3` until `=` is pressed. Only the breadcrumb reveals `8 -`.

use crate::config::CalculatorConfig;
use crate::core::format::{format, DisplayText};
use crate::core::{CalcError, CalcResult, Operator};
use serde::Serialize;
use tracing::{debug, warn};

/// Operation waiting for its right operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingOperation {
    /// Left operand captured when the operator was pressed
    pub left: f64,
    /// Operator to apply on evaluate
    pub operator: Operator,
}

impl PendingOperation {
    /// Breadcrumb text, e.g. `"5 +"`
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        format!("{} {}", format(self.left), self.operator)
    }
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineState {
    /// Nothing pending
    Idle,
    /// An operator was pressed and awaits evaluation
    OperandPending,
}

/// A completed calculation, handed back by [`Engine::calculate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Left operand as displayed
    pub left: DisplayText,
    /// Operator applied
    pub operator: Operator,
    /// Right operand as displayed
    pub right: DisplayText,
    /// Formatted result
    pub result: DisplayText,
}

impl Calculation {
    /// History line, e.g. `"5 + 3 = 8"`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// Sequential four-function calculator engine
#[derive(Debug, Clone)]
pub struct Engine {
    display: DisplayText,
    pending: Option<PendingOperation>,
    /// Next digit or decimal point starts a new operand
    fresh_operand: bool,
    reset_after_result: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an idle engine showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates an engine honouring the entry policy in `config`
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            display: DisplayText::zero(),
            pending: None,
            fresh_operand: false,
            reset_after_result: config.reset_after_result,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &DisplayText {
        &self.display
    }

    /// Pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.pending.is_some() {
            EngineState::OperandPending
        } else {
            EngineState::Idle
        }
    }

    /// Running `"operand op"` text for the pending operation
    #[must_use]
    pub fn breadcrumb(&self) -> Option<String> {
        self.pending.as_ref().map(PendingOperation::breadcrumb)
    }

    /// Resets the display to `"0"` and drops any pending operation
    pub fn clear(&mut self) -> &DisplayText {
        self.display = DisplayText::zero();
        self.pending = None;
        self.fresh_operand = false;
        debug!("engine cleared");
        &self.display
    }

    /// Enters a digit (0-9). Larger values are ignored.
    pub fn input_digit(&mut self, digit: u8) -> &DisplayText {
        if digit > 9 {
            debug!(digit, "ignoring out-of-range digit");
            return &self.display;
        }
        self.recover_from_error();

        if self.fresh_operand {
            self.display = DisplayText::digit(digit);
            self.fresh_operand = false;
        } else if self.display.is_zero() {
            if digit != 0 {
                self.display = DisplayText::digit(digit);
            }
        } else {
            self.display.push_digit(digit);
        }
        &self.display
    }

    /// Enters a decimal point; a second one in the same operand is a no-op
    pub fn input_decimal(&mut self) -> &DisplayText {
        self.recover_from_error();

        if self.fresh_operand {
            self.display = DisplayText::zero();
            self.display.push_decimal_point();
            self.fresh_operand = false;
        } else if !self.display.has_decimal_point() {
            self.display.push_decimal_point();
        }
        &self.display
    }

    /// Removes the last entered character of the operand being typed
    pub fn backspace(&mut self) -> &DisplayText {
        self.recover_from_error();

        if !self.fresh_operand {
            self.display.pop();
        }
        &self.display
    }

    /// Loads an earlier result as the current operand.
    ///
    /// The pending operation is kept, so a recalled value can serve as the
    /// right operand.
    pub fn recall(&mut self, value: DisplayText) -> &DisplayText {
        if value.is_error() {
            return &self.display;
        }
        self.recover_from_error();
        self.display = value;
        self.fresh_operand = true;
        &self.display
    }

    /// Selects an operator.
    ///
    /// The display is returned unchanged. With nothing pending the display
    /// becomes the left operand. With an operation pending and a right
    /// operand typed, the pending pair is folded into the new left operand;
    /// with no right operand typed yet only the operator is replaced.
    pub fn set_operator(&mut self, operator: Operator) -> CalcResult<&DisplayText> {
        self.recover_from_error();

        let left = match self.pending {
            None => self.display.value()?,
            Some(pending) if self.fresh_operand => {
                debug!(
                    from = %pending.operator,
                    to = %operator,
                    "replacing pending operator"
                );
                pending.left
            }
            Some(pending) => {
                let right = self.display.value()?;
                match pending.operator.apply(pending.left, right) {
                    Ok(value) if !value.is_finite() => {
                        warn!(
                            left = pending.left,
                            operator = %pending.operator,
                            right,
                            "chained operation out of range"
                        );
                        self.display = DisplayText::error();
                        self.pending = None;
                        self.fresh_operand = false;
                        return Ok(&self.display);
                    }
                    Ok(value) => {
                        debug!(
                            left = pending.left,
                            operator = %pending.operator,
                            right,
                            result = value,
                            "folded chained operation"
                        );
                        value
                    }
                    Err(err) => return Err(self.fail(err)),
                }
            }
        };

        self.pending = Some(PendingOperation { left, operator });
        self.fresh_operand = true;
        Ok(&self.display)
    }

    /// Evaluates the pending operation against the display.
    ///
    /// Returns `Ok(None)` and leaves everything untouched when nothing is
    /// pending.
    pub fn calculate(&mut self) -> CalcResult<Option<Calculation>> {
        self.recover_from_error();

        let Some(pending) = self.pending else {
            return Ok(None);
        };
        let right = self.display.value()?;
        let value = match pending.operator.apply(pending.left, right) {
            Ok(value) => value,
            Err(err) => return Err(self.fail(err)),
        };

        let calculation = Calculation {
            left: format(pending.left),
            operator: pending.operator,
            right: format(right),
            result: format(value),
        };
        debug!(
            left = pending.left,
            operator = %pending.operator,
            right,
            result = %calculation.result,
            "calculated"
        );

        self.display = calculation.result.clone();
        self.pending = None;
        self.fresh_operand = self.reset_after_result;
        Ok(Some(calculation))
    }

    fn fail(&mut self, err: CalcError) -> CalcError {
        warn!(error = %err, "calculation failed");
        self.display = DisplayText::error();
        self.pending = None;
        self.fresh_operand = false;
        err
    }

    /// Any action after the sentinel starts from a cleared engine
    fn recover_from_error(&mut self) {
        if self.display.is_error() {
            self.clear();
        }
    }
}
