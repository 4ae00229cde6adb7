//! Calculator core: engine, operators, display formatting and history
//!
//! Everything in here is synchronous and UI-agnostic. A front end drives it
//! one input event at a time, usually through [`crate::session::Session`].

pub mod engine;
pub mod format;
pub mod history;
mod operator;

pub use engine::{Calculation, Engine, EngineState, PendingOperation};
pub use format::{format, DisplayText};
pub use history::{HistoryEntry, Ledger};
pub use operator::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a right operand of exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// The display did not hold a parseable number.
    ///
    /// Only reachable if a display was built outside the engine's own
    /// operations.
    #[error("Malformed operand: {0:?}")]
    MalformedOperand(String),
}

impl CalcError {
    /// Short caption a front end shows under the `"Error"` sentinel
    #[must_use]
    pub fn caption(&self) -> String {
        self.to_string()
    }
}
