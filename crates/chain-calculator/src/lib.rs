//! Chain Calculator - sequential four-function calculator core
//!
//! The engine behind a keypad calculator: it interprets discrete key
//! presses against a single display buffer, chains operators left to right,
//! formats results and keeps a short history of completed calculations.
//! Window layout, theming and event wiring belong to the front end, which
//! only forwards input and renders what it gets back.
//!
//! # Principles
//!
//! - **Error prevention**: inputs are an enumerated [`Token`], operators an
//!   enumerated [`Operator`], so typos cannot reach the arithmetic
//! - **Explicit failure**: division by zero is a [`CalcError`] variant, not
//!   a panic
//! - **No precedence**: `2 + 3 * 4 =` is `(2 + 3) * 4`
//!
//! # Example
//!
//! ```rust
//! use chain_calculator::prelude::*;
//!
//! let mut session = Session::new();
//! for label in ["5", "+", "3", "-", "2", "="] {
//!     session.press_label(label);
//! }
//!
//! let frame = session.frame();
//! assert_eq!(frame.display, "6");
//! assert_eq!(frame.history, vec!["8 - 2 = 6"]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod session;
pub mod token;

pub use crate::core::{CalcError, CalcResult, Operator};
pub use config::CalculatorConfig;
pub use session::{Frame, Session};
pub use token::Token;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{
        format, CalcError, CalcResult, Calculation, DisplayText, Engine, EngineState,
        HistoryEntry, Ledger, Operator, PendingOperation,
    };
    pub use crate::session::{Frame, Session};
    pub use crate::token::Token;
}
