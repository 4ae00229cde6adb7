//! Session: the contract a front end drives
//!
//! A front end owns one [`Session`], feeds it one input at a time and renders
//! the [`Frame`] it gets back. The session keeps the engine and the ledger
//! in step, turns errors into the `"Error"` sentinel plus a caption, and
//! drops input it does not recognise.

use crate::config::CalculatorConfig;
use crate::core::{CalcResult, Calculation, Engine, Ledger};
use crate::token::Token;
use serde::Serialize;
use tracing::{debug, trace};

/// Everything a front end needs to render after one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Main display text
    pub display: String,
    /// Pending `"operand op"` text, empty when idle
    pub breadcrumb: String,
    /// Explanation under an `"Error"` display, empty otherwise
    pub caption: String,
    /// Completed calculations, newest first
    pub history: Vec<String>,
}

impl Frame {
    /// Serializes the frame for web front ends
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Calculator session: one engine plus its history
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    ledger: Ledger,
    caption: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a session from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ledger: Ledger::with_capacity(config.history_capacity),
            caption: None,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the history ledger
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Applies one token
    pub fn press(&mut self, token: Token) -> Frame {
        trace!(?token, "dispatch");
        self.caption = None;

        let outcome = match token {
            Token::Digit(d) => {
                self.engine.input_digit(d);
                Ok(())
            }
            Token::Decimal => {
                self.engine.input_decimal();
                Ok(())
            }
            Token::Operator(op) => self.engine.set_operator(op).map(|_| ()),
            Token::Equals => self.evaluate(),
            Token::Clear => {
                self.engine.clear();
                Ok(())
            }
            Token::Backspace => {
                self.engine.backspace();
                Ok(())
            }
        };

        if let Err(err) = outcome {
            self.caption = Some(err.caption());
        }
        self.frame()
    }

    /// Applies a button label; unknown labels leave the state untouched
    pub fn press_label(&mut self, label: &str) -> Frame {
        match Token::from_label(label) {
            Some(token) => self.press(token),
            None => {
                debug!(label, "ignoring unknown button label");
                self.frame()
            }
        }
    }

    /// Applies a typed key; unmapped keys leave the state untouched
    pub fn press_key(&mut self, key: char) -> Frame {
        match Token::from_key(key) {
            Some(token) => self.press(token),
            None => {
                debug!(?key, "ignoring unmapped key");
                self.frame()
            }
        }
    }

    /// Loads the result of history entry `index` (0 = newest) onto the
    /// display. Out-of-range indexes are ignored.
    pub fn recall(&mut self, index: usize) -> Frame {
        if let Some(entry) = self.ledger.get(index) {
            self.caption = None;
            self.engine.recall(entry.result.clone());
        }
        self.frame()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            display: self.engine.display().to_string(),
            breadcrumb: self.engine.breadcrumb().unwrap_or_default(),
            caption: self.caption.clone().unwrap_or_default(),
            history: self.ledger.entries(),
        }
    }

    fn evaluate(&mut self) -> CalcResult<()> {
        if let Some(calculation) = self.engine.calculate()? {
            self.record(&calculation);
        }
        Ok(())
    }

    fn record(&mut self, calculation: &Calculation) {
        if calculation.result.is_error() {
            debug!(
                calculation = %calculation.summary(),
                "result out of range, not recorded"
            );
            return;
        }
        self.ledger.record(
            calculation.left.as_str(),
            calculation.operator,
            calculation.right.as_str(),
            calculation.result.clone(),
        );
    }
}
