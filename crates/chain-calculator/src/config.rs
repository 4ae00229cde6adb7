//! Calculator configuration

use crate::core::Ledger;
use serde::{Deserialize, Serialize};

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Number of completed calculations kept in the history ledger
    pub history_capacity: usize,
    /// Digits typed right after `=` start a new number instead of
    /// extending the result
    pub reset_after_result: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: Ledger::DEFAULT_CAPACITY,
            reset_after_result: true,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the post-result entry policy
    #[must_use]
    pub const fn with_reset_after_result(mut self, reset: bool) -> Self {
        self.reset_after_result = reset;
        self
    }

    /// Parses a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.history_capacity, 5);
        assert!(config.reset_after_result);
        assert_eq!(config, CalculatorConfig::new());
    }

    #[test]
    fn test_config_builders() {
        let config = CalculatorConfig::new()
            .with_history_capacity(10)
            .with_reset_after_result(false);
        assert_eq!(config.history_capacity, 10);
        assert!(!config.reset_after_result);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = CalculatorConfig::from_json(r#"{"history_capacity": 3}"#).unwrap();
        assert_eq!(config.history_capacity, 3);
        assert!(config.reset_after_result);
    }

    #[test]
    fn test_config_from_json_empty_object() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_config_from_json_invalid() {
        assert!(CalculatorConfig::from_json("not json").is_err());
        assert!(CalculatorConfig::from_json(r#"{"history_capacity": -1}"#).is_err());
    }

    #[test]
    fn test_config_serialize_round_trip() {
        let config = CalculatorConfig::new().with_history_capacity(8);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }
}
