// ============================================================================
// Calculator Configuration
// Rounding, display and history settings
// ============================================================================

use crate::numeric::{
    NumberFormatter, DEFAULT_GROUP_SEPARATOR, DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_PRECISION,
    MAX_PRECISION,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most fractional digits an `f64` shortest representation can carry
const MAX_FRACTION_DIGITS: usize = 17;

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Fractional digits kept by arithmetic results
    pub precision: u32,

    /// Fractional digits shown before truncation
    pub max_fraction_digits: usize,

    /// Thousands separator for display
    pub group_separator: char,

    /// Optional: Maximum number of history entries to keep
    /// None means unlimited
    pub history_limit: Option<usize>,
}

impl CalculatorConfig {
    pub fn new(precision: u32, max_fraction_digits: usize, group_separator: char) -> Self {
        Self {
            precision,
            max_fraction_digits,
            group_separator,
            history_limit: None,
        }
    }

    /// Builder method: Set rounding precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set displayed fraction digit cap
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Set thousands separator
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Builder method: Set history limit
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Formatter matching the display settings
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.max_fraction_digits, self.group_separator)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!("Precision cannot exceed {}", MAX_PRECISION));
        }

        if self.max_fraction_digits == 0 || self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(format!(
                "Fraction digits must be between 1 and {}",
                MAX_FRACTION_DIGITS
            ));
        }

        if self.group_separator.is_ascii_digit()
            || self.group_separator == '.'
            || self.group_separator == '-'
        {
            return Err("Group separator cannot be a digit, '.' or '-'".to_string());
        }

        if self.history_limit == Some(0) {
            return Err("History limit must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRECISION,
            DEFAULT_MAX_FRACTION_DIGITS,
            DEFAULT_GROUP_SEPARATOR,
        )
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Standard desktop calculator
    /// - 10 digit rounding and display
    /// - Comma grouping, unlimited history
    pub fn standard() -> Self {
        Self::default()
    }

    /// Small-display calculator
    /// - 6 digit rounding and display
    /// - History capped at 20 entries
    pub fn compact() -> Self {
        Self::default()
            .with_precision(6)
            .with_max_fraction_digits(6)
            .with_history_limit(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.precision, 10);
        assert_eq!(config.max_fraction_digits, 10);
        assert_eq!(config.group_separator, ',');
        assert_eq!(config.history_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::standard()
            .with_precision(4)
            .with_group_separator('_')
            .with_history_limit(5);

        assert_eq!(config.precision, 4);
        assert_eq!(config.group_separator, '_');
        assert_eq!(config.history_limit, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::default().with_precision(16).validate().is_err());
        assert!(CalculatorConfig::default()
            .with_max_fraction_digits(0)
            .validate()
            .is_err());
        assert!(CalculatorConfig::default()
            .with_group_separator('.')
            .validate()
            .is_err());
        assert!(CalculatorConfig::default()
            .with_group_separator('7')
            .validate()
            .is_err());
        assert!(CalculatorConfig::default()
            .with_history_limit(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let compact = CalculatorConfig::compact();
        assert_eq!(compact.precision, 6);
        assert_eq!(compact.history_limit, Some(20));
        assert!(compact.validate().is_ok());

        assert_eq!(CalculatorConfig::standard(), CalculatorConfig::default());
    }

    #[test]
    fn test_formatter_follows_config() {
        let formatter = CalculatorConfig::default()
            .with_group_separator(' ')
            .with_max_fraction_digits(2)
            .formatter();
        assert_eq!(formatter.format(12345.6789), "12 345.67");
    }
}
