// ============================================================================
// Calculator State
// Immutable snapshot threaded through every key press
// ============================================================================

use super::history::HistoryEntry;
use super::operator::BinaryOperator;
use crate::numeric::{parse_operand, CalcError, CalcResult, NumberFormatter, ERROR_SENTINEL};

/// What the presentation layer shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Main result line
    pub result: String,
    /// Secondary line: pending expression or error message
    pub expression: String,
}

/// Calculator state snapshot.
///
/// Every transition consumes the snapshot and returns the next one, so there
/// is never more than one owner of the state.
///
/// ```text
/// "2"  →  "+"  →  "3"  →  "="
/// current: 2     2        3        5
/// previous: -    2        2        -
/// operator: -    +        +        -
/// reset:    no   yes      no       yes
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Entry text being typed or the last result
    pub(crate) current: String,
    /// Left operand waiting for the pending operator
    pub(crate) previous: Option<f64>,
    pub(crate) operator: Option<BinaryOperator>,
    /// Next digit starts a fresh entry
    pub(crate) reset_on_input: bool,
    pub(crate) error: Option<CalcError>,
    pub(crate) history: Vec<HistoryEntry>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            reset_on_input: false,
            error: None,
            history: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Entry parsed as a number
    pub fn current_value(&self) -> CalcResult<f64> {
        parse_operand(&self.current)
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.operator
    }

    pub fn reset_on_input(&self) -> bool {
        self.reset_on_input
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Render both display lines
    pub fn display(&self, formatter: &NumberFormatter) -> DisplaySnapshot {
        if let Some(error) = self.error {
            return DisplaySnapshot {
                result: ERROR_SENTINEL.to_string(),
                expression: error.to_string(),
            };
        }

        let result = match self.current_value() {
            Ok(value) => formatter.format(value),
            Err(_) => ERROR_SENTINEL.to_string(),
        };

        let expression = match (self.previous, self.operator) {
            (Some(previous), Some(op)) => format!("{} {}", formatter.format(previous), op),
            _ => String::new(),
        };

        DisplaySnapshot { result, expression }
    }

    // ========================================================================
    // Entry Editing
    // ========================================================================

    /// Type a digit or the decimal point
    pub(crate) fn with_input(mut self, ch: char) -> Self {
        if self.reset_on_input {
            self.current = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.reset_on_input = false;
        } else if ch == '.' {
            if !self.current.contains('.') {
                self.current.push('.');
            }
        } else if self.current == "0" {
            self.current = ch.to_string();
        } else {
            self.current.push(ch);
        }
        self
    }

    /// Remove the last typed character
    pub(crate) fn with_backspace(mut self) -> Self {
        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
        }
        self
    }

    /// Replace the entry with a computed value
    pub(crate) fn with_value(mut self, value: f64) -> Self {
        self.current = entry_text(value);
        self
    }

    /// Reset entry and pending operation; history survives
    pub(crate) fn cleared(self) -> Self {
        Self {
            history: self.history,
            ..Self::new()
        }
    }

    pub(crate) fn with_error(mut self, error: CalcError) -> Self {
        self.error = Some(error);
        self
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry text for a value; negative zero reads as "0"
fn entry_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
