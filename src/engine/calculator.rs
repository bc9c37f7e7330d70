// ============================================================================
// Calculator
// Stateless engine applying key presses to calculator state snapshots
// ============================================================================

use crate::domain::history::push_bounded;
use crate::domain::{
    BinaryOperator, CalculatorConfig, CalculatorState, DisplaySnapshot, HistoryEntry, Key,
    ScientificFunction,
};
use crate::engine::factory::OperationTable;
use crate::interfaces::{CalculatorEvent, EventHandler, Operation};
use crate::numeric::{CalcError, CalcResult, NumberFormatter};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of one key press: the next state and what happened
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: CalculatorState,
    pub events: Vec<CalculatorEvent>,
}

/// Calculator engine.
///
/// Holds only immutable collaborators (configuration, operation table,
/// formatter, event handler). The state lives with the caller and is
/// threaded through [`Calculator::apply`].
pub struct Calculator {
    config: CalculatorConfig,
    operations: OperationTable,
    formatter: NumberFormatter,
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(
        config: CalculatorConfig,
        operations: OperationTable,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let formatter = config.formatter();
        Self {
            config,
            operations,
            formatter,
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }

    /// Render a state with this calculator's display settings
    pub fn display(&self, state: &CalculatorState) -> DisplaySnapshot {
        state.display(&self.formatter)
    }

    /// Apply a single key press
    pub fn apply(&self, mut state: CalculatorState, key: Key) -> Transition {
        let mut events = Vec::new();

        // An error display lasts until the next key
        state.error = None;

        let state = match key {
            Key::Digit(ch) if ch.is_ascii_digit() => state.with_input(ch),
            Key::Digit(_) => state,
            Key::Decimal => state.with_input('.'),
            Key::Operator(op) => self.press_operator(state, op, &mut events),
            Key::Function(func) => self.apply_function(state, func, &mut events),
            Key::Pi => self.press_pi(state, &mut events),
            Key::Equals => self.evaluate_pending(state, &mut events),
            Key::Clear => {
                events.push(CalculatorEvent::Cleared {
                    timestamp: Utc::now(),
                });
                state.cleared()
            },
            Key::Backspace => state.with_backspace(),
            Key::Negate => self.map_entry(state, "negate", |v| -v, &mut events),
            Key::Percent => self.map_entry(state, "percent", |v| v / 100.0, &mut events),
            Key::RecallHistory(id) => recall(state, id),
            Key::ClearHistory => {
                state.history.clear();
                events.push(CalculatorEvent::HistoryCleared {
                    timestamp: Utc::now(),
                });
                state
            },
        };

        if !events.is_empty() {
            self.event_handler.on_events(events.clone());
        }

        Transition { state, events }
    }

    /// Apply a sequence of key presses, collecting every event
    pub fn apply_all(
        &self,
        state: CalculatorState,
        keys: impl IntoIterator<Item = Key>,
    ) -> Transition {
        keys.into_iter().fold(
            Transition {
                state,
                events: Vec::new(),
            },
            |mut acc, key| {
                let next = self.apply(acc.state, key);
                acc.events.extend(next.events);
                Transition {
                    state: next.state,
                    events: acc.events,
                }
            },
        )
    }

    // ========================================================================
    // Key Handlers
    // ========================================================================

    fn press_operator(
        &self,
        state: CalculatorState,
        op: BinaryOperator,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        // "2 + 3 ×" evaluates "2 + 3" before taking the new operator
        let chained = state.previous.is_some() && state.operator.is_some() && !state.reset_on_input;
        let mut state = if chained {
            self.evaluate_pending(state, events)
        } else {
            state
        };

        if state.error.is_some() {
            return state;
        }

        match state.current_value() {
            Ok(value) => {
                state.previous = Some(value);
                state.operator = Some(op);
                state.reset_on_input = true;
                state
            },
            Err(error) => {
                let expression = state_expression(&state);
                self.fail(state, expression, error, events)
            },
        }
    }

    fn evaluate_pending(
        &self,
        state: CalculatorState,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        let (previous, op) = match (state.previous, state.operator) {
            (Some(previous), Some(op)) => (previous, op),
            _ => return state,
        };

        let (expression, outcome) = match state.current_value() {
            Ok(current) => (
                format!(
                    "{} {} {}",
                    self.formatter.format(previous),
                    op,
                    self.formatter.format(current)
                ),
                self.run(self.operations.binary(op), &[previous, current]),
            ),
            Err(error) => (
                format!("{} {} {}", self.formatter.format(previous), op, state.current),
                Err(error),
            ),
        };

        let mut state = self.record(state, expression, outcome, events);
        if state.error.is_none() {
            state.previous = None;
            state.operator = None;
        }
        state
    }

    fn apply_function(
        &self,
        state: CalculatorState,
        func: ScientificFunction,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        let (expression, outcome) = match state.current_value() {
            Ok(value) => (
                format!("{}({})", func, self.formatter.format(value)),
                self.run(self.operations.scientific(func), &[value]),
            ),
            Err(error) => (format!("{}({})", func, state.current), Err(error)),
        };
        self.record(state, expression, outcome, events)
    }

    /// Entry becomes π; history reads "pi(<previous entry>)"
    fn press_pi(
        &self,
        state: CalculatorState,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        let shown = match state.current_value() {
            Ok(value) => self.formatter.format(value),
            Err(_) => state.current.clone(),
        };
        let expression = format!("pi({})", shown);
        self.record(state, expression, Ok(std::f64::consts::PI), events)
    }

    /// Rewrite the entry in place; not recorded in history
    fn map_entry(
        &self,
        state: CalculatorState,
        action: &str,
        f: impl FnOnce(f64) -> f64,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        match state.current_value() {
            Ok(value) => state.with_value(f(value)),
            Err(error) => {
                let expression = format!("{}({})", action, state.current);
                self.fail(state, expression, error, events)
            },
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn run(&self, operation: &dyn Operation, operands: &[f64]) -> CalcResult<f64> {
        let outcome = operation.execute(operands);
        tracing::trace!(
            operation = operation.name(),
            ?operands,
            ?outcome,
            "Operation executed"
        );
        outcome
    }

    /// Commit a successful result to entry and history, or enter the error state
    fn record(
        &self,
        state: CalculatorState,
        expression: String,
        outcome: CalcResult<f64>,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        match outcome {
            Ok(result) => {
                let entry = HistoryEntry::new(expression, result, self.formatter.format(result));
                events.push(CalculatorEvent::Calculated {
                    entry: entry.clone(),
                });

                let mut state = state.with_value(result);
                push_bounded(&mut state.history, entry, self.config.history_limit);
                state.reset_on_input = true;
                state
            },
            Err(error) => self.fail(state, expression, error, events),
        }
    }

    fn fail(
        &self,
        state: CalculatorState,
        expression: String,
        error: CalcError,
        events: &mut Vec<CalculatorEvent>,
    ) -> CalculatorState {
        tracing::debug!(%expression, %error, "Key press ended in error state");
        events.push(CalculatorEvent::Failed {
            expression,
            error,
            timestamp: Utc::now(),
        });
        state.with_error(error)
    }
}

fn state_expression(state: &CalculatorState) -> String {
    match (state.previous, state.operator) {
        (Some(previous), Some(op)) => format!("{} {} {}", previous, op, state.current),
        _ => state.current.clone(),
    }
}

fn recall(mut state: CalculatorState, id: Uuid) -> CalculatorState {
    let result = state
        .history
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.result);

    if let Some(result) = result {
        state = state.with_value(result);
        state.reset_on_input = true;
    }
    state
}
