// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculator events
// ============================================================================

use crate::domain::HistoryEntry;
use crate::numeric::CalcError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// A calculation completed and was added to history
    Calculated { entry: HistoryEntry },

    /// A calculation failed; the state is now showing the error
    Failed {
        expression: String,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Entry and pending operation were reset
    Cleared { timestamp: DateTime<Utc> },

    /// History list was emptied
    HistoryCleared { timestamp: DateTime<Utc> },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history rendering, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        match &event {
            CalculatorEvent::Calculated { entry } => {
                tracing::debug!(
                    expression = %entry.expression,
                    result = %entry.formatted_result,
                    "Calculation completed"
                );
            },
            CalculatorEvent::Failed {
                expression, error, ..
            } => {
                tracing::debug!(%expression, %error, "Calculation failed");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<CalculatorEvent>>);

    impl EventHandler for Recording {
        fn on_event(&self, event: CalculatorEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalculatorEvent::Cleared {
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(CalculatorEvent::Failed {
            expression: "5 ÷ 0".to_string(),
            error: CalcError::DivisionByZero,
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_on_events_forwards_in_order() {
        let handler = Recording(Mutex::new(Vec::new()));
        handler.on_events(vec![
            CalculatorEvent::Cleared {
                timestamp: Utc::now(),
            },
            CalculatorEvent::HistoryCleared {
                timestamp: Utc::now(),
            },
        ]);

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CalculatorEvent::Cleared { .. }));
        assert!(matches!(events[1], CalculatorEvent::HistoryCleared { .. }));
    }
}
