// ============================================================================
// Domain Models Module
// Contains the calculator's configuration, inputs, state and history
// ============================================================================

pub mod config;
pub mod history;
pub mod operator;
pub mod state;

pub use config::CalculatorConfig;
pub use history::HistoryEntry;
pub use operator::{BinaryOperator, Key, ScientificFunction};
pub use state::{CalculatorState, DisplaySnapshot};
