// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod operation;

pub use event_handler::{CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use operation::Operation;
