// ============================================================================
// Calculator Core Library
// Validated arithmetic, scientific functions and display formatting
// ============================================================================

//! # Calculator Core
//!
//! The computational core of a desktop-style calculator. A presentation layer
//! feeds it key presses and operands and gets plain numbers and display
//! strings back.
//!
//! ## Features
//!
//! - **Validated operations**: every operand must be a finite number
//! - **Float-error cancellation**: arithmetic results are rounded to
//!   10 fractional digits, so `0.1 + 0.2 == 0.3`
//! - **Degree-based trigonometry**, natural log and square root
//! - **Display formatting** with thousands grouping and truncated fractions
//! - **Explicit state snapshots** threaded through each key press
//!
//! ## Example
//!
//! ```rust
//! use calculator_core::prelude::*;
//! use calculator_core::numeric::format_number;
//! use std::sync::Arc;
//!
//! // Operations on their own
//! assert_eq!(Addition::new().execute(&[0.1, 0.2]), Ok(0.3));
//! assert_eq!(Division::new().execute(&[1.0, 0.0]), Err(CalcError::DivisionByZero));
//! assert_eq!(format_number(-1234567.5), "-1,234,567.5");
//!
//! // Or driven by key presses
//! let calculator = CalculatorBuilder::new()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let keys = [
//!     Key::Digit('9'),
//!     Key::Operator(BinaryOperator::Multiply),
//!     Key::Digit('9'),
//!     Key::Equals,
//! ];
//! let transition = calculator.apply_all(CalculatorState::new(), keys);
//! assert_eq!(calculator.display(&transition.state).result, "81");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BinaryOperator, CalculatorConfig, CalculatorState, DisplaySnapshot, HistoryEntry, Key,
        ScientificFunction,
    };
    pub use crate::engine::{
        create_from_config, Addition, Calculator, CalculatorBuilder, Cosine, Division,
        Multiplication, NaturalLog, OperationTable, Sine, SquareRoot, Subtraction, Tangent,
        Transition,
    };
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
    };
    pub use crate::numeric::{CalcError, CalcResult, DomainViolation, NumberFormatter};
}
