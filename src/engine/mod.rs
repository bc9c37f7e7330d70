// ============================================================================
// Engine Module
// Contains the operations and the calculator that drives them
// ============================================================================

mod arithmetic;
mod calculator;
mod scientific;

pub mod factory;

pub use arithmetic::{Addition, Division, Multiplication, Subtraction};
pub use calculator::{Calculator, Transition};
pub use factory::{
    create_binary_operation, create_from_config, create_scientific_function, CalculatorBuilder,
    OperationTable,
};
pub use scientific::{Cosine, NaturalLog, Sine, SquareRoot, Tangent};
