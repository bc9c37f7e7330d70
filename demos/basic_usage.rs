// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator_core::numeric::format_number;
use calculator_core::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Example ===\n");

    // Operations on their own
    println!("Direct operations...");
    let table = OperationTable::default();
    for (symbol, operands) in [
        ("+", vec![0.1, 0.2]),
        ("÷", vec![1.0, 3.0]),
        ("÷", vec![5.0, 0.0]),
        ("sin", vec![30.0]),
        ("sqrt", vec![-4.0]),
    ] {
        match table.evaluate(symbol, &operands) {
            Ok(result) => println!("  {} {:?} = {}", symbol, operands, format_number(result)),
            Err(error) => println!("  {} {:?} failed: {}", symbol, operands, error),
        }
    }

    // Key presses through the calculator
    println!("\nKey presses...");
    let calculator = CalculatorBuilder::new()
        .with_history_limit(10)
        .build(Arc::new(LoggingEventHandler))
        .expect("default configuration is valid");

    let keys = [
        Key::Digit('1'),
        Key::Digit('2'),
        Key::Digit('3'),
        Key::Digit('4'),
        Key::Operator(BinaryOperator::Multiply),
        Key::Digit('1'),
        Key::Digit('0'),
        Key::Digit('0'),
        Key::Digit('0'),
        Key::Operator(BinaryOperator::Add),
        Key::Digit('5'),
        Key::Equals,
        Key::Function(ScientificFunction::Sqrt),
    ];

    let mut state = CalculatorState::new();
    for key in keys {
        state = calculator.apply(state, key).state;
        let display = calculator.display(&state);
        println!("  {:<40} | {:>20}", display.expression, display.result);
    }

    println!("\nHistory:");
    for entry in state.history() {
        println!("  {} = {}", entry.expression, entry.formatted_result);
    }
}
