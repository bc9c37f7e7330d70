// ============================================================================
// Operation Factory
// Dispatch from operator symbols to operations, and calculator construction
// ============================================================================

use crate::domain::{BinaryOperator, CalculatorConfig, ScientificFunction};
use crate::engine::{
    Addition, Calculator, Cosine, Division, Multiplication, NaturalLog, Sine, SquareRoot,
    Subtraction, Tangent,
};
use crate::interfaces::{EventHandler, Operation};
use crate::numeric::{CalcError, CalcResult, DEFAULT_PRECISION};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the arithmetic operation for an operator
pub fn create_binary_operation(op: BinaryOperator, precision: u32) -> Box<dyn Operation> {
    match op {
        BinaryOperator::Add => Box::new(Addition::with_precision(precision)),
        BinaryOperator::Subtract => Box::new(Subtraction::with_precision(precision)),
        BinaryOperator::Multiply => Box::new(Multiplication::with_precision(precision)),
        BinaryOperator::Divide => Box::new(Division::with_precision(precision)),
    }
}

/// Creates the operation for a scientific function
pub fn create_scientific_function(func: ScientificFunction) -> Box<dyn Operation> {
    match func {
        ScientificFunction::Sin => Box::new(Sine),
        ScientificFunction::Cos => Box::new(Cosine),
        ScientificFunction::Tan => Box::new(Tangent),
        ScientificFunction::Ln => Box::new(NaturalLog),
        ScientificFunction::Sqrt => Box::new(SquareRoot),
    }
}

/// Creates a calculator from configuration
///
/// # Example
/// ```
/// use calculator_core::prelude::*;
/// use calculator_core::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::compact();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    let table = OperationTable::new(config.precision);
    Ok(Calculator::new(config, table, event_handler))
}

// ============================================================================
// Dispatch Table
// ============================================================================

/// All nine operations, built once and looked up by operator or name
pub struct OperationTable {
    binary: HashMap<BinaryOperator, Box<dyn Operation>>,
    scientific: HashMap<ScientificFunction, Box<dyn Operation>>,
}

impl OperationTable {
    pub fn new(precision: u32) -> Self {
        let binary = BinaryOperator::ALL
            .into_iter()
            .map(|op| (op, create_binary_operation(op, precision)))
            .collect();

        let scientific = ScientificFunction::ALL
            .into_iter()
            .map(|func| (func, create_scientific_function(func)))
            .collect();

        Self { binary, scientific }
    }

    pub fn binary(&self, op: BinaryOperator) -> &dyn Operation {
        // Every operator is inserted by `new`
        self.binary[&op].as_ref()
    }

    pub fn scientific(&self, func: ScientificFunction) -> &dyn Operation {
        self.scientific[&func].as_ref()
    }

    /// Look up an operation by operator symbol ("+", "÷", "*") or function
    /// name ("sin", "sqrt")
    pub fn lookup(&self, symbol: &str) -> CalcResult<&dyn Operation> {
        if let Ok(op) = symbol.parse::<BinaryOperator>() {
            return Ok(self.binary(op));
        }
        symbol
            .parse::<ScientificFunction>()
            .map(|func| self.scientific(func))
            .map_err(|_| CalcError::InvalidOperand)
    }

    /// Evaluate `symbol` on the operands in one step
    pub fn evaluate(&self, symbol: &str, operands: &[f64]) -> CalcResult<f64> {
        self.lookup(symbol)?.execute(operands)
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator_core::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .with_precision(8)
///     .with_history_limit(50)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(calculator.config().precision, 8);
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Start from the compact preset
    pub fn compact() -> Self {
        Self {
            config: CalculatorConfig::compact(),
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.config.group_separator = separator;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_table_lookup_by_symbol() {
        let table = OperationTable::default();
        assert_eq!(table.evaluate("+", &[2.0, 3.0]), Ok(5.0));
        assert_eq!(table.evaluate("−", &[5.0, 3.0]), Ok(2.0));
        assert_eq!(table.evaluate("×", &[3.0, 4.0]), Ok(12.0));
        assert_eq!(table.evaluate("÷", &[12.0, 4.0]), Ok(3.0));
        assert_eq!(table.evaluate("/", &[5.0, 0.0]), Err(CalcError::DivisionByZero));
        assert_eq!(table.evaluate("sqrt", &[16.0]), Ok(4.0));
    }

    #[test]
    fn test_table_unknown_symbol() {
        let table = OperationTable::default();
        assert!(table.lookup("%").is_err());
        assert!(table.lookup("log10").is_err());
    }

    #[test]
    fn test_table_names() {
        let table = OperationTable::default();
        assert_eq!(table.binary(BinaryOperator::Multiply).name(), "multiplication");
        assert_eq!(table.scientific(ScientificFunction::Ln).name(), "ln");
    }

    #[test]
    fn test_table_precision() {
        let table = OperationTable::new(2);
        assert_eq!(table.evaluate("/", &[1.0, 3.0]), Ok(0.33));
    }

    #[test]
    fn test_create_from_config() {
        let calculator =
            create_from_config(CalculatorConfig::compact(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calculator.config().precision, 6);
    }

    #[test]
    fn test_create_from_invalid_config() {
        let config = CalculatorConfig::default().with_precision(40);
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = CalculatorBuilder::new()
            .with_precision(4)
            .with_max_fraction_digits(4)
            .with_group_separator('\'');
        assert_eq!(builder.get_config().group_separator, '\'');

        let calculator = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calculator.config().max_fraction_digits, 4);
    }

    #[test]
    fn test_preset_builder() {
        let calculator = CalculatorBuilder::compact()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(calculator.config().history_limit, Some(20));
    }
}
