// ============================================================================
// Operators, Functions and Keys
// Symbols the presentation layer sends into the calculator
// ============================================================================

use crate::numeric::CalcError;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ];

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "−",
            BinaryOperator::Multiply => "×",
            BinaryOperator::Divide => "÷",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    /// Accepts the display symbols and their ASCII stand-ins.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(BinaryOperator::Add),
            "−" | "-" => Ok(BinaryOperator::Subtract),
            "×" | "*" | "x" => Ok(BinaryOperator::Multiply),
            "÷" | "/" => Ok(BinaryOperator::Divide),
            _ => Err(CalcError::InvalidOperand),
        }
    }
}

/// Unary scientific function. Trigonometric functions take degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Ln,
    Sqrt,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 5] = [
        ScientificFunction::Sin,
        ScientificFunction::Cos,
        ScientificFunction::Tan,
        ScientificFunction::Ln,
        ScientificFunction::Sqrt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScientificFunction::Sin => "sin",
            ScientificFunction::Cos => "cos",
            ScientificFunction::Tan => "tan",
            ScientificFunction::Ln => "ln",
            ScientificFunction::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScientificFunction::ALL
            .into_iter()
            .find(|func| func.name() == s.trim())
            .ok_or(CalcError::InvalidOperand)
    }
}

/// A single key press fed into the calculator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Decimal digit '0'..='9'
    Digit(char),
    /// Decimal point
    Decimal,
    Operator(BinaryOperator),
    Function(ScientificFunction),
    Pi,
    Equals,
    Clear,
    Backspace,
    Negate,
    Percent,
    /// Load a past result back into the entry
    RecallHistory(Uuid),
    ClearHistory,
}
