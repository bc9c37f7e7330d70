// ============================================================================
// Calculation Errors
// Error taxonomy for operand validation and operation execution
// ============================================================================

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which mathematical domain restriction an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DomainViolation {
    /// Natural logarithm of a value <= 0
    NonPositiveLogarithm,
    /// Square root of a value < 0
    NegativeSquareRoot,
}

/// Errors that can occur while validating operands or executing an operation.
///
/// Callers branch on the variant, never on the message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Operand is NaN, infinite, missing or not a number at all
    #[error("invalid operand: not a finite number")]
    InvalidOperand,

    /// Divisor was exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Input outside the function's domain
    #[error("domain error: {0}")]
    DomainError(DomainViolation),

    /// Arithmetic result is not representable as a finite number
    #[error("arithmetic overflow: result is not finite")]
    Overflow,
}

impl std::fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainViolation::NonPositiveLogarithm => {
                write!(f, "natural log requires a positive input")
            },
            DomainViolation::NegativeSquareRoot => {
                write!(f, "cannot take the square root of a negative number")
            },
        }
    }
}

impl CalcError {
    /// True when the error came from a function domain check.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::DomainError(_))
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
