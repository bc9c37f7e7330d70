// ============================================================================
// Scientific Functions
// Unary functions returning the raw library result (no precision rounding)
// ============================================================================

use crate::interfaces::Operation;
use crate::numeric::{CalcError, CalcResult, DomainViolation};

/// radians = degrees × π / 180
#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Sine of an angle in degrees
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine;

/// Cosine of an angle in degrees
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

/// Tangent of an angle in degrees
#[derive(Debug, Clone, Copy, Default)]
pub struct Tangent;

/// Natural logarithm; defined for positive inputs only
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalLog;

/// Square root; defined for non-negative inputs only
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareRoot;

impl Operation for Sine {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        Ok(to_radians(operands[0]).sin())
    }

    fn name(&self) -> &str {
        "sin"
    }

    fn arity(&self) -> usize {
        1
    }
}

impl Operation for Cosine {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        Ok(to_radians(operands[0]).cos())
    }

    fn name(&self) -> &str {
        "cos"
    }

    fn arity(&self) -> usize {
        1
    }
}

impl Operation for Tangent {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        Ok(to_radians(operands[0]).tan())
    }

    fn name(&self) -> &str {
        "tan"
    }

    fn arity(&self) -> usize {
        1
    }
}

impl Operation for NaturalLog {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        let x = operands[0];
        if x <= 0.0 {
            return Err(CalcError::DomainError(DomainViolation::NonPositiveLogarithm));
        }
        Ok(x.ln())
    }

    fn name(&self) -> &str {
        "ln"
    }

    fn arity(&self) -> usize {
        1
    }
}

impl Operation for SquareRoot {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        let x = operands[0];
        if x < 0.0 {
            return Err(CalcError::DomainError(DomainViolation::NegativeSquareRoot));
        }
        Ok(x.sqrt())
    }

    fn name(&self) -> &str {
        "sqrt"
    }

    fn arity(&self) -> usize {
        1
    }
}
