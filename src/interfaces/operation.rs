// ============================================================================
// Operation Interface
// Defines the contract shared by arithmetic and scientific operations
// ============================================================================

use crate::numeric::{self, CalcError, CalcResult};

/// Strategy pattern interface for calculator operations
/// Implementations: Addition, Subtraction, Multiplication, Division,
/// Sine, Cosine, Tangent, NaturalLog, SquareRoot
pub trait Operation: Send + Sync {
    /// Execute the operation on its operands
    ///
    /// # Arguments
    /// * `operands` - Exactly `arity()` finite numbers
    ///
    /// # Returns
    /// The result, or the first error encountered. Operands are validated
    /// before any computation takes place.
    fn execute(&self, operands: &[f64]) -> CalcResult<f64>;

    /// Get the operation name for logging
    fn name(&self) -> &str;

    /// Number of operands the operation takes
    fn arity(&self) -> usize;

    /// Check operand count and finiteness
    /// A missing operand counts as an invalid one
    fn validate(&self, operands: &[f64]) -> CalcResult<()> {
        if operands.len() != self.arity() {
            return Err(CalcError::InvalidOperand);
        }
        numeric::validate(operands)
    }
}
