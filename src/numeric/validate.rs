// ============================================================================
// Operand Validation
// Rejects anything that is not a finite, defined number
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Validate a batch of operands.
///
/// Fails with `InvalidOperand` as soon as a NaN or infinite value is found.
/// The batch passes or fails as a whole.
#[inline]
pub fn validate(values: &[f64]) -> CalcResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CalcError::InvalidOperand)
    }
}

/// Validate an operand that may be absent.
///
/// `None` stands for a missing (null/undefined) value.
#[inline]
pub fn require(value: Option<f64>) -> CalcResult<f64> {
    let value = value.ok_or(CalcError::InvalidOperand)?;
    validate(&[value])?;
    Ok(value)
}

/// Parse entry text into a validated operand.
///
/// Accepts plain decimal notation only: an optional leading `-`, digits, and
/// at most one `.`. Words such as `inf` or `NaN` that `f64::from_str` would
/// accept are rejected, as is an empty or lone-sign entry.
///
/// # Examples
/// - "123" -> 123.0
/// - "-0.5" -> -0.5
/// - "12." -> 12.0
/// - "abc" -> InvalidOperand
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let s = text.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);

    let is_plain_decimal = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;

    if !is_plain_decimal {
        return Err(CalcError::InvalidOperand);
    }

    let value: f64 = s.parse().map_err(|_| CalcError::InvalidOperand)?;
    require(Some(value))
}
