// ============================================================================
// Numeric Module
// Operand validation, result rounding and display formatting
// ============================================================================
//
// This module provides:
// - validate / require / parse_operand: finite-number gatekeeping
// - round_to_precision: fixed-digit rounding for arithmetic results
// - NumberFormatter / format_number: grouped, truncated display strings
// - CalcError: the error taxonomy shared by every operation
//
// Design principles:
// - Every fallible function returns Result (no panics)
// - Formatting never fails; non-displayable values map to "Error"

mod errors;
mod format;
mod rounding;
mod validate;

pub use errors::{CalcError, CalcResult, DomainViolation};
pub use format::{
    format_number, NumberFormatter, DEFAULT_GROUP_SEPARATOR, DEFAULT_MAX_FRACTION_DIGITS,
    ERROR_SENTINEL,
};
pub use rounding::{round_to_precision, DEFAULT_PRECISION, MAX_PRECISION};
pub use validate::{parse_operand, require, validate};
