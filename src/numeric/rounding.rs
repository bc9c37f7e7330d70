// ============================================================================
// Precision Rounding
// Absorbs binary floating-point representation error in arithmetic results
// ============================================================================

/// Fractional digits kept by arithmetic results unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest precision accepted by configuration. Beyond this an `f64` has no
/// fractional digits left to round.
pub const MAX_PRECISION: u32 = 15;

/// Round to `precision` fractional digits, ties away from zero.
///
/// Scales by `10^precision`, rounds to the nearest integer and scales back.
/// Values too large to scale without overflowing are returned unchanged;
/// they have no fractional digits at that magnitude anyway. Precision is
/// capped at [`MAX_PRECISION`].
///
/// # Example
/// ```
/// use calculator_core::numeric::round_to_precision;
///
/// assert_eq!(round_to_precision(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to_precision(1.23456, 3), 1.235);
/// ```
#[inline]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    // Capped at 15, so the cast is lossless
    let multiplier = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * multiplier;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / multiplier
}
