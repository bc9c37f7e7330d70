// ============================================================================
// Arithmetic Operations
// Binary operations with validated operands and rounded results
// ============================================================================

use crate::interfaces::Operation;
use crate::numeric::{round_to_precision, CalcError, CalcResult, DEFAULT_PRECISION, MAX_PRECISION};

/// Round a raw result, rejecting overflow to infinity
#[inline]
fn rounded(raw: f64, precision: u32) -> CalcResult<f64> {
    if !raw.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(round_to_precision(raw, precision))
}

macro_rules! arithmetic_operation {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            precision: u32,
        }

        impl $name {
            pub fn new() -> Self {
                Self::with_precision(DEFAULT_PRECISION)
            }

            /// Precision above `MAX_PRECISION` is capped
            pub fn with_precision(precision: u32) -> Self {
                Self {
                    precision: precision.min(MAX_PRECISION),
                }
            }

            pub fn precision(&self) -> u32 {
                self.precision
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            const NAME: &'static str = $label;
        }
    };
}

arithmetic_operation!(
    /// Sum of two operands
    Addition,
    "addition"
);
arithmetic_operation!(
    /// Difference of two operands
    Subtraction,
    "subtraction"
);
arithmetic_operation!(
    /// Product of two operands
    Multiplication,
    "multiplication"
);
arithmetic_operation!(
    /// Quotient of two operands; fails on a zero divisor
    Division,
    "division"
);

impl Operation for Addition {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        rounded(operands[0] + operands[1], self.precision)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        2
    }
}

impl Operation for Subtraction {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        rounded(operands[0] - operands[1], self.precision)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        2
    }
}

impl Operation for Multiplication {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        rounded(operands[0] * operands[1], self.precision)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        2
    }
}

impl Operation for Division {
    fn execute(&self, operands: &[f64]) -> CalcResult<f64> {
        self.validate(operands)?;
        let (dividend, divisor) = (operands[0], operands[1]);
        if divisor == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        rounded(dividend / divisor, self.precision)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_addition() {
        let add = Addition::new();
        assert_eq!(add.execute(&[2.0, 3.0]), Ok(5.0));
        assert_eq!(add.execute(&[10.0, 20.0]), Ok(30.0));
        assert_eq!(add.execute(&[-2.0, 5.0]), Ok(3.0));
        assert_eq!(add.execute(&[-10.0, 3.0]), Ok(-7.0));
        assert_eq!(add.execute(&[-2.0, -3.0]), Ok(-5.0));
        assert_eq!(add.execute(&[0.0, 5.0]), Ok(5.0));
        assert_eq!(add.execute(&[5.0, 0.0]), Ok(5.0));
        assert_eq!(add.execute(&[1e10, 1e10]), Ok(2e10));
    }

    #[test]
    fn test_addition_cancels_float_error() {
        assert_eq!(Addition::new().execute(&[0.1, 0.2]), Ok(0.3));
    }

    #[test]
    fn test_subtraction() {
        let sub = Subtraction::new();
        assert_eq!(sub.execute(&[5.0, 3.0]), Ok(2.0));
        assert_eq!(sub.execute(&[-5.0, 3.0]), Ok(-8.0));
        assert_eq!(sub.execute(&[0.3, 0.1]), Ok(0.2));
    }

    #[test]
    fn test_multiplication() {
        let mul = Multiplication::new();
        assert_eq!(mul.execute(&[3.0, 4.0]), Ok(12.0));
        assert_eq!(mul.execute(&[-3.0, -4.0]), Ok(12.0));
        assert_eq!(mul.execute(&[5.0, 0.0]), Ok(0.0));
    }

    #[test]
    fn test_division() {
        let div = Division::new();
        assert_eq!(div.execute(&[12.0, 4.0]), Ok(3.0));
        assert_eq!(div.execute(&[1.0, 3.0]), Ok(0.3333333333));
    }

    #[test]
    fn test_division_by_zero() {
        let div = Division::new();
        assert_eq!(div.execute(&[5.0, 0.0]), Err(CalcError::DivisionByZero));
        assert_eq!(div.execute(&[0.0, 0.0]), Err(CalcError::DivisionByZero));
        assert_eq!(div.execute(&[5.0, -0.0]), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_invalid_operands() {
        let add = Addition::new();
        assert_eq!(add.execute(&[f64::NAN, 3.0]), Err(CalcError::InvalidOperand));
        assert_eq!(
            add.execute(&[2.0, f64::INFINITY]),
            Err(CalcError::InvalidOperand)
        );
        assert_eq!(add.execute(&[2.0]), Err(CalcError::InvalidOperand));

        // Validation runs before the zero-divisor check
        assert_eq!(
            Division::new().execute(&[f64::NAN, 0.0]),
            Err(CalcError::InvalidOperand)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Multiplication::new().execute(&[1e200, 1e200]),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Addition::new().execute(&[f64::MAX, f64::MAX]),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_custom_precision() {
        let div = Division::with_precision(2);
        assert_eq!(div.precision(), 2);
        assert_eq!(div.execute(&[2.0, 3.0]), Ok(0.67));
    }

    #[test]
    fn test_out_of_range_precision_capped() {
        let add = Addition::with_precision(u32::MAX);
        assert_eq!(add.precision(), MAX_PRECISION);
        assert_eq!(add.execute(&[0.1, 0.2]), Ok(0.3));

        let div = Division::with_precision(3_000_000_000);
        assert_eq!(div.execute(&[7.0, 2.0]), Ok(3.5));
    }

    #[test]
    fn test_names() {
        assert_eq!(Addition::new().name(), "addition");
        assert_eq!(Division::default().name(), "division");
        assert_eq!(Multiplication::new().arity(), 2);
    }

    proptest! {
        #[test]
        fn prop_add_equals_subtract_negated(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            let add = Addition::new().execute(&[a, b]).unwrap();
            let sub = Subtraction::new().execute(&[a, -b]).unwrap();
            prop_assert_eq!(add, sub);
        }

        #[test]
        fn prop_divide_by_zero_always_fails(x in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
            prop_assert_eq!(Division::new().execute(&[x, 0.0]), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn prop_addition_commutes(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(
                Addition::new().execute(&[a, b]),
                Addition::new().execute(&[b, a])
            );
        }
    }
}
