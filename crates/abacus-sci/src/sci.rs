// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use abacus_core::{
    calc::BasicCalc,
    error::{CalcError, CalcResult, Operation},
    num::ops::{CheckedArithmeticVal, WrappingArithmeticVal},
    policy::{Checked, OverflowPolicy},
    reduce,
};

const NEGATIVE_EXPONENT: &str = "Exponent must be non-negative";
const NEGATIVE_FACTORIAL: &str = "Factorial is not defined for negative numbers";

/// Scientific calculator delegating to a `BasicCalc` with the same policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SciCalc<P = Checked> {
    basic: BasicCalc<P>,
}

impl SciCalc {
    /// Creates a calculator with the default `Checked` policy.
    #[inline]
    pub const fn new() -> Self {
        Self {
            basic: BasicCalc::new(),
        }
    }
}

impl<P> SciCalc<P>
where
    P: OverflowPolicy,
{
    /// Creates a calculator with the overflow policy `P`.
    #[inline]
    pub const fn with_policy() -> Self {
        Self {
            basic: BasicCalc::with_policy(),
        }
    }

    /// The basic calculator used for delegation.
    #[inline]
    pub fn basic(&self) -> &BasicCalc<P> {
        &self.basic
    }

    /// Raises `base` to a non-negative `exponent`.
    ///
    /// `power(b, 0)` is `1` for every `b`, including `0`. The result is the
    /// same as multiplying `base` into `1` exactly `exponent` times through
    /// `BasicCalc::multiply`; squaring only shortens the chain of calls.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `exponent < 0`; `Overflow` from `multiply`
    /// when the result does not fit.
    pub fn power(&self, base: i32, exponent: i32) -> CalcResult<i32> {
        if exponent < 0 {
            tracing::debug!(base, exponent, "rejected negative exponent");
            return Err(CalcError::InvalidArgument(NEGATIVE_EXPONENT));
        }

        // Only square while higher exponent bits remain; with |base| >= 2 a
        // square that overflows means the full product overflows as well.
        let mut result = 1;
        let mut square = base;
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.basic.multiply(result, square)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = self.basic.multiply(square, square)?;
            }
        }

        tracing::trace!(base, exponent, result, "power");
        Ok(result)
    }

    /// Computes `n!` as a 64-bit integer.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n < 0`; under `Checked`, `Overflow` for
    /// `n >= 21`.
    pub fn factorial(&self, n: i32) -> CalcResult<i64> {
        if n < 0 {
            tracing::debug!(n, "rejected negative factorial argument");
            return Err(CalcError::InvalidArgument(NEGATIVE_FACTORIAL));
        }

        let mut result: i64 = 1;
        for k in 2..=i64::from(n) {
            result = P::resolve(
                result.checked_mul_val(k),
                || result.wrapping_mul_val(k),
                Operation::Factorial,
            )?;
            // A wrapped product that reached zero stays zero.
            if result == 0 {
                break;
            }
        }

        tracing::trace!(n, result, "factorial");
        Ok(result)
    }

    /// Arithmetic mean of the values.
    ///
    /// The running sum is accumulated through `BasicCalc::add` in `i32`.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `values` is absent or empty; `Overflow` from `add`
    /// when the running sum leaves the `i32` range.
    pub fn average(&self, values: Option<&[i32]>) -> CalcResult<f64> {
        let values = reduce::require_non_empty(values)?;
        let sum = values
            .iter()
            .try_fold(0, |acc, &v| self.basic.add(acc, v))?;

        let mean = f64::from(sum) / values.len() as f64;
        tracing::trace!(len = values.len(), mean, "average");
        Ok(mean)
    }

    /// Returns `true` if `n` is divisible by two.
    #[inline]
    pub fn is_even(&self, n: i32) -> bool {
        n % 2 == 0
    }
}

impl<P> std::fmt::Display for SciCalc<P>
where
    P: OverflowPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SciCalc({})", P::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::policy::Wrapping;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_power() {
        let calc = SciCalc::new();
        assert_eq!(calc.power(2, 3), Ok(8));
        assert_eq!(calc.power(5, 2), Ok(25));
        assert_eq!(calc.power(10, 0), Ok(1));
        assert_eq!(calc.power(3, 4), Ok(81));
    }

    #[test]
    fn test_power_zero_exponent_for_every_base() {
        let calc = SciCalc::new();
        for base in [0, 1, -1, i32::MIN, i32::MAX] {
            assert_eq!(calc.power(base, 0), Ok(1));
        }
    }

    #[test]
    fn test_power_negative_exponent() {
        let err = SciCalc::new().power(2, -1).unwrap_err();
        assert_eq!(err, CalcError::InvalidArgument(NEGATIVE_EXPONENT));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_power_edges() {
        let calc = SciCalc::new();
        assert_eq!(calc.power(-2, 31), Ok(i32::MIN));
        assert_eq!(calc.power(2, 30), Ok(1 << 30));
        assert_eq!(calc.power(-1, i32::MAX), Ok(-1));
        assert_eq!(calc.power(0, i32::MAX), Ok(0));
        assert_eq!(calc.power(1, i32::MAX), Ok(1));
    }

    #[test]
    fn test_power_overflow() {
        let calc = SciCalc::new();
        let overflow = Err(CalcError::Overflow {
            operation: Operation::Multiply,
        });
        assert_eq!(calc.power(2, 31), overflow);
        assert_eq!(calc.power(10, 10), overflow);
        assert_eq!(calc.power(i32::MIN, 2), overflow);
    }

    #[test]
    fn test_power_wrapping() {
        let calc = SciCalc::<Wrapping>::with_policy();
        assert_eq!(calc.power(2, 31), Ok(i32::MIN));
        assert_eq!(calc.power(2, 32), Ok(0));
        assert_eq!(calc.power(3, 21), Ok(3i32.wrapping_pow(21)));
    }

    #[test]
    fn test_factorial() {
        let calc = SciCalc::new();
        assert_eq!(calc.factorial(0), Ok(1));
        assert_eq!(calc.factorial(1), Ok(1));
        assert_eq!(calc.factorial(5), Ok(120));
        assert_eq!(calc.factorial(6), Ok(720));
        assert_eq!(calc.factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_negative() {
        let err = SciCalc::new().factorial(-1).unwrap_err();
        assert_eq!(err, CalcError::InvalidArgument(NEGATIVE_FACTORIAL));
        assert!(err.to_string().contains("not defined for negative"));
    }

    #[test]
    fn test_factorial_overflow() {
        let calc = SciCalc::new();
        let overflow = Err(CalcError::Overflow {
            operation: Operation::Factorial,
        });
        assert_eq!(calc.factorial(21), overflow);
        assert_eq!(calc.factorial(i32::MAX), overflow);
    }

    #[test]
    fn test_factorial_wrapping() {
        let calc = SciCalc::<Wrapping>::with_policy();
        let twenty_factorial: i64 = 2_432_902_008_176_640_000;
        assert_eq!(calc.factorial(21), Ok(twenty_factorial.wrapping_mul(21)));
        assert_eq!(calc.factorial(i32::MAX), Ok(0));
    }

    #[test]
    fn test_average() {
        let calc = SciCalc::new();
        assert_abs_diff_eq!(
            calc.average(Some(&[1, 2, 3, 4, 5][..])).unwrap(),
            3.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            calc.average(Some(&[10, 20, 30][..])).unwrap(),
            20.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            calc.average(Some(&[42][..])).unwrap(),
            42.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(calc.average(Some(&[1, 2][..])).unwrap(), 1.5);
    }

    #[test]
    fn test_average_empty_input() {
        let calc = SciCalc::new();
        assert_eq!(calc.average(Some(&[])), Err(CalcError::EmptyInput));
        let err = calc.average(None).unwrap_err();
        assert!(err.to_string().contains("must not be null or empty"));
    }

    #[test]
    fn test_average_overflow_propagates_from_add() {
        let calc = SciCalc::new();
        assert_eq!(
            calc.average(Some(&[i32::MAX, 1][..])),
            Err(CalcError::Overflow {
                operation: Operation::Add
            })
        );
    }

    #[test]
    fn test_average_wrapping() {
        let calc = SciCalc::<Wrapping>::with_policy();
        assert_abs_diff_eq!(
            calc.average(Some(&[i32::MAX, 1][..])).unwrap(),
            f64::from(i32::MIN) / 2.0
        );
    }

    #[test]
    fn test_is_even() {
        let calc = SciCalc::new();
        assert!(calc.is_even(2));
        assert!(!calc.is_even(3));
        assert!(calc.is_even(0));
        assert!(calc.is_even(-4));
        assert!(!calc.is_even(-3));
        assert!(calc.is_even(i32::MIN));
        assert!(!calc.is_even(i32::MAX));
    }

    #[test]
    fn test_basic_delegate_and_display() {
        let calc = SciCalc::new();
        assert_eq!(calc.basic(), &BasicCalc::new());
        assert_eq!(calc.to_string(), "SciCalc(checked)");
        assert_eq!(
            SciCalc::<Wrapping>::with_policy().to_string(),
            "SciCalc(wrapping)"
        );
    }
}
