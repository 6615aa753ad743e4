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

//! # Basic Calculator
//!
//! Four binary operations over signed 32-bit integers, plus the matching
//! remainder. Division truncates toward zero, so `divide(-7, 2) == -3`, and the
//! remainder takes the sign of the dividend.
//!
//! A zero divisor always fails with `CalcError::DivideByZero`. Results that
//! leave the `i32` range are handled by the calculator's `OverflowPolicy`;
//! with the default `Checked` policy they fail with `CalcError::Overflow`.
//! The only overflowing quotient is `divide(i32::MIN, -1)`.

use crate::{
    error::{CalcError, CalcResult, Operation},
    num::ops::{CheckedArithmeticVal, WrappingArithmeticVal},
    policy::{Checked, OverflowPolicy},
};
use std::marker::PhantomData;

/// Integer calculator over `i32`.
///
/// The calculator holds no data; `P` only selects the overflow behavior.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::calc::BasicCalc;
/// # use abacus_core::error::CalcError;
/// let calc = BasicCalc::new();
/// assert_eq!(calc.add(2, 3), Ok(5));
/// assert_eq!(calc.divide(7, 2), Ok(3));
/// assert_eq!(calc.divide(10, 0), Err(CalcError::DivideByZero));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BasicCalc<P = Checked> {
    _policy: PhantomData<P>,
}

impl BasicCalc {
    /// Creates a calculator with the default `Checked` policy.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _policy: PhantomData,
        }
    }
}

impl<P> BasicCalc<P>
where
    P: OverflowPolicy,
{
    /// Creates a calculator with the overflow policy `P`.
    #[inline]
    pub const fn with_policy() -> Self {
        Self {
            _policy: PhantomData,
        }
    }

    /// Adds two integers.
    #[inline]
    pub fn add(&self, a: i32, b: i32) -> CalcResult<i32> {
        P::resolve(a.checked_add_val(b), || a.wrapping_add_val(b), Operation::Add)
    }

    /// Subtracts `b` from `a`.
    #[inline]
    pub fn subtract(&self, a: i32, b: i32) -> CalcResult<i32> {
        P::resolve(
            a.checked_sub_val(b),
            || a.wrapping_sub_val(b),
            Operation::Subtract,
        )
    }

    /// Multiplies two integers.
    #[inline]
    pub fn multiply(&self, a: i32, b: i32) -> CalcResult<i32> {
        P::resolve(
            a.checked_mul_val(b),
            || a.wrapping_mul_val(b),
            Operation::Multiply,
        )
    }

    /// Divides `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// `DivideByZero` when `b == 0`; under `Checked`, `Overflow` for
    /// `(i32::MIN, -1)`.
    #[inline]
    pub fn divide(&self, a: i32, b: i32) -> CalcResult<i32> {
        ensure_nonzero(b)?;
        P::resolve(
            a.checked_div_val(b),
            || a.wrapping_div_val(b),
            Operation::Divide,
        )
    }

    /// Remainder of the truncating division of `a` by `b`.
    ///
    /// Satisfies `a == divide(a, b) * b + remainder(a, b)` whenever the
    /// quotient is representable.
    #[inline]
    pub fn remainder(&self, a: i32, b: i32) -> CalcResult<i32> {
        ensure_nonzero(b)?;
        P::resolve(
            a.checked_rem_val(b),
            || a.wrapping_rem_val(b),
            Operation::Remainder,
        )
    }
}

impl<P> std::fmt::Display for BasicCalc<P>
where
    P: OverflowPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BasicCalc({})", P::NAME)
    }
}

#[inline]
fn ensure_nonzero(divisor: i32) -> CalcResult<()> {
    if divisor == 0 {
        tracing::debug!("rejected division by zero");
        return Err(CalcError::DivideByZero);
    }
    Ok(())
}
