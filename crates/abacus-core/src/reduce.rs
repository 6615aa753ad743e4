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

//! # Array Reductions
//!
//! Stateless reductions over an optional slice of integers. An absent slice
//! (`None`) is treated exactly like an empty one: `sum` yields `0`, while
//! `max` and `min` fail with `CalcError::EmptyInput`.
//!
//! `sum` accumulates in `i64` and narrows the total to `i32` at the end, so
//! intermediate excursions outside the `i32` range are harmless as long as
//! the final total fits.
//!
//! ```rust
//! use abacus_core::reduce;
//!
//! assert_eq!(reduce::sum(Some(&[1, 2, 3, 4, 5][..])), Ok(15));
//! assert_eq!(reduce::sum(None), Ok(0));
//! assert_eq!(reduce::max(Some(&[1, 5, 3, 2, 4][..])), Ok(5));
//! assert!(reduce::min::<i32>(None).is_err());
//! ```

use crate::{
    error::{CalcError, CalcResult, Operation},
    num::ops::{CheckedArithmeticVal, WrappingArithmeticVal},
    policy::{Checked, OverflowPolicy},
};
use num_traits::PrimInt;

/// Returns the slice if it is present and non-empty.
///
/// # Errors
///
/// `EmptyInput` when `values` is `None` or empty.
#[inline]
pub fn require_non_empty<T>(values: Option<&[T]>) -> CalcResult<&[T]> {
    match values {
        Some(values) if !values.is_empty() => Ok(values),
        _ => {
            tracing::debug!(present = values.is_some(), "rejected empty sequence");
            Err(CalcError::EmptyInput)
        }
    }
}

/// Sums the values under the `Checked` policy.
///
/// # Errors
///
/// `Overflow` if the total does not fit in `i32`.
#[inline]
pub fn sum(values: Option<&[i32]>) -> CalcResult<i32> {
    sum_with::<Checked>(values)
}

/// Sums the values, narrowing the `i64` total to `i32` under policy `P`.
pub fn sum_with<P>(values: Option<&[i32]>) -> CalcResult<i32>
where
    P: OverflowPolicy,
{
    let values = values.unwrap_or_default();
    let total = values.iter().try_fold(0i64, |acc, &v| {
        let v = i64::from(v);
        P::resolve(
            acc.checked_add_val(v),
            || acc.wrapping_add_val(v),
            Operation::Sum,
        )
    })?;

    P::resolve(
        i32::try_from(total).ok(),
        || total as i32,
        Operation::Sum,
    )
}

/// Returns the largest value.
///
/// # Errors
///
/// `EmptyInput` when `values` is `None` or empty.
#[inline]
pub fn max<T>(values: Option<&[T]>) -> CalcResult<T>
where
    T: PrimInt,
{
    require_non_empty(values)?
        .iter()
        .copied()
        .max()
        .ok_or(CalcError::EmptyInput)
}

/// Returns the smallest value.
///
/// # Errors
///
/// `EmptyInput` when `values` is `None` or empty.
#[inline]
pub fn min<T>(values: Option<&[T]>) -> CalcResult<T>
where
    T: PrimInt,
{
    require_non_empty(values)?
        .iter()
        .copied()
        .min()
        .ok_or(CalcError::EmptyInput)
}
