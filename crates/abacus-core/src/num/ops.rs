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

//! # Numeric Operation Traits
//!
//! Checked and wrapping arithmetic by value (no references) for `i32` and
//! `i64`. Every method forwards to the inherent primitive method of the same
//! family, so semantics are exactly those of the standard library:
//! division and remainder truncate toward zero, and the remainder carries the
//! sign of the dividend.

use core::ops::{Add, Div, Mul, Rem, Sub};

/// Checked arithmetic by value.
///
/// Each method returns `None` when the true mathematical result does not fit
/// the type, or when a divisor is zero.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::CheckedArithmeticVal;
/// assert_eq!(i32::MAX.checked_add_val(1), None);
/// assert_eq!(7i32.checked_div_val(2), Some(3));
/// assert_eq!(i32::MIN.checked_div_val(-1), None);
/// ```
pub trait CheckedArithmeticVal:
    Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + Rem<Self, Output = Self>
{
    /// Performs checked addition, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
    /// Performs checked subtraction, returning `None` on overflow.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
    /// Performs checked multiplication, returning `None` on overflow.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
    /// Performs checked division, returning `None` on a zero divisor or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
    /// Performs checked remainder, returning `None` on a zero divisor or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// Wrapping arithmetic by value.
///
/// Results wrap around at the type boundary. Division and remainder still
/// panic on a zero divisor, so callers must reject zero first.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::WrappingArithmeticVal;
/// assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
/// assert_eq!(i32::MIN.wrapping_div_val(-1), i32::MIN);
/// assert_eq!(i32::MIN.wrapping_rem_val(-1), 0);
/// ```
pub trait WrappingArithmeticVal: Sized {
    /// Performs wrapping addition.
    fn wrapping_add_val(self, v: Self) -> Self;
    /// Performs wrapping subtraction.
    fn wrapping_sub_val(self, v: Self) -> Self;
    /// Performs wrapping multiplication.
    fn wrapping_mul_val(self, v: Self) -> Self;
    /// Performs wrapping division. Panics if `v` is zero.
    fn wrapping_div_val(self, v: Self) -> Self;
    /// Performs wrapping remainder. Panics if `v` is zero.
    fn wrapping_rem_val(self, v: Self) -> Self;
}

macro_rules! forward_impl_val {
    ($method:ident, $t:ty, $src_method:ident, $out:ty) => {
        #[inline(always)]
        fn $method(self, v: $t) -> $out {
            <$t>::$src_method(self, v)
        }
    };
}

macro_rules! arithmetic_impl_val {
    ($t:ty) => {
        impl CheckedArithmeticVal for $t {
            forward_impl_val!(checked_add_val, $t, checked_add, Option<$t>);
            forward_impl_val!(checked_sub_val, $t, checked_sub, Option<$t>);
            forward_impl_val!(checked_mul_val, $t, checked_mul, Option<$t>);
            forward_impl_val!(checked_div_val, $t, checked_div, Option<$t>);
            forward_impl_val!(checked_rem_val, $t, checked_rem, Option<$t>);
        }

        impl WrappingArithmeticVal for $t {
            forward_impl_val!(wrapping_add_val, $t, wrapping_add, $t);
            forward_impl_val!(wrapping_sub_val, $t, wrapping_sub, $t);
            forward_impl_val!(wrapping_mul_val, $t, wrapping_mul, $t);
            forward_impl_val!(wrapping_div_val, $t, wrapping_div, $t);
            forward_impl_val!(wrapping_rem_val, $t, wrapping_rem, $t);
        }
    };
}

arithmetic_impl_val!(i32);
arithmetic_impl_val!(i64);
