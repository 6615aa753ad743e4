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

//! # Overflow Policies
//!
//! Zero-sized marker types selecting how a calculator reacts when a result
//! leaves the range of its integer width. The policy is a type parameter of
//! the calculators, so it costs nothing at runtime and two calculators with
//! the same policy are indistinguishable.
//!
//! - `Checked` (the default): out-of-range results fail with
//!   `CalcError::Overflow`.
//! - `Wrapping`: out-of-range results wrap around in two's complement.
//!
//! Neither policy affects `DivideByZero`, `InvalidArgument` or `EmptyInput`.
//!
//! ```rust
//! use abacus_core::calc::BasicCalc;
//! use abacus_core::error::{CalcError, Operation};
//! use abacus_core::policy::Wrapping;
//!
//! let checked = BasicCalc::new();
//! assert_eq!(
//!     checked.add(i32::MAX, 1),
//!     Err(CalcError::Overflow { operation: Operation::Add })
//! );
//!
//! let wrapping = BasicCalc::<Wrapping>::with_policy();
//! assert_eq!(wrapping.add(i32::MAX, 1), Ok(i32::MIN));
//! ```

use crate::error::{CalcError, CalcResult, Operation};
use std::{fmt::Debug, hash::Hash};

/// Decides the outcome of an operation whose checked result may be absent.
pub trait OverflowPolicy:
    Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Human-readable policy name.
    const NAME: &'static str;

    /// Resolves an operation given its checked result and a wrapping fallback.
    ///
    /// `checked` is `None` exactly when the true result is out of range.
    /// `wrapping` is only evaluated when it is needed.
    fn resolve<T>(
        checked: Option<T>,
        wrapping: impl FnOnce() -> T,
        operation: Operation,
    ) -> CalcResult<T>;
}

/// Out-of-range results fail with `CalcError::Overflow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Checked;

impl OverflowPolicy for Checked {
    const NAME: &'static str = "checked";

    #[inline]
    fn resolve<T>(
        checked: Option<T>,
        _wrapping: impl FnOnce() -> T,
        operation: Operation,
    ) -> CalcResult<T> {
        checked.ok_or_else(|| {
            tracing::debug!(%operation, "arithmetic overflow");
            CalcError::Overflow { operation }
        })
    }
}

/// Out-of-range results wrap around in two's complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wrapping;

impl OverflowPolicy for Wrapping {
    const NAME: &'static str = "wrapping";

    #[inline]
    fn resolve<T>(
        checked: Option<T>,
        wrapping: impl FnOnce() -> T,
        _operation: Operation,
    ) -> CalcResult<T> {
        Ok(checked.unwrap_or_else(wrapping))
    }
}
