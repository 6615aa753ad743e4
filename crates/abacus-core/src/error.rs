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

//! Error type shared by every calculator operation.
//!
//! Each failing operation produces exactly one `CalcError` variant. The
//! variant is the stable contract callers match on; the message text is
//! informative, although the substrings `"Division by zero"`,
//! `"non-negative"`, `"not defined for negative"` and
//! `"must not be null or empty"` are kept stable for callers that inspect them.

use std::fmt::Display;

/// The arithmetic operation that produced an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Sum,
    Factorial,
}

impl Operation {
    /// Returns the lowercase name of the operation.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Remainder => "remainder",
            Self::Sum => "sum",
            Self::Factorial => "factorial",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error type for calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The divisor was zero.
    #[error("Division by zero is not allowed")]
    DivideByZero,
    /// The true result does not fit the declared result width.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// The operation whose result fell out of range.
        operation: Operation,
    },
    /// A precondition on a scalar argument was violated.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// A sequence argument was absent or empty where non-empty is required.
    #[error("Array must not be null or empty")]
    EmptyInput,
}

/// Result alias used throughout the calculators.
pub type CalcResult<T> = Result<T, CalcError>;
