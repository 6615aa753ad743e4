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

//! # Abacus Core
//!
//! Checked integer arithmetic over signed 32-bit operands and stateless
//! reductions over integer slices. Higher-level calculators (see the
//! `abacus-sci` crate) build on the primitives exported here.
//!
//! ## Modules
//!
//! - `calc`: `BasicCalc`, with add, subtract, multiply, divide and remainder
//!   over `i32`. Division truncates toward zero.
//! - `reduce`: `sum`, `max` and `min` over optional slices.
//! - `policy`: Zero-sized overflow policies (`Checked`, `Wrapping`) that
//!   parameterize the calculators.
//! - `error`: `CalcError`, the single error type shared by all operations.
//! - `num`: By-value checked and wrapping arithmetic traits.
//!
//! ## Purpose
//!
//! All operations are pure functions of their arguments. Nothing here holds
//! state, allocates beyond its result, or performs I/O, so every value is
//! freely shareable across threads.

pub mod calc;
pub mod error;
pub mod num;
pub mod policy;
pub mod reduce;
