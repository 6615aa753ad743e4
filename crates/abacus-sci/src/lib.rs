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

//! # Abacus Scientific
//!
//! Derived arithmetic on top of `abacus-core`: integer power, factorial,
//! arithmetic mean and parity. `SciCalc` owns a `BasicCalc` and delegates
//! its multiplications and additions to it, so overflow behavior and errors
//! are exactly those of the basic calculator.
//!
//! ```rust
//! use abacus_sci::sci::SciCalc;
//!
//! let calc = SciCalc::new();
//! assert_eq!(calc.power(2, 3), Ok(8));
//! assert_eq!(calc.factorial(5), Ok(120));
//! assert_eq!(calc.average(Some(&[10, 20, 30][..])), Ok(20.0));
//! assert!(calc.is_even(-4));
//! ```

pub mod sci;
