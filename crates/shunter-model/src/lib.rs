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

//! # Shunter Model
//!
//! **The Core Domain Model for the Shunter Train Composition Library.**
//!
//! This crate defines the fundamental value types used to describe rolling
//! stock. It serves as the data interchange layer between the problem
//! definition (user input) and the mutable composition structures
//! (`shunter_yard`).
//!
//! ## Architecture
//!
//! * **`index`**: Provides strongly-typed handles (`WagonIndex`, `WagonLink`)
//!   into the wagon arena to prevent logical indexing errors.
//! * **`locomotive`**: The pulling engine, which carries the capacity limit
//!   for the wagon sequence behind it.
//! * **`wagon`**: Wagon identity (`WagonId`) and payload (`WagonKind`), with
//!   the passenger/freight distinction expressed as a tagged union rather
//!   than a class hierarchy.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Handles are distinct types. You cannot accidentally
//!     use a raw `usize` or a wagon id where an arena handle is expected.
//! 2.  **Plain Data**: Every type in this crate is a small `Copy`-friendly
//!     value with no interior links; all chain topology lives in the arena.

pub mod index;
pub mod locomotive;
pub mod wagon;
