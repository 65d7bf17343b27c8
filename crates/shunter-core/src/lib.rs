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

//! # Shunter Core
//!
//! Foundational, domain-agnostic primitives for the Shunter rolling-stock
//! ecosystem. This crate consolidates the reusable building blocks that
//! underpin the higher-level model and yard crates, focused on zero-cost
//! abstractions and dense memory layouts.
//!
//! ## Modules
//!
//! - `index`: Phantom-tagged, strongly typed indices (`SlotIndex<T>`) that
//!   compile down to a transparent `usize` while preventing accidental mixing
//!   of index spaces at compile time.
//! - `link`: Sentinel-encoded optional indices (`SlotLink<T>`) that keep a
//!   link to a neighbouring slot in a single machine word, avoiding the
//!   discriminant overhead of `Option` in dense link arrays.
//!
//! ## Motivation
//!
//! Chain-structured arenas store their topology in flat `next`/`prev`
//! columns. Raw `usize` entries invite accidental swaps and hard-to-trace
//! bugs, and `Option<usize>` doubles the width of every column. The two
//! module primitives recover both type safety and the one-word layout.

pub mod index;
pub mod link;
