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

//! # Shunter Yard
//!
//! **Mutable Composition Structures for the Shunter Train Library.**
//!
//! This crate hosts the wagon arena and the train type built on top of it.
//! Wagons live in a [`yard::Yard`]: a Structure-of-Arrays arena whose
//! `next`/`prev` columns encode every doubly-linked wagon chain in play. A
//! [`train::Train`] is a locomotive plus a head link into that arena;
//! attaching, inserting, splitting and reversing are splices of the link
//! columns.
//!
//! ## Modules
//!
//! - `yard`: The arena, the checked chain primitives (`couple`,
//!   `decouple_tail`, `cut_out`, `reverse_sequence`, ...), sequence
//!   iteration, and the integrity audit.
//! - `train`: Train-level composition operations with validate-first,
//!   all-or-nothing semantics, derived queries, and the deterministic
//!   `Display` rendering.
//!
//! ## Design Philosophy
//!
//! 1.  **Memory Layout**: Chain topology is stored in flat link columns
//!     (SoA) rather than per-wagon boxes, so walks touch two dense arrays.
//! 2.  **Two Error Tiers**: Misusing a chain primitive is a programming
//!     error and surfaces as a `Result`/panic at the yard layer; train
//!     operations report expected rejections (capacity, kind mismatch, bad
//!     position) as plain `bool` and never mutate on rejection.
//! 3.  **Fail-Fast**: Every operation validates before its first link
//!     write, and debug builds bounds-check every handle.

pub mod train;
pub mod yard;
