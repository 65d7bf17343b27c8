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

//! # Strongly Typed Slot Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing indices from
//! different arenas. `SlotIndex<T>` carries a tag type `T: SlotTag` that
//! encodes intent at the type level, while compiling down to a transparent
//! `usize` (no runtime overhead).
//!
//! ## Motivation
//!
//! An arena-backed chain structure hands out handles into its slot storage.
//! Raw `usize` handles from different arenas are interchangeable by accident;
//! phantom-tagged indices make such mix-ups a compile error with minimal
//! ceremony.
//!
//! ## Highlights
//!
//! - `SlotTag` defines a human-readable `NAME` used for `Display`/`Debug`.
//! - `SlotIndex<T>` offers `new` and `get`.
//! - Conversions: `From<usize>` and `From<SlotIndex<T>> for usize`.
//! - Zero-cost: `#[repr(transparent)]` over `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use shunter_core::index::{SlotIndex, SlotTag};
//!
//! #[derive(Clone)]
//! struct TrackTag;
//! impl SlotTag for TrackTag { const NAME: &'static str = "TrackIndex"; }
//!
//! type TrackIndex = SlotIndex<TrackTag>;
//! let t = TrackIndex::new(3);
//! assert_eq!(t.get(), 3);
//! assert_eq!(format!("{}", t), "TrackIndex(3)");
//! ```

/// A trait to tag typed slot indices with a name for debugging and display
/// purposes.
///
/// # Examples
///
/// ```rust
/// # use shunter_core::index::SlotTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl SlotTag for MyTag {
///     const NAME: &'static str = "MyIndex";
/// }
/// ```
pub trait SlotTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed arena index that is associated with a specific tag type
/// `T`.
///
/// This struct wraps a `usize` index and uses a phantom type parameter `T`
/// to provide type safety and prevent mixing indices of different arenas.
///
/// # Examples
///
/// ```rust
/// # use shunter_core::index::{SlotIndex, SlotTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl SlotTag for MyTag {
///    const NAME: &'static str = "MyIndex";
/// }
///
/// type MyIndex = SlotIndex<MyTag>;
///
/// let index = MyIndex::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> SlotIndex<T> {
    /// Creates a new `SlotIndex` with the given `usize` index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl SlotTag for MyTag {
    ///    const NAME: &'static str = "MyIndex";
    /// }
    ///
    /// type MyIndex = SlotIndex<MyTag>;
    ///
    /// let index = MyIndex::new(5);
    /// assert_eq!(index.get(), 5);
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl SlotTag for MyTag {
    ///    const NAME: &'static str = "MyIndex";
    /// }
    ///
    /// type MyIndex = SlotIndex<MyTag>;
    ///
    /// let index = MyIndex::new(7);
    /// assert_eq!(index.get(), 7);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for SlotIndex<T>
where
    T: SlotTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for SlotIndex<T>
where
    T: SlotTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for SlotIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<SlotIndex<T>> for usize {
    fn from(typed_index: SlotIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Define a dummy tag for testing purposes
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl SlotTag for TestTag {
        const NAME: &'static str = "TestIdx";
    }

    // Type alias for convenience inside tests
    type TestIndex = SlotIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let idx = TestIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions() {
        // From usize
        let idx: TestIndex = 42.into();
        assert_eq!(idx.get(), 42);

        // Into usize
        let val: usize = idx.into();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let idx = TestIndex::new(7);
        // Uses the NAME const from the trait
        assert_eq!(format!("{}", idx), "TestIdx(7)");
        assert_eq!(format!("{:?}", idx), "TestIdx(7)");
    }

    #[test]
    fn test_ordering() {
        let a = TestIndex::new(1);
        let b = TestIndex::new(2);
        assert!(a < b);
        assert_eq!(a, TestIndex::new(1));

        let mut v = vec![b, a];
        v.sort();
        assert_eq!(v, vec![a, b]);
    }
}
