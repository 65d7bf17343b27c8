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

//! # Sentinel-Encoded Optional Indices
//!
//! `SlotLink<T>` is an optional [`SlotIndex<T>`] that uses a sentinel
//! encoding instead of `Option` to stay a single machine word. In dense
//! `next`/`prev` link columns this halves the memory traffic per hop and
//! keeps neighbouring links on the same cache line.
//!
//! Encoding:
//! - Values below `usize::MAX` represent a concrete slot index.
//! - `usize::MAX` is reserved to indicate absence.
//!
//! This convention assumes an arena never grows to `usize::MAX` slots. If
//! the full index range is meaningful in your domain, use
//! `Option<SlotIndex<T>>` instead.

use crate::index::{SlotIndex, SlotTag};

/// An optional link to a slot in an arena, encoded in one machine word.
///
/// # Examples
///
/// ```rust
/// use shunter_core::index::{SlotIndex, SlotTag};
/// use shunter_core::link::SlotLink;
///
/// #[derive(Clone, PartialEq)]
/// struct TrackTag;
/// impl SlotTag for TrackTag { const NAME: &'static str = "TrackIndex"; }
///
/// type TrackIndex = SlotIndex<TrackTag>;
/// type TrackLink = SlotLink<TrackTag>;
///
/// let link = TrackLink::some(TrackIndex::new(3));
/// assert!(link.is_some());
/// assert_eq!(link.into_option(), Some(TrackIndex::new(3)));
///
/// let empty = TrackLink::none();
/// assert!(empty.is_none());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotLink<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> SlotLink<T> {
    const NONE_SENTINEL: usize = usize::MAX;

    /// Creates a `SlotLink` from an `Option<SlotIndex<T>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::from_option(Some(MyIndex::new(5)));
    /// assert!(link.is_some());
    /// assert_eq!(link.raw(), 5);
    /// ```
    #[inline]
    pub fn from_option(value: Option<SlotIndex<T>>) -> Self {
        match value {
            Some(index) => Self::some(index),
            None => Self::none(),
        }
    }

    /// Creates a `SlotLink` from a raw `usize` without checking for the
    /// sentinel. If you pass `usize::MAX`, it will be treated as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// let link: SlotLink<MyTag> = SlotLink::from_raw(10);
    /// assert!(link.is_some());
    /// assert_eq!(link.raw(), 10);
    /// ```
    #[inline]
    pub const fn from_raw(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Creates a `SlotLink` representing `Some`.
    ///
    /// # Panics
    ///
    /// This function will panic if the provided index is the reserved
    /// sentinel `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(5));
    /// assert!(link.is_some());
    /// ```
    pub fn some(index: SlotIndex<T>) -> Self {
        assert!(
            index.get() != Self::NONE_SENTINEL,
            "called `SlotLink::some` with the reserved sentinel index: {}",
            index.get()
        );

        Self::from_raw(index.get())
    }

    /// Creates a `SlotLink` representing `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// let link: SlotLink<MyTag> = SlotLink::none();
    /// assert!(link.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::from_raw(Self::NONE_SENTINEL)
    }

    /// Checks if the `SlotLink` represents `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// let link: SlotLink<MyTag> = SlotLink::none();
    /// assert!(link.is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.index == Self::NONE_SENTINEL
    }

    /// Checks if the `SlotLink` represents `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(3));
    /// assert!(link.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the raw `usize`, including the sentinel if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(7));
    /// assert_eq!(link.raw(), 7);
    /// ```
    #[inline]
    pub const fn raw(&self) -> usize {
        self.index
    }

    /// Converts the `SlotLink` back into an `Option<SlotIndex<T>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone, PartialEq)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(4));
    /// assert_eq!(link.into_option(), Some(MyIndex::new(4)));
    ///
    /// let empty: SlotLink<MyTag> = SlotLink::none();
    /// assert_eq!(empty.into_option(), None);
    /// ```
    #[inline]
    pub const fn into_option(&self) -> Option<SlotIndex<T>> {
        if self.is_none() {
            None
        } else {
            Some(SlotIndex::new(self.index))
        }
    }

    /// Unwraps the `SlotLink`, panicking if it is `None`.
    ///
    /// # Panics
    ///
    /// This function will panic if called on a `SlotLink` that represents
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone, PartialEq)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(6));
    /// assert_eq!(link.unwrap(), MyIndex::new(6));
    ///
    /// let empty: SlotLink<MyTag> = SlotLink::none();
    /// // The following line would panic:
    /// // empty.unwrap();
    /// ```
    pub fn unwrap(&self) -> SlotIndex<T> {
        if self.is_none() {
            panic!("called `SlotLink::unwrap()` on a `None` link")
        }
        SlotIndex::new(self.index)
    }

    /// Unwraps the `SlotLink`, returning a default index if it is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_core::index::{SlotIndex, SlotTag};
    /// # use shunter_core::link::SlotLink;
    /// # #[derive(Clone, PartialEq)]
    /// # struct MyTag;
    /// # impl SlotTag for MyTag { const NAME: &'static str = "MyIndex"; }
    /// # type MyIndex = SlotIndex<MyTag>;
    /// let link = SlotLink::some(MyIndex::new(8));
    /// assert_eq!(link.unwrap_or(MyIndex::new(0)), MyIndex::new(8));
    ///
    /// let empty: SlotLink<MyTag> = SlotLink::none();
    /// assert_eq!(empty.unwrap_or(MyIndex::new(0)), MyIndex::new(0));
    /// ```
    #[inline]
    pub fn unwrap_or(&self, default: SlotIndex<T>) -> SlotIndex<T> {
        if self.is_none() {
            default
        } else {
            SlotIndex::new(self.index)
        }
    }
}

impl<T> std::fmt::Debug for SlotLink<T>
where
    T: SlotTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "SlotLink(None)")
        } else {
            write!(f, "SlotLink(Some({:?}))", SlotIndex::<T>::new(self.index))
        }
    }
}

impl<T> std::fmt::Display for SlotLink<T>
where
    T: SlotTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "SlotLink(None)")
        } else {
            write!(f, "SlotLink({})", SlotIndex::<T>::new(self.index))
        }
    }
}

impl<T> From<Option<SlotIndex<T>>> for SlotLink<T> {
    #[inline]
    fn from(value: Option<SlotIndex<T>>) -> Self {
        SlotLink::from_option(value)
    }
}

impl<T> From<SlotLink<T>> for Option<SlotIndex<T>> {
    #[inline]
    fn from(val: SlotLink<T>) -> Self {
        val.into_option()
    }
}

impl<T> From<SlotIndex<T>> for SlotLink<T> {
    /// Converts a definite index into a link.
    ///
    /// # Panics
    ///
    /// Panics if the index is the reserved sentinel `usize::MAX`.
    #[inline]
    fn from(index: SlotIndex<T>) -> Self {
        SlotLink::some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl SlotTag for TestTag {
        const NAME: &'static str = "TestIdx";
    }

    type TestIndex = SlotIndex<TestTag>;
    type TestLink = SlotLink<TestTag>;

    #[test]
    fn test_some_and_none() {
        let link = TestLink::some(TestIndex::new(3));
        assert!(link.is_some());
        assert!(!link.is_none());
        assert_eq!(link.raw(), 3);

        let empty = TestLink::none();
        assert!(empty.is_none());
        assert!(!empty.is_some());
        assert_eq!(empty.raw(), usize::MAX);
    }

    #[test]
    fn test_option_round_trip() {
        let link = TestLink::from_option(Some(TestIndex::new(9)));
        assert_eq!(link.into_option(), Some(TestIndex::new(9)));

        let empty = TestLink::from_option(None);
        assert_eq!(empty.into_option(), None);

        let via_from: TestLink = Some(TestIndex::new(2)).into();
        let back: Option<TestIndex> = via_from.into();
        assert_eq!(back, Some(TestIndex::new(2)));
    }

    #[test]
    fn test_unwrap_variants() {
        let link = TestLink::some(TestIndex::new(5));
        assert_eq!(link.unwrap(), TestIndex::new(5));
        assert_eq!(link.unwrap_or(TestIndex::new(0)), TestIndex::new(5));

        let empty = TestLink::none();
        assert_eq!(empty.unwrap_or(TestIndex::new(0)), TestIndex::new(0));
    }

    #[test]
    #[should_panic(expected = "called `SlotLink::unwrap()` on a `None` link")]
    fn test_unwrap_none_panics() {
        let empty = TestLink::none();
        let _ = empty.unwrap();
    }

    #[test]
    #[should_panic(expected = "called `SlotLink::some` with the reserved sentinel index")]
    fn test_some_sentinel_panics() {
        let _ = TestLink::some(TestIndex::new(usize::MAX));
    }

    #[test]
    fn test_debug_and_display() {
        let link = TestLink::some(TestIndex::new(4));
        assert_eq!(format!("{}", link), "SlotLink(TestIdx(4))");
        assert_eq!(format!("{:?}", link), "SlotLink(Some(TestIdx(4)))");

        let empty = TestLink::none();
        assert_eq!(format!("{}", empty), "SlotLink(None)");
        assert_eq!(format!("{:?}", empty), "SlotLink(None)");
    }
}
