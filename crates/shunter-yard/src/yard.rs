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

use fixedbitset::FixedBitSet;
use shunter_model::index::{WagonIndex, WagonLink};
use shunter_model::wagon::{Wagon, WagonId, WagonKind};

/// An error raised when a coupling precondition is violated.
///
/// A failed coupling indicates misuse of the chain layer, not an expected
/// runtime condition; nothing is mutated when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouplingError {
    /// The front and tail handle refer to the same wagon.
    SelfCoupling { wagon: WagonIndex },
    /// The front wagon already has a wagon coupled behind it.
    FrontOccupied { front: WagonIndex, next: WagonIndex },
    /// The tail wagon already has a wagon coupled in front of it.
    TailOccupied { tail: WagonIndex, prev: WagonIndex },
}

impl std::fmt::Display for CouplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfCoupling { wagon } => {
                write!(f, "Wagon {} cannot be coupled to itself", wagon.get())
            }
            Self::FrontOccupied { front, next } => write!(
                f,
                "Wagon {} already has a wagon coupled behind it (wagon {})",
                front.get(),
                next.get()
            ),
            Self::TailOccupied { tail, prev } => write!(
                f,
                "Wagon {} already has a wagon coupled in front of it (wagon {})",
                tail.get(),
                prev.get()
            ),
        }
    }
}

impl std::error::Error for CouplingError {}

/// A violation found by [`Yard::audit_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditViolation {
    /// `next` of a wagon is not mirrored by `prev` of its successor.
    BrokenForwardLink { wagon: WagonIndex, next: WagonIndex },
    /// `prev` of a wagon is not mirrored by `next` of its predecessor.
    BrokenBackwardLink { wagon: WagonIndex, prev: WagonIndex },
    /// The walk reached a wagon it had already visited.
    CycleDetected { wagon: WagonIndex },
}

impl std::fmt::Display for AuditViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BrokenForwardLink { wagon, next } => write!(
                f,
                "Forward link of wagon {} is not mirrored by wagon {}",
                wagon.get(),
                next.get()
            ),
            Self::BrokenBackwardLink { wagon, prev } => write!(
                f,
                "Backward link of wagon {} is not mirrored by wagon {}",
                wagon.get(),
                prev.get()
            ),
            Self::CycleDetected { wagon } => {
                write!(f, "Sequence visits wagon {} twice", wagon.get())
            }
        }
    }
}

impl std::error::Error for AuditViolation {}

/// The wagon arena.
///
/// Wagon records are stored in flat columns (`ids`, `kinds`, `next`, `prev`)
/// and addressed by stable [`WagonIndex`] handles. The `next`/`prev` columns
/// encode every doubly-linked wagon chain in play; a chain is identified by
/// the handle of its first wagon. Registered wagons are never deallocated,
/// so handles stay valid for the lifetime of the yard.
///
/// The link columns maintain the mirror invariant between public calls:
/// whenever `next` of `a` is `b`, `prev` of `b` is `a`, and symmetrically.
///
/// # Examples
///
/// ```rust
/// use shunter_model::wagon::{Wagon, WagonId};
/// use shunter_yard::yard::Yard;
///
/// let mut yard = Yard::new();
/// let a = yard.register(Wagon::passenger(WagonId::new(1), 36));
/// let b = yard.register(Wagon::passenger(WagonId::new(2), 36));
///
/// yard.couple(a, b).unwrap();
/// assert_eq!(yard.sequence_length(a), 2);
/// assert_eq!(yard.last_in_sequence(a), b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Yard {
    ids: Vec<WagonId>,
    kinds: Vec<WagonKind>,
    next: Vec<WagonLink>,
    prev: Vec<WagonLink>,
}

impl Yard {
    /// Creates an empty yard.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty yard with room for `capacity` wagons before the
    /// columns reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            prev: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of registered wagons.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if no wagons have been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Registers a wagon and returns its arena handle.
    ///
    /// The wagon starts out standalone: both links empty.
    pub fn register(&mut self, wagon: Wagon) -> WagonIndex {
        let index = WagonIndex::new(self.ids.len());
        self.ids.push(wagon.id());
        self.kinds.push(wagon.kind());
        self.next.push(WagonLink::none());
        self.prev.push(WagonLink::none());
        index
    }

    /// Returns the id of the given wagon.
    #[inline]
    pub fn id(&self, wagon: WagonIndex) -> WagonId {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::id` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        self.ids[wagon.get()]
    }

    /// Returns the payload variant of the given wagon.
    #[inline]
    pub fn kind(&self, wagon: WagonIndex) -> WagonKind {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::kind` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        self.kinds[wagon.get()]
    }

    /// Reconstructs the descriptor of the given wagon.
    #[inline]
    pub fn wagon(&self, wagon: WagonIndex) -> Wagon {
        Wagon::new(self.id(wagon), self.kind(wagon))
    }

    /// Returns the link to the wagon coupled behind the given one.
    #[inline]
    pub fn next(&self, wagon: WagonIndex) -> WagonLink {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::next` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        self.next[wagon.get()]
    }

    /// Returns the link to the wagon coupled in front of the given one.
    #[inline]
    pub fn prev(&self, wagon: WagonIndex) -> WagonLink {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::prev` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        self.prev[wagon.get()]
    }

    /// Checks if the given wagon has a wagon coupled behind it.
    #[inline]
    pub fn has_next(&self, wagon: WagonIndex) -> bool {
        self.next(wagon).is_some()
    }

    /// Checks if the given wagon has a wagon coupled in front of it.
    #[inline]
    pub fn has_prev(&self, wagon: WagonIndex) -> bool {
        self.prev(wagon).is_some()
    }

    /// Couples `tail` directly behind `front`.
    ///
    /// Succeeds if and only if `front` has no wagon behind it and `tail` has
    /// no wagon in front of it; both links are then set as mirror images.
    /// On error nothing is mutated.
    pub fn couple(&mut self, front: WagonIndex, tail: WagonIndex) -> Result<(), CouplingError> {
        debug_assert!(
            front.get() < self.len(),
            "called `Yard::couple` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            front.get()
        );
        debug_assert!(
            tail.get() < self.len(),
            "called `Yard::couple` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            tail.get()
        );

        if front == tail {
            return Err(CouplingError::SelfCoupling { wagon: front });
        }
        if let Some(next) = self.next[front.get()].into_option() {
            return Err(CouplingError::FrontOccupied { front, next });
        }
        if let Some(prev) = self.prev[tail.get()].into_option() {
            return Err(CouplingError::TailOccupied { tail, prev });
        }

        self.next[front.get()] = WagonLink::some(tail);
        self.prev[tail.get()] = WagonLink::some(front);
        Ok(())
    }

    /// Couples each adjacent pair of `order` in turn.
    ///
    /// Stops at the first failed coupling; pairs coupled before the failure
    /// keep their links.
    pub fn couple_sequence(&mut self, order: &[WagonIndex]) -> Result<(), CouplingError> {
        for pair in order.windows(2) {
            self.couple(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Severs the link behind the given wagon.
    ///
    /// Returns the former tail (now the standalone head of what was behind),
    /// or an empty link if there was nothing behind.
    pub fn decouple_tail(&mut self, wagon: WagonIndex) -> WagonLink {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::decouple_tail` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        let tail = self.next[wagon.get()];
        if let Some(t) = tail.into_option() {
            self.next[wagon.get()] = WagonLink::none();
            self.prev[t.get()] = WagonLink::none();
        }
        tail
    }

    /// Severs the link in front of the given wagon.
    ///
    /// Returns the former predecessor (whose own tail link is cleared), or
    /// an empty link if the wagon had none.
    pub fn decouple_front(&mut self, wagon: WagonIndex) -> WagonLink {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::decouple_front` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        let front = self.prev[wagon.get()];
        if let Some(p) = front.into_option() {
            self.prev[wagon.get()] = WagonLink::none();
            self.next[p.get()] = WagonLink::none();
        }
        front
    }

    /// Splices the given wagon out of its chain.
    ///
    /// Its former neighbours, where present, are coupled to each other; both
    /// of the wagon's own links are cleared. Works at either boundary of a
    /// chain and on standalone wagons.
    pub fn cut_out(&mut self, wagon: WagonIndex) {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::cut_out` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        let front = self.prev[wagon.get()];
        let tail = self.next[wagon.get()];

        self.next[wagon.get()] = WagonLink::none();
        self.prev[wagon.get()] = WagonLink::none();

        if let Some(f) = front.into_option() {
            self.next[f.get()] = tail;
        }
        if let Some(t) = tail.into_option() {
            self.prev[t.get()] = front;
        }
    }

    /// Reverses the chain from `head` to its end.
    ///
    /// The former last wagon becomes the head of the reversed run and is
    /// returned. If a wagon precedes `head`, it keeps its position and is
    /// re-linked to the new head, so reversing a tail section leaves the
    /// front section untouched. Reversing a single wagon is the identity.
    pub fn reverse_sequence(&mut self, head: WagonIndex) -> WagonIndex {
        debug_assert!(
            head.get() < self.len(),
            "called `Yard::reverse_sequence` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            head.get()
        );
        let anchor = self.prev[head.get()];

        // Swap the link pair of every wagon in the run; the former last
        // wagon comes out as the new head.
        let mut new_head = head;
        let mut cursor = WagonLink::some(head);
        while let Some(wagon) = cursor.into_option() {
            let i = wagon.get();
            let following = self.next[i];
            self.next[i] = self.prev[i];
            self.prev[i] = following;
            new_head = wagon;
            cursor = following;
        }

        // The old head now ends the run; the external predecessor, if any,
        // points at the new head.
        self.next[head.get()] = WagonLink::none();
        if let Some(a) = anchor.into_option() {
            self.next[a.get()] = WagonLink::some(new_head);
        }
        self.prev[new_head.get()] = anchor;

        new_head
    }

    /// Returns the last wagon of the chain containing the given wagon,
    /// which is the wagon itself if nothing is coupled behind it.
    pub fn last_in_sequence(&self, wagon: WagonIndex) -> WagonIndex {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::last_in_sequence` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        let mut last = wagon;
        while let Some(next) = self.next[last.get()].into_option() {
            last = next;
        }
        last
    }

    /// Counts the wagons strictly behind the given wagon.
    pub fn tail_length(&self, wagon: WagonIndex) -> usize {
        debug_assert!(
            wagon.get() < self.len(),
            "called `Yard::tail_length` with a wagon index out of bounds: the len is {} but the index is {}",
            self.len(),
            wagon.get()
        );
        let mut count = 0;
        let mut cursor = self.next[wagon.get()];
        while let Some(next) = cursor.into_option() {
            count += 1;
            cursor = self.next[next.get()];
        }
        count
    }

    /// Counts the wagons from the given wagon to the end of its chain,
    /// including the wagon itself.
    #[inline]
    pub fn sequence_length(&self, wagon: WagonIndex) -> usize {
        self.tail_length(wagon) + 1
    }

    /// Iterates the chain from `start` to its end.
    ///
    /// An empty link yields an empty iterator.
    #[inline]
    pub fn iter_sequence(&self, start: WagonLink) -> SequenceIter<'_> {
        SequenceIter {
            next: &self.next,
            cursor: start,
        }
    }

    /// Walks the chain from `head` and verifies its structural integrity:
    /// every link must be mirrored by its counterpart, and no wagon may be
    /// visited twice.
    pub fn audit_sequence(&self, head: WagonLink) -> Result<(), AuditViolation> {
        let mut visited = FixedBitSet::with_capacity(self.len());
        let mut cursor = head;
        while let Some(wagon) = cursor.into_option() {
            debug_assert!(wagon.get() < self.len());
            if visited.contains(wagon.get()) {
                return Err(AuditViolation::CycleDetected { wagon });
            }
            visited.insert(wagon.get());

            if let Some(next) = self.next[wagon.get()].into_option() {
                if self.prev[next.get()].into_option() != Some(wagon) {
                    return Err(AuditViolation::BrokenForwardLink { wagon, next });
                }
            }
            if let Some(prev) = self.prev[wagon.get()].into_option() {
                if self.next[prev.get()].into_option() != Some(wagon) {
                    return Err(AuditViolation::BrokenBackwardLink { wagon, prev });
                }
            }

            cursor = self.next[wagon.get()];
        }
        Ok(())
    }
}

/// A forward iterator over a wagon chain.
#[derive(Debug, Clone)]
pub struct SequenceIter<'a> {
    next: &'a [WagonLink],
    cursor: WagonLink,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = WagonIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.cursor.into_option()?;
        self.cursor = self.next[out.get()];
        Some(out)
    }
}

impl<'a> std::iter::FusedIterator for SequenceIter<'a> {}
