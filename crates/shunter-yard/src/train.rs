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

use crate::yard::{SequenceIter, Yard};
use shunter_model::index::{WagonIndex, WagonLink};
use shunter_model::locomotive::Locomotive;
use shunter_model::wagon::{WagonId, WagonKind};

/// A train: one locomotive pulling an ordered sequence of wagons.
///
/// The train holds only the head link of its wagon chain; the chain itself
/// lives in a [`Yard`], which every operation takes explicitly. A train
/// upholds three invariants between public calls:
///
/// - its first wagon has no wagon in front of it,
/// - all of its wagons share one [`WagonKind`] variant,
/// - its wagon count never exceeds the locomotive's capacity.
///
/// Composition operations validate against these invariants before the
/// first link write and report rejection as `false`, leaving the train, the
/// involved wagons and any second train untouched. A wagon belongs to at
/// most one train at a time; handing the same chain to two trains is a
/// caller error the train cannot detect.
///
/// # Examples
///
/// ```rust
/// use shunter_model::locomotive::Locomotive;
/// use shunter_model::wagon::{Wagon, WagonId};
/// use shunter_yard::train::Train;
/// use shunter_yard::yard::Yard;
///
/// let mut yard = Yard::new();
/// let mut train = Train::new(Locomotive::new(1203, 7), "Amsterdam", "Paris");
///
/// let wagon = yard.register(Wagon::passenger(WagonId::new(8001), 36));
/// assert!(train.attach_to_rear(&mut yard, wagon));
/// assert_eq!(train.number_of_wagons(&yard), 1);
/// assert_eq!(train.total_number_of_seats(&yard), 36);
/// ```
#[derive(Debug, Clone)]
pub struct Train {
    engine: Locomotive,
    origin: String,
    destination: String,
    head: WagonLink,
}

impl Train {
    /// Creates a train with no wagons attached.
    pub fn new(
        engine: Locomotive,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            origin: origin.into(),
            destination: destination.into(),
            head: WagonLink::none(),
        }
    }

    /// Returns the locomotive.
    #[inline]
    pub fn engine(&self) -> &Locomotive {
        &self.engine
    }

    /// Returns the locomotive mutably.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut Locomotive {
        &mut self.engine
    }

    /// Returns the origin station.
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination station.
    #[inline]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the link to the first wagon.
    #[inline]
    pub fn first_wagon(&self) -> WagonLink {
        self.head
    }

    /// Checks if any wagons are attached.
    #[inline]
    pub fn has_wagons(&self) -> bool {
        self.head.is_some()
    }

    /// Checks if this is a passenger train. An empty train is neither a
    /// passenger nor a freight train.
    pub fn is_passenger_train(&self, yard: &Yard) -> bool {
        match self.head.into_option() {
            Some(first) => yard.kind(first).is_passenger(),
            None => false,
        }
    }

    /// Checks if this is a freight train. An empty train is neither a
    /// passenger nor a freight train.
    pub fn is_freight_train(&self, yard: &Yard) -> bool {
        match self.head.into_option() {
            Some(first) => yard.kind(first).is_freight(),
            None => false,
        }
    }

    /// Counts the attached wagons.
    pub fn number_of_wagons(&self, yard: &Yard) -> usize {
        match self.head.into_option() {
            Some(first) => yard.sequence_length(first),
            None => 0,
        }
    }

    /// Returns the link to the last attached wagon.
    pub fn last_wagon(&self, yard: &Yard) -> WagonLink {
        match self.head.into_option() {
            Some(first) => WagonLink::some(yard.last_in_sequence(first)),
            None => WagonLink::none(),
        }
    }

    /// Sums the seats over all attached wagons. Freight trains and empty
    /// trains total zero.
    pub fn total_number_of_seats(&self, yard: &Yard) -> u64 {
        self.wagons(yard)
            .filter_map(|w| yard.kind(w).seats())
            .map(u64::from)
            .sum()
    }

    /// Sums the maximum loading weight over all attached wagons. Passenger
    /// trains and empty trains total zero.
    pub fn total_max_weight(&self, yard: &Yard) -> u64 {
        self.wagons(yard)
            .filter_map(|w| yard.kind(w).max_weight())
            .map(u64::from)
            .sum()
    }

    /// Finds the wagon at the given position, starting at 1 for the first
    /// wagon. Returns `None` for positions outside `1..=len`.
    pub fn find_wagon_at_position(&self, yard: &Yard, position: usize) -> Option<WagonIndex> {
        if position == 0 {
            return None;
        }
        self.wagons(yard).nth(position - 1)
    }

    /// Finds the first wagon carrying the given id, in sequence order.
    pub fn find_wagon_by_id(&self, yard: &Yard, id: WagonId) -> Option<WagonIndex> {
        self.wagons(yard).find(|&w| yard.id(w) == id)
    }

    /// Iterates the attached wagons from front to rear.
    #[inline]
    pub fn wagons<'a>(&self, yard: &'a Yard) -> SequenceIter<'a> {
        yard.iter_sequence(self.head)
    }

    /// Checks if the sequence starting at `head` could be attached to this
    /// train: `head` must not be this train's current first wagon, its kind
    /// must match the train's kind (if the train has wagons), and the
    /// combined wagon count must stay within the locomotive's capacity.
    ///
    /// This is a pure query; nothing is mutated.
    pub fn can_attach(&self, yard: &Yard, head: WagonIndex) -> bool {
        if self.head.into_option() == Some(head) {
            return false;
        }
        self.can_receive(yard, yard.kind(head), yard.sequence_length(head))
    }

    // Shared validation for attach, move and split: kind compatibility plus
    // capacity for `incoming` additional wagons.
    fn can_receive(&self, yard: &Yard, kind: WagonKind, incoming: usize) -> bool {
        if let Some(first) = self.head.into_option() {
            if !yard.kind(first).is_same_kind(&kind) {
                return false;
            }
        }
        self.number_of_wagons(yard) + incoming <= self.engine.max_wagons()
    }

    /// Attaches the sequence starting at `head` behind the last wagon.
    ///
    /// The incoming head is severed from any predecessor it still hangs
    /// behind. Returns `false` without mutating anything if the sequence
    /// cannot be attached.
    pub fn attach_to_rear(&mut self, yard: &mut Yard, head: WagonIndex) -> bool {
        if !self.can_attach(yard, head) {
            return false;
        }

        yard.decouple_front(head);

        match self.head.into_option() {
            None => self.head = WagonLink::some(head),
            Some(first) => {
                let last = yard.last_in_sequence(first);
                let coupled = yard.couple(last, head);
                debug_assert!(
                    coupled.is_ok(),
                    "rear coupling failed after validation: {:?}",
                    coupled
                );
            }
        }
        true
    }

    /// Inserts the sequence starting at `head` in front of the current
    /// first wagon; the incoming sequence's last wagon pulls the old head.
    ///
    /// The incoming head is severed from any predecessor it still hangs
    /// behind. Returns `false` without mutating anything if the sequence
    /// cannot be attached.
    pub fn insert_at_front(&mut self, yard: &mut Yard, head: WagonIndex) -> bool {
        if !self.can_attach(yard, head) {
            return false;
        }

        yard.decouple_front(head);

        if let Some(first) = self.head.into_option() {
            let tail = yard.last_in_sequence(head);
            let coupled = yard.couple(tail, first);
            debug_assert!(
                coupled.is_ok(),
                "front coupling failed after validation: {:?}",
                coupled
            );
        }
        self.head = WagonLink::some(head);
        true
    }

    /// Inserts the sequence starting at `head` so that its first wagon ends
    /// up at the given position, starting at 1 for the front of the train.
    ///
    /// Position 1 is valid for an empty train; positions `2..=len` splice
    /// in front of the wagon currently there. Appending at `len + 1` is
    /// rejected; that is [`Train::attach_to_rear`]'s job. The wagons on
    /// either side of the splice seam must not be part of the incoming
    /// sequence itself. Returns `false` without mutating anything if the
    /// position is invalid, the seam overlaps the incoming sequence, or the
    /// sequence cannot be attached.
    pub fn insert_at_position(&mut self, yard: &mut Yard, position: usize, head: WagonIndex) -> bool {
        if position == 1 {
            return self.insert_at_front(yard, head);
        }
        if position == 0 {
            return false;
        }
        if !self.can_attach(yard, head) {
            return false;
        }

        let Some(before) = self.find_wagon_at_position(yard, position - 1) else {
            return false;
        };
        let Some(at) = yard.next(before).into_option() else {
            return false;
        };

        // A seam inside the incoming sequence cannot be spliced around;
        // both couplings below assume the seam wagons stay put.
        if yard
            .iter_sequence(WagonLink::some(head))
            .any(|w| w == before || w == at)
        {
            return false;
        }

        yard.decouple_front(head);
        yard.decouple_tail(before);

        let tail = yard.last_in_sequence(head);
        let front_coupling = yard.couple(before, head);
        debug_assert!(
            front_coupling.is_ok(),
            "splice-front coupling failed after validation: {:?}",
            front_coupling
        );
        let rear_coupling = yard.couple(tail, at);
        debug_assert!(
            rear_coupling.is_ok(),
            "splice-rear coupling failed after validation: {:?}",
            rear_coupling
        );
        true
    }

    /// Moves the single wagon carrying the given id to the rear of `target`.
    ///
    /// The wagon's former neighbours are coupled directly to each other; the
    /// rest of the sequence never travels along. Returns `false` without
    /// mutating anything if the wagon is not found or `target` cannot
    /// accept one more wagon.
    pub fn move_one_wagon(&mut self, yard: &mut Yard, id: WagonId, target: &mut Train) -> bool {
        let Some(wagon) = self.find_wagon_by_id(yard, id) else {
            return false;
        };
        if !target.can_receive(yard, yard.kind(wagon), 1) {
            return false;
        }

        let successor = yard.next(wagon);
        yard.cut_out(wagon);
        if self.head.into_option() == Some(wagon) {
            self.head = successor;
        }

        let attached = target.attach_to_rear(yard, wagon);
        debug_assert!(attached, "target rejected a wagon that passed validation");
        attached
    }

    /// Splits this train before the given position and attaches the whole
    /// sub-sequence from that position to the end to the rear of `target`.
    ///
    /// Returns `false` without mutating anything if the position is invalid
    /// or `target` cannot accept the sub-sequence.
    pub fn split_at_position(&mut self, yard: &mut Yard, position: usize, target: &mut Train) -> bool {
        let Some(wagon) = self.find_wagon_at_position(yard, position) else {
            return false;
        };
        if !target.can_receive(yard, yard.kind(wagon), yard.sequence_length(wagon)) {
            return false;
        }

        if position == 1 {
            self.head = WagonLink::none();
        }
        yard.decouple_front(wagon);

        let attached = target.attach_to_rear(yard, wagon);
        debug_assert!(attached, "target rejected a sequence that passed validation");
        attached
    }

    /// Reverses the order of the attached wagons, so the last wagon becomes
    /// the first. Trains with zero or one wagon are left as they are.
    pub fn reverse(&mut self, yard: &mut Yard) {
        let Some(first) = self.head.into_option() else {
            return;
        };
        if !yard.has_next(first) {
            return;
        }
        let new_head = yard.reverse_sequence(first);
        self.head = WagonLink::some(new_head);
    }

    /// Returns a displayable view of this train backed by the given yard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::locomotive::Locomotive;
    /// # use shunter_model::wagon::{Wagon, WagonId};
    /// # use shunter_yard::train::Train;
    /// # use shunter_yard::yard::Yard;
    /// let mut yard = Yard::new();
    /// let mut train = Train::new(Locomotive::new(1203, 7), "Amsterdam", "Paris");
    /// let wagon = yard.register(Wagon::passenger(WagonId::new(8001), 36));
    /// train.attach_to_rear(&mut yard, wagon);
    ///
    /// assert_eq!(
    ///     format!("{}", train.display(&yard)),
    ///     "[Loc-1203][Wagon-8001] with 1 wagons from Amsterdam to Paris\nTotal number of seats: 36"
    /// );
    /// ```
    #[inline]
    pub fn display<'a>(&'a self, yard: &'a Yard) -> TrainDisplay<'a> {
        TrainDisplay { train: self, yard }
    }
}

/// A borrowed view rendering a train together with the yard its wagons
/// live in.
///
/// The format is one line of locomotive and wagon tags followed by a
/// summary, plus a seat-total line for passenger trains.
pub struct TrainDisplay<'a> {
    train: &'a Train,
    yard: &'a Yard,
}

impl std::fmt::Display for TrainDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.train.engine())?;

        let mut count = 0usize;
        for wagon in self.train.wagons(self.yard) {
            write!(f, "{}", self.yard.wagon(wagon))?;
            count += 1;
        }

        write!(
            f,
            " with {} wagons from {} to {}",
            count,
            self.train.origin(),
            self.train.destination()
        )?;

        if self.train.is_passenger_train(self.yard) {
            write!(
                f,
                "\nTotal number of seats: {}",
                self.train.total_number_of_seats(self.yard)
            )?;
        }
        Ok(())
    }
}
