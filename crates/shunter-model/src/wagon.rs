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

/// The identifying number of a wagon.
///
/// Ids are plain labels: uniqueness within a train is a convention upheld by
/// the caller, not enforced by the arena. Lookup by id returns the first
/// match in sequence order.
///
/// # Examples
///
/// ```rust
/// use shunter_model::wagon::WagonId;
///
/// let id = WagonId::new(8001);
/// assert_eq!(id.get(), 8001);
/// assert_eq!(format!("{}", id), "8001");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WagonId(u32);

impl WagonId {
    /// Creates a new wagon id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for WagonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WagonId({})", self.0)
    }
}

impl std::fmt::Display for WagonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WagonId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<WagonId> for u32 {
    fn from(id: WagonId) -> Self {
        id.0
    }
}

/// The payload variant of a wagon.
///
/// A train is homogeneous in this variant: composition operations refuse to
/// mix passenger and freight wagons behind one locomotive. The variant also
/// carries the per-wagon quantity that train-level totals sum over.
///
/// # Examples
///
/// ```rust
/// use shunter_model::wagon::WagonKind;
///
/// let a = WagonKind::Passenger { seats: 36 };
/// let b = WagonKind::Freight { max_weight: 55_000 };
///
/// assert!(a.is_passenger());
/// assert!(b.is_freight());
/// assert!(!a.is_same_kind(&b));
/// assert_eq!(a.seats(), Some(36));
/// assert_eq!(a.max_weight(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WagonKind {
    /// A passenger wagon with a fixed number of seats.
    Passenger { seats: u32 },
    /// A freight wagon with a maximum loading weight.
    Freight { max_weight: u32 },
}

impl WagonKind {
    /// Checks if this is a passenger wagon.
    #[inline]
    pub const fn is_passenger(&self) -> bool {
        matches!(self, WagonKind::Passenger { .. })
    }

    /// Checks if this is a freight wagon.
    #[inline]
    pub const fn is_freight(&self) -> bool {
        matches!(self, WagonKind::Freight { .. })
    }

    /// Checks if two kinds share the same variant, ignoring the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::wagon::WagonKind;
    /// let a = WagonKind::Passenger { seats: 36 };
    /// let b = WagonKind::Passenger { seats: 48 };
    /// assert!(a.is_same_kind(&b));
    /// ```
    #[inline]
    pub const fn is_same_kind(&self, other: &WagonKind) -> bool {
        matches!(
            (self, other),
            (WagonKind::Passenger { .. }, WagonKind::Passenger { .. })
                | (WagonKind::Freight { .. }, WagonKind::Freight { .. })
        )
    }

    /// Returns the number of seats, or `None` for a freight wagon.
    #[inline]
    pub const fn seats(&self) -> Option<u32> {
        match self {
            WagonKind::Passenger { seats } => Some(*seats),
            WagonKind::Freight { .. } => None,
        }
    }

    /// Returns the maximum loading weight, or `None` for a passenger wagon.
    #[inline]
    pub const fn max_weight(&self) -> Option<u32> {
        match self {
            WagonKind::Passenger { .. } => None,
            WagonKind::Freight { max_weight } => Some(*max_weight),
        }
    }
}

/// A wagon descriptor: identity plus payload variant.
///
/// This is the value handed to the arena on registration; the arena stores
/// its fields in flat columns and hands back a `WagonIndex`. The descriptor
/// itself carries no chain links.
///
/// # Examples
///
/// ```rust
/// use shunter_model::wagon::{Wagon, WagonId, WagonKind};
///
/// let wagon = Wagon::passenger(WagonId::new(8001), 36);
/// assert_eq!(wagon.id().get(), 8001);
/// assert!(wagon.kind().is_passenger());
/// assert_eq!(format!("{}", wagon), "[Wagon-8001]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Wagon {
    id: WagonId,
    kind: WagonKind,
}

impl Wagon {
    /// Creates a new wagon descriptor.
    #[inline]
    pub const fn new(id: WagonId, kind: WagonKind) -> Self {
        Self { id, kind }
    }

    /// Creates a passenger wagon descriptor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::wagon::{Wagon, WagonId};
    /// let wagon = Wagon::passenger(WagonId::new(1), 48);
    /// assert_eq!(wagon.kind().seats(), Some(48));
    /// ```
    #[inline]
    pub const fn passenger(id: WagonId, seats: u32) -> Self {
        Self::new(id, WagonKind::Passenger { seats })
    }

    /// Creates a freight wagon descriptor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::wagon::{Wagon, WagonId};
    /// let wagon = Wagon::freight(WagonId::new(2), 70_000);
    /// assert_eq!(wagon.kind().max_weight(), Some(70_000));
    /// ```
    #[inline]
    pub const fn freight(id: WagonId, max_weight: u32) -> Self {
        Self::new(id, WagonKind::Freight { max_weight })
    }

    /// Returns the wagon id.
    #[inline]
    pub const fn id(&self) -> WagonId {
        self.id
    }

    /// Returns the payload variant.
    #[inline]
    pub const fn kind(&self) -> WagonKind {
        self.kind
    }
}

impl std::fmt::Display for Wagon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Wagon-{}]", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wagon_id() {
        let id = WagonId::new(8001);
        assert_eq!(id.get(), 8001);
        assert_eq!(u32::from(id), 8001);
        assert_eq!(WagonId::from(8001), id);
        assert_eq!(format!("{}", id), "8001");
        assert_eq!(format!("{:?}", id), "WagonId(8001)");
    }

    #[test]
    fn test_kind_predicates() {
        let p = WagonKind::Passenger { seats: 36 };
        let f = WagonKind::Freight { max_weight: 55_000 };

        assert!(p.is_passenger());
        assert!(!p.is_freight());
        assert!(f.is_freight());
        assert!(!f.is_passenger());
    }

    #[test]
    fn test_kind_compatibility() {
        let a = WagonKind::Passenger { seats: 36 };
        let b = WagonKind::Passenger { seats: 48 };
        let c = WagonKind::Freight { max_weight: 55_000 };
        let d = WagonKind::Freight { max_weight: 70_000 };

        assert!(a.is_same_kind(&b));
        assert!(c.is_same_kind(&d));
        assert!(!a.is_same_kind(&c));
        assert!(!d.is_same_kind(&b));
    }

    #[test]
    fn test_kind_payload_accessors() {
        let p = WagonKind::Passenger { seats: 36 };
        let f = WagonKind::Freight { max_weight: 55_000 };

        assert_eq!(p.seats(), Some(36));
        assert_eq!(p.max_weight(), None);
        assert_eq!(f.seats(), None);
        assert_eq!(f.max_weight(), Some(55_000));
    }

    #[test]
    fn test_wagon_descriptor() {
        let wagon = Wagon::passenger(WagonId::new(8001), 36);
        assert_eq!(wagon.id(), WagonId::new(8001));
        assert_eq!(wagon.kind(), WagonKind::Passenger { seats: 36 });

        let freight = Wagon::freight(WagonId::new(9001), 70_000);
        assert!(freight.kind().is_freight());
    }

    #[test]
    fn test_wagon_display() {
        let wagon = Wagon::passenger(WagonId::new(8001), 36);
        assert_eq!(format!("{}", wagon), "[Wagon-8001]");

        let freight = Wagon::freight(WagonId::new(9001), 70_000);
        assert_eq!(format!("{}", freight), "[Wagon-9001]");
    }
}
