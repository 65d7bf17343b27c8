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

/// The engine at the head of a train.
///
/// Besides its identifying number, a locomotive carries the one capacity
/// constraint of the composition model: the maximum number of wagons it is
/// able to pull. Composition operations consult this limit before mutating
/// the wagon sequence.
///
/// # Examples
///
/// ```rust
/// use shunter_model::locomotive::Locomotive;
///
/// let engine = Locomotive::new(1203, 7);
/// assert_eq!(engine.number(), 1203);
/// assert_eq!(engine.max_wagons(), 7);
/// assert_eq!(format!("{}", engine), "[Loc-1203]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Locomotive {
    number: u32,
    max_wagons: usize,
}

impl Locomotive {
    /// Creates a new locomotive with the given number and wagon capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shunter_model::locomotive::Locomotive;
    /// let engine = Locomotive::new(4, 10);
    /// assert_eq!(engine.number(), 4);
    /// ```
    #[inline]
    pub const fn new(number: u32, max_wagons: usize) -> Self {
        Self { number, max_wagons }
    }

    /// Returns the locomotive number.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the maximum number of wagons this locomotive can pull.
    #[inline]
    pub const fn max_wagons(&self) -> usize {
        self.max_wagons
    }

    /// Sets the locomotive number.
    #[inline]
    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    /// Sets the maximum number of wagons this locomotive can pull.
    ///
    /// Lowering the limit does not shrink an already attached sequence; the
    /// new limit applies to subsequent attachments only.
    #[inline]
    pub fn set_max_wagons(&mut self, max_wagons: usize) {
        self.max_wagons = max_wagons;
    }
}

impl std::fmt::Display for Locomotive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Loc-{}]", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let engine = Locomotive::new(1203, 7);
        assert_eq!(engine.number(), 1203);
        assert_eq!(engine.max_wagons(), 7);
    }

    #[test]
    fn test_setters() {
        let mut engine = Locomotive::new(1, 2);
        engine.set_number(99);
        engine.set_max_wagons(12);
        assert_eq!(engine.number(), 99);
        assert_eq!(engine.max_wagons(), 12);
    }

    #[test]
    fn test_display() {
        let engine = Locomotive::new(1203, 7);
        assert_eq!(format!("{}", engine), "[Loc-1203]");
    }
}
