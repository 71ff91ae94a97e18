//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ValueSet] used for storing
//! the candidate values of unresolved cells.

/// A set of cell values in the range `1..=max` that is implemented as a bit
/// vector. Each value is represented by one bit in a single 64-bit word,
/// which generally has better performance than a `HashSet` and makes cloning
/// a board cheap.
///
/// Values are iterated in ascending order. Since candidate sets start out
/// full and only ever shrink, this is also the order in which the solver
/// tries branch values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueSet {
    max: usize,
    len: usize,
    content: u64
}

/// An iterator over the content of a [ValueSet], in ascending order.
pub struct ValueSetIter {
    bit_index: usize,
    value: u64
}

impl Iterator for ValueSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.value == 0 {
            return None;
        }

        let diff = self.value.trailing_zeros() as usize;
        self.value >>= diff;
        self.value &= !1u64;
        self.bit_index += diff;
        Some(self.bit_index + 1)
    }
}

impl ValueSet {

    /// The highest supported upper bound for a `ValueSet`, dictated by the
    /// bit vector being a single 64-bit word.
    pub const MAX_BOUND: usize = 64;

    /// Creates a new set containing every value in `1..=max`.
    ///
    /// # Panics
    ///
    /// If `max` is zero or greater than [ValueSet::MAX_BOUND]. Bounds are
    /// fixed by the board size at construction, so a violation is a
    /// programming error.
    pub fn full(max: usize) -> ValueSet {
        assert!(max >= 1 && max <= ValueSet::MAX_BOUND,
            "value set bound out of range");

        let content = if max == ValueSet::MAX_BOUND {
            u64::MAX
        }
        else {
            (1u64 << max) - 1
        };

        ValueSet {
            max,
            len: max,
            content
        }
    }

    /// Gets the upper bound of this set, i.e. the `max` for which it was
    /// created. All contained values are in `1..=max`.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Indicates whether the given value is contained in this set.
    ///
    /// # Panics
    ///
    /// If `value` is outside the range `1..=max`.
    pub fn contains(&self, value: usize) -> bool {
        assert!(value >= 1 && value <= self.max, "value out of range");
        self.content & (1u64 << (value - 1)) != 0
    }

    /// Removes the given value from this set. Returns `true` if the value was
    /// present before, and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `value` is outside the range `1..=max`.
    pub fn remove(&mut self, value: usize) -> bool {
        assert!(value >= 1 && value <= self.max, "value out of range");
        let mask = 1u64 << (value - 1);

        if self.content & mask == 0 {
            false
        }
        else {
            self.content &= !mask;
            self.len -= 1;
            true
        }
    }

    /// Gets the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Indicates whether this set contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// If this set contains exactly one value, returns that value, and `None`
    /// otherwise.
    pub fn as_singleton(&self) -> Option<usize> {
        if self.len == 1 {
            Some(self.content.trailing_zeros() as usize + 1)
        }
        else {
            None
        }
    }

    /// Creates an iterator over the values in this set, in ascending order.
    pub fn iter(&self) -> ValueSetIter {
        ValueSetIter {
            bit_index: 0,
            value: self.content
        }
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = usize;
    type IntoIter = ValueSetIter;

    fn into_iter(self) -> ValueSetIter {
        self.iter()
    }
}
