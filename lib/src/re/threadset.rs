use bitvec::vec::BitVec;

/// A set of instruction pointers, used for representing the threads that
/// are alive in the Pike VM.
///
/// As in any set, the values are guaranteed to be unique, the `insert`
/// operation is a no-op if the value already exists in the set. This type
/// also supports iterating the values in insertion order, which is the
/// order in which threads were spawned.
///
/// The set has a fixed capacity, any value inserted in the set must be
/// lower than the capacity. Membership is checked with a bitmap that has
/// one bit per possible value, while the values themselves are kept in a
/// vector. Clearing the set only resets the bits that were actually set,
/// so the cost is proportional to the number of values, not to the
/// capacity.
#[derive(Debug, Default)]
pub(crate) struct ThreadSet {
    // Values in the set, in insertion order.
    items: Vec<usize>,
    // The N-th bit is set if N is in the set.
    bitmap: BitVec<usize>,
}

impl ThreadSet {
    /// Creates a set that can hold values in the range `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::new(), bitmap: BitVec::repeat(false, capacity) }
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value didn't exist in the set and was added,
    /// and `false` if it already existed.
    ///
    /// # Panics
    ///
    /// If `value` is not lower than the capacity of the set.
    #[inline]
    pub fn insert(&mut self, value: usize) -> bool {
        if self.bitmap[value] {
            return false;
        }
        self.bitmap.set(value, true);
        self.items.push(value);
        true
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values in the set.
    #[inline]
    pub fn clear(&mut self) {
        for value in self.items.drain(0..) {
            self.bitmap.set(value, false);
        }
    }

    /// Returns an iterator for the values in the set.
    ///
    /// Values are returned in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.items.iter()
    }
}
