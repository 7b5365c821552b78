use super::AvlBiMap;
use crate::compare::Natural;
use crate::raw::RawBiMap;

impl<L, R> AvlBiMap<L, R> {
    /// Creates an empty map with room for at least `capacity` pairs before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let map: AvlBiMap<i32, i32> = AvlBiMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparators(capacity, Natural, Natural)
    }
}

impl<L, R, CL, CR> AvlBiMap<L, R, CL, CR> {
    /// Creates an empty map with room for at least `capacity` pairs, ordered by the
    /// given comparators.
    #[must_use]
    pub fn with_capacity_and_comparators(capacity: usize, compare_left: CL, compare_right: CR) -> Self {
        AvlBiMap {
            raw: RawBiMap::with_capacity(capacity, compare_left, compare_right),
        }
    }

    /// Returns the number of pairs the map can hold without reallocating.
    ///
    /// Slots freed by erasure are reused, so this never shrinks.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let map: AvlBiMap<i32, i32> = AvlBiMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn erasing_keeps_capacity() {
        let mut map: AvlBiMap<u8, u8> = AvlBiMap::with_capacity(4);
        let capacity = map.capacity();
        for i in 0..4 {
            map.insert(i, i);
        }
        map.clear();
        assert!(map.capacity() >= capacity);
        map.insert(1, 1);
        assert_eq!(map.len(), 1);
    }
}
