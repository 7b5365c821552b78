use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::compare::{Compare, Natural};
use crate::error::Error;
use crate::raw::{Handle, LEFT, RIGHT, RawBiMap, RawIter};
use crate::side::Side;

mod capacity;
mod position;

pub use position::{LeftPosition, Position, RightPosition};

/// A bidirectional one-to-one map backed by two [AVL trees].
///
/// Every left key maps to exactly one right key and vice versa; no key appears twice
/// on its side. Each pair is stored once, in a single arena slot, and is linked into
/// two independently balanced trees: one ordered by left key with `CL`, the other by
/// right key with `CR`. Both default to [`Natural`], the keys' own [`Ord`].
///
/// Lookups, insertion and removal take O(log n) from either side. A [`Position`] in
/// one ordering converts to the same pair's position in the other ordering in O(1)
/// with [`Position::flip`], so a caller can find a pair by left key and continue
/// walking in right-key order without a second search.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key on its side changes while it is in the map. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe
/// code. The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `AvlBiMap` that observed it and not result in undefined
/// behavior.
///
/// # Examples
///
/// ```
/// use avl_bimap::AvlBiMap;
///
/// let mut ports = AvlBiMap::new();
/// ports.insert("http", 80);
/// ports.insert("https", 443);
/// ports.insert("ssh", 22);
///
/// // Look up from either side.
/// assert_eq!(ports.get_left(&"ssh"), Some(&22));
/// assert_eq!(ports.get_right(&443), Some(&"https"));
///
/// // A second mapping for an existing key on either side is rejected.
/// assert!(ports.insert("telnet", 22).is_end());
/// assert!(ports.insert("http", 8080).is_end());
/// assert_eq!(ports.len(), 3);
///
/// // Walk in right-key order starting from a left-key lookup.
/// let start = ports.find_left(&"http").flip();
/// let next = ports.next(start);
/// assert_eq!(ports.pair(next), Some((&"https", &443)));
/// ```
///
/// [AVL trees]: https://en.wikipedia.org/wiki/AVL_tree
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct AvlBiMap<L, R, CL = Natural, CR = Natural> {
    raw: RawBiMap<L, R, CL, CR>,
}

/// An iterator over the pairs of an `AvlBiMap` in left-key order.
///
/// This `struct` is created by the [`iter_left`] method on [`AvlBiMap`]. See its
/// documentation for more.
///
/// [`iter_left`]: AvlBiMap::iter_left
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LeftIter<'a, L, R> {
    inner: RawIter<'a, L, R>,
}

/// An iterator over the pairs of an `AvlBiMap` in right-key order.
///
/// This `struct` is created by the [`iter_right`] method on [`AvlBiMap`]. See its
/// documentation for more.
///
/// [`iter_right`]: AvlBiMap::iter_right
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RightIter<'a, L, R> {
    inner: RawIter<'a, L, R>,
}

impl<L, R> AvlBiMap<L, R> {
    /// Makes a new, empty `AvlBiMap` ordered by the keys' own [`Ord`] on both sides.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    ///
    /// // pairs can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparators(Natural, Natural)
    }
}

impl<L, R, CL, CR> AvlBiMap<L, R, CL, CR> {
    /// Makes a new, empty `AvlBiMap` that orders left keys with `compare_left` and right
    /// keys with `compare_right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::{AvlBiMap, Natural};
    ///
    /// let mut map = AvlBiMap::with_comparators(|a: &i32, b: &i32| b.cmp(a), Natural);
    /// map.insert(1, 'x');
    /// map.insert(2, 'y');
    ///
    /// let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    /// assert_eq!(lefts, [2, 1]);
    /// ```
    #[must_use]
    pub const fn with_comparators(compare_left: CL, compare_right: CR) -> Self {
        AvlBiMap {
            raw: RawBiMap::new(compare_left, compare_right),
        }
    }

    /// Returns the comparator ordering left keys.
    pub const fn left_comparator(&self) -> &CL {
        self.raw.compare_left()
    }

    /// Returns the comparator ordering right keys.
    pub const fn right_comparator(&self) -> &CR {
        self.raw.compare_right()
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut a = AvlBiMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all pairs from both orderings.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut a = AvlBiMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(a.find_right(&"a").is_end());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Swaps the contents and comparators of two maps.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn swap(&mut self, other: &mut Self) {
        self.raw.swap(&mut other.raw);
    }

    /// The position of the smallest left key, or the end if the map is empty.
    #[must_use]
    pub fn begin_left(&self) -> LeftPosition {
        Position::new(self.raw.first(LEFT))
    }

    /// The end of the left-key ordering.
    #[must_use]
    pub fn end_left(&self) -> LeftPosition {
        Position::end()
    }

    /// The position of the smallest right key, or the end if the map is empty.
    #[must_use]
    pub fn begin_right(&self) -> RightPosition {
        Position::new(self.raw.first(RIGHT))
    }

    /// The end of the right-key ordering.
    #[must_use]
    pub fn end_right(&self) -> RightPosition {
        Position::end()
    }

    /// Advances `position` to the next pair in its ordering.
    ///
    /// The end acts as a ghost element between the last and the first pair: advancing
    /// from the last pair gives the end, and advancing from the end gives the first pair.
    ///
    /// # Panics
    ///
    /// May panic if `position` names a pair that has been erased.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, amortized O(1) over a full traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, 'b');
    /// map.insert(2, 'a');
    ///
    /// let first = map.begin_right();
    /// assert_eq!(map.pair(first), Some((&2, &'a')));
    /// let second = map.next(first);
    /// assert_eq!(map.pair(second), Some((&1, &'b')));
    /// assert!(map.next(second).is_end());
    /// assert_eq!(map.next(map.end_right()), first);
    /// ```
    #[must_use]
    pub fn next<S: Side>(&self, position: Position<S>) -> Position<S> {
        match position.handle() {
            Some(handle) => Position::new(self.raw.next(S::INDEX, handle)),
            None => Position::new(self.raw.first(S::INDEX)),
        }
    }

    /// Moves `position` back to the previous pair in its ordering.
    ///
    /// Mirrors [`next`](AvlBiMap::next): the previous position of the first pair is the
    /// end, and the previous position of the end is the last pair.
    ///
    /// # Panics
    ///
    /// May panic if `position` names a pair that has been erased.
    #[must_use]
    pub fn prev<S: Side>(&self, position: Position<S>) -> Position<S> {
        match position.handle() {
            Some(handle) => Position::new(self.raw.prev(S::INDEX, handle)),
            None => Position::new(self.raw.last(S::INDEX)),
        }
    }

    /// Returns the pair at `position`, or `None` for the end or an erased pair.
    ///
    /// The pair is always returned as `(left, right)`, whichever ordering the position
    /// belongs to.
    #[must_use]
    pub fn pair<S: Side>(&self, position: Position<S>) -> Option<(&L, &R)> {
        let pair = self.raw.try_pair(position.handle()?)?;
        Some((&pair.left, &pair.right))
    }

    /// Returns the pair with the smallest left key.
    #[must_use]
    pub fn first_left(&self) -> Option<(&L, &R)> {
        self.pair(self.begin_left())
    }

    /// Returns the pair with the largest left key.
    #[must_use]
    pub fn last_left(&self) -> Option<(&L, &R)> {
        self.pair(self.prev(self.end_left()))
    }

    /// Returns the pair with the smallest right key.
    #[must_use]
    pub fn first_right(&self) -> Option<(&L, &R)> {
        self.pair(self.begin_right())
    }

    /// Returns the pair with the largest right key.
    #[must_use]
    pub fn last_right(&self) -> Option<(&L, &R)> {
        self.pair(self.prev(self.end_right()))
    }

    fn erase_at<S: Side>(&mut self, position: Position<S>) -> Position<S> {
        let Some(handle) = position.handle() else {
            return position;
        };
        let next = self.raw.next(S::INDEX, handle);
        self.raw.remove(handle);
        Position::new(next)
    }

    fn erase_range<S: Side>(&mut self, first: Position<S>, last: Position<S>) -> Position<S> {
        let mut current = first;
        while current != last && !current.is_end() {
            current = self.erase_at(current);
        }
        last
    }

    /// Removes the pair at `position` from both orderings and returns the position of
    /// the following pair in left-key order.
    ///
    /// Erasing at the end is a no-op that returns the end.
    ///
    /// # Panics
    ///
    /// May panic if `position` names a pair that has already been erased.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let next = map.erase_left_at(map.begin_left());
    /// assert_eq!(map.pair(next), Some((&2, &"b")));
    /// assert!(map.find_right(&"a").is_end());
    /// ```
    pub fn erase_left_at(&mut self, position: LeftPosition) -> LeftPosition {
        self.erase_at(position)
    }

    /// Removes the pair at `position` from both orderings and returns the position of
    /// the following pair in right-key order.
    ///
    /// Erasing at the end is a no-op that returns the end.
    ///
    /// # Panics
    ///
    /// May panic if `position` names a pair that has already been erased.
    pub fn erase_right_at(&mut self, position: RightPosition) -> RightPosition {
        self.erase_at(position)
    }

    /// Removes every pair from `first` up to, but not including, `last` in left-key
    /// order, and returns `last`.
    ///
    /// If `last` does not follow `first`, erasing stops at the end of the ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// for (l, r) in [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')] {
    ///     map.insert(l, r);
    /// }
    ///
    /// let last = map.find_left(&4);
    /// map.erase_left_range(map.find_left(&2), last);
    /// let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    /// assert_eq!(lefts, [1, 4]);
    /// ```
    pub fn erase_left_range(&mut self, first: LeftPosition, last: LeftPosition) -> LeftPosition {
        self.erase_range(first, last)
    }

    /// Removes every pair from `first` up to, but not including, `last` in right-key
    /// order, and returns `last`.
    ///
    /// If `last` does not follow `first`, erasing stops at the end of the ordering.
    pub fn erase_right_range(&mut self, first: RightPosition, last: RightPosition) -> RightPosition {
        self.erase_range(first, last)
    }

    /// Gets an iterator over the pairs of the map, sorted by left key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (left, right) in map.iter_left() {
    ///     println!("{left}: {right}");
    /// }
    ///
    /// let (first_left, first_right) = map.iter_left().next().unwrap();
    /// assert_eq!((*first_left, *first_right), (1, "a"));
    /// ```
    pub fn iter_left(&self) -> LeftIter<'_, L, R> {
        LeftIter {
            inner: self.raw.iter(LEFT),
        }
    }

    /// Gets an iterator over the pairs of the map, sorted by right key. Each item puts
    /// the right key first.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "c");
    /// map.insert(2, "a");
    ///
    /// let mut iter = map.iter_right();
    /// assert_eq!(iter.next(), Some((&"a", &2)));
    /// assert_eq!(iter.next_back(), Some((&"c", &1)));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_right(&self) -> RightIter<'_, L, R> {
        RightIter {
            inner: self.raw.iter(RIGHT),
        }
    }

    /// Retains only the pairs specified by the predicate.
    ///
    /// In other words, removes all pairs `(l, r)` for which `f(&l, &r)` returns `false`.
    /// The pairs are visited in ascending left-key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// for x in 0..8 {
    ///     map.insert(x, x * 10);
    /// }
    /// map.retain(|&l, _| l % 2 == 0);
    /// assert!(map.iter_left().map(|(l, r)| (*l, *r)).eq([(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n) in the worst case (when many pairs are removed).
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&L, &R) -> bool,
    {
        let mut doomed: SmallVec<[Handle; 16]> = SmallVec::new();
        let mut current = self.raw.first(LEFT);
        while let Some(handle) = current {
            let pair = self.raw.pair(handle);
            if !f(&pair.left, &pair.right) {
                doomed.push(handle);
            }
            current = self.raw.next(LEFT, handle);
        }

        for handle in doomed {
            self.raw.remove(handle);
        }
    }
}

impl<L, R, CL: Compare<L>, CR: Compare<R>> AvlBiMap<L, R, CL, CR> {
    /// Inserts the pair `(left, right)` unless `left` is already a left key or `right`
    /// is already a right key.
    ///
    /// Returns the new pair's position in left-key order. If either key is taken, the
    /// map is left unchanged and the end position is returned; both orderings are
    /// checked before anything is modified.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// let pos = map.insert(37, "a");
    /// assert_eq!(map.pair(pos), Some((&37, &"a")));
    ///
    /// assert_eq!(map.insert(37, "b"), map.end_left());
    /// assert_eq!(map.insert(38, "a"), map.end_left());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> LeftPosition {
        Position::new(self.raw.insert(left, right))
    }

    /// Returns the position of the pair with left key `key`, or the end if there is none.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find_left(&self, key: &L) -> LeftPosition {
        Position::new(self.raw.find_left(key))
    }

    /// Returns the position of the pair with right key `key`, or the end if there is none.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find_right(&self, key: &R) -> RightPosition {
        Position::new(self.raw.find_right(key))
    }

    /// Returns `true` if `key` is a left key of the map.
    #[must_use]
    pub fn contains_left(&self, key: &L) -> bool {
        self.raw.find_left(key).is_some()
    }

    /// Returns `true` if `key` is a right key of the map.
    #[must_use]
    pub fn contains_right(&self, key: &R) -> bool {
        self.raw.find_right(key).is_some()
    }

    /// Returns the right key paired with the left key `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_left(&1), Some(&"a"));
    /// assert_eq!(map.get_left(&2), None);
    /// ```
    #[must_use]
    pub fn get_left(&self, key: &L) -> Option<&R> {
        let handle = self.raw.find_left(key)?;
        Some(&self.raw.pair(handle).right)
    }

    /// Returns the left key paired with the right key `key`.
    #[must_use]
    pub fn get_right(&self, key: &R) -> Option<&L> {
        let handle = self.raw.find_right(key)?;
        Some(&self.raw.pair(handle).left)
    }

    /// Returns the right key paired with the left key `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LeftKeyNotFound`] if `key` is not a left key of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::{AvlBiMap, Error};
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at_left(&1), Ok(&"a"));
    /// assert_eq!(map.at_left(&2), Err(Error::LeftKeyNotFound));
    /// ```
    pub fn at_left(&self, key: &L) -> Result<&R, Error> {
        self.get_left(key).ok_or(Error::LeftKeyNotFound)
    }

    /// Returns the left key paired with the right key `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RightKeyNotFound`] if `key` is not a right key of the map.
    pub fn at_right(&self, key: &R) -> Result<&L, Error> {
        self.get_right(key).ok_or(Error::RightKeyNotFound)
    }

    /// Returns the right key paired with `key`, inserting `(key, R::default())` first if
    /// `key` is not a left key of the map.
    ///
    /// **This may remove an unrelated pair.** Right keys are unique, so if some other
    /// pair already has `R::default()` as its right key, that pair is erased before the
    /// new one is inserted. At most one pair is evicted this way.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map: AvlBiMap<i32, String> = AvlBiMap::new();
    /// assert_eq!(map.at_left_or_default(5), "");
    ///
    /// // (5, "") already holds the default right key, so it is evicted.
    /// assert_eq!(map.at_left_or_default(6), "");
    /// assert!(!map.contains_left(&5));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at_left_or_default(&mut self, key: L) -> &R
    where
        R: Default,
    {
        if let Some(handle) = self.raw.find_left(&key) {
            return &self.raw.pair(handle).right;
        }
        let default = R::default();
        if let Some(evicted) = self.raw.find_right(&default) {
            self.raw.remove(evicted);
        }
        let handle = self.raw.insert_unique(key, default);
        &self.raw.pair(handle).right
    }

    /// Returns the left key paired with `key`, inserting `(L::default(), key)` first if
    /// `key` is not a right key of the map.
    ///
    /// **This may remove an unrelated pair.** Left keys are unique, so if some other
    /// pair already has `L::default()` as its left key, that pair is erased before the
    /// new one is inserted. At most one pair is evicted this way.
    pub fn at_right_or_default(&mut self, key: R) -> &L
    where
        L: Default,
    {
        if let Some(handle) = self.raw.find_right(&key) {
            return &self.raw.pair(handle).left;
        }
        let default = L::default();
        if let Some(evicted) = self.raw.find_left(&default) {
            self.raw.remove(evicted);
        }
        let handle = self.raw.insert_unique(default, key);
        &self.raw.pair(handle).left
    }

    /// Removes the pair with left key `key`. Returns whether such a pair existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "a");
    /// assert!(map.erase_left(&1));
    /// assert!(!map.erase_left(&1));
    /// ```
    pub fn erase_left(&mut self, key: &L) -> bool {
        self.remove_left(key).is_some()
    }

    /// Removes the pair with right key `key`. Returns whether such a pair existed.
    pub fn erase_right(&mut self, key: &R) -> bool {
        self.remove_right(key).is_some()
    }

    /// Removes the pair with left key `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_left(&1), Some((1, "a")));
    /// assert_eq!(map.remove_left(&1), None);
    /// ```
    pub fn remove_left(&mut self, key: &L) -> Option<(L, R)> {
        let handle = self.raw.find_left(key)?;
        Some(self.raw.remove(handle))
    }

    /// Removes the pair with right key `key` and returns it.
    pub fn remove_right(&mut self, key: &R) -> Option<(L, R)> {
        let handle = self.raw.find_right(key)?;
        Some(self.raw.remove(handle))
    }

    /// Returns the position of `key` in left-key order if present, otherwise of the
    /// first left key ordered after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(10, 'a');
    /// map.insert(20, 'b');
    ///
    /// assert_eq!(map.pair(map.lower_bound_left(&10)), Some((&10, &'a')));
    /// assert_eq!(map.pair(map.lower_bound_left(&11)), Some((&20, &'b')));
    /// assert!(map.lower_bound_left(&21).is_end());
    /// ```
    #[must_use]
    pub fn lower_bound_left(&self, key: &L) -> LeftPosition {
        Position::new(self.raw.lower_bound_left(key))
    }

    /// Returns the position of the first left key ordered strictly after `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bimap::AvlBiMap;
    ///
    /// let mut map = AvlBiMap::new();
    /// map.insert(10, 'a');
    /// map.insert(20, 'b');
    ///
    /// assert_eq!(map.pair(map.upper_bound_left(&10)), Some((&20, &'b')));
    /// assert!(map.upper_bound_left(&20).is_end());
    /// ```
    #[must_use]
    pub fn upper_bound_left(&self, key: &L) -> LeftPosition {
        Position::new(self.raw.upper_bound_left(key))
    }

    /// Returns the position of `key` in right-key order if present, otherwise of the
    /// first right key ordered after it.
    #[must_use]
    pub fn lower_bound_right(&self, key: &R) -> RightPosition {
        Position::new(self.raw.lower_bound_right(key))
    }

    /// Returns the position of the first right key ordered strictly after `key`.
    #[must_use]
    pub fn upper_bound_right(&self, key: &R) -> RightPosition {
        Position::new(self.raw.upper_bound_right(key))
    }
}

impl<L, R, CL, CR> Clone for AvlBiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Compare<L> + Clone,
    CR: Compare<R> + Clone,
{
    /// Rebuilds the map by inserting every pair in left-key order.
    fn clone(&self) -> Self {
        let mut raw = RawBiMap::with_capacity(self.len(), self.left_comparator().clone(), self.right_comparator().clone());
        for (left, right) in self {
            raw.insert_unique(left.clone(), right.clone());
        }
        AvlBiMap { raw }
    }
}

impl<L, R, CL: Compare<L>, CR: Compare<R>> PartialEq for AvlBiMap<L, R, CL, CR> {
    /// Two maps are equal when they hold the same number of pairs and, walking both in
    /// left-key order, each pair of keys is equivalent under `self`'s comparators.
    fn eq(&self, other: &Self) -> bool {
        let left_eq = |a: &L, b: &L| self.left_comparator().compare(a, b) == Ordering::Equal;
        let right_eq = |a: &R, b: &R| self.right_comparator().compare(a, b) == Ordering::Equal;
        self.len() == other.len()
            && self.iter_left().zip(other.iter_left()).all(|((l1, r1), (l2, r2))| left_eq(l1, l2) && right_eq(r1, r2))
    }
}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for AvlBiMap<L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L, R, CL: Default, CR: Default> Default for AvlBiMap<L, R, CL, CR> {
    fn default() -> Self {
        AvlBiMap::with_comparators(CL::default(), CR::default())
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a AvlBiMap<L, R, CL, CR> {
    type Item = (&'a L, &'a R);
    type IntoIter = LeftIter<'a, L, R>;

    fn into_iter(self) -> LeftIter<'a, L, R> {
        self.iter_left()
    }
}

impl<'a, L, R> Iterator for LeftIter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair.left, &pair.right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<L, R> DoubleEndedIterator for LeftIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair.left, &pair.right))
    }
}

impl<L, R> ExactSizeIterator for LeftIter<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for LeftIter<'_, L, R> {}

impl<L, R> Clone for LeftIter<'_, L, R> {
    fn clone(&self) -> Self {
        LeftIter {
            inner: self.inner.clone(),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for LeftIter<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, L, R> Iterator for RightIter<'a, L, R> {
    type Item = (&'a R, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair.right, &pair.left))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<L, R> DoubleEndedIterator for RightIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair.right, &pair.left))
    }
}

impl<L, R> ExactSizeIterator for RightIter<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for RightIter<'_, L, R> {}

impl<L, R> Clone for RightIter<'_, L, R> {
    fn clone(&self) -> Self {
        RightIter {
            inner: self.inner.clone(),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RightIter<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
