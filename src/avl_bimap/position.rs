use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::raw::Handle;
use crate::side::{Left, Right, Side};

/// A position in one of the two orderings of an [`AvlBiMap`](crate::AvlBiMap).
///
/// A position either names a stored pair or is the *end* of its ordering. It is a
/// plain `Copy` token that does not borrow the map, so it can be handed back to
/// mutating calls such as [`erase_left_at`](crate::AvlBiMap::erase_left_at).
///
/// Erasing a pair invalidates every position naming it, except the one returned by
/// the erase call itself. Reading a stale position through
/// [`pair`](crate::AvlBiMap::pair) yields `None` until its slot is reused; once the
/// slot holds a new pair the stale position names that pair instead. Using stale
/// positions is a logic error, but never undefined behavior.
///
/// A position is not tied to the map that issued it. Handing it to a different map
/// names whatever pair occupies the same slot there, so reading, walking or erasing
/// through it acts on an unrelated pair, or panics if that slot is empty. This is the
/// same kind of logic error.
///
/// # Examples
///
/// ```
/// use avl_bimap::AvlBiMap;
///
/// let mut map = AvlBiMap::new();
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// let pos = map.find_left(&2);
/// assert_eq!(map.pair(pos), Some((&2, &"two")));
///
/// // The same pair, seen from the right-key ordering, in O(1).
/// let flipped = pos.flip();
/// assert_eq!(flipped, map.find_right(&"two"));
/// assert_eq!(flipped.flip(), pos);
/// ```
pub struct Position<S: Side> {
    handle: Option<Handle>,
    _side: PhantomData<fn() -> S>,
}

/// A position in left-key order.
pub type LeftPosition = Position<Left>;

/// A position in right-key order.
pub type RightPosition = Position<Right>;

impl<S: Side> Position<S> {
    pub(crate) const fn new(handle: Option<Handle>) -> Self {
        Self {
            handle,
            _side: PhantomData,
        }
    }

    pub(crate) const fn handle(self) -> Option<Handle> {
        self.handle
    }

    /// The end position of this ordering.
    ///
    /// Every map shares the same end position per side.
    #[must_use]
    pub const fn end() -> Self {
        Self::new(None)
    }

    /// Returns `true` if this is the end of its ordering.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.handle.is_none()
    }

    /// The same pair's position in the other ordering.
    ///
    /// Flipping the end position yields the other ordering's end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(self) -> Position<S::Opposite> {
        Position::new(self.handle)
    }
}

impl<S: Side> Clone for Position<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Side> Copy for Position<S> {}

impl<S: Side> PartialEq for Position<S> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<S: Side> Eq for Position<S> {}

impl<S: Side> Hash for Position<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl<S: Side> Default for Position<S> {
    fn default() -> Self {
        Self::end()
    }
}

impl<S: Side> fmt::Debug for Position<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.handle {
            Some(handle) => f.debug_tuple("Position").field(&handle.to_index()).finish(),
            None => f.write_str("Position(end)"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn end_flips_to_end() {
        let end = LeftPosition::end();
        assert!(end.is_end());
        assert_eq!(end.flip(), RightPosition::end());
        assert_eq!(LeftPosition::default(), end);
    }

    #[test]
    fn flip_round_trips() {
        let pos = LeftPosition::new(Some(Handle::from_index(3)));
        assert!(!pos.is_end());
        assert_eq!(pos.flip().flip(), pos);
        assert_eq!(pos.flip().handle(), pos.handle());
    }
}
