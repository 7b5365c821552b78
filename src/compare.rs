use core::cmp::Ordering;

/// A total order over `T`, supplied to an [`AvlBiMap`](crate::AvlBiMap) for one of its sides.
///
/// Two keys are considered equivalent when [`compare`](Compare::compare) returns
/// [`Ordering::Equal`]. It is a logic error for an implementation to be inconsistent
/// (for example, not transitive) while keys it has ordered are stored in a map.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use avl_bimap::AvlBiMap;
///
/// // Right keys in descending order.
/// let mut map = AvlBiMap::with_comparators(avl_bimap::Natural, |a: &i32, b: &i32| b.cmp(a));
/// map.insert("x", 1);
/// map.insert("y", 2);
///
/// let rights: Vec<_> = map.iter_right().map(|(r, _)| *r).collect();
/// assert_eq!(rights, [2, 1]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The comparator used by default: `T`'s own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_follows_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Natural.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
    }
}
