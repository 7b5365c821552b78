use super::arena::Arena;
use super::handle::Handle;
use super::iter::RawIter;
use super::node::{LEFT, Pair, RIGHT};
use super::tree::Tree;
use crate::compare::Compare;
use crate::side::{Left, Right};

/// The core dual-tree structure backing `AvlBiMap`.
///
/// Every pair lives in one arena slot and is linked into both trees at once.
pub(crate) struct RawBiMap<L, R, CL, CR> {
    /// Arena storing all pairs.
    nodes: Arena<Pair<L, R>>,
    /// Tree ordered by left key, then tree ordered by right key.
    trees: [Tree; 2],
    /// Number of live pairs.
    len: usize,
    compare_left: CL,
    compare_right: CR,
}

impl<L, R, CL, CR> RawBiMap<L, R, CL, CR> {
    pub(crate) const fn new(compare_left: CL, compare_right: CR) -> Self {
        Self {
            nodes: Arena::new(),
            trees: [Tree::new(LEFT), Tree::new(RIGHT)],
            len: 0,
            compare_left,
            compare_right,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, compare_left: CL, compare_right: CR) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            trees: [Tree::new(LEFT), Tree::new(RIGHT)],
            len: 0,
            compare_left,
            compare_right,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn compare_left(&self) -> &CL {
        &self.compare_left
    }

    pub(crate) const fn compare_right(&self) -> &CR {
        &self.compare_right
    }

    /// Drops every pair and empties both trees.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.trees[LEFT].clear();
        self.trees[RIGHT].clear();
        self.len = 0;
    }

    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.nodes, &mut other.nodes);
        for (mine, theirs) in self.trees.iter_mut().zip(other.trees.iter_mut()) {
            mine.swap(theirs);
        }
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.compare_left, &mut other.compare_left);
        core::mem::swap(&mut self.compare_right, &mut other.compare_right);
    }

    pub(crate) fn pair(&self, handle: Handle) -> &Pair<L, R> {
        self.nodes.get(handle)
    }

    /// Returns the pair if `handle` still names a live slot.
    pub(crate) fn try_pair(&self, handle: Handle) -> Option<&Pair<L, R>> {
        self.nodes.try_get(handle)
    }

    pub(crate) fn first(&self, side: usize) -> Option<Handle> {
        self.trees[side].first(&self.nodes)
    }

    pub(crate) fn last(&self, side: usize) -> Option<Handle> {
        self.trees[side].last(&self.nodes)
    }

    pub(crate) fn next(&self, side: usize, handle: Handle) -> Option<Handle> {
        self.trees[side].next(&self.nodes, handle)
    }

    pub(crate) fn prev(&self, side: usize, handle: Handle) -> Option<Handle> {
        self.trees[side].prev(&self.nodes, handle)
    }

    pub(crate) fn iter(&self, side: usize) -> RawIter<'_, L, R> {
        RawIter::new(&self.nodes, &self.trees[side], self.len)
    }

    /// Unlinks the pair from both trees and hands its keys back.
    pub(crate) fn remove(&mut self, handle: Handle) -> (L, R) {
        let [left_tree, right_tree] = &mut self.trees;
        left_tree.remove(&mut self.nodes, handle);
        right_tree.remove(&mut self.nodes, handle);
        self.len -= 1;
        self.nodes.take(handle).into_keys()
    }
}

impl<L, R, CL: Compare<L>, CR: Compare<R>> RawBiMap<L, R, CL, CR> {
    pub(crate) fn find_left(&self, key: &L) -> Option<Handle> {
        self.trees[LEFT].find::<L, R, Left, CL>(&self.nodes, &self.compare_left, key)
    }

    pub(crate) fn find_right(&self, key: &R) -> Option<Handle> {
        self.trees[RIGHT].find::<L, R, Right, CR>(&self.nodes, &self.compare_right, key)
    }

    /// Inserts the pair unless either key is already present. Both trees are checked
    /// before anything is allocated.
    pub(crate) fn insert(&mut self, left: L, right: R) -> Option<Handle> {
        if self.find_left(&left).is_some() || self.find_right(&right).is_some() {
            return None;
        }
        Some(self.insert_unique(left, right))
    }

    /// Inserts a pair whose keys the caller knows to be absent from both trees.
    pub(crate) fn insert_unique(&mut self, left: L, right: R) -> Handle {
        let handle = self.nodes.alloc(Pair::new(left, right));
        let [left_tree, right_tree] = &mut self.trees;
        left_tree.insert::<L, R, Left, CL>(&mut self.nodes, &self.compare_left, handle);
        right_tree.insert::<L, R, Right, CR>(&mut self.nodes, &self.compare_right, handle);
        self.len += 1;
        handle
    }

    pub(crate) fn lower_bound_left(&self, key: &L) -> Option<Handle> {
        self.trees[LEFT].lower_bound::<L, R, Left, CL>(&self.nodes, &self.compare_left, key)
    }

    pub(crate) fn upper_bound_left(&self, key: &L) -> Option<Handle> {
        self.trees[LEFT].upper_bound::<L, R, Left, CL>(&self.nodes, &self.compare_left, key)
    }

    pub(crate) fn lower_bound_right(&self, key: &R) -> Option<Handle> {
        self.trees[RIGHT].lower_bound::<L, R, Right, CR>(&self.nodes, &self.compare_right, key)
    }

    pub(crate) fn upper_bound_right(&self, key: &R) -> Option<Handle> {
        self.trees[RIGHT].upper_bound::<L, R, Right, CR>(&self.nodes, &self.compare_right, key)
    }

    /// Panics unless both trees are balanced, correctly linked, strictly ordered and
    /// hold exactly `len` pairs each.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use core::cmp::Ordering;

        fn walk<L, R>(nodes: &Arena<Pair<L, R>>, side: usize, node: Option<Handle>, parent: Option<Handle>, count: &mut usize) -> u32 {
            let Some(handle) = node else {
                return 0;
            };
            *count += 1;
            let links = nodes.links(handle, side);
            assert_eq!(links.parent, parent, "parent link out of sync on side {side}");
            let left = walk(nodes, side, links.left, Some(handle), count);
            let right = walk(nodes, side, links.right, Some(handle), count);
            assert!(left.abs_diff(right) <= 1, "balance factor out of range on side {side}");
            assert_eq!(links.height, left.max(right) + 1, "stale height on side {side}");
            links.height
        }

        for tree in &self.trees {
            let mut count = 0;
            walk(&self.nodes, tree.side(), tree.root(), None, &mut count);
            assert_eq!(count, self.len, "tree on side {} has wrong size", tree.side());
        }
        assert_eq!(self.nodes.len(), self.len);

        let mut current = self.first(LEFT);
        while let Some(handle) = current {
            current = self.next(LEFT, handle);
            if let Some(next) = current {
                assert_eq!(self.compare_left.compare(&self.pair(handle).left, &self.pair(next).left), Ordering::Less);
            }
        }
        let mut current = self.first(RIGHT);
        while let Some(handle) = current {
            current = self.next(RIGHT, handle);
            if let Some(next) = current {
                assert_eq!(self.compare_right.compare(&self.pair(handle).right, &self.pair(next).right), Ordering::Less);
            }
        }
    }
}
