use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{LEFT, Links, Pair, RIGHT};
use crate::compare::Compare;
use crate::side::{Left, Right, Side};

/// Key extraction for one side of a [`Pair`].
pub(crate) trait Facet<L, R>: Side {
    type Key;

    fn key(pair: &Pair<L, R>) -> &Self::Key;
}

impl<L, R> Facet<L, R> for Left {
    type Key = L;

    #[inline]
    fn key(pair: &Pair<L, R>) -> &L {
        &pair.left
    }
}

impl<L, R> Facet<L, R> for Right {
    type Key = R;

    #[inline]
    fn key(pair: &Pair<L, R>) -> &R {
        &pair.right
    }
}

/// One AVL tree threaded through the pairs of an arena.
///
/// The tree only owns its root slot. An empty slot is an empty tree, and a root
/// always has `parent == None`, so walking up past the root is how traversal
/// reaches the end.
#[derive(Debug)]
pub(crate) struct Tree {
    root: Option<Handle>,
    side: usize,
}

impl Tree {
    pub(crate) const fn new(side: usize) -> Self {
        debug_assert!(side == LEFT || side == RIGHT);
        Self { root: None, side }
    }

    #[cfg(test)]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[cfg(test)]
    pub(crate) const fn side(&self) -> usize {
        self.side
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
    }

    pub(crate) fn swap(&mut self, other: &mut Self) {
        debug_assert_eq!(self.side, other.side);
        core::mem::swap(&mut self.root, &mut other.root);
    }

    fn set_root<L, R>(&mut self, nodes: &mut Arena<Pair<L, R>>, root: Option<Handle>) {
        if let Some(root) = root {
            nodes.links_mut(root, self.side).parent = None;
        }
        self.root = root;
    }

    pub(crate) fn find<L, R, F, C>(&self, nodes: &Arena<Pair<L, R>>, compare: &C, key: &F::Key) -> Option<Handle>
    where
        F: Facet<L, R>,
        C: Compare<F::Key>,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            current = match compare.compare(key, F::key(nodes.get(handle))) {
                Ordering::Less => nodes.left(handle, self.side),
                Ordering::Greater => nodes.right(handle, self.side),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Links a detached pair into the tree.
    ///
    /// The caller guarantees that no pair in the tree compares equal to the new one.
    pub(crate) fn insert<L, R, F, C>(&mut self, nodes: &mut Arena<Pair<L, R>>, compare: &C, inserted: Handle)
    where
        F: Facet<L, R>,
        C: Compare<F::Key>,
    {
        let root = Self::insert_at::<L, R, F, C>(nodes, compare, self.side, self.root, inserted);
        self.set_root(nodes, Some(root));
    }

    fn insert_at<L, R, F, C>(
        nodes: &mut Arena<Pair<L, R>>,
        compare: &C,
        side: usize,
        node: Option<Handle>,
        inserted: Handle,
    ) -> Handle
    where
        F: Facet<L, R>,
        C: Compare<F::Key>,
    {
        let Some(node) = node else {
            return inserted;
        };
        let ordering = compare.compare(F::key(nodes.get(inserted)), F::key(nodes.get(node)));
        if ordering == Ordering::Less {
            let left = nodes.left(node, side);
            let child = Self::insert_at::<L, R, F, C>(nodes, compare, side, left, inserted);
            nodes.set_left(node, Some(child), side);
        } else {
            let right = nodes.right(node, side);
            let child = Self::insert_at::<L, R, F, C>(nodes, compare, side, right, inserted);
            nodes.set_right(node, Some(child), side);
        }
        nodes.balance(node, side)
    }

    /// Unlinks `node`, splicing its in-order successor into its place, and rebalances
    /// up to the root. The pair itself stays allocated.
    pub(crate) fn remove<L, R>(&mut self, nodes: &mut Arena<Pair<L, R>>, node: Handle) {
        let side = self.side;
        let links = *nodes.links(node, side);

        let subtree_root = match links.right {
            None => links.left,
            Some(right) => {
                let successor = nodes.find_minimum(Some(right), side);
                let rest = nodes.remove_minimum(right, side);
                if let Some(successor) = successor {
                    nodes.set_children(successor, links.left, rest, side);
                }
                successor
            }
        };

        match links.parent {
            None => self.set_root(nodes, subtree_root),
            Some(parent) if nodes.left(parent, side) == Some(node) => nodes.set_left(parent, subtree_root, side),
            Some(parent) => nodes.set_right(parent, subtree_root, side),
        }

        *nodes.links_mut(node, side) = Links::leaf();
        self.rebalance_upwards(nodes, subtree_root.or(links.parent));
    }

    // Rebalances the children of every node from `start` up to the root, then the root.
    fn rebalance_upwards<L, R>(&mut self, nodes: &mut Arena<Pair<L, R>>, start: Option<Handle>) {
        let side = self.side;
        let mut current = start;
        while let Some(handle) = current {
            if let Some(left) = nodes.left(handle, side) {
                let balanced = nodes.balance(left, side);
                nodes.set_left(handle, Some(balanced), side);
            }
            if let Some(right) = nodes.right(handle, side) {
                let balanced = nodes.balance(right, side);
                nodes.set_right(handle, Some(balanced), side);
            }
            current = nodes.parent(handle, side);
        }
        if let Some(root) = self.root {
            let balanced = nodes.balance(root, side);
            self.set_root(nodes, Some(balanced));
        }
    }

    pub(crate) fn first<L, R>(&self, nodes: &Arena<Pair<L, R>>) -> Option<Handle> {
        nodes.find_minimum(self.root, self.side)
    }

    pub(crate) fn last<L, R>(&self, nodes: &Arena<Pair<L, R>>) -> Option<Handle> {
        nodes.find_maximum(self.root, self.side)
    }

    /// In-order successor; `None` past the maximum.
    pub(crate) fn next<L, R>(&self, nodes: &Arena<Pair<L, R>>, handle: Handle) -> Option<Handle> {
        let side = self.side;
        if let Some(right) = nodes.right(handle, side) {
            return nodes.find_minimum(Some(right), side);
        }
        let mut current = handle;
        while let Some(parent) = nodes.parent(current, side) {
            if nodes.left(parent, side) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// In-order predecessor; `None` before the minimum.
    pub(crate) fn prev<L, R>(&self, nodes: &Arena<Pair<L, R>>, handle: Handle) -> Option<Handle> {
        let side = self.side;
        if let Some(left) = nodes.left(handle, side) {
            return nodes.find_maximum(Some(left), side);
        }
        let mut current = handle;
        while let Some(parent) = nodes.parent(current, side) {
            if nodes.right(parent, side) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The pair equal to `key` if present, else the first pair ordered after it.
    pub(crate) fn lower_bound<L, R, F, C>(&self, nodes: &Arena<Pair<L, R>>, compare: &C, key: &F::Key) -> Option<Handle>
    where
        F: Facet<L, R>,
        C: Compare<F::Key>,
    {
        self.find::<L, R, F, C>(nodes, compare, key)
            .or_else(|| self.upper_bound::<L, R, F, C>(nodes, compare, key))
    }

    /// The first pair ordered strictly after `key`.
    pub(crate) fn upper_bound<L, R, F, C>(&self, nodes: &Arena<Pair<L, R>>, compare: &C, key: &F::Key) -> Option<Handle>
    where
        F: Facet<L, R>,
        C: Compare<F::Key>,
    {
        let mut bound = None;
        let mut current = self.root;
        while let Some(handle) = current {
            if compare.compare(key, F::key(nodes.get(handle))) == Ordering::Less {
                bound = Some(handle);
                current = nodes.left(handle, self.side);
            } else {
                current = nodes.right(handle, self.side);
            }
        }
        bound
    }
}
