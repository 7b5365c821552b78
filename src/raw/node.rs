use core::cmp;

use super::arena::Arena;
use super::handle::Handle;

/// Index of the left-ordered tree's links inside a [`Pair`].
pub(crate) const LEFT: usize = 0;
/// Index of the right-ordered tree's links inside a [`Pair`].
pub(crate) const RIGHT: usize = 1;

/// Navigational links of one pair within one tree.
///
/// Links never own anything; the arena owns every pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Links {
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // height(n) = 1 + max(height(n.left), height(n.right)); a missing child counts as 0.
    pub(crate) height: u32,
}

impl Links {
    /// Links of a detached leaf.
    pub(crate) const fn leaf() -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// A stored pair: both keys plus one set of links per tree, in a single arena slot.
pub(crate) struct Pair<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
    links: [Links; 2],
}

impl<L, R> Pair<L, R> {
    pub(crate) const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            links: [Links::leaf(), Links::leaf()],
        }
    }

    #[inline]
    pub(crate) fn links(&self, side: usize) -> &Links {
        &self.links[side]
    }

    #[inline]
    pub(crate) fn links_mut(&mut self, side: usize) -> &mut Links {
        &mut self.links[side]
    }

    pub(crate) fn into_keys(self) -> (L, R) {
        (self.left, self.right)
    }
}

// Structural AVL algorithms. They only touch links and heights of one side and never
// look at keys, so the same code serves both trees.
impl<L, R> Arena<Pair<L, R>> {
    #[inline]
    pub(crate) fn links(&self, handle: Handle, side: usize) -> &Links {
        self.get(handle).links(side)
    }

    #[inline]
    pub(crate) fn links_mut(&mut self, handle: Handle, side: usize) -> &mut Links {
        self.get_mut(handle).links_mut(side)
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle, side: usize) -> Option<Handle> {
        self.links(handle, side).parent
    }

    #[inline]
    pub(crate) fn left(&self, handle: Handle, side: usize) -> Option<Handle> {
        self.links(handle, side).left
    }

    #[inline]
    pub(crate) fn right(&self, handle: Handle, side: usize) -> Option<Handle> {
        self.links(handle, side).right
    }

    #[inline]
    pub(crate) fn height(&self, node: Option<Handle>, side: usize) -> u32 {
        node.map_or(0, |h| self.links(h, side).height)
    }

    fn update_height(&mut self, handle: Handle, side: usize) {
        let links = *self.links(handle, side);
        let height = cmp::max(self.height(links.left, side), self.height(links.right, side)) + 1;
        self.links_mut(handle, side).height = height;
    }

    /// `height(right) - height(left)`.
    pub(crate) fn difference(&self, handle: Handle, side: usize) -> i64 {
        let links = self.links(handle, side);
        i64::from(self.height(links.right, side)) - i64::from(self.height(links.left, side))
    }

    fn set_parent(&mut self, child: Option<Handle>, parent: Option<Handle>, side: usize) {
        if let Some(child) = child {
            self.links_mut(child, side).parent = parent;
        }
    }

    pub(crate) fn set_left(&mut self, handle: Handle, child: Option<Handle>, side: usize) {
        self.links_mut(handle, side).left = child;
        self.set_parent(child, Some(handle), side);
    }

    pub(crate) fn set_right(&mut self, handle: Handle, child: Option<Handle>, side: usize) {
        self.links_mut(handle, side).right = child;
        self.set_parent(child, Some(handle), side);
    }

    pub(crate) fn set_children(&mut self, handle: Handle, left: Option<Handle>, right: Option<Handle>, side: usize) {
        self.set_left(handle, left, side);
        self.set_right(handle, right, side);
    }

    /// Single right rotation. Returns the new subtree root, whose parent link is left
    /// for the caller to reattach.
    pub(crate) fn rotate_right(&mut self, handle: Handle, side: usize) -> Handle {
        let previous_left = self.left(handle, side).expect("`rotate_right()` - node has no left child");

        self.set_left(handle, self.right(previous_left, side), side);
        self.set_right(previous_left, Some(handle), side);

        self.update_height(handle, side);
        self.update_height(previous_left, side);

        previous_left
    }

    /// Single left rotation. Returns the new subtree root, whose parent link is left
    /// for the caller to reattach.
    pub(crate) fn rotate_left(&mut self, handle: Handle, side: usize) -> Handle {
        let previous_right = self.right(handle, side).expect("`rotate_left()` - node has no right child");

        self.set_right(handle, self.left(previous_right, side), side);
        self.set_left(previous_right, Some(handle), side);

        self.update_height(handle, side);
        self.update_height(previous_right, side);

        previous_right
    }

    /// Recomputes the height of `handle` and restores the AVL property at it with at
    /// most two rotations. Returns the (possibly new) subtree root.
    pub(crate) fn balance(&mut self, handle: Handle, side: usize) -> Handle {
        self.update_height(handle, side);
        match self.difference(handle, side) {
            2 => {
                if let Some(right) = self.right(handle, side) {
                    if self.difference(right, side) < 0 {
                        let rotated = self.rotate_right(right, side);
                        self.set_right(handle, Some(rotated), side);
                    }
                }
                self.rotate_left(handle, side)
            }
            -2 => {
                if let Some(left) = self.left(handle, side) {
                    if self.difference(left, side) > 0 {
                        let rotated = self.rotate_left(left, side);
                        self.set_left(handle, Some(rotated), side);
                    }
                }
                self.rotate_right(handle, side)
            }
            _ => handle,
        }
    }

    pub(crate) fn find_minimum(&self, node: Option<Handle>, side: usize) -> Option<Handle> {
        let mut current = node?;
        while let Some(left) = self.left(current, side) {
            current = left;
        }
        Some(current)
    }

    pub(crate) fn find_maximum(&self, node: Option<Handle>, side: usize) -> Option<Handle> {
        let mut current = node?;
        while let Some(right) = self.right(current, side) {
            current = right;
        }
        Some(current)
    }

    /// Detaches the minimum of the subtree rooted at `handle` and returns the root of
    /// what remains, rebalanced along the left spine.
    pub(crate) fn remove_minimum(&mut self, handle: Handle, side: usize) -> Option<Handle> {
        let Some(left) = self.left(handle, side) else {
            return self.right(handle, side);
        };
        let rest = self.remove_minimum(left, side);
        self.set_left(handle, rest, side);
        Some(self.balance(handle, side))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn arena_of(n: u32) -> (Arena<Pair<u32, ()>>, alloc::vec::Vec<Handle>) {
        let mut arena = Arena::new();
        let handles = (0..n).map(|i| arena.alloc(Pair::new(i, ()))).collect();
        (arena, handles)
    }

    #[test]
    fn new_pair_is_a_detached_leaf_on_both_sides() {
        let pair = Pair::new(1, 'a');
        assert_eq!(*pair.links(LEFT), Links::leaf());
        assert_eq!(*pair.links(RIGHT), Links::leaf());
        assert_eq!(pair.into_keys(), (1, 'a'));
    }

    #[test]
    fn set_left_repoints_parent() {
        let (mut arena, h) = arena_of(2);
        arena.set_left(h[0], Some(h[1]), LEFT);
        assert_eq!(arena.left(h[0], LEFT), Some(h[1]));
        assert_eq!(arena.parent(h[1], LEFT), Some(h[0]));
        // The other side is untouched.
        assert_eq!(arena.left(h[0], RIGHT), None);
        assert_eq!(arena.parent(h[1], RIGHT), None);

        arena.set_left(h[0], None, LEFT);
        assert_eq!(arena.left(h[0], LEFT), None);
    }

    #[test]
    fn right_leaning_chain_rotates_left() {
        // 0 -> 1 -> 2 down the right spine.
        let (mut arena, h) = arena_of(3);
        arena.set_right(h[1], Some(h[2]), LEFT);
        arena.balance(h[1], LEFT);
        arena.set_right(h[0], Some(h[1]), LEFT);

        let root = arena.balance(h[0], LEFT);
        assert_eq!(root, h[1]);
        assert_eq!(arena.left(root, LEFT), Some(h[0]));
        assert_eq!(arena.right(root, LEFT), Some(h[2]));
        assert_eq!(arena.height(Some(root), LEFT), 2);
        assert_eq!(arena.height(Some(h[0]), LEFT), 1);
        assert_eq!(arena.difference(root, LEFT), 0);
    }

    #[test]
    fn zig_zag_uses_double_rotation() {
        // 0 has right child 2, which has left child 1.
        let (mut arena, h) = arena_of(3);
        arena.set_left(h[2], Some(h[1]), LEFT);
        arena.balance(h[2], LEFT);
        arena.set_right(h[0], Some(h[2]), LEFT);

        let root = arena.balance(h[0], LEFT);
        assert_eq!(root, h[1]);
        assert_eq!(arena.left(root, LEFT), Some(h[0]));
        assert_eq!(arena.right(root, LEFT), Some(h[2]));
        assert_eq!(arena.parent(h[0], LEFT), Some(h[1]));
        assert_eq!(arena.parent(h[2], LEFT), Some(h[1]));
    }

    #[test]
    fn mirrored_zig_zag_uses_double_rotation() {
        // 2 has left child 0, which has right child 1.
        let (mut arena, h) = arena_of(3);
        arena.set_right(h[0], Some(h[1]), RIGHT);
        arena.balance(h[0], RIGHT);
        arena.set_left(h[2], Some(h[0]), RIGHT);

        let root = arena.balance(h[2], RIGHT);
        assert_eq!(root, h[1]);
        assert_eq!(arena.left(root, RIGHT), Some(h[0]));
        assert_eq!(arena.right(root, RIGHT), Some(h[2]));
        assert_eq!(arena.height(Some(root), RIGHT), 2);
    }

    #[test]
    fn extremes_of_empty_subtree_are_none() {
        let (arena, _) = arena_of(0);
        assert_eq!(arena.find_minimum(None, LEFT), None);
        assert_eq!(arena.find_maximum(None, LEFT), None);
    }

    #[test]
    fn remove_minimum_returns_remaining_subtree() {
        //     1
        //    / \
        //   0   2
        let (mut arena, h) = arena_of(3);
        arena.set_children(h[1], Some(h[0]), Some(h[2]), LEFT);
        arena.balance(h[1], LEFT);

        assert_eq!(arena.find_minimum(Some(h[1]), LEFT), Some(h[0]));
        assert_eq!(arena.find_maximum(Some(h[1]), LEFT), Some(h[2]));

        let rest = arena.remove_minimum(h[1], LEFT);
        assert_eq!(rest, Some(h[1]));
        assert_eq!(arena.left(h[1], LEFT), None);
        assert_eq!(arena.height(rest, LEFT), 2);

        // A subtree without a left child hands back its right child.
        assert_eq!(arena.remove_minimum(h[1], LEFT), Some(h[2]));
    }
}
