use super::arena::Arena;
use super::handle::Handle;
use super::node::Pair;
use super::tree::Tree;

/// Double-ended in-order walk over one tree.
pub(crate) struct RawIter<'a, L, R> {
    nodes: &'a Arena<Pair<L, R>>,
    tree: &'a Tree,
    front: Option<Handle>,
    back: Option<Handle>,
    // Front and back meet when this reaches zero; neither handle is trusted after that.
    remaining: usize,
}

impl<'a, L, R> RawIter<'a, L, R> {
    pub(crate) fn new(nodes: &'a Arena<Pair<L, R>>, tree: &'a Tree, len: usize) -> Self {
        Self {
            nodes,
            tree,
            front: tree.first(nodes),
            back: tree.last(nodes),
            remaining: len,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }

    pub(crate) fn next(&mut self) -> Option<&'a Pair<L, R>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.next(self.nodes, handle);
        Some(self.nodes.get(handle))
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a Pair<L, R>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.prev(self.nodes, handle);
        Some(self.nodes.get(handle))
    }
}

impl<L, R> Clone for RawIter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}
