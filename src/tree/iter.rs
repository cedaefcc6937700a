//! In-order traversal.

use std::iter::FusedIterator;

use crate::common::NodeId;
use crate::tree::AvlTree;

/// In-order iterator over an [`AvlTree`].
///
/// Holds the left spine of the unvisited part of the tree on an explicit
/// stack, so traversal depth never touches the call stack. The tree is
/// only borrowed; iterating twice yields the same sequence.
pub struct Iter<'a, K, V> {
    tree: &'a AvlTree<K, V>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a AvlTree<K, V>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height() as usize),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.slot(id).left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.slot(id);

        self.push_left_spine(node.right());
        self.remaining -= 1;

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
