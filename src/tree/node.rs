//! Tree node - one occupied slot in the AVL arena.

use crate::common::NodeId;

/// A node in the AVL arena.
///
/// Links to other nodes are [`NodeId`] indices into the owning tree's
/// arena, so a node never borrows its parent or children. The tree is the
/// only thing allowed to rewire them; callers get read-only access through
/// [`AvlTree::node`](crate::AvlTree::node).
///
/// # Layout
/// ```text
///                 parent
///                   ▲
///                   │ (non-owning)
///          ┌────────┴────────┐
///          │ key    payload  │
///          │ height balance  │
///          └───┬─────────┬───┘
///              ▼         ▼
///            left      right
/// ```
#[derive(Debug, Clone)]
pub struct AvlNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    /// 1 + max(height(left), height(right)); a detached node has height 1.
    pub(crate) height: u32,
    /// height(left) - height(right).
    pub(crate) balance_factor: i32,
}

impl<K, V> AvlNode<K, V> {
    /// Create a detached node.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent: None,
            height: 1,
            balance_factor: 0,
        }
    }

    /// The ordering key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload attached to the key.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Structural parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn balance_factor(&self) -> i32 {
        self.balance_factor
    }

    /// True if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_detached_leaf() {
        let node = AvlNode::new(10, "ten");

        assert_eq!(*node.key(), 10);
        assert_eq!(*node.value(), "ten");
        assert!(node.is_leaf());
        assert_eq!(node.parent(), None);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
    }

    #[test]
    fn test_is_leaf_with_child() {
        let mut node = AvlNode::new(10, ());
        node.left = Some(NodeId::new(3));
        assert!(!node.is_leaf());
    }
}
