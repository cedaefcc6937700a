//! AVL tree engine - arena-backed self-balancing binary search tree.
//!
//! The [`AvlTree`] provides:
//! - Insertion with recursive rebalancing (equal keys descend left)
//! - Instrumented search that counts visited nodes
//! - Deletion covering the leaf, single-child and two-child cases
//! - In-order traversal
//!
//! Every structural operation follows the same contract: the recursive
//! helper receives a subtree root and returns the (possibly rotated)
//! subtree root, and the caller reattaches whatever comes back.

use std::cmp::Ordering;

use crate::common::NodeId;
use crate::tree::{AvlNode, Iter};

/// A self-balancing binary search tree with AVL discipline.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                        AvlTree<K, V>                        │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │     root     │  │  slots: Vec<Option<AvlNode<K,V>>> │   │
/// │  │Option<NodeId>│─▶│  [Node0] [ free ] [Node2] ...     │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐                        │
/// │  │  free_list   │  │     len      │                        │
/// │  │ Vec<NodeId>  │  │    usize     │                        │
/// │  └──────────────┘  └──────────────┘                        │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Nodes refer to each other by [`NodeId`]. Freed slots go on the free
/// list (LIFO) and are reused by the next insertion.
///
/// # Invariants
/// After every public method returns:
/// - in-order traversal yields keys in non-decreasing order
/// - every node's balance factor is in `{-1, 0, 1}`
/// - `parent` links agree with `left`/`right` links; the root has none
/// - stored heights and balance factors are exact
///
/// [`check_invariants`](AvlTree::check_invariants) verifies all of them.
///
/// # Example
/// ```
/// use rosterdb::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [10, 20, 30] {
///     tree.insert(key, key * 100);
/// }
///
/// // Inserting in ascending order forced a left rotation at 10.
/// assert_eq!(tree.root_node().map(|n| *n.key()), Some(20));
///
/// let (value, visited) = tree.search(&30);
/// assert_eq!(value, Some(&3000));
/// assert_eq!(visited, 2);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<K, V> {
    /// Node storage. `None` marks a freed slot.
    slots: Vec<Option<AvlNode<K, V>>>,

    /// Freed slot ids (LIFO).
    free_list: Vec<NodeId>,

    root: Option<NodeId>,

    /// Number of live nodes.
    len: usize,
}

impl<K, V> AvlTree<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            root: None,
            len: 0,
        }
    }

    // ========================================================================
    // Public API: Shape and size
    // ========================================================================

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Id of the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The root node, if any.
    pub fn root_node(&self) -> Option<&AvlNode<K, V>> {
        self.root.map(|id| self.slot(id))
    }

    /// Read-only access to a node.
    ///
    /// Returns `None` for ids that were never allocated or whose slot has
    /// been freed. A `NodeId` obtained from [`insert`](AvlTree::insert)
    /// keeps naming the same key until the next removal: the two-child
    /// deletion case moves a key between slots.
    pub fn node(&self, id: NodeId) -> Option<&AvlNode<K, V>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Remove every node.
    ///
    /// The arena is released as well; the next insertion starts from slot 0.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.root = None;
        self.len = 0;
    }

    // ========================================================================
    // Public API: Traversal
    // ========================================================================

    /// In-order iterator over `(key, value)` pairs, ascending by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    // ========================================================================
    // Internal: Arena
    // ========================================================================

    /// Borrow an occupied slot.
    ///
    /// # Panics
    /// Panics if `id` names a freed slot. Only ids reachable from `root`
    /// are ever passed here.
    pub(crate) fn slot(&self, id: NodeId) -> &AvlNode<K, V> {
        match &self.slots[id.0] {
            Some(node) => node,
            None => panic!("{} refers to a freed slot", id),
        }
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut AvlNode<K, V> {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => panic!("{} refers to a freed slot", id),
        }
    }

    /// Number of slots ever allocated, free or not.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Place a detached node in the arena, reusing a freed slot if possible.
    fn alloc(&mut self, key: K, value: V) -> NodeId {
        let node = AvlNode::new(key, value);

        if let Some(id) = self.free_list.pop() {
            self.slots[id.0] = Some(node);
            return id;
        }

        self.slots.push(Some(node));
        NodeId::new(self.slots.len() - 1)
    }

    /// Take a node out of the arena and put its slot on the free list.
    fn release(&mut self, id: NodeId) -> AvlNode<K, V> {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free_list.push(id);
                node
            }
            None => panic!("{} released twice", id),
        }
    }

    // ========================================================================
    // Internal: Linking
    // ========================================================================

    /// Install `root` as the tree root and clear its parent link.
    fn adopt_root(&mut self, root: Option<NodeId>) {
        self.root = root;
        if let Some(id) = root {
            self.slot_mut(id).parent = None;
        }
    }

    fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.slot_mut(parent).left = child;
        if let Some(id) = child {
            self.slot_mut(id).parent = Some(parent);
        }
    }

    fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.slot_mut(parent).right = child;
        if let Some(id) = child {
            self.slot_mut(id).parent = Some(parent);
        }
    }

    // ========================================================================
    // Internal: Height bookkeeping and rotations
    // ========================================================================

    fn height_of(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self.slot(id).height)
    }

    /// Recompute height and balance factor from the children.
    fn update_height(&mut self, id: NodeId) {
        let (left, right) = {
            let node = self.slot(id);
            (node.left, node.right)
        };
        let lh = self.height_of(left);
        let rh = self.height_of(right);

        let node = self.slot_mut(id);
        node.height = 1 + lh.max(rh);
        node.balance_factor = lh as i32 - rh as i32;
    }

    /// Rotate `n` right around its left child and return the new subtree root.
    ///
    /// ```text
    ///        n              l
    ///       / \            / \
    ///      l   c   ──▶    a   n
    ///     / \                / \
    ///    a   b              b   c
    /// ```
    ///
    /// `l` inherits `n`'s parent link; the caller must still point the
    /// grandparent (or the tree root) at `l`.
    fn rotate_right(&mut self, n: NodeId) -> NodeId {
        let Some(l) = self.slot(n).left else {
            return n;
        };
        let l_right = self.slot(l).right;
        let parent = self.slot(n).parent;

        self.set_left(n, l_right);
        self.slot_mut(l).right = Some(n);
        self.slot_mut(l).parent = parent;
        self.slot_mut(n).parent = Some(l);

        // Child first: l's height depends on n's.
        self.update_height(n);
        self.update_height(l);

        tracing::trace!(target: "rosterdb::tree", pivot = n.0, new_root = l.0, "rotate right");
        l
    }

    /// Mirror of [`rotate_right`](Self::rotate_right).
    fn rotate_left(&mut self, n: NodeId) -> NodeId {
        let Some(r) = self.slot(n).right else {
            return n;
        };
        let r_left = self.slot(r).left;
        let parent = self.slot(n).parent;

        self.set_right(n, r_left);
        self.slot_mut(r).left = Some(n);
        self.slot_mut(r).parent = parent;
        self.slot_mut(n).parent = Some(r);

        self.update_height(n);
        self.update_height(r);

        tracing::trace!(target: "rosterdb::tree", pivot = n.0, new_root = r.0, "rotate left");
        r
    }

    /// Restore the AVL property at `n` and return the subtree root.
    ///
    /// Both children must already be balanced. At most two rotations run.
    fn rebalance(&mut self, n: NodeId) -> NodeId {
        self.update_height(n);
        let node = self.slot(n);
        let (bf, left, right) = (node.balance_factor, node.left, node.right);

        let root = if bf > 1 {
            // Left-right case: straighten the left child first.
            if let Some(l) = left {
                if self.slot(l).balance_factor < 0 {
                    let new_left = self.rotate_left(l);
                    self.slot_mut(n).left = Some(new_left);
                }
            }
            self.rotate_right(n)
        } else if bf < -1 {
            // Right-left case.
            if let Some(r) = right {
                if self.slot(r).balance_factor > 0 {
                    let new_right = self.rotate_right(r);
                    self.slot_mut(n).right = Some(new_right);
                }
            }
            self.rotate_left(n)
        } else {
            n
        };

        debug_assert!(
            self.slot(root).balance_factor.abs() <= 1,
            "{} still unbalanced after rebalance",
            root
        );
        root
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert a key/value pair and return the id of its node.
    ///
    /// Keys equal to an existing key are placed in its left subtree, so the
    /// tree itself tolerates duplicates. Callers that need unique keys must
    /// check [`contains_key`](Self::contains_key) first.
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        let new = self.alloc(key, value);
        let root = self.insert_at(self.root, new);
        self.adopt_root(Some(root));
        self.len += 1;
        new
    }

    /// Attach the detached node `new` below `current`.
    ///
    /// Returns the root of the subtree after rebalancing.
    fn insert_at(&mut self, current: Option<NodeId>, new: NodeId) -> NodeId {
        let Some(cur) = current else {
            return new;
        };

        if self.slot(new).key <= self.slot(cur).key {
            let left = self.slot(cur).left;
            let child = self.insert_at(left, new);
            self.set_left(cur, Some(child));
        } else {
            let right = self.slot(cur).right;
            let child = self.insert_at(right, new);
            self.set_right(cur, Some(child));
        }

        self.rebalance(cur)
    }

    // ========================================================================
    // Public API: Search
    // ========================================================================

    /// Look up `key`, counting every node visited on the way.
    ///
    /// The matching node counts as visited. An empty tree yields
    /// `(None, 0)`.
    pub fn search(&self, key: &K) -> (Option<&V>, usize) {
        let mut visited = 0;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.slot(id);
            visited += 1;

            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return (Some(&node.value), visited),
            }
        }

        (None, visited)
    }

    /// Id of the first node on the search path whose key equals `key`.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.slot(id);
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(id),
            }
        }

        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.slot(id).value)
    }

    /// Mutable access to the value under `key`.
    ///
    /// Only the value is exposed; the key and the links stay untouched.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.slot_mut(id).value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    // ========================================================================
    // Public API: Remove
    // ========================================================================

    /// Remove `key` and return the pair that was stored under it.
    ///
    /// Returns `None`, leaving the tree untouched, if the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let root = self.root?;

        let (new_root, removed) = self.delete_at(root, key);
        if removed.is_some() {
            self.adopt_root(new_root);
            self.len -= 1;
        }

        removed
    }

    /// Delete `key` from the subtree rooted at `n`.
    ///
    /// Returns the new subtree root and the removed pair. When nothing
    /// matched, the subtree is returned as-is.
    fn delete_at(&mut self, n: NodeId, key: &K) -> (Option<NodeId>, Option<(K, V)>) {
        match key.cmp(&self.slot(n).key) {
            Ordering::Less => {
                let Some(left) = self.slot(n).left else {
                    return (Some(n), None);
                };
                let (new_left, removed) = self.delete_at(left, key);
                if removed.is_none() {
                    return (Some(n), None);
                }
                self.set_left(n, new_left);
                (Some(self.rebalance(n)), removed)
            }
            Ordering::Greater => {
                let Some(right) = self.slot(n).right else {
                    return (Some(n), None);
                };
                let (new_right, removed) = self.delete_at(right, key);
                if removed.is_none() {
                    return (Some(n), None);
                }
                self.set_right(n, new_right);
                (Some(self.rebalance(n)), removed)
            }
            Ordering::Equal => self.unlink(n),
        }
    }

    /// Remove the node `n` itself and return the subtree that replaces it.
    fn unlink(&mut self, n: NodeId) -> (Option<NodeId>, Option<(K, V)>) {
        let (left, right, parent) = {
            let node = self.slot(n);
            (node.left, node.right, node.parent)
        };

        match (left, right) {
            // Leaf: nothing takes its place.
            (None, None) => {
                let node = self.release(n);
                (None, Some((node.key, node.value)))
            }

            // One child: splice it into n's slot.
            (Some(child), None) | (None, Some(child)) => {
                self.slot_mut(child).parent = parent;
                let node = self.release(n);
                (Some(child), Some((node.key, node.value)))
            }

            // Two children: the in-order predecessor (maximum of the left
            // subtree) gives up its node, and its key/value move into n.
            (Some(left), Some(_)) => {
                let (new_left, pred) = self.detach_max(left);
                self.set_left(n, new_left);

                let pred = self.release(pred);
                let target = self.slot_mut(n);
                let key = std::mem::replace(&mut target.key, pred.key);
                let value = std::mem::replace(&mut target.value, pred.value);

                (Some(self.rebalance(n)), Some((key, value)))
            }
        }
    }

    /// Detach the rightmost node of the subtree rooted at `n`.
    ///
    /// Returns the rebalanced remainder of the subtree and the id of the
    /// detached node. The detached node has at most a left child, which is
    /// spliced into its place, so this never recurses into the two-child
    /// case.
    fn detach_max(&mut self, n: NodeId) -> (Option<NodeId>, NodeId) {
        if let Some(right) = self.slot(n).right {
            let (new_right, max) = self.detach_max(right);
            self.set_right(n, new_right);
            return (Some(self.rebalance(n)), max);
        }

        let (left, parent) = {
            let node = self.slot(n);
            (node.left, node.parent)
        };
        if let Some(child) = left {
            self.slot_mut(child).parent = parent;
        }

        let node = self.slot_mut(n);
        node.left = None;
        node.parent = None;

        (left, n)
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i32]) -> AvlTree<i32, i32> {
        keys.iter().map(|&k| (k, k * 10)).collect()
    }

    fn key_of(tree: &AvlTree<i32, i32>, id: Option<NodeId>) -> Option<i32> {
        id.and_then(|id| tree.node(id)).map(|n| *n.key())
    }

    /// (root, left child, right child) keys.
    fn top(tree: &AvlTree<i32, i32>) -> (Option<i32>, Option<i32>, Option<i32>) {
        let root = tree.root_node().expect("non-empty tree");
        (Some(*root.key()), key_of(tree, root.left()), key_of(tree, root.right()))
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree: AvlTree<i32, i32> = AvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root(), None);
        assert!(tree.check_invariants().is_ok());
    }

    // ========================================================================
    // Rotations on insert
    // ========================================================================

    #[test]
    fn test_right_right_case_rotates_left() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
        assert_eq!(tree.height(), 2);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_left_left_case_rotates_right() {
        let tree = tree_of(&[30, 20, 10]);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_left_right_case_double_rotation() {
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_right_left_case_double_rotation() {
        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_ascending_seven_keys_height_three() {
        let tree = tree_of(&[5, 10, 15, 20, 25, 30, 35]);

        assert_eq!(tree.height(), 3);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
        assert_eq!(
            tree.keys().copied().collect::<Vec<_>>(),
            vec![5, 10, 15, 20, 25, 30, 35]
        );
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_parent_links_after_rotation() {
        let tree = tree_of(&[10, 20, 30]);
        let root = tree.root().unwrap();
        let root_node = tree.node(root).unwrap();

        assert_eq!(root_node.parent(), None);
        let left = tree.node(root_node.left().unwrap()).unwrap();
        let right = tree.node(root_node.right().unwrap()).unwrap();
        assert_eq!(left.parent(), Some(root));
        assert_eq!(right.parent(), Some(root));
    }

    #[test]
    fn test_insert_returns_stable_id() {
        let mut tree = AvlTree::new();
        let id10 = tree.insert(10, "a");
        tree.insert(20, "b");
        tree.insert(30, "c"); // rotates, but 10 keeps its slot

        assert_eq!(tree.node(id10).map(|n| *n.key()), Some(10));
    }

    #[test]
    fn test_duplicate_keys_go_left() {
        let mut tree = AvlTree::new();
        tree.insert(5, "first");
        tree.insert(5, "second");

        assert_eq!(tree.len(), 2);
        let root = tree.root_node().unwrap();
        assert!(root.left().is_some());
        assert!(root.right().is_none());
        tree.check_invariants().unwrap();
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[test]
    fn test_search_counts_visits() {
        let tree = tree_of(&[10, 20, 30]);

        assert_eq!(tree.search(&20), (Some(&200), 1));
        assert_eq!(tree.search(&30), (Some(&300), 2));
        assert_eq!(tree.search(&10), (Some(&100), 2));
    }

    #[test]
    fn test_search_miss_counts_path() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.search(&25), (None, 2));
    }

    #[test]
    fn test_search_empty_tree() {
        let tree: AvlTree<i32, i32> = AvlTree::new();
        assert_eq!(tree.search(&1), (None, 0));
        assert_eq!(tree.get(&1), None);
        assert!(!tree.contains_key(&1));
    }

    #[test]
    fn test_get_mut_changes_value_only() {
        let mut tree = tree_of(&[10, 20, 30]);
        *tree.get_mut(&30).unwrap() = -1;

        assert_eq!(tree.get(&30), Some(&-1));
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
    }

    // ========================================================================
    // Remove
    // ========================================================================

    #[test]
    fn test_remove_leaf() {
        let mut tree = tree_of(&[10, 20, 30]);

        assert_eq!(tree.remove(&30), Some((30, 300)));
        assert_eq!(tree.len(), 2);
        assert_eq!(top(&tree), (Some(20), Some(10), None));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_single_child_reparents() {
        let mut tree = tree_of(&[20, 10, 30, 40]);

        // 30 has only a right child (40).
        assert_eq!(tree.remove(&30), Some((30, 300)));
        assert_eq!(top(&tree), (Some(20), Some(10), Some(40)));

        let root = tree.root().unwrap();
        let right = tree.node(root).unwrap().right().unwrap();
        assert_eq!(tree.node(right).unwrap().parent(), Some(root));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_root_with_single_child() {
        let mut tree = tree_of(&[10, 20]);

        tree.remove(&10);
        let root = tree.root_node().unwrap();
        assert_eq!(*root.key(), 20);
        assert_eq!(root.parent(), None);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_two_children_uses_predecessor() {
        let mut tree = tree_of(&[10, 20, 30]);
        let root_id = tree.root().unwrap();

        assert_eq!(tree.remove(&20), Some((20, 200)));

        // The root slot survives and now holds the predecessor.
        assert_eq!(tree.root(), Some(root_id));
        assert_eq!(top(&tree), (Some(10), None, Some(30)));
        assert_eq!(tree.get(&10), Some(&100));
        assert_eq!(tree.len(), 2);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_deep_predecessor_rebalances() {
        let mut tree = tree_of(&[50, 25, 75, 10, 40, 60, 90, 30, 45, 5, 80]);
        tree.check_invariants().unwrap();

        // 50 has two children; its predecessor 45 sits deep in the left subtree.
        assert_eq!(tree.remove(&50), Some((50, 500)));
        assert_eq!(tree.root_node().map(|n| *n.key()), Some(45));
        assert!(!tree.contains_key(&50));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_triggers_rotation() {
        let mut tree = tree_of(&[20, 10, 30, 40]);

        // Dropping 10 leaves 20 right-heavy by two.
        tree.remove(&10);
        assert_eq!(top(&tree), (Some(30), Some(20), Some(40)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_missing_key() {
        let mut tree = tree_of(&[10, 20, 30]);

        assert_eq!(tree.remove(&25), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(top(&tree), (Some(20), Some(10), Some(30)));
    }

    #[test]
    fn test_remove_from_empty_tree() {
        let mut tree: AvlTree<i32, i32> = AvlTree::new();
        assert_eq!(tree.remove(&1), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_everything() {
        let keys: Vec<i32> = (1..=50).collect();
        let mut tree = tree_of(&keys);

        for k in keys.iter().rev() {
            assert!(tree.remove(k).is_some());
            tree.check_invariants().unwrap();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut tree = tree_of(&[10, 20, 30]);
        tree.remove(&30);
        assert_eq!(tree.free_count(), 1);

        tree.insert(40, 400);
        assert_eq!(tree.free_count(), 0);
        assert_eq!(tree.slot_count(), 3);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[1, 2, 3, 4]);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.slot_count(), 0);
        assert_eq!(tree.iter().count(), 0);
    }
}
