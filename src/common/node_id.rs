//! Arena slot identifier type.

use std::fmt;

/// Identifies a node slot in the tree arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Option<AvlNode>>`
/// 2. Direct indexing without casting: `slots[node_id.0]`
/// 3. Parent/child links become plain copies instead of borrows
///
/// # Example
/// ```
/// use rosterdb::NodeId;
///
/// let node_id = NodeId::new(5);
/// assert_eq!(node_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
