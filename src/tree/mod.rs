//! Balanced tree engine.
//!
//! An AVL tree stored in an arena of nodes addressed by [`NodeId`]. It has
//! no knowledge of domain records: keys only need a total order.
//!
//! # Components
//! - [`AvlTree`] - insertion, search, deletion, rebalancing
//! - [`AvlNode`] - read-only view of one node
//! - [`Iter`] - in-order traversal
//!
//! [`NodeId`]: crate::NodeId

mod avl_tree;
mod iter;
mod node;
mod validate;

pub use avl_tree::AvlTree;
pub use iter::Iter;
pub use node::AvlNode;
