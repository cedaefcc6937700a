//! Structural invariant checking.
//!
//! Used by tests after every mutation; also handy when debugging a
//! suspected rebalancing bug in a caller's data set.

use std::fmt::Debug;

use crate::common::{Error, NodeId, Result};
use crate::tree::AvlTree;

/// Facts gathered about a subtree while checking it.
struct SubtreeInfo {
    height: u32,
    count: usize,
}

impl<K: Ord + Debug, V> AvlTree<K, V> {
    /// Verify every structural invariant of the tree.
    ///
    /// Checks, for every reachable node:
    /// - keys in the left subtree are `<=` the node's key, keys in the
    ///   right subtree are `>=` it (equal keys only arise when the caller
    ///   inserted duplicates)
    /// - the balance factor is in `{-1, 0, 1}`
    /// - stored height and balance factor match the children
    /// - the parent link points back at the node that owns it
    ///
    /// and that the number of reachable nodes equals [`len`](Self::len).
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` describing the first broken
    /// invariant found.
    pub fn check_invariants(&self) -> Result<()> {
        let count = match self.root() {
            Some(root) => self.check_subtree(root, None, None, None)?.count,
            None => 0,
        };

        if count != self.len() {
            return Err(violation(format!(
                "len is {} but {} nodes are reachable",
                self.len(),
                count
            )));
        }

        if self.slot_count() - self.free_count() != count {
            return Err(violation(format!(
                "{} slots allocated, {} free, but {} nodes are reachable",
                self.slot_count(),
                self.free_count(),
                count
            )));
        }

        Ok(())
    }

    fn check_subtree(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<SubtreeInfo> {
        let node = self
            .node(id)
            .ok_or_else(|| violation(format!("{} is linked but its slot is free", id)))?;

        if node.parent() != parent {
            return Err(violation(format!(
                "{} (key {:?}) has parent {:?}, expected {:?}",
                id,
                node.key(),
                node.parent(),
                parent
            )));
        }

        if let Some(lo) = lower {
            if node.key() < lo {
                return Err(violation(format!(
                    "key {:?} sits in the right subtree of {:?}",
                    node.key(),
                    lo
                )));
            }
        }
        if let Some(hi) = upper {
            if node.key() > hi {
                return Err(violation(format!(
                    "key {:?} sits in the left subtree of {:?}",
                    node.key(),
                    hi
                )));
            }
        }

        let left = match node.left() {
            Some(l) => self.check_subtree(l, Some(id), lower, Some(node.key()))?,
            None => SubtreeInfo { height: 0, count: 0 },
        };
        let right = match node.right() {
            Some(r) => self.check_subtree(r, Some(id), Some(node.key()), upper)?,
            None => SubtreeInfo { height: 0, count: 0 },
        };

        let height = 1 + left.height.max(right.height);
        let balance = left.height as i32 - right.height as i32;

        if node.height() != height {
            return Err(violation(format!(
                "key {:?} stores height {}, actual {}",
                node.key(),
                node.height(),
                height
            )));
        }
        if node.balance_factor() != balance {
            return Err(violation(format!(
                "key {:?} stores balance factor {}, actual {}",
                node.key(),
                node.balance_factor(),
                balance
            )));
        }
        if !(-1..=1).contains(&balance) {
            return Err(violation(format!(
                "key {:?} has balance factor {}",
                node.key(),
                balance
            )));
        }

        Ok(SubtreeInfo {
            height,
            count: left.count + right.count + 1,
        })
    }
}

fn violation(reason: String) -> Error {
    Error::InvariantViolation(reason)
}
