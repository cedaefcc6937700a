//! rosterdb - A student record directory backed by an arena-allocated AVL tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            rosterdb                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Storage Layer (storage/)                     │   │
//! │  │        Snapshot schema + SnapshotStore (JSON)            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                    ↓ save / load (explicit points only)         │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Record Directory (directory/)                 │   │
//! │  │  StudentDirectory: unique ids, counted search, filters,  │   │
//! │  │                    statistics                            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Balanced Tree Engine (tree/)                  │   │
//! │  │   AvlTree<K, V>: arena of nodes, rotations, recursive    │   │
//! │  │   insert/delete returning the new subtree root           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, StudentId, Error, config)
//! - [`tree`] - The AVL tree engine
//! - [`directory`] - Student records on top of the tree
//! - [`storage`] - Snapshot schema and file I/O
//!
//! # Quick Start
//! ```
//! use rosterdb::{Student, StudentDirectory, StudentId};
//!
//! let mut dir = StudentDirectory::new();
//! for id in [10, 20, 30] {
//!     dir.add(Student::new(StudentId::new(id), "name", 20, "Physics", 1));
//! }
//!
//! // Ascending inserts were rebalanced: 20 is now the root.
//! let root = dir.tree().root_node().unwrap();
//! assert_eq!(*root.key(), StudentId::new(20));
//!
//! let (found, visits) = dir.find_counted(StudentId::new(30));
//! assert!(found.is_some());
//! assert_eq!(visits, 2);
//! ```

pub mod common;
pub mod directory;
pub mod storage;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, NodeId, Result, StudentId};

pub use directory::{
    DirectoryStats, ScanResult, SearchField, Student, StudentDirectory, StudentUpdate,
};
pub use storage::{RestoreReport, Snapshot, SnapshotStore};
pub use tree::{AvlNode, AvlTree};
