//! Storage layer - snapshot schema and file I/O.
//!
//! This module handles persistence of a directory:
//! - [`Snapshot`] - the serialized form (flat records plus a count)
//! - [`SnapshotStore`] - reads and writes snapshot files
//!
//! Nothing here is consulted while the tree is being mutated; saving and
//! loading happen only at explicit points chosen by the caller.

mod snapshot;
mod snapshot_store;

pub use snapshot::{RestoreReport, Snapshot};
pub use snapshot_store::SnapshotStore;
