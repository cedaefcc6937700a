//! Common types and utilities shared across rosterdb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (NodeId, StudentId)

pub mod config;
pub mod error;
mod node_id;
mod student_id;

pub use error::{Error, Result};
pub use node_id::NodeId;
pub use student_id::StudentId;
