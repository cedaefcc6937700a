//! Record directory.
//!
//! Maps student records onto the tree engine and adds the record-level
//! semantics: unique ids, in-place edits, filters and statistics.
//!
//! # Components
//! - [`StudentDirectory`] - the directory itself
//! - [`Student`] / [`StudentUpdate`] - the record and a partial edit of it
//! - [`DirectoryStats`] - aggregate statistics
//! - [`ScanResult`] / [`SearchField`] - linear scan results

mod scan;
mod stats;
mod student;
mod student_directory;

pub use scan::{ScanResult, SearchField};
pub use stats::DirectoryStats;
pub use student::{Student, StudentUpdate};
pub use student_directory::StudentDirectory;
