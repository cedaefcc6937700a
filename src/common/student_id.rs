//! Student identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a student record.
///
/// This is the ordering key of the directory tree. It is immutable once a
/// record is inserted; every other field of a [`Student`](crate::Student)
/// can change in place.
///
/// Serialized transparently as a plain integer.
///
/// # Example
/// ```
/// use rosterdb::StudentId;
///
/// let id = StudentId::new(42);
/// assert!(StudentId::new(1) < id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

impl StudentId {
    /// Create a new StudentId.
    #[inline]
    pub fn new(id: u32) -> Self {
        StudentId(id)
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
