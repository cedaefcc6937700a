//! Snapshot schema - the on-disk shape of a directory.

use serde::{Deserialize, Serialize};

use crate::directory::{Student, StudentDirectory};

/// A serializable copy of a directory.
///
/// # Format
/// ```text
/// {
///   "total_estudiantes": 2,
///   "estudiantes": [
///     { "id_estudiante": 1, "nombre": "...", "edad": 20,
///       "carrera": "...", "semestre": 3 },
///     ...
///   ]
/// }
/// ```
///
/// Records are stored flat, ascending by id. No tree structure is
/// persisted: restoring replays the records through
/// [`StudentDirectory::add`] in file order. `total_estudiantes` is
/// redundant with the record list and is only checked, never trusted.
/// Files without it load normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Declared record count; `None` when the file has no header count.
    #[serde(rename = "total_estudiantes", default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    #[serde(rename = "estudiantes", default)]
    pub students: Vec<Student>,
}

/// Outcome of replaying a snapshot into a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
    /// Records added to the directory.
    pub loaded: usize,

    /// Records rejected because their id was already present.
    pub skipped: usize,
}

impl Snapshot {
    /// Capture `directory` in id order.
    pub fn from_directory(directory: &StudentDirectory) -> Self {
        Self {
            total: Some(directory.len()),
            students: directory.iter().cloned().collect(),
        }
    }

    /// Feed every record, in file order, to `directory.add`.
    ///
    /// Records whose id is already in the directory (or appears twice in
    /// the snapshot) are skipped. A declared `total` that disagrees with
    /// the number of records is logged and otherwise ignored.
    pub fn restore_into(self, directory: &mut StudentDirectory) -> RestoreReport {
        let mut report = RestoreReport::default();

        let actual = self.students.len();
        if let Some(declared) = self.total.filter(|&n| n != actual) {
            tracing::warn!(
                target: "rosterdb::storage",
                declared,
                actual,
                "snapshot record count disagrees with its header"
            );
        }

        for student in self.students {
            let id = student.id();
            if directory.add(student) {
                report.loaded += 1;
            } else {
                report.skipped += 1;
                tracing::warn!(
                    target: "rosterdb::storage",
                    id = id.0,
                    "skipped duplicate id in snapshot"
                );
            }
        }

        report
    }
}
