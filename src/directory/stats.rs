//! Aggregate statistics over the directory.

use std::collections::BTreeMap;
use std::fmt;

use crate::common::config::STATS_DECIMALS;
use crate::directory::Student;

/// A point-in-time summary of the directory.
///
/// Computed in one linear pass over the records; see
/// [`StudentDirectory::statistics`](crate::StudentDirectory::statistics).
///
/// # Example
/// ```
/// use rosterdb::{Student, StudentDirectory, StudentId};
///
/// let mut dir = StudentDirectory::new();
/// dir.add(Student::new(StudentId::new(1), "Ana", 18, "A", 1));
/// dir.add(Student::new(StudentId::new(2), "Bo", 22, "A", 1));
/// dir.add(Student::new(StudentId::new(3), "Cy", 20, "B", 1));
///
/// let stats = dir.statistics();
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.mean_age, 20.0);
/// assert_eq!(stats.careers["A"], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryStats {
    /// Number of live records.
    pub total: usize,

    /// Arithmetic mean of `age`, rounded to
    /// [`STATS_DECIMALS`](crate::common::config::STATS_DECIMALS) places.
    /// `0.0` for an empty directory.
    pub mean_age: f64,

    /// Number of records per career, ordered by career name.
    pub careers: BTreeMap<String, usize>,
}

impl DirectoryStats {
    /// Compute statistics over `students`.
    ///
    /// `total` is the directory's live count, reported as-is.
    pub(crate) fn collect<'a, I>(students: I, total: usize) -> Self
    where
        I: IntoIterator<Item = &'a Student>,
    {
        let mut seen = 0usize;
        let mut age_sum = 0u64;
        let mut careers = BTreeMap::new();

        for student in students {
            seen += 1;
            age_sum += u64::from(student.age);
            *careers.entry(student.career.clone()).or_insert(0) += 1;
        }

        let mean_age = if seen == 0 {
            0.0
        } else {
            round_to(age_sum as f64 / seen as f64, STATS_DECIMALS)
        };

        Self {
            total,
            mean_age,
            careers,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl fmt::Display for DirectoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ total: {}, mean_age: {:.2}, careers: {} }}",
            self.total,
            self.mean_age,
            self.careers.len()
        )
    }
}
