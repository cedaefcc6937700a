//! Linear scans over the directory.
//!
//! There is no secondary index: anything other than an id lookup walks
//! every record in id order. [`ScanResult::scanned`] reports how many
//! records were examined, for comparison with the visit count of a keyed
//! search.

use crate::directory::Student;

/// Descriptive field targeted by a substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Career,
}

impl SearchField {
    /// The field's value on `student`.
    pub fn value_of(self, student: &Student) -> &str {
        match self {
            SearchField::Name => &student.name,
            SearchField::Career => &student.career,
        }
    }
}

/// Records matched by a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult<'a> {
    /// Matching records, ascending by id.
    pub matches: Vec<&'a Student>,

    /// Number of records examined. Always the directory size.
    pub scanned: usize,
}

impl<'a> ScanResult<'a> {
    /// Run `predicate` against every record.
    pub(crate) fn scan<I, P>(students: I, mut predicate: P) -> Self
    where
        I: IntoIterator<Item = &'a Student>,
        P: FnMut(&Student) -> bool,
    {
        let mut matches = Vec::new();
        let mut scanned = 0;

        for student in students {
            scanned += 1;
            if predicate(student) {
                matches.push(student);
            }
        }

        Self { matches, scanned }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
