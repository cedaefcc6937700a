//! Student Directory - record management on top of the AVL tree.
//!
//! The [`StudentDirectory`] provides:
//! - Duplicate-rejecting insertion
//! - Keyed lookup with an optional visit count
//! - In-place edits of non-key fields
//! - Ordered listing, linear filters and statistics

use crate::common::StudentId;
use crate::directory::scan::contains_ignore_case;
use crate::directory::{DirectoryStats, ScanResult, SearchField, Student, StudentUpdate};
use crate::tree::AvlTree;

/// An ordered collection of students keyed by [`StudentId`].
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                     StudentDirectory                        │
/// │  ┌───────────────────────────────────────────────────────┐ │
/// │  │          tree: AvlTree<StudentId, Student>             │ │
/// │  │   add / remove ──▶ insert / remove (root re-adopted)   │ │
/// │  │   find          ──▶ search (visit count)               │ │
/// │  │   list_all      ──▶ in-order traversal                 │ │
/// │  └───────────────────────────────────────────────────────┘ │
/// │  ┌──────────────┐                                          │
/// │  │    total     │  live record count                       │
/// │  └──────────────┘                                          │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Ids are unique: [`add`](Self::add) refuses a second record with an id
/// that is already present. Misses and duplicates are reported through
/// `bool`/`Option` returns, never as errors.
///
/// # Usage
/// ```
/// use rosterdb::{Student, StudentDirectory, StudentId, StudentUpdate};
///
/// let mut dir = StudentDirectory::new();
/// assert!(dir.add(Student::new(StudentId::new(10), "Ana", 20, "Physics", 3)));
/// assert!(!dir.add(Student::new(StudentId::new(10), "Dup", 30, "Law", 1)));
///
/// assert!(dir.update(StudentId::new(10), StudentUpdate::new().semester(4)));
/// assert_eq!(dir.find(StudentId::new(10)).map(|s| s.semester), Some(4));
///
/// assert!(dir.remove(StudentId::new(10)).is_some());
/// assert!(dir.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    tree: AvlTree<StudentId, Student>,

    /// Live record count, adjusted only on confirmed insert/remove.
    total: usize,
}

impl StudentDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            total: 0,
        }
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Add a record.
    ///
    /// Returns `false`, leaving the directory untouched, if a record with
    /// the same id already exists.
    pub fn add(&mut self, student: Student) -> bool {
        let id = student.id();

        if self.tree.contains_key(&id) {
            tracing::debug!(target: "rosterdb::directory", id = id.0, "rejected duplicate id");
            return false;
        }

        self.tree.insert(id, student);
        self.total += 1;

        tracing::debug!(
            target: "rosterdb::directory",
            id = id.0,
            total = self.total,
            height = self.tree.height(),
            "added student"
        );
        true
    }

    /// Remove the record with `id` and return it.
    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let (_, student) = self.tree.remove(&id)?;
        self.total -= 1;

        tracing::debug!(
            target: "rosterdb::directory",
            id = id.0,
            total = self.total,
            "removed student"
        );
        Some(student)
    }

    /// Apply `changes` to the record with `id`.
    ///
    /// Only descriptive fields change; the tree is never restructured.
    /// Returns `false` if no such record exists.
    pub fn update(&mut self, id: StudentId, changes: StudentUpdate) -> bool {
        match self.tree.get_mut(&id) {
            Some(student) => {
                changes.apply_to(student);
                tracing::debug!(target: "rosterdb::directory", id = id.0, "updated student");
                true
            }
            None => false,
        }
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        let dropped = self.total;
        self.tree.clear();
        self.total = 0;

        tracing::debug!(target: "rosterdb::directory", dropped, "cleared directory");
    }

    // ========================================================================
    // Public API: Keyed lookup
    // ========================================================================

    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.tree.get(&id)
    }

    /// Look up `id` and report how many tree nodes were visited.
    ///
    /// The count includes the matching node. An empty directory reports 0.
    pub fn find_counted(&self, id: StudentId) -> (Option<&Student>, usize) {
        self.tree.search(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.tree.contains_key(&id)
    }

    // ========================================================================
    // Public API: Enumeration
    // ========================================================================

    /// Every record, ascending by id.
    ///
    /// This is the canonical order for display and persistence.
    pub fn list_all(&self) -> Vec<&Student> {
        self.tree.values().collect()
    }

    /// Iterator over every record, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.tree.values()
    }

    /// Records for which `predicate` holds, plus the number scanned.
    ///
    /// Always O(n): every record is examined.
    pub fn linear_filter<P>(&self, predicate: P) -> ScanResult<'_>
    where
        P: FnMut(&Student) -> bool,
    {
        ScanResult::scan(self.tree.values(), predicate)
    }

    /// Records whose `field` contains `needle`, ignoring case.
    pub fn search_by(&self, field: SearchField, needle: &str) -> ScanResult<'_> {
        self.linear_filter(|s| contains_ignore_case(field.value_of(s), needle))
    }

    /// Count, mean age and per-career frequencies in one pass.
    pub fn statistics(&self) -> DirectoryStats {
        DirectoryStats::collect(self.tree.values(), self.total)
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Read-only view of the underlying tree, for shape inspection.
    pub fn tree(&self) -> &AvlTree<StudentId, Student> {
        &self.tree
    }
}

impl Extend<Student> for StudentDirectory {
    /// Add each record in turn; duplicates are skipped.
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        for student in iter {
            self.add(student);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u32) -> Student {
        Student::new(StudentId::new(id), format!("Student {}", id), 20, "Physics", 1)
    }

    fn dir_of(ids: &[u32]) -> StudentDirectory {
        let mut dir = StudentDirectory::new();
        dir.extend(ids.iter().map(|&id| student(id)));
        dir
    }

    fn ids(dir: &StudentDirectory) -> Vec<u32> {
        dir.list_all().iter().map(|s| s.id().0).collect()
    }

    #[test]
    fn test_add_and_find() {
        let dir = dir_of(&[10, 20, 30]);

        assert_eq!(dir.len(), 3);
        assert_eq!(dir.find(StudentId::new(20)).map(|s| s.id().0), Some(20));
        assert!(dir.find(StudentId::new(25)).is_none());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut dir = dir_of(&[10, 20, 30]);
        let before = dir.tree().root();

        let dup = Student::new(StudentId::new(20), "Other", 99, "Law", 9);
        assert!(!dir.add(dup));

        assert_eq!(dir.len(), 3);
        assert_eq!(dir.tree().len(), 3);
        assert_eq!(dir.tree().root(), before);
        assert_eq!(dir.find(StudentId::new(20)).unwrap().name, "Student 20");
    }

    #[test]
    fn test_find_counted() {
        let dir = dir_of(&[10, 20, 30]);

        let (found, visits) = dir.find_counted(StudentId::new(20));
        assert!(found.is_some());
        assert_eq!(visits, 1);

        let (found, visits) = dir.find_counted(StudentId::new(99));
        assert!(found.is_none());
        assert_eq!(visits, 2);
    }

    #[test]
    fn test_find_counted_empty() {
        let dir = StudentDirectory::new();
        assert_eq!(dir.find_counted(StudentId::new(1)), (None, 0));
    }

    #[test]
    fn test_remove_decrements_only_on_success() {
        let mut dir = dir_of(&[10, 20, 30]);

        assert!(dir.remove(StudentId::new(99)).is_none());
        assert_eq!(dir.len(), 3);

        let removed = dir.remove(StudentId::new(20)).unwrap();
        assert_eq!(removed.id(), StudentId::new(20));
        assert_eq!(dir.len(), 2);
        assert_eq!(ids(&dir), vec![10, 30]);
    }

    #[test]
    fn test_update_existing() {
        let mut dir = dir_of(&[1]);
        let changes = StudentUpdate::new().name("Renamed").age(33);

        assert!(dir.update(StudentId::new(1), changes));
        let s = dir.find(StudentId::new(1)).unwrap();
        assert_eq!(s.name, "Renamed");
        assert_eq!(s.age, 33);
        assert_eq!(s.career, "Physics");
    }

    #[test]
    fn test_update_missing() {
        let mut dir = dir_of(&[1]);
        assert!(!dir.update(StudentId::new(2), StudentUpdate::new().age(1)));
    }

    #[test]
    fn test_list_all_sorted() {
        let dir = dir_of(&[30, 10, 50, 20, 40]);
        assert_eq!(ids(&dir), vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_search_by_name() {
        let mut dir = StudentDirectory::new();
        dir.add(Student::new(StudentId::new(3), "Mariana", 20, "Law", 1));
        dir.add(Student::new(StudentId::new(1), "Ana", 20, "Physics", 1));
        dir.add(Student::new(StudentId::new(2), "Bruno", 20, "Physics", 1));

        let result = dir.search_by(SearchField::Name, "ana");
        let found: Vec<u32> = result.matches.iter().map(|s| s.id().0).collect();
        assert_eq!(found, vec![1, 3]);
        assert_eq!(result.scanned, 3);

        let result = dir.search_by(SearchField::Career, "PHYS");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_statistics_uses_live_count() {
        let mut dir = dir_of(&[1, 2, 3]);
        dir.remove(StudentId::new(2));

        let stats = dir.statistics();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.careers.get("Physics"), Some(&2));
    }

    #[test]
    fn test_clear() {
        let mut dir = dir_of(&[1, 2, 3]);
        dir.clear();

        assert!(dir.is_empty());
        assert!(dir.list_all().is_empty());
        assert_eq!(dir.tree().height(), 0);
        assert!(dir.add(student(1)));
    }
}
