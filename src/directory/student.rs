//! Student record - the payload stored in the directory tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::StudentId;

/// One student record.
///
/// `id` orders the directory and never changes after insertion. The
/// descriptive fields can be edited in place through
/// [`StudentDirectory::update`](crate::StudentDirectory::update).
///
/// The serde field names are those of the snapshot file format.
///
/// # Example
/// ```
/// use rosterdb::{Student, StudentId};
///
/// let s = Student::new(StudentId::new(7), "Ana", 20, "Physics", 3);
/// assert_eq!(s.id(), StudentId::new(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "id_estudiante")]
    id: StudentId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "edad")]
    pub age: u32,

    #[serde(rename = "carrera")]
    pub career: String,

    #[serde(rename = "semestre")]
    pub semester: u32,
}

impl Student {
    /// Create a new record.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: u32,
        career: impl Into<String>,
        semester: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            career: career.into(),
            semester,
        }
    }

    /// The identifier. Read-only: changing it would break tree ordering.
    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(ID: {}, Name: {}, Age: {}, Career: {}, Semester: {})",
            self.id, self.name, self.age, self.career, self.semester
        )
    }
}

/// A partial edit of a [`Student`]'s descriptive fields.
///
/// `None` leaves the field as it is. The id is not editable.
///
/// # Example
/// ```
/// use rosterdb::StudentUpdate;
///
/// let changes = StudentUpdate::new().age(21).semester(4);
/// assert!(!changes.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub career: Option<String>,
    pub semester: Option<u32>,
}

impl StudentUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn career(mut self, career: impl Into<String>) -> Self {
        self.career = Some(career.into());
        self
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// True if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.career.is_none()
            && self.semester.is_none()
    }

    /// Apply the present fields to `student`.
    pub(crate) fn apply_to(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(career) = self.career {
            student.career = career;
        }
        if let Some(semester) = self.semester {
            student.semester = semester;
        }
    }
}
