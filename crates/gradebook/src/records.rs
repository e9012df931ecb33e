//! In-memory student record collection.
//!
//! [`StudentRecords`] keeps students in insertion order and resolves every
//! id-keyed operation with a linear scan where the first match wins. Duplicate
//! ids are accepted on add; later duplicates are shadowed by the first one.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::Result;
use crate::student::{Courses, Grades, Student};

/// Marker returned by [`StudentRecords::search_by_name`] when nothing matches.
pub const NO_STUDENTS_FOUND: &str = "No students found";

/// Line written by [`StudentRecords::write_all`] for an empty collection.
pub const NO_STUDENTS: &str = "No students";

/// Outcome of a record operation.
///
/// The `Display` form is the status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// A student was appended.
    Added,
    /// A student's fields were updated.
    Updated,
    /// A student was removed.
    Deleted,
    /// A student was enrolled in a new course.
    Enrolled {
        /// Name of the student.
        name: String,
        /// Course the student joined.
        course: String,
    },
    /// The student already had the course.
    AlreadyEnrolled {
        /// Name of the student.
        name: String,
        /// Course the student already had.
        course: String,
    },
    /// No student matched the given id.
    NotFound,
}

impl Status {
    /// Check if the operation located a student.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "Student added successfully"),
            Self::Updated => write!(f, "Student updated successfully"),
            Self::Deleted => write!(f, "Student deleted successfully"),
            Self::Enrolled { name, course } => write!(f, "{name} enrolled in {course}"),
            Self::AlreadyEnrolled { name, course } => {
                write!(f, "{name} is already enrolled in {course}")
            }
            Self::NotFound => write!(f, "Student not found"),
        }
    }
}

/// Partial update applied by [`StudentRecords::update_student`].
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    /// Replacement email.
    pub email: Option<String>,
    /// Grades merged into the existing mapping.
    pub grades: Option<Grades>,
    /// Courses added to the existing set.
    pub courses: Option<Courses>,
}

impl StudentUpdate {
    /// Create an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Merge these grades.
    #[must_use]
    pub fn grades(mut self, grades: Grades) -> Self {
        self.grades = Some(grades);
        self
    }

    /// Add these courses.
    #[must_use]
    pub fn courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = Some(courses.into_iter().map(Into::into).collect());
        self
    }
}

/// Ordered collection of student records.
#[derive(Debug, Clone, Default)]
pub struct StudentRecords {
    students: Vec<Student>,
}

impl StudentRecords {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student without checking for an existing id.
    pub fn add_student(&mut self, student: Student) -> Status {
        if self.position(student.id()).is_some() {
            warn!(
                "Student id {} already exists; lookups will keep using the first record",
                student.id()
            );
        }
        debug!("Added student {} ({})", student.id(), student.name());
        self.students.push(student);
        Status::Added
    }

    /// Apply the provided fields of `update` to the first student with `id`.
    pub fn update_student(&mut self, id: &str, update: StudentUpdate) -> Status {
        let Some(student) = self.find_mut(id) else {
            return Status::NotFound;
        };

        if let Some(email) = update.email {
            student.email = email;
        }
        if let Some(grades) = update.grades {
            student.grades.merge(grades);
        }
        if let Some(courses) = update.courses {
            student.courses.extend(courses);
        }

        debug!("Updated student {id}");
        Status::Updated
    }

    /// Remove the first student with `id`.
    pub fn delete_student(&mut self, id: &str) -> Status {
        match self.position(id) {
            Some(index) => {
                self.students.remove(index);
                debug!("Deleted student {id}");
                Status::Deleted
            }
            None => Status::NotFound,
        }
    }

    /// Enroll the first student with `id` in `course`.
    pub fn enroll_course(&mut self, id: &str, course: &str) -> Status {
        let Some(student) = self.find_mut(id) else {
            return Status::NotFound;
        };

        let name = student.name().to_string();
        let course = course.to_string();
        if student.is_enrolled_in(&course) {
            return Status::AlreadyEnrolled { name, course };
        }

        student.courses.insert(course.clone());
        debug!("Enrolled student {id} in {course}");
        Status::Enrolled { name, course }
    }

    /// Formatted record of the first student with `id`, or the not-found status line.
    #[must_use]
    pub fn search_student(&self, id: &str) -> String {
        self.find(id)
            .map_or_else(|| Status::NotFound.to_string(), ToString::to_string)
    }

    /// Formatted records of every student whose name contains `query`, ignoring case.
    ///
    /// Returns a single [`NO_STUDENTS_FOUND`] entry rather than an empty list when
    /// nothing matches.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let matches: Vec<String> = self
            .students
            .iter()
            .filter(|student| student.name().to_lowercase().contains(&needle))
            .map(ToString::to_string)
            .collect();

        if matches.is_empty() {
            debug!("No students matched name query {query:?}");
            vec![NO_STUDENTS_FOUND.to_string()]
        } else {
            matches
        }
    }

    /// Write every student on its own line, or [`NO_STUDENTS`] when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.students.is_empty() {
            return writeln!(out, "{NO_STUDENTS}");
        }
        for student in &self.students {
            writeln!(out, "{student}")?;
        }
        Ok(())
    }

    /// Print every student to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print_all(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_all(&mut stdout.lock())?;
        Ok(())
    }

    /// First student with `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Student> {
        let found = self.students.iter().find(|student| student.id() == id);
        if found.is_none() {
            debug!("Student {id} not found");
        }
        found
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Student> {
        let found = self.students.iter_mut().find(|student| student.id() == id);
        if found.is_none() {
            debug!("Student {id} not found");
        }
        found
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id() == id)
    }

    /// Number of records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Render the collection as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.students)?
        } else {
            serde_json::to_string(&self.students)?
        };
        Ok(json)
    }
}
