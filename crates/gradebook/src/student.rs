//! Core student record types.
//!
//! This module defines the [`Student`] record along with its subject grades,
//! enrolled courses and the 4.0-scale GPA derived from them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Letter grade derived from a numeric GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterGrade {
    /// GPA of 3.7 or above.
    A,
    /// GPA of 3.0 or above.
    B,
    /// GPA of 2.0 or above.
    C,
    /// GPA of 1.0 or above.
    D,
    /// Anything lower.
    F,
}

impl LetterGrade {
    /// Map a GPA to its letter using fixed thresholds.
    #[must_use]
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.7 {
            Self::A
        } else if gpa >= 3.0 {
            Self::B
        } else if gpa >= 2.0 {
            Self::C
        } else if gpa >= 1.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Subject scores for one student, kept in insertion order.
///
/// Re-inserting a subject overwrites its score in place, so a subject keeps the
/// position it was first recorded at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grades(Vec<(String, f64)>);

impl Grades {
    /// Create an empty grade mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score, replacing any existing score for the same subject.
    pub fn insert(&mut self, subject: impl Into<String>, score: f64) {
        let subject = subject.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == subject) {
            Some(entry) => entry.1 = score,
            None => self.0.push((subject, score)),
        }
    }

    /// Merge another mapping into this one, key by key.
    pub fn merge(&mut self, other: Grades) {
        for (subject, score) in other.0 {
            self.insert(subject, score);
        }
    }

    /// Get the score recorded for a subject.
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(existing, _)| existing == subject)
            .map(|(_, score)| *score)
    }

    /// Number of graded subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no subject has been graded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(subject, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(subject, score)| (subject.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Grades {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut grades = Self::new();
        for (subject, score) in iter {
            grades.insert(subject, score);
        }
        grades
    }
}

impl fmt::Display for Grades {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (subject, score)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{subject}': {score}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Grades {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Set of enrolled course names.
pub type Courses = BTreeSet<String>;

/// A single student record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    id: String,
    name: String,
    /// Contact email; the only identity field that may change.
    pub email: String,
    /// Scores per subject.
    pub grades: Grades,
    /// Enrolled courses.
    pub courses: Courses,
}

impl Student {
    /// Create a student with no grades and no courses.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            grades: Grades::new(),
            courses: Courses::new(),
        }
    }

    /// Set the initial grades.
    #[must_use]
    pub fn with_grades(mut self, grades: Grades) -> Self {
        self.grades = grades;
        self
    }

    /// Set the initial courses.
    #[must_use]
    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    /// The student's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grade points earned for a single score.
    #[must_use]
    pub fn points_for(score: f64) -> f64 {
        if score >= 90.0 {
            4.0
        } else if score >= 80.0 {
            3.0
        } else if score >= 70.0 {
            2.0
        } else if score >= 60.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Mean grade points across all graded subjects, or 0.0 with no grades.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .grades
            .iter()
            .map(|(_, score)| Self::points_for(score))
            .sum();
        total / self.grades.len() as f64
    }

    /// Letter grade for a GPA value.
    #[must_use]
    pub fn letter_grade(gpa: f64) -> LetterGrade {
        LetterGrade::from_gpa(gpa)
    }

    /// Check if the student is enrolled in a course.
    #[must_use]
    pub fn is_enrolled_in(&self, course: &str) -> bool {
        self.courses.contains(course)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Grades: {}, Courses: [",
            self.id, self.name, self.email, self.grades
        )?;
        for (i, course) in self.courses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{course}'")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn karl() -> Student {
        Student::new("24-38720", "Karl", "karl@example.com")
            .with_grades([("Math", 90.0)].into_iter().collect())
            .with_courses(["Math"])
    }

    #[test]
    fn test_new_student_is_empty() {
        let student = Student::new("1", "Ada", "ada@example.com");
        assert_eq!(student.id(), "1");
        assert_eq!(student.name(), "Ada");
        assert!(student.grades.is_empty());
        assert!(student.courses.is_empty());
    }

    #[test]
    fn test_new_students_do_not_share_collections() {
        let mut first = Student::new("1", "Ada", "ada@example.com");
        let second = Student::new("2", "Bob", "bob@example.com");

        first.grades.insert("Math", 80.0);
        first.courses.insert("Math".to_string());

        assert!(second.grades.is_empty());
        assert!(second.courses.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            karl().to_string(),
            "ID: 24-38720, Name: Karl, Email: karl@example.com, Grades: {'Math': 90}, Courses: ['Math']"
        );
    }

    #[test]
    fn test_display_empty_collections() {
        let student = Student::new("7", "Eve", "eve@example.com");
        assert_eq!(
            student.to_string(),
            "ID: 7, Name: Eve, Email: eve@example.com, Grades: {}, Courses: []"
        );
    }

    #[test]
    fn test_display_sorts_courses() {
        let student = karl().with_courses(["Science", "English", "Math"]);
        assert!(student
            .to_string()
            .ends_with("Courses: ['English', 'Math', 'Science']"));
    }

    #[test]
    fn test_display_fractional_score() {
        let grades: Grades = [("Art", 92.5)].into_iter().collect();
        assert_eq!(grades.to_string(), "{'Art': 92.5}");
    }

    #[test]
    fn test_grades_merge_overwrites_and_preserves() {
        let mut grades: Grades = [("Math", 90.0), ("History", 70.0)].into_iter().collect();
        grades.merge([("Math", 95.0), ("English", 95.0)].into_iter().collect());

        assert_eq!(grades.get("Math"), Some(95.0));
        assert_eq!(grades.get("History"), Some(70.0));
        assert_eq!(grades.get("English"), Some(95.0));
        assert_eq!(
            grades.to_string(),
            "{'Math': 95, 'History': 70, 'English': 95}"
        );
    }

    #[test]
    fn test_points_tiers() {
        assert_eq!(Student::points_for(100.0), 4.0);
        assert_eq!(Student::points_for(90.0), 4.0);
        assert_eq!(Student::points_for(89.9), 3.0);
        assert_eq!(Student::points_for(80.0), 3.0);
        assert_eq!(Student::points_for(79.9), 2.0);
        assert_eq!(Student::points_for(70.0), 2.0);
        assert_eq!(Student::points_for(69.9), 1.0);
        assert_eq!(Student::points_for(60.0), 1.0);
        assert_eq!(Student::points_for(59.9), 0.0);
        assert_eq!(Student::points_for(-5.0), 0.0);
    }

    #[test]
    fn test_points_monotonic() {
        let mut previous = Student::points_for(-10.0);
        for score in -10..=110 {
            let points = Student::points_for(f64::from(score));
            assert!(points >= previous, "points dropped at {score}");
            previous = points;
        }
    }

    #[test]
    fn test_gpa_without_grades() {
        let student = Student::new("1", "Ada", "ada@example.com");
        assert_eq!(student.calculate_gpa(), 0.0);
    }

    #[test]
    fn test_gpa_is_mean_of_points() {
        let student = karl().with_grades(
            [("Math", 95.0), ("English", 85.0), ("Art", 55.0), ("PE", 72.0)]
                .into_iter()
                .collect(),
        );
        // (4 + 3 + 0 + 2) / 4
        assert!((student.calculate_gpa() - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_all_top_scores() {
        let student = karl().with_grades([("Math", 95.0), ("English", 95.0)].into_iter().collect());
        let gpa = student.calculate_gpa();
        assert_eq!(gpa, 4.0);
        assert_eq!(Student::letter_grade(gpa), LetterGrade::A);
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(LetterGrade::from_gpa(4.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_gpa(3.7), LetterGrade::A);
        assert_eq!(LetterGrade::from_gpa(3.69999), LetterGrade::B);
        assert_eq!(LetterGrade::from_gpa(3.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_gpa(2.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_gpa(1.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_gpa(0.99999), LetterGrade::F);
        assert_eq!(LetterGrade::from_gpa(0.0), LetterGrade::F);
    }

    #[test]
    fn test_letter_grade_display() {
        assert_eq!(LetterGrade::A.to_string(), "A");
        assert_eq!(LetterGrade::F.to_string(), "F");
    }

    #[test]
    fn test_is_enrolled_in() {
        let student = karl();
        assert!(student.is_enrolled_in("Math"));
        assert!(!student.is_enrolled_in("Science"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(karl()).unwrap();
        assert_eq!(json["id"], "24-38720");
        assert_eq!(json["name"], "Karl");
        assert_eq!(json["grades"]["Math"], 90.0);
        assert_eq!(json["courses"][0], "Math");
    }
}
