//! Fixed demonstration scenario.
//!
//! Walks a [`StudentRecords`] collection through every operation and writes
//! each result line, section by section.

use std::io::{self, Write};

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::records::{StudentRecords, StudentUpdate};
use crate::student::{Grades, Student};

/// Id of the student the scenario updates and grades.
pub const FEATURED_ID: &str = "24-38720";

/// Id of the student the scenario deletes.
const REMOVED_ID: &str = "24-99999";

fn grades<const N: usize>(entries: [(&str, f64); N]) -> Grades {
    entries.into_iter().collect()
}

/// Run the scenario against `records`, writing every line to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<W: Write>(records: &mut StudentRecords, config: &Config, out: &mut W) -> Result<()> {
    debug!("Running demonstration scenario");

    writeln!(
        out,
        "{}",
        records.add_student(
            Student::new(FEATURED_ID, "Karl", "karl@example.com")
                .with_grades(grades([("Math", 90.0)]))
                .with_courses(["Math"]),
        )
    )?;
    writeln!(
        out,
        "{}",
        records.add_student(
            Student::new(REMOVED_ID, "Shawn", "shawn@example.com")
                .with_grades(grades([("Science", 85.0)]))
                .with_courses(["Science"]),
        )
    )?;

    writeln!(out, "\nAll Students:")?;
    records.write_all(out)?;

    writeln!(out, "\nUpdating Info for Student ID: {FEATURED_ID}")?;
    let update = StudentUpdate::new()
        .email("update@example.com")
        .grades(grades([("Math", 95.0), ("English", 95.0)]))
        .courses(["English"]);
    writeln!(out, "{}", records.update_student(FEATURED_ID, update))?;
    records.write_all(out)?;

    writeln!(out, "\nDelete Student:")?;
    writeln!(out, "{}", records.delete_student(REMOVED_ID))?;
    writeln!(out, "{}", records.delete_student("99-99999"))?;
    records.write_all(out)?;

    writeln!(out, "\nEnroll in Course:")?;
    writeln!(out, "{}", records.enroll_course(REMOVED_ID, "Science"))?;
    writeln!(out, "{}", records.enroll_course(FEATURED_ID, "Science"))?;
    writeln!(out, "{}", records.enroll_course(FEATURED_ID, "Math"))?;
    records.write_all(out)?;

    writeln!(out, "\nSearch by ID:")?;
    writeln!(out, "{}", records.search_student(FEATURED_ID))?;

    writeln!(out, "\nSearch by Name:")?;
    for query in ["Karl", "Shawn"] {
        for line in records.search_by_name(query) {
            writeln!(out, "{line}")?;
        }
    }

    writeln!(out, "\nGetting the student GPA:")?;
    if let Some(student) = records.find(FEATURED_ID) {
        let gpa = student.calculate_gpa();
        writeln!(
            out,
            "{}'s GPA: GPA: {}, Grade: {}",
            student.name(),
            config.format_gpa(gpa),
            Student::letter_grade(gpa)
        )?;
    }

    Ok(())
}

/// Run the scenario without output and return the resulting collection.
///
/// # Errors
///
/// Returns an error if the scenario fails to complete.
pub fn final_records(config: &Config) -> Result<StudentRecords> {
    let mut records = StudentRecords::new();
    run(&mut records, config, &mut io::sink())?;
    Ok(records)
}
