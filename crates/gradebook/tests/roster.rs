//! End-to-end checks against the public gradebook API.

use gradebook::records::NO_STUDENTS_FOUND;
use gradebook::{Config, Grades, LetterGrade, Status, Student, StudentRecords, StudentUpdate};

fn grades(entries: &[(&str, f64)]) -> Grades {
    entries.iter().map(|(subject, score)| (*subject, *score)).collect()
}

#[test]
fn karl_reaches_straight_a() {
    let mut records = StudentRecords::new();
    records.add_student(
        Student::new("24-38720", "Karl", "karl@example.com").with_grades(grades(&[("Math", 90.0)])),
    );

    let status = records.update_student(
        "24-38720",
        StudentUpdate::new().grades(grades(&[("Math", 95.0), ("English", 95.0)])),
    );
    assert_eq!(status, Status::Updated);

    let karl = records.find("24-38720").unwrap();
    let gpa = karl.calculate_gpa();
    assert_eq!(gpa, 4.0);
    assert_eq!(Student::letter_grade(gpa), LetterGrade::A);
    assert_eq!(Config::default().format_gpa(gpa), "4.0");
}

#[test]
fn deleted_student_is_not_found() {
    let mut records = StudentRecords::new();
    records.add_student(Student::new("1", "Ada", "ada@example.com"));

    assert_eq!(records.delete_student("1"), Status::Deleted);
    assert_eq!(records.search_student("1"), Status::NotFound.to_string());
    assert_eq!(records.delete_student("1"), Status::NotFound);
    assert!(records.is_empty());
}

#[test]
fn name_search_distinguishes_no_match_from_match() {
    let mut records = StudentRecords::new();
    records.add_student(Student::new("24-38720", "Karl", "karl@example.com"));

    let found = records.search_by_name("Karl");
    assert_eq!(found.len(), 1);
    assert_ne!(found[0], NO_STUDENTS_FOUND);

    assert_eq!(records.search_by_name("xyz"), vec![NO_STUDENTS_FOUND.to_string()]);
}

#[test]
fn enrolling_twice_reports_already_enrolled() {
    let mut records = StudentRecords::new();
    records.add_student(Student::new("2", "Bea", "bea@example.com").with_courses(["Art"]));

    assert_eq!(records.enroll_course("2", "Art").to_string(), "Bea is already enrolled in Art");
    assert_eq!(records.enroll_course("2", "Music").to_string(), "Bea enrolled in Music");
    assert_eq!(records.enroll_course("2", "Music").to_string(), "Bea is already enrolled in Music");
    assert_eq!(records.find("2").unwrap().courses.len(), 2);
}

#[test]
fn demo_transcript_ends_with_gpa_line() {
    let mut out = Vec::new();
    gradebook::demo::run(&mut StudentRecords::new(), &Config::default(), &mut out).unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.starts_with("Student added successfully\nStudent added successfully\n"));
    assert_eq!(
        transcript.lines().last(),
        Some("Karl's GPA: GPA: 4.0, Grade: A")
    );
}
