//! `gradebook` - In-memory student records with GPA reporting
//!
//! This library provides the student record type, an ordered record collection
//! with add/update/delete/enroll/search operations, and the demonstration
//! scenario driven by the `gradebook` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod records;
pub mod student;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use records::{Status, StudentRecords, StudentUpdate};
pub use student::{Courses, Grades, LetterGrade, Student};
