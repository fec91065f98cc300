//! # rollbook
//!
//! A console student record keeper. Tracks students, the courses each is
//! enrolled in, per-course marks and attendance, and derives letter grades,
//! debarment status, and a credit-weighted CGPA.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Credit policy configuration read from the environment
pub mod config;
/// Letter grades, thresholds, and grade points
pub mod grade;
/// The interactive console menu
pub mod menu;
/// A single student's record and its derived computations
pub mod record;
/// The id-keyed store of student records
pub mod registry;
