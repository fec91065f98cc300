#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A letter grade derived from an integer mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Outstanding, mark >= 90
    S,
    /// mark >= 80
    A,
    /// mark >= 70
    B,
    /// mark >= 60
    C,
    /// mark >= 50
    D,
    /// mark >= 40
    E,
    /// Fail, anything below 40
    F,
}

/// Mark thresholds in descending order; the first row whose threshold the
/// mark meets wins. Kept as a table rather than nested conditionals so the
/// mapping stays auditable.
const GRADE_THRESHOLDS: [(i32, LetterGrade); 6] = [
    (90, LetterGrade::S),
    (80, LetterGrade::A),
    (70, LetterGrade::B),
    (60, LetterGrade::C),
    (50, LetterGrade::D),
    (40, LetterGrade::E),
];

impl LetterGrade {
    /// Maps an integer mark to a letter grade via the fixed threshold table.
    pub fn from_mark(mark: i32) -> LetterGrade {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| mark >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(LetterGrade::F)
    }

    /// Returns the grade point used for CGPA weighting.
    pub fn points(&self) -> f64 {
        match self {
            LetterGrade::S => 10.0,
            LetterGrade::A => 9.0,
            LetterGrade::B => 8.0,
            LetterGrade::C => 7.0,
            LetterGrade::D => 6.0,
            LetterGrade::E => 5.0,
            LetterGrade::F => 0.0,
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LetterGrade::S => "S",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        };
        write!(f, "{letter}")
    }
}
