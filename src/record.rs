#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};

use crate::{config::CreditPolicy, grade::LetterGrade};

/// One student's record: identity plus per-course credit, mark, and
/// attendance. Grades, debarment, and CGPA are derived on demand.
///
/// The record itself performs no range validation on mutation; marks and
/// attendance are whatever the caller stored. Validation belongs to the
/// console layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique student id, immutable after construction.
    id:            u32,
    /// Student name, immutable after construction.
    name:          String,
    /// Course names in insertion order, unique within the record.
    courses:       Vec<String>,
    /// Mark per course, 0-100 by convention, seeded to 0 on enrollment.
    marks:         HashMap<String, i32>,
    /// Attendance percentage per course, seeded to 0.0 on enrollment.
    attendance:    HashMap<String, f64>,
    /// Credit per course; may hold entries for unenrolled courses under the
    /// permissive policy.
    credits:       HashMap<String, u32>,
    /// What `set_credit` does for courses missing from `courses`.
    credit_policy: CreditPolicy,
}

/// One row of the rendered per-course table.
#[derive(Tabled)]
struct CourseRow {
    /// Course name.
    #[tabled(rename = "Course")]
    course:     String,
    /// Credit weight.
    #[tabled(rename = "Credit")]
    credit:     String,
    /// Stored mark.
    #[tabled(rename = "Mark")]
    mark:       String,
    /// Derived letter grade, or "N/A" when no mark is on record.
    #[tabled(rename = "Grade")]
    grade:      String,
    /// Stored attendance with a `%` suffix.
    #[tabled(rename = "Attendance")]
    attendance: String,
    /// "Yes" when attendance on record is below 75.0, else "No".
    #[tabled(rename = "Debarred")]
    debarred:   String,
}

impl StudentRecord {
    /// Creates an empty record with the permissive credit policy.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self::with_policy(id, name, CreditPolicy::Permissive)
    }

    /// Creates an empty record with an explicit credit policy.
    pub fn with_policy(id: u32, name: impl Into<String>, credit_policy: CreditPolicy) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
            marks: HashMap::new(),
            attendance: HashMap::new(),
            credits: HashMap::new(),
            credit_policy,
        }
    }

    /// Returns the student id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the enrolled courses in insertion order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Enrolls the student in `course` with the given credit, seeding the
    /// mark to 0 and attendance to 0.0. Idempotent: a repeat call is a no-op
    /// and the first credit wins.
    pub fn add_course(&mut self, course: impl Into<String>, credit: u32) {
        let course = course.into();
        if self.courses.contains(&course) {
            tracing::debug!("{} is already enrolled in {course}", self.name);
            return;
        }
        self.marks.insert(course.clone(), 0);
        self.attendance.insert(course.clone(), 0.0);
        self.credits.insert(course.clone(), credit);
        self.courses.push(course);
    }

    /// Overwrites the mark for an enrolled course; silently ignored when the
    /// student is not enrolled in `course`. No range check.
    pub fn set_mark(&mut self, course: &str, mark: i32) {
        if self.courses.iter().any(|c| c == course) {
            self.marks.insert(course.to_string(), mark);
        } else {
            tracing::debug!("ignoring mark for unknown course {course}");
        }
    }

    /// Overwrites the attendance for an enrolled course; silently ignored
    /// when the student is not enrolled in `course`. No range check.
    pub fn set_attendance(&mut self, course: &str, attendance: f64) {
        if self.courses.iter().any(|c| c == course) {
            self.attendance.insert(course.to_string(), attendance);
        } else {
            tracing::debug!("ignoring attendance for unknown course {course}");
        }
    }

    /// Overwrites the credit for `course`. Under the permissive policy this
    /// writes even when the course was never added, which can leave a credit
    /// entry with no matching enrollment; the strict policy ignores such
    /// writes instead.
    pub fn set_credit(&mut self, course: &str, credit: u32) {
        if self.credit_policy == CreditPolicy::Strict && !self.courses.iter().any(|c| c == course) {
            tracing::debug!("ignoring credit for unknown course {course}");
            return;
        }
        self.credits.insert(course.to_string(), credit);
    }

    /// Returns the stored mark, or `None` when no mark is on record.
    pub fn mark(&self, course: &str) -> Option<i32> {
        self.marks.get(course).copied()
    }

    /// Returns the stored attendance, or `None` when none is on record.
    pub fn attendance(&self, course: &str) -> Option<f64> {
        self.attendance.get(course).copied()
    }

    /// Returns the stored credit, or `None` when none is on record.
    pub fn credit(&self, course: &str) -> Option<u32> {
        self.credits.get(course).copied()
    }

    /// Returns the letter grade for `course`, or `None` when no mark is on
    /// record (rendered as "N/A").
    pub fn grade(&self, course: &str) -> Option<LetterGrade> {
        self.mark(course).map(LetterGrade::from_mark)
    }

    /// True iff an attendance value is on record for `course` and it is
    /// strictly below 75.0. A course with no recorded attendance is not
    /// debarred.
    pub fn is_debarred(&self, course: &str) -> bool {
        matches!(self.attendance(course), Some(att) if att < 75.0)
    }

    /// Computes the credit-weighted CGPA over all enrolled courses in
    /// insertion order. A course without a grade contributes 0 points but
    /// its credit still counts. Returns 0.0 when total credits are 0.
    pub fn cgpa(&self) -> f64 {
        let mut total_points = 0.0;
        let mut total_credits = 0u32;
        for course in &self.courses {
            let credit = self.credit(course).unwrap_or(0);
            let points = self.grade(course).map(|g| g.points()).unwrap_or(0.0);
            total_points += f64::from(credit) * points;
            total_credits += credit;
        }
        if total_credits == 0 {
            0.0
        } else {
            total_points / f64::from(total_credits)
        }
    }

    /// Renders the record as a table: a header line with id, name, and CGPA
    /// to two decimals, then one row per course in insertion order. Pure
    /// display serialization, not a wire format.
    pub fn render(&self) -> String {
        let rows: Vec<CourseRow> = self
            .courses
            .iter()
            .map(|course| CourseRow {
                course:     course.clone(),
                credit:     self
                    .credit(course)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                mark:       self
                    .mark(course)
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                grade:      self
                    .grade(course)
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                attendance: self
                    .attendance(course)
                    .map(|a| format!("{a}%"))
                    .unwrap_or_else(|| "N/A".to_string()),
                debarred:   if self.is_debarred(course) { "Yes" } else { "No" }.to_string(),
            })
            .collect();

        Table::new(&rows)
            .with(Panel::header(format!(
                "Student {} - {} (CGPA: {:.2})",
                self.id,
                self.name,
                self.cgpa()
            )))
            .with(Style::modern())
            .to_string()
    }
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
