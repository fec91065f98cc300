#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;

use crate::{config::CreditPolicy, record::StudentRecord, registry::StudentRegistry};

/// Attendance below this percentage debars a student from a course.
const DEBAR_THRESHOLD: f64 = 75.0;

/// True when `name` is acceptable as a student name (non-empty, no digits).
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_ascii_digit())
}

/// True when `course` is acceptable as a course name (letters and spaces
/// only, at least one character).
pub fn is_valid_course(course: &str) -> bool {
    !course.is_empty() && course.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Prints `label`, then reads one trimmed line from stdin. Returns `None` on
/// end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush().context("Could not flush stdout")?;

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Could not read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prints a validation failure in the menu's error style.
fn complain(message: &str) {
    println!("{}", format!("Error: {message}").red());
}

/// Prompts for a new student's id and name, validates both, and inserts the
/// record. Reports a duplicate id without touching the existing record.
fn add_student(registry: &mut StudentRegistry, policy: CreditPolicy) -> Result<()> {
    let Some(id_input) = prompt("Enter student ID: ")? else {
        return Ok(());
    };
    if id_input.is_empty() || !id_input.chars().all(|c| c.is_ascii_digit()) {
        complain("Student ID must contain only digits.");
        return Ok(());
    }
    let Ok(id) = id_input.parse::<u32>() else {
        complain("Invalid student ID.");
        return Ok(());
    };

    let Some(name) = prompt("Enter student name: ")? else {
        return Ok(());
    };
    if !is_valid_name(&name) {
        complain("Name cannot contain numbers.");
        return Ok(());
    }

    match registry.insert(StudentRecord::with_policy(id, name, policy)) {
        Ok(()) => {
            tracing::info!("added student {id}");
            println!("{}", "Student added successfully.".green());
        }
        Err(e) => complain(&e.to_string()),
    }
    Ok(())
}

/// Prompts for a course, credit, attendance, and (unless debarred) marks for
/// an existing student. Attendance below the debar threshold forces the mark
/// to 0 and skips the mark prompt.
fn add_course(registry: &mut StudentRegistry) -> Result<()> {
    let Some(id_input) = prompt("Enter student ID: ")? else {
        return Ok(());
    };
    let Ok(id) = id_input.parse::<u32>() else {
        complain("Invalid student ID.");
        return Ok(());
    };
    let Some(student) = registry.lookup_mut(id) else {
        println!("Student not found.");
        return Ok(());
    };

    let Some(course) = prompt("Enter course name to add: ")? else {
        return Ok(());
    };
    if !is_valid_course(&course) {
        complain("Course name must contain only letters and spaces.");
        return Ok(());
    }

    let Some(credit_input) = prompt("Enter course credit (positive integer): ")? else {
        return Ok(());
    };
    let credit = match credit_input.parse::<u32>() {
        Ok(c) if c > 0 => c,
        Ok(_) => {
            complain("Credit must be a positive integer.");
            return Ok(());
        }
        Err(_) => {
            complain("Invalid credit value.");
            return Ok(());
        }
    };
    student.add_course(&course, credit);

    let Some(attendance_input) = prompt("Enter attendance percentage for the course (0.0 - 100.0): ")?
    else {
        return Ok(());
    };
    let attendance = match attendance_input.parse::<f64>() {
        Ok(a) if (0.0..=100.0).contains(&a) => a,
        Ok(_) => {
            complain("Attendance should be between 0.0 and 100.0.");
            return Ok(());
        }
        Err(_) => {
            complain("Invalid attendance input.");
            return Ok(());
        }
    };
    student.set_attendance(&course, attendance);

    if attendance < DEBAR_THRESHOLD {
        student.set_mark(&course, 0);
        tracing::info!("student {id} debarred from {course}");
        println!(
            "{}",
            format!(
                "Student is debarred from {course} due to low attendance (<75%). Marks set to 0."
            )
            .yellow()
        );
        return Ok(());
    }

    let Some(marks_input) = prompt("Enter marks for the course (0-100): ")? else {
        return Ok(());
    };
    let mark = match marks_input.parse::<i32>() {
        Ok(m) if (0..=100).contains(&m) => m,
        Ok(_) => {
            complain("Marks should be between 0 and 100.");
            return Ok(());
        }
        Err(_) => {
            complain("Invalid marks input.");
            return Ok(());
        }
    };
    student.set_mark(&course, mark);

    println!(
        "{}",
        "Course, credit, attendance, marks, grade, and debar status updated for student.".green()
    );
    Ok(())
}

/// Prints every record's rendered table, ordered by id for stable output.
fn display_students(registry: &StudentRegistry) {
    if registry.is_empty() {
        println!("No students to display.");
        return;
    }
    println!("Students:");
    for student in registry.all().sorted_by_key(|s| s.id()) {
        println!("{student}");
    }
}

/// Dumps the whole registry as pretty-printed JSON to stdout.
fn export_json(registry: &StudentRegistry) -> Result<()> {
    let json = serde_json::to_string_pretty(registry)
        .context("Could not serialize the registry to JSON")?;
    println!("{json}");
    Ok(())
}

/// Runs the interactive menu loop until the user exits or input ends.
pub fn run(registry: &mut StudentRegistry, policy: CreditPolicy) -> Result<()> {
    loop {
        println!();
        println!("1. Add Student");
        println!("2. Add Course, Marks & Attendance to Student");
        println!("3. Display Students");
        println!("4. Export Students as JSON");
        println!("5. Exit");

        let Some(choice) = prompt("Choose option: ")? else {
            return Ok(());
        };
        match choice.parse::<u32>() {
            Ok(1) => add_student(registry, policy)?,
            Ok(2) => add_course(registry)?,
            Ok(3) => display_students(registry),
            Ok(4) => export_json(registry)?,
            Ok(5) => return Ok(()),
            Ok(_) => println!("Invalid option, please try again."),
            Err(_) => println!("Invalid option, please enter a number."),
        }
    }
}
