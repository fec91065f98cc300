use rollbook::{config::CreditPolicy, grade::LetterGrade, record::StudentRecord};

#[test]
fn add_course_seeds_defaults() {
    let mut record = StudentRecord::new(7, "Bea");
    record.add_course("Physics", 3);

    assert_eq!(record.courses(), ["Physics".to_string()]);
    assert_eq!(record.mark("Physics"), Some(0));
    assert_eq!(record.attendance("Physics"), Some(0.0));
    assert_eq!(record.credit("Physics"), Some(3));
}

#[test]
fn add_course_is_idempotent_and_first_credit_wins() {
    let mut record = StudentRecord::new(7, "Bea");
    record.add_course("Physics", 3);
    record.set_mark("Physics", 88);
    record.set_attendance("Physics", 91.5);

    record.add_course("Physics", 5);

    assert_eq!(record.courses().len(), 1);
    assert_eq!(record.credit("Physics"), Some(3));
    assert_eq!(record.mark("Physics"), Some(88));
    assert_eq!(record.attendance("Physics"), Some(91.5));
}

#[test]
fn setters_ignore_unknown_courses() {
    let mut record = StudentRecord::new(7, "Bea");
    record.set_mark("Ghost", 99);
    record.set_attendance("Ghost", 99.0);

    assert_eq!(record.mark("Ghost"), None);
    assert_eq!(record.attendance("Ghost"), None);
    assert_eq!(record.grade("Ghost"), None);
}

#[test]
fn absent_values_are_distinct_from_stored_zeroes() {
    let mut record = StudentRecord::new(7, "Bea");
    record.add_course("Physics", 3);

    assert_eq!(record.mark("Physics"), Some(0));
    assert_eq!(record.mark("Chemistry"), None);
    assert_eq!(record.credit("Chemistry"), None);
}

#[test]
fn permissive_set_credit_allows_unenrolled_courses() {
    let mut record = StudentRecord::new(7, "Bea");
    record.set_credit("Ghost", 4);

    // Accepted inconsistency: a credit entry with no matching enrollment.
    assert_eq!(record.credit("Ghost"), Some(4));
    assert!(record.courses().is_empty());
}

#[test]
fn strict_set_credit_ignores_unenrolled_courses() {
    let mut record = StudentRecord::with_policy(7, "Bea", CreditPolicy::Strict);
    record.set_credit("Ghost", 4);
    assert_eq!(record.credit("Ghost"), None);

    record.add_course("Physics", 3);
    record.set_credit("Physics", 5);
    assert_eq!(record.credit("Physics"), Some(5));
}

#[test]
fn grade_thresholds_are_inclusive_lower_bounds() {
    assert_eq!(LetterGrade::from_mark(90), LetterGrade::S);
    assert_eq!(LetterGrade::from_mark(89), LetterGrade::A);
    assert_eq!(LetterGrade::from_mark(80), LetterGrade::A);
    assert_eq!(LetterGrade::from_mark(79), LetterGrade::B);
    assert_eq!(LetterGrade::from_mark(60), LetterGrade::C);
    assert_eq!(LetterGrade::from_mark(50), LetterGrade::D);
    assert_eq!(LetterGrade::from_mark(40), LetterGrade::E);
    assert_eq!(LetterGrade::from_mark(39), LetterGrade::F);
    assert_eq!(LetterGrade::from_mark(0), LetterGrade::F);
}

#[test]
fn grade_points_match_the_fixed_table() {
    assert_eq!(LetterGrade::S.points(), 10.0);
    assert_eq!(LetterGrade::A.points(), 9.0);
    assert_eq!(LetterGrade::B.points(), 8.0);
    assert_eq!(LetterGrade::C.points(), 7.0);
    assert_eq!(LetterGrade::D.points(), 6.0);
    assert_eq!(LetterGrade::E.points(), 5.0);
    assert_eq!(LetterGrade::F.points(), 0.0);
}

#[test]
fn debarment_requires_recorded_attendance_below_threshold() {
    let mut record = StudentRecord::new(7, "Bea");
    assert!(!record.is_debarred("Ghost"));

    record.add_course("Physics", 3);
    record.set_attendance("Physics", 74.9);
    assert!(record.is_debarred("Physics"));

    record.set_attendance("Physics", 75.0);
    assert!(!record.is_debarred("Physics"));
}

#[test]
fn cgpa_is_zero_for_an_empty_record() {
    let record = StudentRecord::new(7, "Bea");
    assert_eq!(record.cgpa(), 0.0);
}

#[test]
fn cgpa_is_credit_weighted() {
    let mut record = StudentRecord::new(1, "Ann");
    record.add_course("Math", 4);
    record.set_mark("Math", 85);
    record.set_attendance("Math", 90.0);

    record.add_course("Art", 2);
    record.set_mark("Art", 30);
    record.set_attendance("Art", 60.0);

    assert_eq!(record.grade("Math"), Some(LetterGrade::A));
    assert!(!record.is_debarred("Math"));
    assert_eq!(record.grade("Art"), Some(LetterGrade::F));
    assert!(record.is_debarred("Art"));

    // (4 * 9 + 2 * 0) / (4 + 2)
    assert_eq!(record.cgpa(), 6.0);
}
