use rollbook::menu::{is_valid_course, is_valid_name};

#[test]
fn names_must_be_nonempty_and_digit_free() {
    assert!(is_valid_name("Ann"));
    assert!(is_valid_name("Mary Jane"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("Ann2"));
    assert!(!is_valid_name("4nn"));
}

#[test]
fn course_names_allow_only_letters_and_spaces() {
    assert!(is_valid_course("Math"));
    assert!(is_valid_course("Art History"));
    assert!(!is_valid_course(""));
    assert!(!is_valid_course("CS101"));
    assert!(!is_valid_course("Math-II"));
}
