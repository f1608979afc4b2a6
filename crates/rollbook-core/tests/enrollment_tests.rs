mod common;

use common::{create_test_course, create_test_student, new_registry};
use rollbook_core::ops::enrollment_ops;
use rollbook_core::queries::enrollment_get;
use rollbook_core_types::{CourseId, PersonId};

// ===== ENROLL TESTS =====

#[test]
fn test_enroll_creates_ungraded_record_and_roster_entry() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");

    enrollment_ops::enroll_student(&mut registry, &student, &course);

    assert_eq!(registry.enrollments().len(), 1);
    let record = &registry.enrollments()[0];
    assert_eq!(record.student_id, student);
    assert_eq!(record.course_id, course);
    assert_eq!(record.grade, None);

    assert_eq!(
        registry.get_course(&course).unwrap().enrolled_students,
        vec![student]
    );
}

#[test]
fn test_double_enroll_creates_two_records_and_two_roster_entries() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");

    let first = enrollment_ops::enroll_student(&mut registry, &student, &course);
    let second = enrollment_ops::enroll_student(&mut registry, &student, &course);

    assert_ne!(first, second);
    assert_eq!(registry.enrollments().len(), 2);

    let roster = &registry.get_course(&course).unwrap().enrolled_students;
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0], student);
    assert_eq!(roster[1], student);
}

#[test]
fn test_enroll_accepts_untracked_handles() {
    let mut registry = new_registry();
    let student = PersonId::new();
    let course = CourseId::new();

    // Neither handle is registered; the record is still taken at face value
    enrollment_ops::enroll_student(&mut registry, &student, &course);

    assert_eq!(registry.enrollments().len(), 1);
    assert!(enrollment_get(&registry, &student, &course).is_some());
}

// ===== PAIR LOOKUP TESTS =====

#[test]
fn test_enrollment_get_returns_first_created_record() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");

    let first = enrollment_ops::enroll_student(&mut registry, &student, &course);
    let _second = enrollment_ops::enroll_student(&mut registry, &student, &course);

    let found = enrollment_get(&registry, &student, &course).unwrap();
    assert_eq!(found.id, first);
}

#[test]
fn test_enrollment_get_distinguishes_pairs() {
    let mut registry = new_registry();
    let alice = create_test_student(&mut registry, "Alice", "CS");
    let bob = create_test_student(&mut registry, "Bob", "Math");
    let cs101 = create_test_course(&mut registry, "Intro", "CS101");
    let math101 = create_test_course(&mut registry, "Calculus", "MATH101");

    enrollment_ops::enroll_student(&mut registry, &alice, &cs101);
    enrollment_ops::enroll_student(&mut registry, &bob, &math101);

    assert!(enrollment_get(&registry, &alice, &cs101).is_some());
    assert!(enrollment_get(&registry, &alice, &math101).is_none());
    assert!(enrollment_get(&registry, &bob, &cs101).is_none());
}

// ===== GRADE TESTS =====

#[test]
fn test_assign_grade_sets_grade_on_pair_record() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");
    enrollment_ops::enroll_student(&mut registry, &student, &course);

    enrollment_ops::assign_grade(&mut registry, &student, &course, 90);

    let record = enrollment_get(&registry, &student, &course).unwrap();
    assert_eq!(record.grade, Some(90));
}

#[test]
fn test_assign_grade_targets_first_record_of_duplicate_pair() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");

    let first = enrollment_ops::enroll_student(&mut registry, &student, &course);
    let second = enrollment_ops::enroll_student(&mut registry, &student, &course);

    enrollment_ops::assign_grade(&mut registry, &student, &course, 75);

    let records = registry.enrollments();
    let first_record = records.iter().find(|e| e.id == first).unwrap();
    let second_record = records.iter().find(|e| e.id == second).unwrap();
    assert_eq!(first_record.grade, Some(75));
    assert_eq!(second_record.grade, None);
}

#[test]
fn test_assign_grade_without_enrollment_is_silent_noop() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");

    // No enrollment for this pair exists; nothing changes, nothing panics
    enrollment_ops::assign_grade(&mut registry, &student, &course, 90);

    assert!(registry.enrollments().is_empty());
}

#[test]
fn test_assign_grade_overwrites_previous_grade() {
    let mut registry = new_registry();
    let student = create_test_student(&mut registry, "Alice", "CS");
    let course = create_test_course(&mut registry, "Intro", "CS101");
    enrollment_ops::enroll_student(&mut registry, &student, &course);

    enrollment_ops::assign_grade(&mut registry, &student, &course, 60);
    enrollment_ops::assign_grade(&mut registry, &student, &course, 90);

    let record = enrollment_get(&registry, &student, &course).unwrap();
    assert_eq!(record.grade, Some(90));
}
