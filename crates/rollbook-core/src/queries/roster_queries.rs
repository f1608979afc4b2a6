//! Roster and enrollment queries
//!
//! Read-only lookups over courses and enrollment records. Results follow
//! insertion order throughout; duplicate entries are surfaced, not
//! collapsed.

use rollbook_core_types::{CourseId, PersonId};

use crate::model::Enrollment;
use crate::ops::Registry;

/// Student handles enrolled in a course
///
/// Returns the course's own roster sequence directly, in enrollment order
/// with duplicates preserved. The roster is append-only: handles of
/// students removed from the registry stay on it, so entries are not
/// guaranteed to resolve. Unknown courses yield an empty slice.
pub fn students_by_course<'a>(registry: &'a Registry, course_id: &CourseId) -> &'a [PersonId] {
    registry
        .courses
        .get(course_id)
        .map(|course| course.enrolled_students.as_slice())
        .unwrap_or(&[])
}

/// Course handles a student is enrolled in
///
/// Derived by scanning the enrollment records in insertion order; a
/// student enrolled twice in the same course appears twice. Unknown
/// students yield an empty vector.
pub fn courses_by_student(registry: &Registry, student_id: &PersonId) -> Vec<CourseId> {
    registry
        .enrollments
        .iter()
        .filter(|e| e.student_id == *student_id)
        .map(|e| e.course_id.clone())
        .collect()
}

/// The enrollment record for a (student, course) pair
///
/// Linear scan of the records in insertion order; when duplicates exist
/// for the pair, the first-created record wins. Returns `None` when the
/// pair has no record.
pub fn enrollment_get<'a>(
    registry: &'a Registry,
    student_id: &PersonId,
    course_id: &CourseId,
) -> Option<&'a Enrollment> {
    registry
        .enrollments
        .iter()
        .find(|e| e.matches_pair(student_id, course_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{course_ops, enrollment_ops, student_ops};

    #[test]
    fn test_students_by_course_unknown_course_is_empty() {
        let registry = Registry::new();
        assert!(students_by_course(&registry, &CourseId::new()).is_empty());
    }

    #[test]
    fn test_courses_by_student_follows_enrollment_order() {
        let mut registry = Registry::new();
        let student = student_ops::add_student(
            &mut registry,
            "Alice".to_string(),
            "1001".to_string(),
            "CS".to_string(),
        );
        let math =
            course_ops::add_course(&mut registry, "Calculus".to_string(), "MATH101".to_string());
        let cs = course_ops::add_course(&mut registry, "Intro".to_string(), "CS101".to_string());

        enrollment_ops::enroll_student(&mut registry, &student, &math);
        enrollment_ops::enroll_student(&mut registry, &student, &cs);

        assert_eq!(courses_by_student(&registry, &student), vec![math, cs]);
    }

    #[test]
    fn test_enrollment_get_none_for_unknown_pair() {
        let registry = Registry::new();
        assert!(enrollment_get(&registry, &PersonId::new(), &CourseId::new()).is_none());
    }
}
