use rollbook_core_types::{CourseId, EnrollmentId, PersonId};

use super::registry::Registry;
use crate::model::Enrollment;

/// Enroll a student in a course
///
/// Creates an ungraded enrollment record and appends the student handle to
/// the course's roster when the course is tracked. Neither handle is
/// required to be registered - enrollment references are caller-supplied
/// and taken at face value.
///
/// There is no duplicate-pair check: enrolling the same student in the
/// same course twice yields two records and two roster appearances.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `student_id` - The student to enroll
/// * `course_id` - The course to enroll in
///
/// # Returns
/// The handle of the newly created enrollment record
pub fn enroll_student(
    registry: &mut Registry,
    student_id: &PersonId,
    course_id: &CourseId,
) -> EnrollmentId {
    let enrollment = Enrollment::new(EnrollmentId::new(), student_id.clone(), course_id.clone());
    let id = enrollment.id.clone();
    registry.push_enrollment(enrollment);

    if let Some(course) = registry.courses.get_mut(course_id) {
        course.add_student(student_id.clone());
    }

    tracing::debug!(student_id = %student_id, course_id = %course_id, "student enrolled");
    id
}

/// Assign a grade for a (student, course) pair
///
/// Resolves the pair with the first-created-wins rule and sets the grade
/// on that record. If no record matches, nothing happens - no error is
/// signaled. Bumps the record's `updated_at` on success.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `student_id` - The enrolled student
/// * `course_id` - The course
/// * `grade` - The grade to assign
pub fn assign_grade(
    registry: &mut Registry,
    student_id: &PersonId,
    course_id: &CourseId,
    grade: u32,
) {
    if let Some(enrollment) = registry
        .enrollments
        .iter_mut()
        .find(|e| e.matches_pair(student_id, course_id))
    {
        enrollment.assign_grade(grade);
        tracing::debug!(student_id = %student_id, course_id = %course_id, grade, "grade assigned");
    }
}

/// Remove every enrollment referencing a student
///
/// Cascade helper behind `remove_student`, also independently usable.
/// Filter-and-rebuild: all matches are removed and the relative order of
/// survivors is preserved. Course rosters are not touched.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `student_id` - The student whose enrollments are removed
pub fn remove_enrollments_by_student(registry: &mut Registry, student_id: &PersonId) {
    registry.enrollments.retain(|e| e.student_id != *student_id);
}

/// Remove every enrollment referencing a course
///
/// Cascade helper behind `remove_course`, also independently usable.
/// Filter-and-rebuild: all matches are removed and the relative order of
/// survivors is preserved.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `course_id` - The course whose enrollments are removed
pub fn remove_enrollments_by_course(registry: &mut Registry, course_id: &CourseId) {
    registry.enrollments.retain(|e| e.course_id != *course_id);
}
