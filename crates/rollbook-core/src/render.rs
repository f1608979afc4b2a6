//! Presentation strings for registry entities
//!
//! Formatting is a caller-facing concern layered over the core: these
//! functions resolve handles through the registry to produce one-line
//! summaries. Roster entries that no longer resolve (removed students
//! still on a course roster) fall back to the raw handle.

use rollbook_core_types::CourseId;

use crate::errors::Result;
use crate::model::{Course, Enrollment, Person};
use crate::ops::Registry;

/// One-line summary of a person
///
/// Delegates to the role-dispatching `describe` on the model.
pub fn describe_person(person: &Person) -> String {
    person.describe()
}

/// One-line summary of a course, with its roster resolved to names
///
/// # Arguments
/// * `registry` - Reference to the Registry
/// * `course_id` - Handle of the course to describe
///
/// # Errors
/// * `CourseNotFound` - If the course is not tracked
pub fn describe_course(registry: &Registry, course_id: &CourseId) -> Result<String> {
    let course = registry.get_course(course_id)?;
    Ok(describe_course_record(registry, course))
}

/// One-line summary of a course value the caller already holds
///
/// Useful for course records removed from (or never added to) the
/// registry; roster entries resolve against the registry's current
/// student set.
pub fn describe_course_record(registry: &Registry, course: &Course) -> String {
    let roster: Vec<String> = course
        .enrolled_students
        .iter()
        .map(|id| match registry.get_student(id) {
            Ok(student) => student.name.clone(),
            Err(_) => id.to_string(),
        })
        .collect();

    format!(
        "Course Name: {}, ID: {}, Enrolled Students: [{}]",
        course.name,
        course.code,
        roster.join(", ")
    )
}

/// One-line summary of an enrollment record
///
/// Student and course references resolve to names when tracked and fall
/// back to the raw handle otherwise; an unset grade renders as "none".
pub fn describe_enrollment(registry: &Registry, enrollment: &Enrollment) -> String {
    let student = match registry.get_student(&enrollment.student_id) {
        Ok(student) => student.name.clone(),
        Err(_) => enrollment.student_id.to_string(),
    };
    let course = match registry.get_course(&enrollment.course_id) {
        Ok(course) => course.name.clone(),
        Err(_) => enrollment.course_id.to_string(),
    };
    let grade = match enrollment.grade {
        Some(g) => g.to_string(),
        None => "none".to_string(),
    };

    format!("Student: {student}, Course: {course}, Grade: {grade}")
}
