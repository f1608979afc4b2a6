use chrono::Utc;
use rollbook_core_types::CourseId;

use super::{enrollment_ops, registry::Registry};
use crate::model::Course;

/// Create a new course and add it to the registry
///
/// Automatically generates a UUID v7 handle. The roster starts empty.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `name` - Course title
/// * `code` - Caller-facing course identifier, e.g. "CS101"
///
/// # Returns
/// The handle of the newly created course
pub fn add_course(registry: &mut Registry, name: String, code: String) -> CourseId {
    let id = CourseId::new();
    let course = Course::new(id.clone(), name, code);
    registry.insert_course(course);

    tracing::debug!(course_id = %id, "course added");
    id
}

/// Remove a course from the registry
///
/// If the handle is tracked, removes the record and cascades: every
/// enrollment referencing this course is removed as well. The course's own
/// roster is not cleared - the record leaves the registry with the roster
/// it had, which matters only to callers holding a copy. Untracked handles
/// are a silent no-op.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The course handle to remove
pub fn remove_course(registry: &mut Registry, id: &CourseId) {
    if registry.take_course(id).is_some() {
        enrollment_ops::remove_enrollments_by_course(registry, id);
        tracing::debug!(course_id = %id, "course removed");
    }
}

/// Update a course's fields
///
/// Overwrites each provided field; `None` arguments leave the field
/// untouched. Untracked handles are a silent no-op. Bumps `updated_at`.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The course handle to update
/// * `name` - Optional new course title
/// * `code` - Optional new caller-facing identifier
pub fn update_course(
    registry: &mut Registry,
    id: &CourseId,
    name: Option<String>,
    code: Option<String>,
) {
    let Some(course) = registry.courses.get_mut(id) else {
        return;
    };

    if let Some(new_name) = name {
        course.name = new_name;
    }

    if let Some(new_code) = code {
        course.code = new_code;
    }

    course.updated_at = Utc::now();
}
