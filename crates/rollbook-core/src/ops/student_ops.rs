use chrono::Utc;
use rollbook_core_types::PersonId;

use super::{enrollment_ops, registry::Registry};
use crate::model::{Person, Role};

/// Create a new student and add it to the registry
///
/// Automatically generates a UUID v7 handle. Always succeeds; the returned
/// handle is the only way to address the student later (there is no
/// lookup by `id_number`).
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `name` - Display name
/// * `id_number` - Caller-facing identifier (free-form text)
/// * `major` - Declared major
///
/// # Returns
/// The handle of the newly created student
pub fn add_student(
    registry: &mut Registry,
    name: String,
    id_number: String,
    major: String,
) -> PersonId {
    let id = PersonId::new();
    let student = Person::new_student(id.clone(), name, id_number, major);
    registry.insert_student(student);

    tracing::debug!(student_id = %id, "student added");
    id
}

/// Remove a student from the registry
///
/// If the handle is tracked, removes the record and cascades: every
/// enrollment referencing this student is removed as well. Course rosters
/// are deliberately left untouched. Untracked handles are a silent no-op,
/// and the cascade is skipped for them too.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The student handle to remove
pub fn remove_student(registry: &mut Registry, id: &PersonId) {
    if registry.take_student(id).is_some() {
        enrollment_ops::remove_enrollments_by_student(registry, id);
        tracing::debug!(student_id = %id, "student removed");
    }
}

/// Update a student's fields
///
/// Overwrites each provided field; `None` arguments leave the field
/// untouched. The mutation is visible through every enrollment referencing
/// this handle, since enrollments store handles rather than copies.
/// Untracked handles are a silent no-op. Bumps `updated_at`.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The student handle to update
/// * `name` - Optional new display name
/// * `id_number` - Optional new caller-facing identifier
/// * `major` - Optional new major
pub fn update_student(
    registry: &mut Registry,
    id: &PersonId,
    name: Option<String>,
    id_number: Option<String>,
    major: Option<String>,
) {
    let Some(student) = registry.students.get_mut(id) else {
        return;
    };

    if let Some(new_name) = name {
        student.name = new_name;
    }

    if let Some(new_id_number) = id_number {
        student.id_number = new_id_number;
    }

    if let Some(new_major) = major {
        if let Role::Student { major } = &mut student.role {
            *major = new_major;
        }
    }

    student.updated_at = Utc::now();
}
