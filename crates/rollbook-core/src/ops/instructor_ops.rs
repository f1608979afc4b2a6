use chrono::Utc;
use rollbook_core_types::PersonId;

use super::registry::Registry;
use crate::model::{Person, Role};

/// Create a new instructor and add it to the registry
///
/// Automatically generates a UUID v7 handle. Always succeeds.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `name` - Display name
/// * `id_number` - Caller-facing identifier (free-form text)
/// * `department` - Department
///
/// # Returns
/// The handle of the newly created instructor
pub fn add_instructor(
    registry: &mut Registry,
    name: String,
    id_number: String,
    department: String,
) -> PersonId {
    let id = PersonId::new();
    let instructor = Person::new_instructor(id.clone(), name, id_number, department);
    registry.insert_instructor(instructor);

    tracing::debug!(instructor_id = %id, "instructor added");
    id
}

/// Remove an instructor from the registry
///
/// No enrollment references an instructor, so removal has no secondary
/// effects. Untracked handles are a silent no-op.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The instructor handle to remove
pub fn remove_instructor(registry: &mut Registry, id: &PersonId) {
    if registry.take_instructor(id).is_some() {
        tracing::debug!(instructor_id = %id, "instructor removed");
    }
}

/// Update an instructor's fields
///
/// Overwrites each provided field; `None` arguments leave the field
/// untouched. Untracked handles are a silent no-op. Bumps `updated_at`.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `id` - The instructor handle to update
/// * `name` - Optional new display name
/// * `id_number` - Optional new caller-facing identifier
/// * `department` - Optional new department
pub fn update_instructor(
    registry: &mut Registry,
    id: &PersonId,
    name: Option<String>,
    id_number: Option<String>,
    department: Option<String>,
) {
    let Some(instructor) = registry.instructors.get_mut(id) else {
        return;
    };

    if let Some(new_name) = name {
        instructor.name = new_name;
    }

    if let Some(new_id_number) = id_number {
        instructor.id_number = new_id_number;
    }

    if let Some(new_department) = department {
        if let Role::Instructor { department } = &mut instructor.role {
            *department = new_department;
        }
    }

    instructor.updated_at = Utc::now();
}
