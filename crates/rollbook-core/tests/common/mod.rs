use rollbook_core::{Course, Enrollment, Person, Registry};
use rollbook_core_types::{CourseId, EnrollmentId, PersonId};

/// Create a new empty Registry for testing
#[allow(dead_code)]
pub fn new_registry() -> Registry {
    Registry::new()
}

/// Create a test student with the given name
///
/// Automatically generates a handle and inserts the record directly
/// (bypassing CRUD operations for test setup). For full CRUD testing,
/// use the actual `add_student` operation.
#[allow(dead_code)]
pub fn create_test_student(registry: &mut Registry, name: &str, major: &str) -> PersonId {
    let id = PersonId::new();
    let student = Person::new_student(
        id.clone(),
        name.to_string(),
        "0000".to_string(),
        major.to_string(),
    );
    registry.insert_student(student);
    id
}

/// Create a test instructor with the given name
#[allow(dead_code)]
pub fn create_test_instructor(registry: &mut Registry, name: &str, department: &str) -> PersonId {
    let id = PersonId::new();
    let instructor = Person::new_instructor(
        id.clone(),
        name.to_string(),
        "0000".to_string(),
        department.to_string(),
    );
    registry.insert_instructor(instructor);
    id
}

/// Create a test course with the given title and code
#[allow(dead_code)]
pub fn create_test_course(registry: &mut Registry, name: &str, code: &str) -> CourseId {
    let id = CourseId::new();
    let course = Course::new(id.clone(), name.to_string(), code.to_string());
    registry.insert_course(course);
    id
}

/// Record a test enrollment directly, without touching the course roster
///
/// This bypasses `enroll_student` for tests that need enrollment records
/// independent of roster side effects.
#[allow(dead_code)]
pub fn create_test_enrollment(
    registry: &mut Registry,
    student_id: &PersonId,
    course_id: &CourseId,
) -> EnrollmentId {
    let enrollment = Enrollment::new(EnrollmentId::new(), student_id.clone(), course_id.clone());
    let id = enrollment.id.clone();
    registry.push_enrollment(enrollment);
    id
}
