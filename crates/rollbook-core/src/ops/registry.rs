use std::collections::HashMap;

use rollbook_core_types::{CourseId, PersonId};

use crate::errors::{Result, RollbookError};
use crate::model::{Course, Enrollment, Person};

/// In-memory registry of people, courses, and enrollments
///
/// HashMap-based storage with insertion-order side lists, so membership
/// checks are by handle identity while listings keep creation order.
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use;
/// a cascade runs to completion inside one `&mut self` call, so no
/// partial-cascade state is ever observable.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Tracked students by handle
    pub(crate) students: HashMap<PersonId, Person>,
    /// Student handles in insertion order
    pub(crate) student_order: Vec<PersonId>,
    /// Tracked instructors by handle
    pub(crate) instructors: HashMap<PersonId, Person>,
    /// Instructor handles in insertion order
    pub(crate) instructor_order: Vec<PersonId>,
    /// Tracked courses by handle
    pub(crate) courses: HashMap<CourseId, Course>,
    /// Course handles in insertion order
    pub(crate) course_order: Vec<CourseId>,
    /// Enrollment records in insertion order
    pub(crate) enrollments: Vec<Enrollment>,
}

impl Registry {
    /// Create a new empty Registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a student by handle
    ///
    /// Strict accessor: untracked handles are an error here, unlike the
    /// permissive mutation operations.
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student is tracked under this handle.
    pub fn get_student(&self, id: &PersonId) -> Result<&Person> {
        self.students
            .get(id)
            .ok_or_else(|| RollbookError::StudentNotFound {
                student_id: id.clone(),
            })
    }

    /// Get a mutable reference to a student by handle
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student is tracked under this handle.
    pub fn get_student_mut(&mut self, id: &PersonId) -> Result<&mut Person> {
        self.students
            .get_mut(id)
            .ok_or_else(|| RollbookError::StudentNotFound {
                student_id: id.clone(),
            })
    }

    /// Get an instructor by handle
    ///
    /// # Errors
    ///
    /// Returns `InstructorNotFound` if no instructor is tracked under this handle.
    pub fn get_instructor(&self, id: &PersonId) -> Result<&Person> {
        self.instructors
            .get(id)
            .ok_or_else(|| RollbookError::InstructorNotFound {
                instructor_id: id.clone(),
            })
    }

    /// Get a mutable reference to an instructor by handle
    ///
    /// # Errors
    ///
    /// Returns `InstructorNotFound` if no instructor is tracked under this handle.
    pub fn get_instructor_mut(&mut self, id: &PersonId) -> Result<&mut Person> {
        self.instructors
            .get_mut(id)
            .ok_or_else(|| RollbookError::InstructorNotFound {
                instructor_id: id.clone(),
            })
    }

    /// Get a course by handle
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` if no course is tracked under this handle.
    pub fn get_course(&self, id: &CourseId) -> Result<&Course> {
        self.courses
            .get(id)
            .ok_or_else(|| RollbookError::CourseNotFound {
                course_id: id.clone(),
            })
    }

    /// Get a mutable reference to a course by handle
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` if no course is tracked under this handle.
    pub fn get_course_mut(&mut self, id: &CourseId) -> Result<&mut Course> {
        self.courses
            .get_mut(id)
            .ok_or_else(|| RollbookError::CourseNotFound {
                course_id: id.clone(),
            })
    }

    /// Strict lookup of the first enrollment for a (student, course) pair
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentNotFound` if no record exists for the pair.
    pub fn require_enrollment(
        &self,
        student_id: &PersonId,
        course_id: &CourseId,
    ) -> Result<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.matches_pair(student_id, course_id))
            .ok_or_else(|| RollbookError::EnrollmentNotFound {
                student_id: student_id.clone(),
                course_id: course_id.clone(),
            })
    }

    /// List all students in insertion order
    pub fn list_students(&self) -> Vec<&Person> {
        self.student_order
            .iter()
            .filter_map(|id| self.students.get(id))
            .collect()
    }

    /// List all instructors in insertion order
    pub fn list_instructors(&self) -> Vec<&Person> {
        self.instructor_order
            .iter()
            .filter_map(|id| self.instructors.get(id))
            .collect()
    }

    /// List all courses in insertion order
    pub fn list_courses(&self) -> Vec<&Course> {
        self.course_order
            .iter()
            .filter_map(|id| self.courses.get(id))
            .collect()
    }

    /// All enrollment records in insertion order
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Insert a student into the registry
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn insert_student(&mut self, student: Person) {
        self.student_order.push(student.id.clone());
        self.students.insert(student.id.clone(), student);
    }

    /// Insert an instructor into the registry
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn insert_instructor(&mut self, instructor: Person) {
        self.instructor_order.push(instructor.id.clone());
        self.instructors.insert(instructor.id.clone(), instructor);
    }

    /// Insert a course into the registry
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn insert_course(&mut self, course: Course) {
        self.course_order.push(course.id.clone());
        self.courses.insert(course.id.clone(), course);
    }

    /// Append an enrollment record
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn push_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Remove a student record, returning it if it was tracked
    ///
    /// Does not cascade; `student_ops::remove_student` layers the cascade
    /// on top of this.
    pub(crate) fn take_student(&mut self, id: &PersonId) -> Option<Person> {
        let removed = self.students.remove(id);
        if removed.is_some() {
            self.student_order.retain(|s| s != id);
        }
        removed
    }

    /// Remove an instructor record, returning it if it was tracked
    pub(crate) fn take_instructor(&mut self, id: &PersonId) -> Option<Person> {
        let removed = self.instructors.remove(id);
        if removed.is_some() {
            self.instructor_order.retain(|i| i != id);
        }
        removed
    }

    /// Remove a course record, returning it if it was tracked
    pub(crate) fn take_course(&mut self, id: &CourseId) -> Option<Course> {
        let removed = self.courses.remove(id);
        if removed.is_some() {
            self.course_order.retain(|c| c != id);
        }
        removed
    }

    /// Check if a student is tracked
    pub fn contains_student(&self, id: &PersonId) -> bool {
        self.students.contains_key(id)
    }

    /// Check if an instructor is tracked
    pub fn contains_instructor(&self, id: &PersonId) -> bool {
        self.instructors.contains_key(id)
    }

    /// Check if a course is tracked
    pub fn contains_course(&self, id: &CourseId) -> bool {
        self.courses.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core_types::EnrollmentId;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.list_students().len(), 0);
        assert_eq!(registry.list_instructors().len(), 0);
        assert_eq!(registry.list_courses().len(), 0);
        assert_eq!(registry.enrollments().len(), 0);
    }

    #[test]
    fn test_insert_and_get_student() {
        let mut registry = Registry::new();
        let id = PersonId::new();
        let student = Person::new_student(
            id.clone(),
            "Alice".to_string(),
            "1001".to_string(),
            "CS".to_string(),
        );

        registry.insert_student(student);

        let retrieved = registry.get_student(&id).unwrap();
        assert_eq!(retrieved.name, "Alice");
        assert!(registry.contains_student(&id));
    }

    #[test]
    fn test_get_nonexistent_student() {
        let registry = Registry::new();
        let result = registry.get_student(&PersonId::new());
        assert!(matches!(result, Err(RollbookError::StudentNotFound { .. })));
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let mut registry = Registry::new();
        for name in ["Alice", "Bob", "Carol"] {
            let student = Person::new_student(
                PersonId::new(),
                name.to_string(),
                "0".to_string(),
                "CS".to_string(),
            );
            registry.insert_student(student);
        }

        let names: Vec<&str> = registry
            .list_students()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_take_student_removes_from_order() {
        let mut registry = Registry::new();
        let id = PersonId::new();
        registry.insert_student(Person::new_student(
            id.clone(),
            "Alice".to_string(),
            "1001".to_string(),
            "CS".to_string(),
        ));

        let taken = registry.take_student(&id);
        assert!(taken.is_some());
        assert!(registry.list_students().is_empty());

        // Second take is a no-op
        assert!(registry.take_student(&id).is_none());
    }

    #[test]
    fn test_mutation_through_accessor_is_visible_to_readers() {
        let mut registry = Registry::new();
        let id = PersonId::new();
        registry.insert_student(Person::new_student(
            id.clone(),
            "Alice".to_string(),
            "1001".to_string(),
            "CS".to_string(),
        ));

        registry.get_student_mut(&id).unwrap().name = "Alicia".to_string();

        assert_eq!(registry.get_student(&id).unwrap().name, "Alicia");
    }

    #[test]
    fn test_roster_mutable_through_course_accessor() {
        let mut registry = Registry::new();
        let course_id = CourseId::new();
        registry.insert_course(Course::new(
            course_id.clone(),
            "Intro".to_string(),
            "CS101".to_string(),
        ));

        let student = PersonId::new();
        registry
            .get_course_mut(&course_id)
            .unwrap()
            .add_student(student.clone());

        assert_eq!(
            registry.get_course(&course_id).unwrap().enrolled_students,
            vec![student]
        );
    }

    #[test]
    fn test_require_enrollment_not_found() {
        let registry = Registry::new();
        let result = registry.require_enrollment(&PersonId::new(), &CourseId::new());
        assert!(matches!(
            result,
            Err(RollbookError::EnrollmentNotFound { .. })
        ));
    }

    #[test]
    fn test_require_enrollment_returns_first_match() {
        let mut registry = Registry::new();
        let student = PersonId::new();
        let course = CourseId::new();

        let first = Enrollment::new(EnrollmentId::new(), student.clone(), course.clone());
        let first_id = first.id.clone();
        registry.push_enrollment(first);
        registry.push_enrollment(Enrollment::new(
            EnrollmentId::new(),
            student.clone(),
            course.clone(),
        ));

        let found = registry.require_enrollment(&student, &course).unwrap();
        assert_eq!(found.id, first_id);
    }
}
