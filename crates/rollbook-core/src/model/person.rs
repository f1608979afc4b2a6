use chrono::{DateTime, Utc};
use rollbook_core_types::PersonId;
use serde::{Deserialize, Serialize};

/// Role payload distinguishing the two kinds of tracked people
///
/// A closed sum type: the registry tracks no other kinds of people, and
/// `describe` dispatches on this tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// A student with a declared major
    Student { major: String },
    /// An instructor attached to a department
    Instructor { department: String },
}

/// Person - a tracked student or instructor
///
/// The shared base (name, id_number) is identical across roles; the
/// role payload carries the variant-specific field. `id_number` is the
/// caller-facing identifier and is never used for lookup - the `id`
/// handle is the only addressing path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique handle for this person (UUID v7)
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Caller-facing identifier (student/staff number); free-form text
    pub id_number: String,

    /// Role payload (student major or instructor department)
    pub role: Role,

    /// Timestamp when this person was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this person was last updated
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a new student
    pub fn new_student(id: PersonId, name: String, id_number: String, major: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            id_number,
            role: Role::Student { major },
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new instructor
    pub fn new_instructor(
        id: PersonId,
        name: String,
        id_number: String,
        department: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            id_number,
            role: Role::Instructor { department },
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this person is a student
    pub fn is_student(&self) -> bool {
        matches!(self.role, Role::Student { .. })
    }

    /// Check if this person is an instructor
    pub fn is_instructor(&self) -> bool {
        matches!(self.role, Role::Instructor { .. })
    }

    /// The declared major, if this person is a student
    pub fn major(&self) -> Option<&str> {
        match &self.role {
            Role::Student { major } => Some(major),
            Role::Instructor { .. } => None,
        }
    }

    /// The department, if this person is an instructor
    pub fn department(&self) -> Option<&str> {
        match &self.role {
            Role::Student { .. } => None,
            Role::Instructor { department } => Some(department),
        }
    }

    /// Human-readable one-line summary, dispatching on the role tag
    pub fn describe(&self) -> String {
        match &self.role {
            Role::Student { major } => {
                format!(
                    "Name: {}, ID: {}, Major: {}",
                    self.name, self.id_number, major
                )
            }
            Role::Instructor { department } => {
                format!(
                    "Name: {}, ID: {}, Department: {}",
                    self.name, self.id_number, department
                )
            }
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
