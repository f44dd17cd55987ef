//! Student record and request shapes.

use serde::{Deserialize, Serialize};

/// A persisted student. `id` is assigned at creation and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: String,
    pub first: String,
    pub last: String,
}

/// Create/update request body. Unknown keys, including any client-supplied `id`, are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentCandidate {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// Name fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentFields {
    pub first: String,
    pub last: String,
}

impl StudentFields {
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            first: self.first,
            last: self.last,
        }
    }
}

/// New opaque student id: a random UUID v4 in hyphenated lowercase form.
pub fn new_student_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
