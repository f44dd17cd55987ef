//! Required-field checks for create and update bodies.

use crate::error::AppError;
use crate::model::{StudentCandidate, StudentFields};

pub struct StudentValidator;

impl StudentValidator {
    /// Both `first` and `last` must be present and contain a non-whitespace character.
    /// Values are returned untrimmed.
    pub fn validate(candidate: &StudentCandidate) -> Result<StudentFields, AppError> {
        let first = required(candidate.first.as_deref());
        let last = required(candidate.last.as_deref());
        match (first, last) {
            (Some(first), Some(last)) => Ok(StudentFields {
                first: first.to_string(),
                last: last.to_string(),
            }),
            (None, Some(_)) => Err(AppError::BadInput("first is required".into())),
            (Some(_), None) => Err(AppError::BadInput("last is required".into())),
            (None, None) => Err(AppError::BadInput("first and last are required".into())),
        }
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
