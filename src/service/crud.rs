//! Student CRUD orchestration over any `StudentStore`.

use super::StudentValidator;
use crate::error::AppError;
use crate::model::{Student, StudentCandidate};
use crate::store::StudentStore;

pub struct CrudService;

impl CrudService {
    /// Validate and persist a new student. The id is always server-assigned.
    pub async fn create(store: &dyn StudentStore, candidate: &StudentCandidate) -> Result<Student, AppError> {
        let fields = StudentValidator::validate(candidate)?;
        let student = store.create(&fields).await?;
        tracing::debug!(id = %student.id, "student created");
        Ok(student)
    }

    pub async fn list(store: &dyn StudentStore) -> Result<Vec<Student>, AppError> {
        store.list().await
    }

    /// Fetch one student by id; absent ids are `NotFound`.
    pub async fn read(store: &dyn StudentStore, id: &str) -> Result<Student, AppError> {
        store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Replace both name fields of an existing student. The path id wins over anything in the body.
    pub async fn update(
        store: &dyn StudentStore,
        id: &str,
        candidate: &StudentCandidate,
    ) -> Result<Student, AppError> {
        Self::read(store, id).await?;
        let fields = StudentValidator::validate(candidate)?;
        let student = store.update(id, &fields).await?;
        tracing::debug!(id = %id, "student updated");
        Ok(student)
    }

    /// Delete an existing student; absent ids are `NotFound`.
    pub async fn delete(store: &dyn StudentStore, id: &str) -> Result<(), AppError> {
        Self::read(store, id).await?;
        store.delete(id).await?;
        tracing::debug!(id = %id, "student deleted");
        Ok(())
    }
}
