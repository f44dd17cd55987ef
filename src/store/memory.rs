//! In-process backend. Nothing survives a restart; used for local runs and tests.

use super::StudentStore;
use crate::error::AppError;
use crate::model::{new_student_id, Student, StudentFields};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
pub struct MemoryStudentStore {
    rows: RwLock<BTreeMap<String, Student>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock only means another request panicked mid-operation; every write
// below is a single map call, so the map itself is still consistent.
#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn create(&self, fields: &StudentFields) -> Result<Student, AppError> {
        let student = fields.clone().into_student(new_student_id());
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        rows.insert(student.id.clone(), student.clone());
        Ok(student)
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Student>, AppError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.get(id).cloned())
    }

    async fn update(&self, id: &str, fields: &StudentFields) -> Result<Student, AppError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let row = rows
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        row.first = fields.first.clone();
        row.last = fields.last.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
