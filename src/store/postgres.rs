//! PostgreSQL backend over a shared connection pool.

use super::{StudentStore, STUDENTS_TABLE};
use crate::error::AppError;
use crate::model::{new_student_id, Student, StudentFields};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn create(&self, fields: &StudentFields) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (id, first, last) VALUES ($1, $2, $3) RETURNING id, first, last",
            STUDENTS_TABLE
        );
        let id = new_student_id();
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&id)
            .bind(&fields.first)
            .bind(&fields.last)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::storage("unable to add the student", e))
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT id, first, last FROM {} ORDER BY id", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Student>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage("unable to get all students", e))
    }

    async fn get(&self, id: &str) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT id, first, last FROM {} WHERE id = $1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("unable to get student with id {}", id), e))
    }

    async fn update(&self, id: &str, fields: &StudentFields) -> Result<Student, AppError> {
        let sql = format!(
            "UPDATE {} SET first = $1, last = $2 WHERE id = $3 RETURNING id, first, last",
            STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&fields.first)
            .bind(&fields.last)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("unable to update student with id {}", id), e))?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("unable to delete student with id {}", id), e))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage("database unavailable", e))?;
        Ok(())
    }
}
