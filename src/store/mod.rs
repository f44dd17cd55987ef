//! Student persistence: the `StudentStore` seam, its backends, and PostgreSQL bootstrap DDL.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};

/// Table holding one row per student.
pub const STUDENTS_TABLE: &str = "students";

/// Durable student records keyed by id.
///
/// Callers check existence before `update` and `delete`; neither operation upserts.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Persists a new record under a freshly generated id.
    async fn create(&self, fields: &StudentFields) -> Result<Student, AppError>;

    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// The record for `id`, or `None` when absent.
    async fn get(&self, id: &str) -> Result<Option<Student>, AppError>;

    /// Overwrites `first` and `last`. Returns `NotFound` if the row vanished since the caller's check.
    async fn update(&self, id: &str, fields: &StudentFields) -> Result<Student, AppError>;

    /// Removes the row. Deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Create the `students` table if it does not exist.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            first TEXT NOT NULL,
            last TEXT NOT NULL
        )
        "#,
        STUDENTS_TABLE
    );
    tracing::debug!(table = STUDENTS_TABLE, "ensure table");
    sqlx::query(&ddl)
        .execute(pool)
        .await
        .map_err(|e| AppError::storage("unable to prepare the students table", e))?;
    Ok(())
}

/// Ensure the database named in `options` exists; create it if not. Connects to the
/// `postgres` maintenance database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = options.get_database().unwrap_or_default().to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let admin = options.clone().database("postgres");
    let mut conn = admin
        .connect()
        .await
        .map_err(|e| AppError::storage("unable to connect to the database server", e))?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(|e| AppError::storage("unable to look up the database", e))?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(|e| AppError::storage("unable to create the database", e))?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
