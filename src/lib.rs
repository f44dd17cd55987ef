//! Student registry: CRUD REST service for student records over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Student, StudentCandidate, StudentFields};
pub use routes::{app, common_routes, common_routes_with_ready, student_routes};
pub use service::{CrudService, StudentValidator};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_students_table, MemoryStudentStore, PgStudentStore, StudentStore,
};
