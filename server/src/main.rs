//! Student registry server.
//!
//! Run from repo root: `cargo run -p student-server`
//! Settings come from `STUDENTS_*` environment variables (a `.env` file is honored).

use student_registry::{
    app, ensure_database_exists, ensure_students_table, AppState, Config, MemoryStudentStore,
    PgStudentStore, StoreKind,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("student_registry=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = match config.store {
        StoreKind::Postgres => {
            let options = config.database.connect_options();
            ensure_database_exists(&options).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect_with(options)
                .await?;
            ensure_students_table(&pool).await?;
            tracing::info!(
                host = %config.database.host,
                database = %config.database.name,
                "using postgres store"
            );
            AppState::new(PgStudentStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::info!("using in-memory store; records are lost on exit");
            AppState::new(MemoryStudentStore::new())
        }
    };

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving browser client");
    }
    let router = app(state, &config);
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
