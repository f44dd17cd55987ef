//! Runtime settings, built once at startup and passed down explicitly.

use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which `StudentStore` backend the server runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Falls back to the driver's default (PGUSER, then the OS user) when unset.
    pub user: Option<String>,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            name: "students".into(),
            user: None,
            password: None,
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name);
        if let Some(user) = &self.user {
            opts = opts.username(user);
        }
        if let Some(password) = &self.password {
            opts = opts.password(password);
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub store: StoreKind,
    pub database: DatabaseConfig,
    pub listen_addr: SocketAddr,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    /// Directory served at `/` for the browser client; `None` serves nothing.
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            database: DatabaseConfig::default(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit: 64 * 1024,
            static_dir: Some(PathBuf::from("static")),
        }
    }
}
