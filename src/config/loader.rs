//! Load `Config` from `STUDENTS_*` environment variables.

use crate::config::types::{Config, StoreKind};
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_STORE: &str = "STUDENTS_STORE";
pub const ENV_DB_HOST: &str = "STUDENTS_DB_HOST";
pub const ENV_DB_PORT: &str = "STUDENTS_DB_PORT";
pub const ENV_DB_NAME: &str = "STUDENTS_DB_NAME";
pub const ENV_DB_USER: &str = "STUDENTS_DB_USER";
pub const ENV_DB_PASSWORD: &str = "STUDENTS_DB_PASSWORD";
pub const ENV_DB_MAX_CONNECTIONS: &str = "STUDENTS_DB_MAX_CONNECTIONS";
pub const ENV_LISTEN_ADDR: &str = "STUDENTS_LISTEN_ADDR";
pub const ENV_BODY_LIMIT: &str = "STUDENTS_BODY_LIMIT";
pub const ENV_STATIC_DIR: &str = "STUDENTS_STATIC_DIR";

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::UnknownStore(s.to_string())),
        }
    }
}

impl Config {
    /// Read settings from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with `lookup` standing in for the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(v) = get(ENV_STORE) {
            config.store = v.parse()?;
        }
        if let Some(v) = get(ENV_DB_HOST) {
            config.database.host = v;
        }
        if let Some(v) = get(ENV_DB_PORT) {
            config.database.port = parse(ENV_DB_PORT, &v)?;
        }
        if let Some(v) = get(ENV_DB_NAME) {
            config.database.name = v;
        }
        config.database.user = get(ENV_DB_USER);
        config.database.password = lookup(ENV_DB_PASSWORD);
        if let Some(v) = get(ENV_DB_MAX_CONNECTIONS) {
            config.database.max_connections = parse(ENV_DB_MAX_CONNECTIONS, &v)?;
        }
        if let Some(v) = get(ENV_LISTEN_ADDR) {
            config.listen_addr = parse(ENV_LISTEN_ADDR, &v)?;
        }
        if let Some(v) = get(ENV_BODY_LIMIT) {
            config.body_limit = parse(ENV_BODY_LIMIT, &v)?;
        }
        if let Some(v) = get(ENV_STATIC_DIR) {
            config.static_dir = match v.trim() {
                "off" | "none" => None,
                dir => Some(PathBuf::from(dir)),
            };
        }
        Ok(config)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
