//! Process configuration, loaded once at startup from environment variables.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;

/// Store connection settings. Unset fields fall back to libpq defaults (`PGHOST`, `PGUSER`, ...).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub port: u16,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new().port(self.port);
        if let Some(host) = &self.host {
            opts = opts.host(host);
        }
        if let Some(user) = &self.user {
            opts = opts.username(user);
        }
        if let Some(password) = &self.password {
            opts = opts.password(password);
        }
        if let Some(database) = &self.database {
            opts = opts.database(database);
        }
        opts
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pre-built frontend bundle; its `index.html` answers every unmatched GET.
    pub frontend_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// | Env Var              | Default            |
    /// |----------------------|--------------------|
    /// | `DB_HOST`            | libpq default      |
    /// | `DB_USER`            | libpq default      |
    /// | `DB_PASSWORD`        | none               |
    /// | `DB_NAME`            | libpq default      |
    /// | `DB_PORT`            | `5432`             |
    /// | `DB_MAX_CONNECTIONS` | `10`               |
    /// | `HOST`               | `0.0.0.0`          |
    /// | `PORT`               | `3001`             |
    /// | `FRONTEND_DIR`       | `../frontend/dist` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseConfig {
            host: get("DB_HOST"),
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME"),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10)?,
        };
        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or("PORT", get("PORT"), 3001)?,
            frontend_dir: get("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../frontend/dist")),
        };
        Ok(Self { database, server })
    }
}

fn parse_or<T: FromStr>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: v }),
    }
}
