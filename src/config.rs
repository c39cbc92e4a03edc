//! Process configuration, read once at start-up from an env file plus the process environment.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::str::FromStr;

/// Env file consulted when `ENV_FILE` is unset.
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Raw `LOG_LEVEL` value; see [`crate::logging::filter_directive`].
    pub log_level: String,
    pub database: DatabaseConfig,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Config {
    /// Load the env file named by `ENV_FILE` (default `.env`), then build the config from the environment.
    /// A missing env file is not an error; variables may come from the process environment alone.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.into());
        match dotenvy::from_filename(&path) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(source) => return Err(ConfigError::EnvFile { path, source }),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Config {
            http_port: parse_or(get("HTTP_PORT"), "HTTP_PORT", 8080)?,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            database: DatabaseConfig {
                host: required("DATABASE_HOST")?,
                port: parse_or(get("DATABASE_PORT"), "DATABASE_PORT", 5432)?,
                name: required("DATABASE_NAME")?,
                username: required("DATABASE_USERNAME")?,
                password: required("DATABASE_PASSWORD")?,
                max_connections: parse_or(
                    get("DATABASE_MAX_CONNECTIONS"),
                    "DATABASE_MAX_CONNECTIONS",
                    5,
                )?,
            },
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

impl DatabaseConfig {
    /// Options for the service database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options().database(&self.name)
    }

    /// Options for the `postgres` maintenance database, used to create the service database.
    pub fn maintenance_options(&self) -> PgConnectOptions {
        self.server_options().database("postgres")
    }

    fn server_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
    }
}
