//! Database bootstrap, embedded migrations, and integrity-violation classification.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::error::ErrorKind;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, Connection, PgPool};

/// Schema migrations under `migrations/`, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Constraint names declared by the migrations.
pub mod constraints {
    pub const PROJECTS_NAME: &str = "uq_projects_name";
    pub const SPRINTS_NUMBER_PROJECT: &str = "uq_sprints_number_project";
    pub const SPRINTS_PROJECT: &str = "fk_sprints_project";
    pub const ISSUES_PROJECT: &str = "fk_issues_project";
    pub const ISSUES_SPRINT: &str = "fk_issues_sprint";
}

/// Create the configured database if missing. Connects to the `postgres` maintenance database to check and create.
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    if config.name.is_empty() || config.name == "postgres" {
        return Ok(());
    }
    let mut conn = config.maintenance_options().connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&config.name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %config.name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&config.name)))
            .execute(&mut conn)
            .await?;
    }
    conn.close().await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("migration failed: {}", e)))
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// An integrity violation reported by PostgreSQL, with the violated constraint's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation<'a> {
    Unique(&'a str),
    ForeignKey(&'a str),
}

/// Classify from the driver's error kind and constraint name; other errors yield `None`.
pub fn violation(err: &sqlx::Error) -> Option<Violation<'_>> {
    let db = err.as_database_error()?;
    let constraint = db.constraint().unwrap_or_default();
    match db.kind() {
        ErrorKind::UniqueViolation => Some(Violation::Unique(constraint)),
        ErrorKind::ForeignKeyViolation => Some(Violation::ForeignKey(constraint)),
        _ => None,
    }
}
