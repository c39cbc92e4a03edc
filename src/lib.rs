//! Issue service: REST backend for projects, sprints and issues on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use routes::{build_router, RouteSpec, RouteTable};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, run_migrations, MIGRATOR};
