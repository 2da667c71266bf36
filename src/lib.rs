//! Movie catalog: CRUD REST backend over a PostgreSQL `movies` table, serving a frontend bundle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Movie, MovieInput};
pub use routes::app;
pub use state::AppState;
pub use store::{check_connection, connect_lazy, MemoryStore, MovieStore, PgMovieStore};
