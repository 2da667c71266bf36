//! Store seam: the four catalog operations plus a readiness probe.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{check_connection, connect_lazy, PgMovieStore};

use crate::error::AppError;
use crate::model::{Movie, MovieInput};
use async_trait::async_trait;

/// Each call maps to exactly one statement against the store.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All rows in store-default order.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;

    /// Inserts a row and returns it with its store-assigned id.
    async fn create(&self, input: &MovieInput) -> Result<Movie, AppError>;

    /// Overwrites every field of row `id`. Returns rows affected; 0 is not an error.
    async fn update(&self, id: i64, input: &MovieInput) -> Result<u64, AppError>;

    /// Removes row `id`. Returns rows affected; 0 is not an error.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
