//! PostgreSQL store: one parameterized statement per operation, executed on the shared pool.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::model::{Movie, MovieInput};
use crate::sql;
use crate::store::MovieStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Builds the pool without connecting, so the process starts even when the store is down.
pub fn connect_lazy(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Startup probe. Logs the outcome and never fails.
pub async fn check_connection(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            tracing::info!("connected to PostgreSQL database");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "error connecting to PostgreSQL");
            false
        }
    }
}

#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, Movie>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, input: &MovieInput) -> Result<Movie, AppError> {
        let q = sql::insert();
        tracing::debug!(sql = %q, params = ?input, "query");
        let row = sqlx::query_as::<_, Movie>(&q)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(input.rating)
            .bind(&input.image_url)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, input: &MovieInput) -> Result<u64, AppError> {
        tracing::debug!(sql = %sql::UPDATE, id, params = ?input, "query");
        let result = sqlx::query(sql::UPDATE)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(input.rating)
            .bind(&input.image_url)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = %sql::DELETE, id, "query");
        let result = sqlx::query(sql::DELETE).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
