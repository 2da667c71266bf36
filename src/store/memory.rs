//! In-process store with the same contract as the PostgreSQL one. Used as a substitute in tests.

use crate::error::AppError;
use crate::model::{Movie, MovieInput};
use crate::store::MovieStore;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    rows: Vec<Movie>,
    last_id: i64,
}

/// Ids start at 1 and are never reused, even after delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.lock()?.rows.clone())
    }

    async fn create(&self, input: &MovieInput) -> Result<Movie, AppError> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let movie = Movie::from_input(inner.last_id, input);
        inner.rows.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: i64, input: &MovieInput) -> Result<u64, AppError> {
        let mut inner = self.lock()?;
        let mut affected = 0;
        for movie in inner.rows.iter_mut().filter(|m| m.id == id) {
            movie.overwrite(input);
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut inner = self.lock()?;
        let before = inner.rows.len();
        inner.rows.retain(|m| m.id != id);
        Ok((before - inner.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> MovieInput {
        MovieInput {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create(&titled("Heat")).await.unwrap();
        assert_eq!(store.delete(first.id).await.unwrap(), 1);
        let second = store.create(&titled("Ronin")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn missing_ids_affect_nothing() {
        let store = MemoryStore::new();
        store.create(&titled("Heat")).await.unwrap();
        assert_eq!(store.update(42, &titled("Ronin")).await.unwrap(), 0);
        assert_eq!(store.delete(42).await.unwrap(), 0);
        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("Heat"));
    }
}
