//! Movie record and the request body shared by create and update.

use serde::{Deserialize, Serialize};

/// A row of the `movies` table. Field nullability is decided by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

/// Body of `POST /movies` and `PUT /movies/:id`. Missing keys bind as NULL, unknown keys (including `id`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInput {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

impl Movie {
    pub fn from_input(id: i64, input: &MovieInput) -> Self {
        Movie {
            id,
            title: input.title.clone(),
            director: input.director.clone(),
            genre: input.genre.clone(),
            release_year: input.release_year,
            rating: input.rating,
            image_url: input.image_url.clone(),
        }
    }

    /// Overwrites every field; `id` is kept.
    pub fn overwrite(&mut self, input: &MovieInput) {
        *self = Movie::from_input(self.id, input);
    }
}
