//! Confirmation bodies returned by update and delete.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const MOVIE_UPDATED: &str = "Movie updated.";
pub const MOVIE_DELETED: &str = "Movie deleted.";

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(text: &str) -> Json<MessageBody> {
    Json(MessageBody {
        message: text.to_string(),
    })
}
