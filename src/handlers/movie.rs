//! Movie handlers: list, create, update, delete. Each issues exactly one store call.

use crate::error::AppError;
use crate::model::{Movie, MovieInput};
use crate::response::{message, MessageBody, MOVIE_DELETED, MOVIE_UPDATED};
use crate::state::AppState;
use axum::{
    extract::{FromRequest, Path, State},
    Json,
};
use serde::Deserialize;
use std::num::IntErrorKind;

/// JSON body whose rejections surface as the uniform 500 failure.
#[derive(FromRequest, Deserialize)]
#[from_request(via(axum::Json), rejection(AppError))]
#[serde(transparent)]
pub struct MovieBody(pub MovieInput);

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::IdOutOfRange(id_str.to_string()),
            _ => AppError::InvalidId(id_str.to_string()),
        })
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let rows = state.store.list().await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    MovieBody(input): MovieBody,
) -> Result<Json<Movie>, AppError> {
    let movie = state.store.create(&input).await?;
    tracing::info!(id = movie.id, "movie created");
    Ok(Json(movie))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    MovieBody(input): MovieBody,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id_str)?;
    let affected = state.store.update(id, &input).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no movie");
    }
    Ok(message(MOVIE_UPDATED))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id_str)?;
    let affected = state.store.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no movie");
    }
    Ok(message(MOVIE_DELETED))
}
