//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Every variant is a failed store-bound operation and maps to `500`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid input syntax for type integer: \"{0}\"")]
    InvalidId(String),
    #[error("value \"{0}\" is out of range for type integer")]
    IdOutOfRange(String),
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error("store: {0}")]
    Store(String),
}

impl AppError {
    /// Message exposed to the client. Database errors carry the server's text without the driver prefix.
    pub fn message(&self) -> String {
        match self {
            AppError::Db(sqlx::Error::Database(e)) => e.message().to_string(),
            AppError::Db(e) => e.to_string(),
            AppError::Body(rejection) => rejection.body_text(),
            AppError::InvalidId(_) | AppError::IdOutOfRange(_) | AppError::Store(_) => self.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = ErrorBody {
            error: self.message(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
