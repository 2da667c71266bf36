#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::{CONTENT_LENGTH, CONTENT_TYPE}, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use movie_catalog::{app, AppError, AppState, MemoryStore, Movie, MovieInput, MovieStore};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><title>movies</title><div id=\"root\"></div>";

/// Frontend bundle with `index.html` and one asset.
pub fn frontend_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("app.js"), "console.log('movies');").unwrap();
    dir
}

/// Full router over `store`. Keep the returned dir alive for the duration of the test.
pub fn build_test_app(store: impl MovieStore + 'static) -> (Router, TempDir) {
    let dir = frontend_dir();
    let router = app(AppState::new(store), dir.path());
    (router, dir)
}

pub fn memory_app() -> (Router, TempDir) {
    build_test_app(MemoryStore::new())
}

pub fn router_with_frontend(store: impl MovieStore + 'static, dir: &Path) -> Router {
    app(AppState::new(store), dir)
}

/// Store whose every call fails the way an exhausted pool does.
pub struct FailingStore;

#[async_trait]
impl MovieStore for FailingStore {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _input: &MovieInput) -> Result<Movie, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i64, _input: &MovieInput) -> Result<u64, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i64) -> Result<u64, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn dune() -> Value {
    serde_json::json!({
        "title": "Dune",
        "director": "Villeneuve",
        "genre": "Sci-Fi",
        "release_year": 2021,
        "rating": 8.5,
        "image_url": "http://x/dune.jpg"
    })
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            let payload = json.to_string();
            builder
                .header(CONTENT_TYPE, "application/json")
                .header(CONTENT_LENGTH, payload.len())
                .body(Body::from(payload))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Creates `movie` and returns the created record, asserting `200`.
pub async fn create_movie(app: Router, movie: Value) -> Value {
    let response = post_json(app, "/movies", movie).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

pub async fn list_movies(app: Router) -> Vec<Value> {
    let response = get(app, "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);
    match body_json(response).await {
        Value::Array(rows) => rows,
        other => panic!("expected array, got {other}"),
    }
}

/// Asserts every field of `expected` appears unchanged in `actual`.
pub fn assert_fields_match(actual: &Value, expected: &Value) {
    for (key, value) in expected.as_object().unwrap() {
        assert_eq!(&actual[key], value, "field {key}");
    }
}
