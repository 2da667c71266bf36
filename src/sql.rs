//! The statements issued against the `movies` table. Values are always bound as parameters.
//!
//! Reads cast `id`, `release_year` and `rating` so rows decode into [`crate::model::Movie`]
//! whatever integer or numeric column types the table was created with.

pub const MOVIE_COLUMNS: &str = "id::int8 AS id, title, director, genre, release_year::int4 AS release_year, \
     rating::float8 AS rating, image_url";

pub fn select_all() -> String {
    format!("SELECT {} FROM movies", MOVIE_COLUMNS)
}

pub fn insert() -> String {
    format!(
        "INSERT INTO movies (title, director, genre, release_year, rating, image_url) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
        MOVIE_COLUMNS
    )
}

pub const UPDATE: &str = "UPDATE movies SET title = $1, director = $2, genre = $3, release_year = $4, \
     rating = $5, image_url = $6 WHERE id = $7";

pub const DELETE: &str = "DELETE FROM movies WHERE id = $1";
