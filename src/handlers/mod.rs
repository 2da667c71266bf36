//! HTTP handlers for the movie endpoints and service probes.

pub mod common;
pub mod movie;
