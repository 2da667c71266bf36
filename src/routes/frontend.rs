//! Static frontend bundle with SPA fallback.

use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Serves files under `dir`; any path without a matching file gets `dir/index.html`.
pub fn frontend_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
