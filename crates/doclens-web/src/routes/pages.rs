//! Front-end page routes.
//!
//! Serves the embedded analyzer page and its assets.

use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::assets;

/// GET / - Serve the analyzer page.
pub async fn index() -> impl IntoResponse {
    Html(assets::INDEX_HTML)
}

/// GET /static/style.css
pub async fn style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLE_CSS,
    )
}

/// GET /static/script.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::SCRIPT_JS,
    )
}
