use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        // Keep rendered pages readable while developing templates
        const ENABLED: bool = false;
    } else {
        const ENABLED: bool = true;
    }
}

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_css: true,
    ..Default::default()
});

/// Minifies `text/html` responses in release builds.
///
/// XML, plain text, scripts and images pass through untouched.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !ENABLED || !is_html(response.headers()) {
        return response;
    }

    minify(response).await
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("text/html"))
}

async fn minify(response: Response<Body>) -> Response<Body> {
    let (mut parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to read HTML body for minification: {err}");

            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let minified = minify_html::minify(&bytes, &MINIFY_CFG);
    // The length changed, let the body report its own
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}
