use askama::Template as _;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use time::OffsetDateTime;

use crate::{
    routes::AppState,
    seo::{RobotsTemplate, SitemapTemplate, preview},
};

pub async fn robots(State(app): State<AppState>) -> impl IntoResponse {
    match RobotsTemplate::new(&app.site).render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("{err}");

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn sitemap(State(app): State<AppState>) -> impl IntoResponse {
    let rendered = SitemapTemplate::new(&app.site, OffsetDateTime::now_utc())
        .map_err(|e| e.to_string())
        .and_then(|sitemap| sitemap.render().map_err(|e| e.to_string()));

    match rendered {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("{err}");

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Serves both `/opengraph-image` and `/twitter-image`.
pub async fn preview_image(State(app): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, preview::CONTENT_TYPE)], app.preview)
}
