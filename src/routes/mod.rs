use std::sync::Arc;

use axum::{Router, body::Bytes, response::IntoResponse, routing::get};
use mulyam_contact::{Endpoint, ViewLocks};

use crate::{assets::AssetsService, config::Config, site::Site, template::Template};

mod about;
mod collections;
mod contact;
mod faq;
mod health;
mod index;
mod seo;
mod size_guide;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub site: Site,
    pub endpoint: Arc<dyn Endpoint>,
    pub views: ViewLocks,
    /// PNG shared by `/opengraph-image` and `/twitter-image`.
    pub preview: Bytes,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/collections", get(collections::index))
        .route("/collections/{name}", get(collections::detail))
        .route("/about", get(about::page))
        .route("/size-guide", get(size_guide::page))
        .route("/faq", get(faq::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/opengraph-image", get(seo::preview_image))
        .route("/twitter-image", get(seo::preview_image))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}
