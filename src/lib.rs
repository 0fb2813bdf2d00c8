pub mod assets;
pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod seo;
pub mod site;
pub mod template;

use std::sync::Arc;

use mulyam_contact::{Endpoint, ViewLocks};

pub use config::Config;
pub use routes::AppState;

/// Builds the application router around the given form endpoint.
///
/// The preview image is rendered here once, so a broken image pipeline fails
/// at startup instead of on the first crawler request.
pub fn create_app(config: Config, endpoint: Arc<dyn Endpoint>) -> anyhow::Result<axum::Router> {
    let site = site::Site::new(&config.site);
    let preview = seo::render_preview()?;

    let state = AppState {
        config,
        site,
        endpoint,
        views: ViewLocks::new(),
        preview: preview.into(),
    };

    Ok(routes::router(state))
}
