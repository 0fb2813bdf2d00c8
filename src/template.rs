use askama::Template as _;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::site::{NAV_LINKS, NavLink, Site};

/// Layout context shared by every page.
pub struct Page {
    pub site: Site,
    pub current_path: String,
    pub nav: &'static [NavLink],
}

impl Page {
    pub fn is_current(&self, href: &str) -> bool {
        match href {
            "/" => self.current_path == "/",
            href => {
                self.current_path == href || self.current_path.starts_with(&format!("{href}/"))
            }
        }
    }
}

/// Renders askama pages with the layout context of the current request.
pub struct Template {
    site: Site,
    current_path: String,
}

impl Template {
    pub fn new(site: Site, current_path: impl Into<String>) -> Self {
        Self {
            site,
            current_path: current_path.into(),
        }
    }

    pub fn page(&self) -> Page {
        Page {
            site: self.site.clone(),
            current_path: self.current_path.to_owned(),
            nav: &NAV_LINKS,
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                self.server_error()
            }
        }
    }

    pub fn server_error(&self) -> Response {
        match (ServerTemplate { page: self.page() }).render() {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }

    pub fn not_found(&self) -> Response {
        self.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate { page: self.page() })
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.site.clone(), parts.uri.path()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub page: Page,
}
