use axum::response::IntoResponse;
use strum::VariantArray;

use crate::site::Collection;
use crate::template::{Page, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Page,
    pub collections: &'static [Collection],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        page: template.page(),
        collections: Collection::VARIANTS,
    })
}
