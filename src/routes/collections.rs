use std::str::FromStr;

use axum::{extract::Path, response::IntoResponse};
use strum::VariantArray;

use crate::site::Collection;
use crate::template::{Page, Template};

#[derive(askama::Template)]
#[template(path = "collections.html")]
pub struct CollectionsTemplate {
    pub page: Page,
    pub collections: &'static [Collection],
}

pub async fn index(template: Template) -> impl IntoResponse {
    template.render(CollectionsTemplate {
        page: template.page(),
        collections: Collection::VARIANTS,
    })
}

#[derive(askama::Template)]
#[template(path = "collection.html")]
pub struct CollectionTemplate {
    pub page: Page,
    pub collection: Collection,
}

pub async fn detail(template: Template, Path(name): Path<String>) -> impl IntoResponse {
    let Ok(collection) = Collection::from_str(&name) else {
        return template.not_found();
    };

    template.render(CollectionTemplate {
        page: template.page(),
        collection,
    })
}
