use axum::response::IntoResponse;

use crate::template::{Page, Template};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: Page,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        page: template.page(),
    })
}
