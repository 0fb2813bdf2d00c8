use crate::site::Site;

/// Allows crawling of the whole site and points at the sitemap.
#[derive(askama::Template)]
#[template(path = "robots.txt", escape = "none")]
pub struct RobotsTemplate {
    pub sitemap_url: String,
}

impl RobotsTemplate {
    pub fn new(site: &Site) -> Self {
        Self {
            sitemap_url: site.url("/sitemap.xml"),
        }
    }
}
