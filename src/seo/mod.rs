//! Search engine and social preview artifacts.
//!
//! None of these depend on request state: the sitemap only carries the
//! generation time, the preview image is rendered once at startup.

mod glyphs;
pub mod preview;
pub mod robots;
pub mod sitemap;

pub use preview::render_preview;
pub use robots::RobotsTemplate;
pub use sitemap::SitemapTemplate;
