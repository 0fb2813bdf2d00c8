use std::path::Path;

use anyhow::{Context, Result};
use askama::Template as _;
use time::OffsetDateTime;

use crate::{
    seo::{RobotsTemplate, SitemapTemplate, render_preview},
    site::Site,
};

/// Files written by [`export`], relative to the output directory.
pub const EXPORTED_FILES: [&str; 4] = [
    "robots.txt",
    "sitemap.xml",
    "opengraph-image.png",
    "twitter-image.png",
];

/// Writes the SEO artifacts to `out` for hosting them outside the server.
pub async fn export(config: crate::config::Config, out: impl AsRef<Path>) -> Result<()> {
    let out = out.as_ref();
    let site = Site::new(&config.site);

    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("creating {}", out.display()))?;

    let robots = RobotsTemplate::new(&site).render()?;
    let sitemap = SitemapTemplate::new(&site, OffsetDateTime::now_utc())?.render()?;
    let preview = render_preview()?;

    let contents: [&[u8]; 4] = [
        robots.as_bytes(),
        sitemap.as_bytes(),
        &preview,
        &preview,
    ];

    for (name, content) in EXPORTED_FILES.iter().zip(contents) {
        let path = out.join(name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!(path = %path.display(), bytes = content.len(), "Exported");
    }

    Ok(())
}
