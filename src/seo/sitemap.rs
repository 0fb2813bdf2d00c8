use strum::AsRefStr;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::site::Site;

#[derive(AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

pub struct Entry {
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

pub const ENTRIES: [Entry; 8] = [
    Entry {
        path: "/",
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    },
    Entry {
        path: "/collections",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.9,
    },
    Entry {
        path: "/collections/pets",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.9,
    },
    Entry {
        path: "/collections/women",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    },
    Entry {
        path: "/collections/kids",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    },
    Entry {
        path: "/about",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.6,
    },
    Entry {
        path: "/contact",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    },
    Entry {
        path: "/size-guide",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    },
];

/// One `<url>` element.
pub struct SitemapUrl {
    pub loc: String,
    pub last_modified: String,
    pub change_frequency: &'static str,
    pub priority: String,
}

#[derive(askama::Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub urls: Vec<SitemapUrl>,
}

impl SitemapTemplate {
    pub fn new(site: &Site, generated_at: OffsetDateTime) -> Result<Self, time::error::Format> {
        let last_modified = generated_at.format(&Rfc3339)?;

        let urls = ENTRIES
            .iter()
            .map(|entry| SitemapUrl {
                loc: site.url(entry.path),
                last_modified: last_modified.to_owned(),
                change_frequency: entry.change_frequency.as_ref(),
                priority: format!("{:.1}", entry.priority),
            })
            .collect();

        Ok(Self { urls })
    }
}
