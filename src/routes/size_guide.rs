use axum::response::IntoResponse;

use crate::template::{Page, Template};

/// Ring size chart row: Indian size, inner diameter and circumference in mm.
pub struct RingSize {
    pub size: u8,
    pub diameter_mm: &'static str,
    pub circumference_mm: &'static str,
}

pub const RING_SIZES: [RingSize; 6] = [
    RingSize {
        size: 8,
        diameter_mm: "15.3",
        circumference_mm: "48.0",
    },
    RingSize {
        size: 10,
        diameter_mm: "15.9",
        circumference_mm: "50.0",
    },
    RingSize {
        size: 12,
        diameter_mm: "16.5",
        circumference_mm: "51.9",
    },
    RingSize {
        size: 14,
        diameter_mm: "17.2",
        circumference_mm: "54.0",
    },
    RingSize {
        size: 16,
        diameter_mm: "17.8",
        circumference_mm: "55.9",
    },
    RingSize {
        size: 18,
        diameter_mm: "18.5",
        circumference_mm: "58.1",
    },
];

#[derive(askama::Template)]
#[template(path = "size-guide.html")]
pub struct SizeGuideTemplate {
    pub page: Page,
    pub ring_sizes: &'static [RingSize],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(SizeGuideTemplate {
        page: template.page(),
        ring_sizes: &RING_SIZES,
    })
}
