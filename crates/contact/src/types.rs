use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Pets,
    Women,
    Kids,
    Matching,
    Multiple,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pets => "Pet Jewelry",
            Category::Women => "Women's Jewelry",
            Category::Kids => "Kids' Jewelry",
            Category::Matching => "Matching Sets (Pet + Owner)",
            Category::Multiple => "Multiple Categories",
        }
    }
}

/// Status of the contact form for one page view.
#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl Status {
    pub fn is_submitting(&self) -> bool {
        *self == Status::Submitting
    }

    pub fn is_success(&self) -> bool {
        *self == Status::Success
    }

    pub fn is_error(&self) -> bool {
        *self == Status::Error
    }
}
