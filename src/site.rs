use strum::{AsRefStr, EnumString, VariantArray};

use crate::config::SiteConfig;

/// A way to reach the brand outside of the contact form.
#[derive(Debug, Clone)]
pub struct ContactMethod {
    pub name: &'static str,
    pub description: &'static str,
    pub value: String,
    pub href: String,
    pub icon: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/collections", label: "Collections" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/size-guide", label: "Size Guide" },
    NavLink { href: "/faq", label: "FAQ" },
    NavLink { href: "/contact", label: "Contact" },
];

/// Everything templates need to know about the site, derived from config.
#[derive(Debug, Clone)]
pub struct Site {
    pub brand: String,
    pub base_url: String,
    pub whatsapp_url: String,
    pub instagram_url: String,
    pub email: String,
    pub contact_methods: Vec<ContactMethod>,
}

impl Site {
    pub fn new(config: &SiteConfig) -> Self {
        let contact_methods = vec![
            ContactMethod {
                name: "WhatsApp",
                description: "Fastest way to order",
                value: config.whatsapp_number.to_owned(),
                href: config.whatsapp_url.to_owned(),
                icon: "💬",
                cta: "Chat Now",
            },
            ContactMethod {
                name: "Instagram",
                description: "DM us to order",
                value: config.instagram_handle.to_owned(),
                href: config.instagram_url.to_owned(),
                icon: "📸",
                cta: "Send DM",
            },
            ContactMethod {
                name: "Email",
                description: "For business inquiries",
                value: config.email.to_owned(),
                href: format!("mailto:{}", config.email),
                icon: "✉️",
                cta: "Send Email",
            },
        ];

        Self {
            brand: config.brand.to_owned(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            whatsapp_url: config.whatsapp_url.to_owned(),
            instagram_url: config.instagram_url.to_owned(),
            email: config.email.to_owned(),
            contact_methods,
        }
    }

    pub fn url(&self, path: &str) -> String {
        match path {
            "" | "/" => self.base_url.to_owned(),
            path => format!("{}{}", self.base_url, path),
        }
    }
}

#[derive(EnumString, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Pets,
    Women,
    Kids,
}

impl Collection {
    pub fn title(&self) -> &'static str {
        match self {
            Collection::Pets => "Pet Jewelry",
            Collection::Women => "Women's Jewelry",
            Collection::Kids => "Kids' Jewelry",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Collection::Pets => {
                "Charms, collar tags and matching sets so your pet can shine alongside you."
            }
            Collection::Women => {
                "Everyday earrings, necklaces and bracelets with a touch of sparkle."
            }
            Collection::Kids => "Light, skin-friendly pieces sized for little ones.",
        }
    }

    pub fn href(&self) -> String {
        format!("/collections/{}", self.as_ref())
    }
}
