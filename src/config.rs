use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Public identity of the site, used by pages, sitemap and robots.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    pub brand: String,
    pub whatsapp_number: String,
    pub whatsapp_url: String,
    pub instagram_handle: String,
    pub instagram_url: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Form endpoint receiving submissions
    pub endpoint: String,
    /// Outbound request timeout, 0 keeps the transport defaults
    pub timeout_secs: u64,
}

impl ContactConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MULYAM__CONTACT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("site.base_url", "https://mulyam-jewels.vercel.app")?
            .set_default("site.brand", "Mulyam Jewels")?
            .set_default("site.whatsapp_number", "+91 XXXXX XXXXX")?
            .set_default("site.whatsapp_url", "https://wa.me/91XXXXXXXXXX")?
            .set_default("site.instagram_handle", "@Mulyam_jewels")?
            .set_default("site.instagram_url", "https://instagram.com/Mulyam_jewels")?
            .set_default("site.email", "hello@mulyam.in")?
            .set_default("contact.endpoint", mulyam_contact::FORMSPREE_URL)?
            .set_default("contact.timeout_secs", 30)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file means defaults + environment only
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MULYAM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        check_http_url("site.base_url", &self.site.base_url)?;
        check_http_url("contact.endpoint", &self.contact.endpoint)?;

        if self.logging.format != "pretty" && self.logging.format != "json" {
            return Err(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            ));
        }

        Ok(())
    }
}

fn check_http_url(key: &str, value: &str) -> Result<(), String> {
    let url = url::Url::parse(value).map_err(|e| format!("{key} is not a valid URL: {e}"))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("{key} must use http or https, got {scheme}")),
    }
}
