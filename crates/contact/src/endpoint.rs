use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::Payload;

pub const FORMSPREE_URL: &str = "https://formspree.io/f/mwvkvoon";

/// Why an outbound submission did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },
}

/// The external service receiving form submissions.
#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn send(&self, payload: &Payload) -> Result<(), SubmitError>;
}

/// Posts submissions to a Formspree form.
///
/// Only the response status is consulted, the body is never read.
#[derive(Clone, Debug)]
pub struct Formspree {
    http: reqwest::Client,
    url: String,
}

impl Formspree {
    /// `timeout` of `None` keeps the transport defaults.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Endpoint for Formspree {
    async fn send(&self, payload: &Payload) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(payload.fields())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
