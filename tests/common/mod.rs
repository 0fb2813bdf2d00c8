#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use mulyam::{
    Config,
    config::{ContactConfig, LoggingConfig, ServerConfig, SiteConfig},
};
use mulyam_contact::{Endpoint, Payload, SubmitError};
use tokio::sync::Notify;

pub const BASE_URL: &str = "https://mulyam-jewels.vercel.app";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            base_url: BASE_URL.to_string(),
            brand: "Mulyam Jewels".to_string(),
            whatsapp_number: "+91 XXXXX XXXXX".to_string(),
            whatsapp_url: "https://wa.me/91XXXXXXXXXX".to_string(),
            instagram_handle: "@Mulyam_jewels".to_string(),
            instagram_url: "https://instagram.com/Mulyam_jewels".to_string(),
            email: "hello@mulyam.in".to_string(),
        },
        contact: ContactConfig {
            endpoint: "http://127.0.0.1:9/f/test".to_string(),
            timeout_secs: 5,
        },
        logging: LoggingConfig::default(),
    }
}

pub enum Reply {
    Ok,
    Status(u16),
    Disconnect,
}

/// Answers every submission with the same reply and records the payloads.
pub struct MockEndpoint {
    reply: Reply,
    calls: AtomicUsize,
    payloads: Mutex<Vec<Payload>>,
}

impl MockEndpoint {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<Payload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Endpoint for MockEndpoint {
    async fn send(&self, payload: &Payload) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        match self.reply {
            Reply::Ok => Ok(()),
            Reply::Status(status) => Err(SubmitError::Rejected { status }),
            Reply::Disconnect => Err(SubmitError::Transport("connection reset".to_owned())),
        }
    }
}

/// Holds every submission until `release` is notified.
#[derive(Default)]
pub struct GatedEndpoint {
    pub entered: Notify,
    pub release: Notify,
    calls: AtomicUsize,
}

impl GatedEndpoint {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Endpoint for GatedEndpoint {
    async fn send(&self, _payload: &Payload) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;

        Ok(())
    }
}

pub fn create_test_app(endpoint: Arc<dyn Endpoint>) -> Router {
    mulyam::create_app(test_config(), endpoint).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn asha(view: &str) -> Vec<(&str, &str)> {
    vec![
        ("view", view),
        ("name", "Asha"),
        ("email", "asha@example.com"),
        ("phone", "+911234567890"),
        ("city", "Pune"),
        ("pincode", "411001"),
        ("category", "pets"),
        ("message", ""),
    ]
}
