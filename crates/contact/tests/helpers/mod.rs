#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use mulyam_contact::{Category, ContactForm, Endpoint, Payload, SubmitError};

pub fn asha() -> ContactForm {
    ContactForm {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+911234567890".to_owned(),
        city: "Pune".to_owned(),
        pincode: "411001".to_owned(),
        category: Some(Category::Pets),
        message: String::new(),
    }
}

pub enum Reply {
    Ok,
    Status(u16),
    Disconnect,
}

/// Endpoint answering every request with the same reply and recording payloads.
pub struct MockEndpoint {
    reply: Reply,
    calls: AtomicUsize,
    payloads: Mutex<Vec<Payload>>,
}

impl MockEndpoint {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        }
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
