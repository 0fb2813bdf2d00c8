use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{ContactForm, Endpoint, Payload, Status, SubmitError};

/// The only message shown when a submission fails, whatever the cause.
pub const ERROR_MESSAGE: &str =
    "Something went wrong. Please try again or contact us via WhatsApp.";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error("a submission is already in progress")]
    Busy,

    #[error("the message was already sent")]
    Sent,
}

/// Drives the contact form through `idle → submitting → success | error`.
///
/// A controller belongs to one page view. It issues at most one request per
/// submit and never retries on its own.
#[derive(Default, Debug)]
pub struct Controller {
    form: ContactForm,
    status: Status,
    failure: Option<SubmitError>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Whether the submit control accepts input.
    pub fn is_submit_enabled(&self) -> bool {
        !self.status.is_submitting()
    }

    /// Last endpoint failure, for operators. Users only ever see [`ERROR_MESSAGE`].
    pub fn failure(&self) -> Option<&SubmitError> {
        self.failure.as_ref()
    }

    /// Enters `submitting` and returns the payload to send.
    ///
    /// Only valid from `idle` or `error`. Leaves the status untouched when a
    /// submission is already in flight, already sent, or a required field is
    /// missing.
    pub fn begin(&mut self) -> Result<Payload, Error> {
        match self.status {
            Status::Submitting => return Err(Error::Busy),
            Status::Success => return Err(Error::Sent),
            Status::Idle | Status::Error => {}
        }

        self.form.validate()?;

        self.status = Status::Submitting;
        self.failure = None;

        Ok(self.form.payload())
    }

    /// Applies the endpoint outcome. Ignored unless `submitting`.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) -> Status {
        if !self.status.is_submitting() {
            return self.status;
        }

        match outcome {
            Ok(_) => {
                self.status = Status::Success;
                self.form = ContactForm::default();
            }
            Err(err) => {
                self.status = Status::Error;
                self.failure = Some(err);
            }
        }

        self.status
    }

    pub async fn submit<E: Endpoint + ?Sized>(&mut self, endpoint: &E) -> Result<Status, Error> {
        let payload = self.begin()?;
        let outcome = endpoint.send(&payload).await;

        Ok(self.complete(outcome))
    }

    /// "Send another message": `success → idle`. Returns whether it applied.
    pub fn reset(&mut self) -> bool {
        if !self.status.is_success() {
            return false;
        }

        self.status = Status::Idle;

        true
    }

    /// User-facing error text for the current status.
    pub fn error_message(&self) -> Option<&'static str> {
        self.status.is_error().then_some(ERROR_MESSAGE)
    }
}
