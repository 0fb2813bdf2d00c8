use std::str::FromStr;

use axum::{
    extract::{Form, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use mulyam_contact::{Category, ContactForm, Controller, Error, Status, error_messages};
use serde::Deserialize;
use strum::VariantArray;
use ulid::Ulid;

use crate::{
    routes::AppState,
    template::{Page, Template},
};

/// How long a page refused for a pending submission waits before reloading.
pub const RETRY_AFTER_SECS: u64 = 3;

pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: Page,
    pub view: String,
    pub status: Status,
    pub form: ContactForm,
    pub categories: Vec<CategoryOption>,
    pub error_message: Option<&'static str>,
    pub invalid: Vec<String>,
}

impl ContactTemplate {
    pub fn new(page: Page, view: String, status: Status, form: ContactForm) -> Self {
        let categories = Category::VARIANTS
            .iter()
            .map(|category| CategoryOption {
                value: category.as_ref(),
                label: category.label(),
                selected: form.category == Some(*category),
            })
            .collect();

        Self {
            page,
            view,
            status,
            form,
            categories,
            error_message: None,
            invalid: Vec::new(),
        }
    }

    pub fn from_controller(page: Page, view: String, controller: &Controller) -> Self {
        let mut template = Self::new(page, view, controller.status(), controller.form().clone());
        template.error_message = controller.error_message();

        template
    }

    pub fn retry_after_secs(&self) -> u64 {
        RETRY_AFTER_SECS
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::from_controller(
        template.page(),
        Ulid::new().to_string(),
        &Controller::new(),
    ))
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ActionInput {
    pub view: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    pub category: String,
    pub message: String,
}

impl ActionInput {
    fn into_form(self) -> ContactForm {
        ContactForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            pincode: self.pincode,
            category: Category::from_str(&self.category).ok(),
            message: self.message,
        }
    }
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let view = match input.view.trim() {
        "" => Ulid::new().to_string(),
        view => view.to_owned(),
    };
    let form = input.into_form();

    let Some(_guard) = app.views.acquire(&view) else {
        tracing::debug!(view = %view, "Submission already in flight for this page view");

        let mut response = template.render_with_status(
            StatusCode::CONFLICT,
            ContactTemplate::new(template.page(), view, Status::Submitting, form),
        );
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(RETRY_AFTER_SECS));

        return response;
    };

    let mut controller = Controller::with_form(form);

    match controller.submit(app.endpoint.as_ref()).await {
        Ok(Status::Success) => {
            tracing::info!(view = %view, "Contact form submitted");
        }
        Ok(status) => {
            if let Some(err) = controller.failure() {
                tracing::warn!(view = %view, status = %status, error = %err, "Contact form submission failed");
            }
        }
        Err(Error::Invalid(errors)) => {
            let mut page = ContactTemplate::from_controller(template.page(), view, &controller);
            page.invalid = error_messages(&errors);

            return template.render_with_status(StatusCode::UNPROCESSABLE_ENTITY, page);
        }
        Err(err) => {
            tracing::error!(view = %view, "{err}");
        }
    }

    template.render(ContactTemplate::from_controller(
        template.page(),
        view,
        &controller,
    ))
}
