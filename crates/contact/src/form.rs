use validator::{Validate, ValidationErrors};

use crate::Category;

const FIELDS: [&str; 7] = [
    "name", "email", "phone", "city", "pincode", "category", "message",
];

/// Values of the visible contact form fields.
///
/// The constraints mirror the native `required`/`type=email` attributes of
/// the rendered form and nothing more.
#[derive(Validate, Default, Clone, Debug, PartialEq)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Please enter your email address"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter your WhatsApp number"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please enter your city"))]
    pub city: String,
    #[validate(length(min = 1, message = "Please enter your pincode"))]
    pub pincode: String,
    #[validate(required(message = "Please select a category"))]
    pub category: Option<Category>,
    pub message: String,
}

impl ContactForm {
    pub fn payload(&self) -> Payload {
        let category = self
            .category
            .map(|c| c.as_ref().to_owned())
            .unwrap_or_default();

        let values = [
            self.name.to_owned(),
            self.email.to_owned(),
            self.phone.to_owned(),
            self.city.to_owned(),
            self.pincode.to_owned(),
            category,
            self.message.to_owned(),
        ];

        Payload(FIELDS.into_iter().zip(values).collect())
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactForm::default()
    }
}

/// Field name to field value pairs sent to the endpoint, in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload(Vec<(&'static str, String)>);

impl Payload {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// First constraint message of each invalid field, in form order.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let fields = errors.field_errors();

    FIELDS
        .iter()
        .filter_map(|field| fields.get(*field))
        .filter_map(|errors| errors.first())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect()
}
