use axum::response::IntoResponse;

use crate::template::{Page, Template};

pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        question: "How do I place an order?",
        answer: "Message us on WhatsApp or Instagram, or fill in the order form on the contact page. We reply within 2 hours during business hours.",
    },
    Question {
        question: "Do you ship across India?",
        answer: "Yes. Orders are shipped to every serviceable pincode in India, usually within 3 to 5 working days.",
    },
    Question {
        question: "Can I return or exchange a piece?",
        answer: "Unused pieces in their original packaging can be exchanged within 7 days of delivery. Personalised pet tags are not returnable.",
    },
    Question {
        question: "Is pet jewelry safe for my pet?",
        answer: "Our pet pieces are lightweight, nickel free and have no sharp edges. Always supervise your pet while it wears jewelry.",
    },
    Question {
        question: "How do I find the right size?",
        answer: "Use our size guide to measure rings, bracelets and collars before ordering.",
    },
];

#[derive(askama::Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub page: Page,
    pub questions: &'static [Question],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(FaqTemplate {
        page: template.page(),
        questions: &QUESTIONS,
    })
}
