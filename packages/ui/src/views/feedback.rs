use dioxus::prelude::*;
use store::{escape_html, FeedbackEntry, FeedbackForm};

use super::status::{FormStatus, StatusLine};
use crate::platform;
use crate::repo::use_records;
use crate::view::FeedbackListing;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const THANK_YOU: &str = "Thank you for your feedback!";
const NO_FEEDBACK: &str = "No feedback yet. Be the first to share your thoughts!";

/// Feedback form plus the stored entries, newest first.
///
/// `on_submitted` fires after an entry is stored so the parent can rebuild `listing`.
#[component]
pub fn FeedbackView(listing: FeedbackListing, on_submitted: EventHandler<()>) -> Element {
    let records = use_records();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(FormStatus::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = FeedbackForm {
            name: name(),
            email: email(),
            message: message(),
        };
        match records.submit_feedback(&form, platform::local_timestamp()) {
            Ok(_) => {
                status.set(FormStatus::Success(THANK_YOU.to_string()));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                on_submitted.call(());
            }
            Err(e) => status.set(FormStatus::Error(e.to_string())),
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "feedback-section",

            form {
                id: "feedback-form",
                class: "feedback-form",
                autocomplete: "off",
                onsubmit: onsubmit,

                input {
                    id: "feedback-name",
                    r#type: "text",
                    placeholder: "Your Name",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    id: "feedback-email",
                    r#type: "email",
                    placeholder: "Your Email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                textarea {
                    id: "feedback-message",
                    rows: "3",
                    placeholder: "Your Feedback",
                    value: "{message}",
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                button { r#type: "submit", "Submit Feedback" }
                StatusLine { id: "feedback-form-msg", status: status() }
            }

            div {
                id: "feedback-list",
                class: "feedback-list",
                {match listing {
                    FeedbackListing::Empty => rsx! {
                        div { class: "feedback-item", "{NO_FEEDBACK}" }
                    },
                    FeedbackListing::Entries(entries) => {
                        let total = entries.len();
                        rsx! {
                            for (position, entry) in entries.into_iter().enumerate().map(|(i, e)| (total - i, e)) {
                                FeedbackItem { key: "{position}", entry }
                            }
                        }
                    }
                }}
            }
        }
    }
}

/// One stored entry. Name, email and message were escaped when stored, so they are
/// inserted as markup unchanged.
#[component]
pub fn FeedbackItem(entry: FeedbackEntry) -> Element {
    let meta = format!(
        "{} &bull; {} &bull; <span>{}</span>",
        entry.name,
        entry.email,
        escape_html(&entry.submitted_at)
    );

    rsx! {
        div {
            class: "feedback-item",
            div { class: "feedback-meta", dangerous_inner_html: "{meta}" }
            div { class: "feedback-message", dangerous_inner_html: "{entry.message}" }
        }
    }
}
