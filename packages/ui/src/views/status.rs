use dioxus::prelude::*;

/// Message line under a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Error(_) => "auth-message error",
            _ => "auth-message",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Success(text) | FormStatus::Error(text) => text,
        }
    }
}

#[component]
pub fn StatusLine(id: String, status: FormStatus) -> Element {
    let class = status.class();
    let text = status.text();

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "status",
            "{text}"
        }
    }
}
