//! Login/register page.
//!
//! Two surfaces: **Anonymous** shows Login and Register tabs (Login first), and
//! **Authenticated** shows the session's details with a Logout button. After a
//! successful login or registration the success message stays up for
//! `auth.redirect_delay_ms` before `on_change` asks the parent to re-render.
//! Logout re-renders immediately.
//!
//! This is a demo login with no password and no server. See [`store::accounts`].

use std::time::Duration;

use dioxus::prelude::*;
use store::{Credentials, Registration, SiteConfig, UserRecord};

use super::status::{FormStatus, StatusLine};
use crate::platform;
use crate::repo::use_records;
use crate::view::AuthSurface;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const LOGIN_OK: &str = "Login successful!";
const REGISTER_OK: &str = "Registration successful!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[component]
pub fn AuthView(surface: AuthSurface, on_change: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "auth-section",
            {match surface {
                AuthSurface::Authenticated(user) => rsx! {
                    Welcome { user, on_logout: on_change }
                },
                AuthSurface::Anonymous => rsx! {
                    AuthForms { on_success: on_change }
                },
            }}
        }
    }
}

#[component]
fn Welcome(user: UserRecord, on_logout: EventHandler<()>) -> Element {
    let records = use_records();
    // Stored user fields are already escaped
    let details = format!(
        "Welcome, <strong>{}</strong>!<br>Your email: {}<br>Your mobile: {}",
        user.name, user.email, user.mobile
    );

    rsx! {
        div { class: "auth-message", dangerous_inner_html: "{details}" }
        button {
            id: "logout-btn",
            class: "auth-logout-btn",
            onclick: move |_| {
                records.logout();
                on_logout.call(());
            },
            "Logout"
        }
    }
}

#[component]
fn AuthForms(on_success: EventHandler<()>) -> Element {
    let records = use_records();
    let config = use_context::<SiteConfig>();
    let delay = Duration::from_millis(config.auth.redirect_delay_ms);

    let mut tab = use_signal(AuthTab::default);

    let mut login_email = use_signal(String::new);
    let mut login_mobile = use_signal(String::new);
    let mut login_status = use_signal(FormStatus::default);

    let mut register_name = use_signal(String::new);
    let mut register_email = use_signal(String::new);
    let mut register_mobile = use_signal(String::new);
    let mut register_status = use_signal(FormStatus::default);

    let login_records = records.clone();
    let on_login = move |evt: FormEvent| {
        evt.prevent_default();
        let creds = Credentials {
            email: login_email(),
            mobile: login_mobile(),
        };
        match login_records.login(&creds) {
            Ok(_) => {
                login_status.set(FormStatus::Success(LOGIN_OK.to_string()));
                spawn(async move {
                    platform::sleep(delay).await;
                    on_success.call(());
                });
            }
            Err(e) => login_status.set(FormStatus::Error(e.to_string())),
        }
    };

    let on_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = Registration {
            name: register_name(),
            email: register_email(),
            mobile: register_mobile(),
        };
        match records.register(&form) {
            Ok(_) => {
                register_status.set(FormStatus::Success(REGISTER_OK.to_string()));
                spawn(async move {
                    platform::sleep(delay).await;
                    on_success.call(());
                });
            }
            Err(e) => register_status.set(FormStatus::Error(e.to_string())),
        }
    };

    let tab_class = move |which: AuthTab| {
        if tab() == which {
            "auth-tab active"
        } else {
            "auth-tab"
        }
    };
    let form_class = move |which: AuthTab| {
        if tab() == which {
            "auth-form"
        } else {
            "auth-form hidden"
        }
    };

    rsx! {
        div {
            class: "auth-tabs",
            button {
                id: "login-tab",
                class: tab_class(AuthTab::Login),
                onclick: move |_| tab.set(AuthTab::Login),
                "Login"
            }
            button {
                id: "register-tab",
                class: tab_class(AuthTab::Register),
                onclick: move |_| tab.set(AuthTab::Register),
                "Register"
            }
        }

        form {
            id: "login-form",
            class: form_class(AuthTab::Login),
            onsubmit: on_login,

            input {
                id: "login-email",
                r#type: "email",
                placeholder: "Email",
                value: "{login_email}",
                oninput: move |evt: FormEvent| login_email.set(evt.value()),
            }
            input {
                id: "login-mobile",
                r#type: "text",
                placeholder: "Mobile Number",
                value: "{login_mobile}",
                oninput: move |evt: FormEvent| login_mobile.set(evt.value()),
            }
            button { r#type: "submit", "Login" }
            StatusLine { id: "login-msg", status: login_status() }
        }

        form {
            id: "register-form",
            class: form_class(AuthTab::Register),
            onsubmit: on_register,

            input {
                id: "register-name",
                r#type: "text",
                placeholder: "Full Name",
                value: "{register_name}",
                oninput: move |evt: FormEvent| register_name.set(evt.value()),
            }
            input {
                id: "register-email",
                r#type: "email",
                placeholder: "Email",
                value: "{register_email}",
                oninput: move |evt: FormEvent| register_email.set(evt.value()),
            }
            input {
                id: "register-mobile",
                r#type: "text",
                placeholder: "Mobile Number",
                value: "{register_mobile}",
                oninput: move |evt: FormEvent| register_mobile.set(evt.value()),
            }
            button { r#type: "submit", "Register" }
            StatusLine { id: "register-msg", status: register_status() }
        }
    }
}
