//! # API crate: the site's one outbound HTTP call
//!
//! The site has no backend of its own. The only network traffic is a chat message sent
//! to Google's Gemini `generateContent` endpoint, directly from the browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gemini`] | [`ChatClient`]: configuration check, request, reply extraction, [`ChatError`] |
//! | [`models`] | Serde request/response bodies for `generateContent` |
//!
//! `reqwest` uses the browser `fetch` API on wasm32 and hyper natively, so the same
//! client runs in the browser and in tests.

pub mod gemini;
pub mod models;

pub use gemini::{extract_reply, ChatClient, ChatError, UNCONFIGURED_REPLY};
pub use store::ChatConfig;
