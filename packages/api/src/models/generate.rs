//! # `generateContent` request and response bodies
//!
//! Only the fields the chat uses are modelled. Unknown response fields
//! (`usageMetadata`, `safetyRatings`, ...) are ignored by serde.
//!
//! Request:
//!
//! ```json
//! { "contents": [ { "parts": [ { "text": "Hello" } ] } ] }
//! ```
//!
//! Response:
//!
//! ```json
//! { "candidates": [ { "content": { "parts": [ { "text": "Hi there" } ] } } ] }
//! ```
//!
//! Error bodies (`{"error": {...}}`) deserialize to a [`GenerateResponse`] with no
//! candidates.

use serde::{Deserialize, Serialize};

/// Request body carrying a single user message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    pub fn from_message(message: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(message.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}
