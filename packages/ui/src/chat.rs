//! Chat transcript state, kept free of Dioxus so it can be tested directly.
//!
//! A send goes through two steps. [`Transcript::begin_send`] records the user's
//! message and marks a reply pending. [`Transcript::finish`] clears the pending mark
//! and appends the reply, or [`APOLOGY`] if the request failed. While a reply is pending
//! further sends are refused, so at most one request is in flight.

use std::fmt::Display;

pub const GREETING: &str = "👋 Hi! I'm your AI assistant. Ask me anything.";
pub const APOLOGY: &str = "Sorry, I couldn't get a response. Please try again.";

/// Animated background themes for the chat page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatTheme {
    pub id: &'static str,
    pub label: &'static str,
}

/// Selectable background themes. None are configured yet, so the strip renders empty.
pub const CHAT_THEMES: &[ChatTheme] = &[];

pub const DEFAULT_CHAT_THEME: &str = "nature";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn avatar(self) -> &'static str {
        match self {
            Sender::User => "🧑",
            Sender::Bot => "🤖",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Position in the transcript, stable for use as a render key.
    pub id: usize,
    pub sender: Sender,
    /// Raw text. Rendered as a text node, never as markup.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            pending: false,
        };
        transcript.push(Sender::Bot, GREETING.to_string());
        transcript
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is outstanding (the typing indicator is shown).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's message and return the text to send.
    ///
    /// Returns `None` for blank input or while a reply is still pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.push(Sender::User, text.to_string());
        self.pending = true;
        Some(text.to_string())
    }

    /// Finish the pending send with the client's result.
    pub fn finish<E: Display>(&mut self, reply: Result<String, E>) {
        self.pending = false;
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Chat reply failed: {e}");
                APOLOGY.to_string()
            }
        };
        self.push(Sender::Bot, text);
    }

    fn push(&mut self, sender: Sender, text: String) {
        let id = self.messages.len();
        self.messages.push(ChatMessage { id, sender, text });
    }
}
