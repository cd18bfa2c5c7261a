//! # Site configuration: `site.toml`
//!
//! Settings the web binary embeds at build time (filename:
//! [`SiteConfig::filename`] = `"site.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [chat]
//! api_key = "YOUR_GEMINI_API_KEY"   # placeholder means "not configured"
//! model = "gemini-1.5-flash"
//! endpoint = "https://generativelanguage.googleapis.com/v1beta/models"
//!
//! [auth]
//! redirect_delay_ms = 800           # pause before showing the logged-in view
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config with TOML (de)serialisation and an API key override. |
//! | [`ChatConfig`] | Generative-text endpoint, model and API key. |
//! | [`AuthConfig`] | Delay between a successful login/register and the re-render. |
//!
//! Every field has a serde default, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Value shipped in `site.toml` until a real key is filled in.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY";

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Generative-text API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key sent as the `key` query parameter. Empty or the placeholder disables chat.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL; the request goes to `{endpoint}/{model}:generateContent`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_api_key() -> String {
    API_KEY_PLACEHOLDER.to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl ChatConfig {
    /// Whether a real API key is present.
    pub fn has_api_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }

    /// Full `generateContent` URL, without the key.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Login/register presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// How long the success message stays up before the logged-in view replaces it.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_redirect_delay() -> u64 {
    800
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to replace the API key when `key` is set and non-empty.
    pub fn with_api_key_override(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.chat.api_key = key.to_string();
        }
        self
    }
}
