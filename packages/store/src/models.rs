//! # Record types persisted in local storage
//!
//! | Type | Storage key | Encoding |
//! |------|-------------|----------|
//! | [`UserRecord`] | [`USERS_KEY`](crate::records::USERS_KEY) (array) and [`SESSION_KEY`](crate::records::SESSION_KEY) (single) | JSON |
//! | [`FeedbackEntry`] | [`FEEDBACK_KEY`](crate::records::FEEDBACK_KEY) (array, oldest first) | JSON |
//! | [`Theme`] | [`THEME_KEY`](crate::records::THEME_KEY) | raw `"light"` / `"dark"` |
//!
//! String fields of users and feedback entries hold HTML-escaped text. Escaping is
//! applied once, when the record is created from form input, so views can insert
//! the stored value as markup without re-escaping it.

use serde::{Deserialize, Serialize};

/// A registered user. The session holds a copy of one of these.
///
/// Missing fields read as empty strings, so a partial record still loads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// A single feedback submission. Missing fields read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackEntry {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Locale-formatted submission time, e.g. "3/14/2025, 9:26:53 AM".
    #[serde(rename = "date")]
    pub submitted_at: String,
}

/// Page colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `"dark"` is light.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_feedback_entry_uses_date_key() {
        let entry = FeedbackEntry {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Nice".to_string(),
            submitted_at: "1/2/2025, 3:04:05 PM".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "1/2/2025, 3:04:05 PM");
        assert!(json.get("submitted_at").is_none());
    }

    #[test]
    fn test_partial_records_load_with_empty_fields() {
        let user: UserRecord =
            serde_json::from_str(r#"{"name":"B","email":"b@x.io"}"#).unwrap();
        assert_eq!(user.email, "b@x.io");
        assert_eq!(user.mobile, "");

        let entry: FeedbackEntry =
            serde_json::from_str(r#"{"name":"N","email":"n@x.io","message":"old"}"#).unwrap();
        assert_eq!(entry.message, "old");
        assert_eq!(entry.submitted_at, "");
    }
}
