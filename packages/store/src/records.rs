//! # Records: typed access to the site's local key-value storage
//!
//! [`Records`] is the single state container the views read and write. It wraps a
//! [`KeyValueStore`] (browser `localStorage` on the web, [`MemoryStore`](crate::MemoryStore)
//! natively and in tests) and exposes one accessor pair per stored collection.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`THEME_KEY`] | `"light"` or `"dark"` (raw string) |
//! | [`FEEDBACK_KEY`] | JSON array of [`FeedbackEntry`], oldest first |
//! | [`USERS_KEY`] | JSON array of [`UserRecord`] |
//! | [`SESSION_KEY`] | JSON [`UserRecord`], absent when logged out |
//!
//! ## Corrupt data
//!
//! A value that fails to parse is logged and treated as missing when read for display:
//! an unreadable session means logged out, an unreadable collection means empty.
//! Record fields default when absent, so a partial entry still loads.
//!
//! Appends go through [`Records::users_for_update`] and
//! [`Records::feedback_for_update`] instead, which fail with
//! [`FormError::UnreadableRecords`] rather than let a write replace stored data they
//! could not read.
//!
//! The account and feedback operations built on top of these accessors live in
//! [`crate::accounts`] and [`crate::feedback`].

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{FeedbackEntry, Theme, UserRecord};
use crate::validate::FormError;

pub const THEME_KEY: &str = "ai-chatbot-theme";
pub const FEEDBACK_KEY: &str = "ai-chatbot-feedbacks";
pub const USERS_KEY: &str = "ai-chatbot-users";
pub const SESSION_KEY: &str = "ai-chatbot-session";

/// String-keyed, string-valued persistent storage.
///
/// Implementations swallow backend failures: reads yield `None`, writes do nothing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Cloneable handle over the site's persisted records.
#[derive(Clone)]
pub struct Records {
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for Records {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl std::fmt::Debug for Records {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Records").finish_non_exhaustive()
    }
}

impl Records {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Persisted theme, light when unset.
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|v| Theme::from_stored(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.read_list(USERS_KEY)
    }

    /// Users for a read-modify-write. Unlike [`Records::users`], unreadable stored
    /// data is an error.
    pub(crate) fn users_for_update(&self) -> Result<Vec<UserRecord>, FormError> {
        self.read_list_for_update(USERS_KEY)
    }

    pub(crate) fn set_users(&self, users: &[UserRecord]) {
        self.write_json(USERS_KEY, users);
    }

    /// Feedback entries in submission order (oldest first).
    pub fn feedback(&self) -> Vec<FeedbackEntry> {
        self.read_list(FEEDBACK_KEY)
    }

    /// Feedback entries for display, newest first.
    pub fn feedback_newest_first(&self) -> Vec<FeedbackEntry> {
        let mut entries = self.feedback();
        entries.reverse();
        entries
    }

    pub(crate) fn feedback_for_update(&self) -> Result<Vec<FeedbackEntry>, FormError> {
        self.read_list_for_update(FEEDBACK_KEY)
    }

    pub(crate) fn set_feedback(&self, entries: &[FeedbackEntry]) {
        self.write_json(FEEDBACK_KEY, entries);
    }

    /// The logged-in user, if any.
    pub fn session(&self) -> Option<UserRecord> {
        self.read_json(SESSION_KEY)
    }

    pub fn set_session(&self, user: &UserRecord) {
        self.write_json(SESSION_KEY, user);
    }

    pub fn clear_session(&self) {
        self.store.remove(SESSION_KEY);
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring unreadable value under {key}: {e}");
                None
            }
        }
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_json(key).unwrap_or_default()
    }

    fn read_list_for_update<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, FormError> {
        let Some(raw) = self.store.get(key) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("Refusing to overwrite unreadable value under {key}: {e}");
            FormError::UnreadableRecords
        })
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(e) => tracing::warn!("Failed to encode value for {key}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn user(name: &str, email: &str, mobile: &str) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
        }
    }

    #[test]
    fn test_theme_defaults_to_light_and_persists() {
        let store = MemoryStore::new();
        let records = Records::new(store.clone());
        assert_eq!(records.theme(), Theme::Light);

        records.set_theme(Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // A fresh handle over the same storage sees the saved value
        let reloaded = Records::new(store);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_session_roundtrip_and_clear() {
        let records = Records::new(MemoryStore::new());
        assert!(records.session().is_none());

        let ada = user("Ada", "ada@example.com", "5550100");
        records.set_session(&ada);
        assert_eq!(records.session(), Some(ada));

        records.clear_session();
        assert!(records.session().is_none());
    }

    #[test]
    fn test_corrupt_session_reads_as_logged_out() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json");
        let records = Records::new(store);
        assert!(records.session().is_none());
    }

    #[test]
    fn test_corrupt_collections_read_as_empty() {
        let store = MemoryStore::new();
        store.set(USERS_KEY, "oops");
        store.set(FEEDBACK_KEY, "[{\"name\": 1}]");
        let records = Records::new(store);
        assert!(records.users().is_empty());
        assert!(records.feedback().is_empty());
    }

    #[test]
    fn test_update_reads_refuse_unreadable_collections() {
        let store = MemoryStore::new();
        let records = Records::new(store.clone());
        assert_eq!(records.users_for_update(), Ok(Vec::new()));

        store.set(USERS_KEY, "oops");
        store.set(FEEDBACK_KEY, r#"[{"name": 1}]"#);
        assert_eq!(records.users_for_update(), Err(FormError::UnreadableRecords));
        assert_eq!(records.feedback_for_update(), Err(FormError::UnreadableRecords));
    }

    #[test]
    fn test_reads_hand_written_json() {
        let store = MemoryStore::new();
        store.set(
            FEEDBACK_KEY,
            r#"[{"name":"Ann","email":"ann@x.io","message":"Hi","date":"1/1/2025, 10:00:00 AM"}]"#,
        );
        store.set(
            USERS_KEY,
            r#"[{"name":"Ann","email":"ann@x.io","mobile":"5550100"}]"#,
        );
        let records = Records::new(store);
        assert_eq!(records.feedback()[0].submitted_at, "1/1/2025, 10:00:00 AM");
        assert_eq!(records.users(), vec![user("Ann", "ann@x.io", "5550100")]);
    }

    #[test]
    fn test_clones_share_storage() {
        let records = Records::new(MemoryStore::new());
        let other = records.clone();
        other.set_theme(Theme::Dark);
        assert_eq!(records.theme(), Theme::Dark);
        assert_eq!(records, other);
    }
}
