//! Feedback submission: validate, escape, timestamp, append.

use crate::models::FeedbackEntry;
use crate::records::Records;
use crate::validate::{escape_html, is_valid_email, require_all, FormError};

/// Raw feedback form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Records {
    /// Append a feedback entry stamped with `submitted_at`.
    ///
    /// Fails with [`FormError::UnreadableRecords`] instead of replacing a stored list
    /// it cannot parse.
    pub fn submit_feedback(
        &self,
        form: &FeedbackForm,
        submitted_at: String,
    ) -> Result<FeedbackEntry, FormError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        require_all(&[name, email, message])?;
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        let entry = FeedbackEntry {
            name: escape_html(name),
            email: escape_html(email),
            message: escape_html(message),
            submitted_at,
        };
        let mut entries = self.feedback_for_update()?;
        entries.push(entry.clone());
        self.set_feedback(&entries);

        tracing::info!("Stored feedback #{} from {}", entries.len(), entry.email);
        Ok(entry)
    }
}
