//! # Accounts: register, login, logout against local records
//!
//! This is a demo login, not a security boundary. There is no password: a user is
//! identified by email plus mobile number, and anyone who can read the browser's storage
//! can read every record.
//!
//! Stored user fields are HTML-escaped, so submitted values are escaped the same way
//! before they are compared with stored ones. A record's own credentials therefore
//! always match it, even when they contain characters such as `&`.

use crate::models::UserRecord;
use crate::records::Records;
use crate::validate::{escape_html, is_valid_email, is_valid_mobile, require_all, FormError};

/// Raw register form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub mobile: String,
}

impl Records {
    /// Create a user and log them in.
    ///
    /// Checks run in order: all fields present, email shape, mobile digit count,
    /// email not already registered. Fails with [`FormError::UnreadableRecords`]
    /// instead of replacing a stored user list it cannot parse.
    pub fn register(&self, form: &Registration) -> Result<UserRecord, FormError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let mobile = form.mobile.trim();

        require_all(&[name, email, mobile])?;
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if !is_valid_mobile(mobile) {
            return Err(FormError::InvalidMobile);
        }

        let user = UserRecord {
            name: escape_html(name),
            email: escape_html(email),
            mobile: escape_html(mobile),
        };

        let mut users = self.users_for_update()?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(FormError::EmailTaken);
        }
        users.push(user.clone());
        self.set_users(&users);
        self.set_session(&user);

        tracing::info!("Registered {}", user.email);
        Ok(user)
    }

    /// Log in the user whose email and mobile both match exactly.
    pub fn login(&self, creds: &Credentials) -> Result<UserRecord, FormError> {
        let email = escape_html(creds.email.trim());
        let mobile = escape_html(creds.mobile.trim());

        let user = self
            .users()
            .into_iter()
            .find(|u| u.email == email && u.mobile == mobile)
            .ok_or(FormError::InvalidCredentials)?;
        self.set_session(&user);

        tracing::info!("Logged in {}", user.email);
        Ok(user)
    }

    pub fn logout(&self) {
        self.clear_session();
        tracing::info!("Logged out");
    }
}
