//! Form input checks and HTML escaping shared by the feedback and auth flows.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const MOBILE_MIN_DIGITS: usize = 7;
const MOBILE_MAX_DIGITS: usize = 15;

/// Rejection reasons for a submitted form. `Display` is the inline message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Invalid mobile number.")]
    InvalidMobile,
    #[error("Email already registered.")]
    EmailTaken,
    #[error("Invalid credentials.")]
    InvalidCredentials,
    /// Stored records exist but cannot be parsed; writing would discard them.
    #[error("Saved data could not be read. Please try again later.")]
    UnreadableRecords,
}

/// Escape `& < > " '` so the text can be inserted as markup and display literally.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A mobile number is valid when it holds 7 to 15 digits once everything else is stripped.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let digits = mobile.chars().filter(char::is_ascii_digit).count();
    (MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS).contains(&digits)
}

/// Fails with [`FormError::MissingFields`] if any value is empty.
pub(crate) fn require_all(fields: &[&str]) -> Result<(), FormError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(FormError::MissingFields);
    }
    Ok(())
}
