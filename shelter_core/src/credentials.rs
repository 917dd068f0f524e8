use serde::Serialize;
use std::fmt::{self, Debug};

/// The current values of the login form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Starts out empty.
    pub email: String,

    /// The password field has no default, so this stays `None` until the
    /// user types into it. Clearing it afterwards leaves `Some("")`.
    pub password: Option<String>,
}

impl FormValues {
    /// Construct values for a form that has both fields filled in.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }
}

/// An email/password pair that passed validation and can be submitted.
///
/// These are built fresh from `FormValues` on every submit attempt and are
/// dropped once the request completes.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Email to log in with.
    pub email: String,

    /// Plaintext password to log in with.
    pub password: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
