use crate::credentials::{Credentials, FormValues};
use email_address::{EmailAddress, Options};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// The fields on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Why a single field was rejected. The `Display` impl is the message shown
/// next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The email field doesn't look like an email address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The password field was never filled in.
    #[error("Password is required")]
    MissingPassword,
}

/// Every field that failed validation, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    /// Are all fields valid?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the error for a single field, if it has one.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Iterate over the failed fields and their errors.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Check the form values, producing submittable credentials if they pass.
///
/// ## Errors
///
/// Returns every field that failed, not just the first one.
pub fn validate(values: &FormValues) -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(err) = validate_email(&values.email) {
        errors.insert(Field::Email, err);
    }

    let password = match validate_password(values.password.as_deref()) {
        Ok(password) => Some(password),
        Err(err) => {
            errors.insert(Field::Password, err);
            None
        }
    };

    match password {
        Some(password) if errors.is_empty() => Ok(Credentials {
            email: values.email.clone(),
            password: password.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Check that `email` is a plain `local@domain.tld` address: ASCII only, an
/// unquoted local part, hostname-style domain labels, and a top-level domain
/// of at least two letters.
///
/// ## Errors
///
/// `FieldError::InvalidEmail` if it isn't.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    if !email.is_ascii() {
        return Err(FieldError::InvalidEmail);
    }

    let address =
        EmailAddress::parse_with_options(email, options).map_err(|_| FieldError::InvalidEmail)?;

    if is_plain_local_part(address.local_part()) && is_plain_domain(address.domain()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Letters, digits, and `_'+-.`, not ending in `'` or `.`. This rules out
/// quoted local parts.
fn is_plain_local_part(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "_'+-.".contains(c);

    local.chars().all(allowed)
        && local
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c))
}

/// Labels of letters, digits, and `-` (never leading), ending in an
/// all-letter top-level domain.
fn is_plain_domain(domain: &str) -> bool {
    let Some((hosts, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let label_ok = |label: &str| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) && hosts.split('.').all(label_ok)
}

/// Check that a password was provided. Any present value is fine, including
/// an empty one.
///
/// ## Errors
///
/// `FieldError::MissingPassword` if it's absent.
pub fn validate_password(password: Option<&str>) -> Result<&str, FieldError> {
    password.ok_or(FieldError::MissingPassword)
}
