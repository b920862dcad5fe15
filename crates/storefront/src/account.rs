//! Account form validation.
//!
//! The login and signup pages collect free-form input; this module turns it
//! into validated values or typed errors the pages surface as dismissible
//! notices. There is no credential backend - authentication is satisfied by
//! a well-formed form, and the resulting [`User`] is handed to the state
//! container via its `login` operation.

use kathsnap_core::{Email, EmailError, Phone, PhoneError, User, UserId};

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors from account form validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountError {
    /// The display name is blank.
    #[error("name cannot be empty")]
    EmptyName,

    /// The email does not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The phone number does not parse.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// The password is blank.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// The password fails the strength rule.
    #[error("password validation failed: {0}")]
    WeakPassword(String),
}

/// Raw signup form input.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Chosen password.
    pub password: String,
}

impl SignupForm {
    /// Validate the form and mint a logged-in [`User`] with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns the first [`AccountError`] encountered, in field order.
    pub fn register(&self) -> Result<User, AccountError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccountError::EmptyName);
        }
        let email = Email::parse(self.email.trim())?;
        let phone = Phone::parse(&self.phone)?;
        validate_password(&self.password)?;

        Ok(User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            phone,
            avatar: None,
            is_logged_in: true,
        })
    }
}

/// Raw login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Phone number the account was registered with.
    pub phone: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Validate the form, yielding the canonical phone to look up.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] for an unparseable phone or a blank
    /// password.
    pub fn validate(&self) -> Result<Phone, AccountError> {
        let phone = Phone::parse(&self.phone)?;
        if self.password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }
        Ok(phone)
    }
}

fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.is_empty() {
        return Err(AccountError::EmptyPassword);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
