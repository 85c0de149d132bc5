// src/application/auth_gate.rs
use tracing::{debug, info};

use crate::constants::MIN_PASSWORD_CHARS;
use crate::domain::{Credentials, DomainError, Session, SignupFields, ValidationErrors};

/// Mock sign-in: validates the form client-side and accepts any well-formed input.
#[derive(Debug, Default)]
pub struct AuthGate;

impl AuthGate {
    pub fn new() -> Self {
        Self
    }

    pub fn attempt_login(&self, credentials: &Credentials) -> Result<Session, DomainError> {
        let mut errors = ValidationErrors::new();
        if credentials.username.trim().is_empty() {
            errors.push("Username is required");
        }
        if credentials.password.is_empty() {
            errors.push("Password is required");
        }
        errors.into_result()?;

        info!(username = %credentials.username, "Signed in");
        Ok(Session {
            username: credentials.username.clone(),
        })
    }

    pub fn attempt_signup(&self, fields: &SignupFields) -> Result<Session, DomainError> {
        let mut errors = ValidationErrors::new();
        if fields.username.trim().is_empty() {
            errors.push("Username is required");
        }
        if fields.email.trim().is_empty() {
            errors.push("Email is required");
        }
        if fields.password.is_empty() {
            errors.push("Password is required");
        }
        if fields.password != fields.confirm_password {
            errors.push("Passwords do not match");
        }
        if fields.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_CHARS} characters"
            ));
        }
        if !errors.is_empty() {
            debug!(count = errors.messages().len(), "Sign up rejected");
        }
        errors.into_result()?;

        info!(username = %fields.username, email = %fields.email, "Account created");
        Ok(Session {
            username: fields.username.clone(),
        })
    }
}
