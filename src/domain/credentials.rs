// src/domain/credentials.rs
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Result of a successful (mock) sign in; only the username is carried on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
}
