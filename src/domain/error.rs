// src/domain/error.rs
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),
    #[error("Unknown sort key: {0} (expected recent, popular, rating or title)")]
    UnknownSortKey(String),
    #[error("Please sign in first")]
    NotLoggedIn,
    #[error("{0}")]
    Validation(ValidationErrors),
}

/// Ordered list of user-facing messages produced by form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Ok when nothing was collected, otherwise the whole list as one error
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the following errors:")?;
        for message in &self.0 {
            write!(f, "\n  {message}")?;
        }
        Ok(())
    }
}
