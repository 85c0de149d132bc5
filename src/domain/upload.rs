// src/domain/upload.rs
use serde::Serialize;

use crate::constants::{
    ALLOWED_MIME_TYPES, MAX_DESCRIPTION_CHARS, MAX_TAGS, MAX_TAG_CHARS, MAX_TITLE_CHARS,
    MAX_UPLOAD_BYTES,
};
use crate::domain::subject::{canonical_subject, UPLOAD_SUBJECTS};
use crate::domain::ValidationErrors;

/// Form fields of the upload screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub title: String,
    pub subject: String,
    pub description: String,
    tags: Vec<String>,
}

impl UploadFields {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    /// Add a tag; returns false when it was ignored.
    ///
    /// Tags are trimmed, blank or duplicate tags are ignored and at most
    /// `MAX_TAGS` are kept. Overlong tags are ignored as well.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty()
            || tag.chars().count() > MAX_TAG_CHARS
            || self.tags.len() >= MAX_TAGS
            || self.tags.iter().any(|t| t == tag)
        {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Subject in canonical spelling, if it is one of the upload subjects
    pub fn canonical_subject(&self) -> Option<&'static str> {
        canonical_subject(UPLOAD_SUBJECTS, &self.subject)
    }

    /// Collect every field error, in the order the form shows them.
    ///
    /// `file_error` is the verdict on the attached file: `None` when a file
    /// was accepted, `Some(message)` when it is missing or rejected.
    pub fn validate(&self, file_error: Option<&str>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.push("Title is required");
        } else if self.title.chars().count() > MAX_TITLE_CHARS {
            errors.push(format!(
                "Title must be at most {MAX_TITLE_CHARS} characters"
            ));
        }

        if self.subject.trim().is_empty() {
            errors.push("Subject is required");
        } else if self.canonical_subject().is_none() {
            errors.push(format!("Unknown subject: {}", self.subject.trim()));
        }

        if self.description.trim().is_empty() {
            errors.push("Description is required");
        } else if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push(format!(
                "Description must be at most {MAX_DESCRIPTION_CHARS} characters"
            ));
        }

        if let Some(message) = file_error {
            errors.push(message);
        }

        errors
    }
}

/// Metadata of a file picked for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// SHA256 of the file bytes as lowercase hex, empty when unknown
    pub fingerprint: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            fingerprint: String::new(),
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = fingerprint.into();
        self
    }

    /// Size is checked before type, and only the first violation is reported.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.size > MAX_UPLOAD_BYTES {
            return Err("File size must be less than 10MB");
        }
        if !ALLOWED_MIME_TYPES.contains(&self.mime_type.as_str()) {
            return Err("Please upload a PDF, DOC, DOCX, or TXT file");
        }
        Ok(())
    }
}
