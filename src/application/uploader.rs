// src/application/uploader.rs
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::{DomainError, FileCandidate, Session, UploadFields};
use crate::util::text::format_file_size;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub title: String,
    pub subject: String,
    pub tags: Vec<String>,
    pub file_name: String,
    pub file_size: String,
    pub fingerprint: String,
    pub uploaded_by: String,
}

/// Simulated upload: validates, waits a fixed delay, stores nothing.
#[derive(Debug, Clone)]
pub struct Uploader {
    delay: Duration,
}

impl Uploader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[instrument(level = "debug", skip_all, fields(title = %fields.title))]
    pub async fn submit_upload(
        &self,
        session: &Session,
        fields: &UploadFields,
        file: Option<&FileCandidate>,
    ) -> Result<UploadReceipt, DomainError> {
        let file_verdict = match file {
            None => Some("Please select a file to upload"),
            Some(candidate) => candidate.check().err(),
        };
        let errors = fields.validate(file_verdict);
        let (Some(file), Some(subject), true) =
            (file, fields.canonical_subject(), errors.is_empty())
        else {
            return Err(DomainError::Validation(errors));
        };

        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating upload latency");
        tokio::time::sleep(self.delay).await;

        info!(
            title = %fields.title,
            file = %file.name,
            size = file.size,
            user = %session.username,
            "Uploading note"
        );

        Ok(UploadReceipt {
            title: fields.title.trim().to_string(),
            subject: subject.to_string(),
            tags: fields.tags().to_vec(),
            file_name: file.name.clone(),
            file_size: format_file_size(file.size),
            fingerprint: file.fingerprint.clone(),
            uploaded_by: session.username.clone(),
        })
    }
}
