// src/util/testing.rs

use anyhow::Result;
use chrono::NaiveDate;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

/// In-memory repository for testing use cases that depend on NoteRepository
///
/// # Examples
///
/// ```
/// use notehub::application::NoteRepository;
/// use notehub::util::testing::{sample_note, MockNoteRepository};
///
/// let repo = MockNoteRepository::builder()
///     .with_note(sample_note(1, "Linear Algebra"))
///     .build();
/// assert_eq!(repo.list_notes().unwrap().len(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    fail_listing: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn get_note(&self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        if self.fail_listing {
            return Err(DomainError::NotLoggedIn);
        }
        Ok(self.notes.clone())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    fail_listing: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_listing: false,
        }
    }

    /// Add a note; insertion order is the listing order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_notes(mut self, notes: impl IntoIterator<Item = Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Make list_notes fail, for checking error propagation
    pub fn with_listing_failure(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            fail_listing: self.fail_listing,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Note with neutral defaults; override fields with struct update syntax.
pub fn sample_note(id: i64, title: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        subject: "Mathematics".to_string(),
        author: "Test Author".to_string(),
        description: "Test description".to_string(),
        upload_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        downloads: 0,
        rating: 0.0,
        file_size: "1.0 MB".to_string(),
        tags: vec![],
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["tokio", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
