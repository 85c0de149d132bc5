// src/application/notes_browser.rs
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::{DomainError, Note, SortKey, ViewState};
use crate::util::text::collate;

pub trait NoteRepository {
    fn get_note(&self, id: i64) -> Result<Note, DomainError>;

    /// All notes in their stored order
    fn list_notes(&self) -> Result<Vec<Note>, DomainError>;
}

/// Notes matching the search term and subject filter, in input order.
pub fn filter_notes<'a>(notes: &'a [Note], state: &ViewState) -> Vec<&'a Note> {
    let needle = state.search_term.to_lowercase();
    notes
        .iter()
        .filter(|note| note.matches_search(&needle))
        .filter(|note| state.selected_subject.admits(&note.subject))
        .collect()
}

/// Stable sort by `key`; equal elements keep their relative order.
pub fn sort_notes(notes: &mut [&Note], key: SortKey) {
    match key {
        SortKey::Recent => notes.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        SortKey::Popular => notes.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        SortKey::Rating => notes.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Title => notes.sort_by(|a, b| collate(&a.title, &b.title)),
    }
}

/// Filter then sort, leaving `notes` untouched.
pub fn derive_view(notes: &[Note], state: &ViewState) -> Vec<Note> {
    let mut view = filter_notes(notes, state);
    sort_notes(&mut view, state.sort_key);
    view.into_iter().cloned().collect()
}

/// Derived view handed to presenters
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub notes: Vec<Note>,
    pub total: usize,
}

impl Listing {
    /// True when the empty-state message must be shown instead of cards
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadAck {
    pub note_id: i64,
    pub title: String,
    pub message: String,
}

pub struct NotesBrowser<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NotesBrowser<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Derive the ordered subset of notes to display for `state`
    #[instrument(level = "debug", skip(self))]
    pub fn browse(&self, state: &ViewState) -> Result<Listing, DomainError> {
        let notes = self.repository.list_notes()?;
        let derived = derive_view(&notes, state);
        debug!(total = notes.len(), shown = derived.len(), "Derived note view");

        Ok(Listing {
            notes: derived,
            total: notes.len(),
        })
    }

    /// Acknowledge a download request; no file is fetched and counters stay as they are.
    pub fn download(&self, note_id: i64) -> Result<DownloadAck, DomainError> {
        let note = self.repository.get_note(note_id)?;
        info!(note_id, title = %note.title, "Downloading note: {}", note.title);

        Ok(DownloadAck {
            note_id,
            message: format!("Downloading: {}", note.title),
            title: note.title,
        })
    }
}
