// src/ports/terminal.rs
use std::fmt::Write;

use crate::application::{Listing, UploadReceipt};
use crate::constants::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use crate::domain::Note;
use crate::ports::html::DATE_FORMAT;
use crate::util::text::wrap_words;

const WRAP_WIDTH: usize = 72;
// Descriptions are clamped to this many lines on a card
const DESCRIPTION_LINES: usize = 3;

/// Plain-text cards for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_listing(&self, listing: &Listing) -> String {
        let mut out = format!("{} notes available\n", listing.len());

        if listing.is_empty() {
            let _ = write!(out, "\n{EMPTY_STATE_TITLE}\n{EMPTY_STATE_HINT}\n");
            return out;
        }

        for note in &listing.notes {
            out.push('\n');
            out.push_str(&self.render_card(note));
        }
        out
    }

    pub fn render_card(&self, note: &Note) -> String {
        let mut card = String::new();
        let _ = writeln!(card, "[{}] {}", note.id, note.title);
        let _ = writeln!(card, "    {} | * {}", note.subject, note.rating);

        let lines = wrap_words(&note.description, WRAP_WIDTH);
        let clamped = lines.len() > DESCRIPTION_LINES;
        for (i, line) in lines.iter().take(DESCRIPTION_LINES).enumerate() {
            let ellipsis = if clamped && i + 1 == DESCRIPTION_LINES { "..." } else { "" };
            let _ = writeln!(card, "    {line}{ellipsis}");
        }

        if !note.tags.is_empty() {
            let tags: Vec<String> = note.tags.iter().map(|t| format!("#{t}")).collect();
            let _ = writeln!(card, "    {}", tags.join(" "));
        }
        let _ = writeln!(
            card,
            "    {} | {} | {} downloads | {}",
            note.author,
            note.upload_date.format(DATE_FORMAT),
            note.downloads,
            note.file_size
        );
        card
    }

    pub fn render_receipt(&self, receipt: &UploadReceipt) -> String {
        let mut out = String::from("Upload successful!\nYour notes have been shared with the community.\n");
        let _ = writeln!(out, "  Title:   {}", receipt.title);
        let _ = writeln!(out, "  Subject: {}", receipt.subject);
        if !receipt.tags.is_empty() {
            let _ = writeln!(out, "  Tags:    {}", receipt.tags.join(", "));
        }
        let _ = writeln!(out, "  File:    {} ({})", receipt.file_name, receipt.file_size);
        if !receipt.fingerprint.is_empty() {
            let _ = writeln!(out, "  SHA256:  {}", receipt.fingerprint);
        }
        out
    }
}
