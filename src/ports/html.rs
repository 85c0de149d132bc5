// src/ports/html.rs
use html_escape::encode_text;
use std::fmt::Write;
use tracing::instrument;

use crate::application::Listing;
use crate::constants::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use crate::domain::{Note, ViewState};

pub const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    username: Option<String>,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show "Signed in as" in the page header
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    fn render_card(&self, note: &Note) -> String {
        let tags: String = note
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">#{}</span>"#, encode_text(tag)))
            .collect();

        format!(
            r#"        <div class="card" data-note-id="{id}">
            <h3>{title}</h3>
            <div class="meta-line"><span class="subject">{subject}</span> <span class="rating">&#9733; {rating}</span></div>
            <p class="description">{description}</p>
            <div class="tags">{tags}</div>
            <div class="note-info">
                <div><span>{author}</span><span>{date}</span></div>
                <div><span>{downloads} downloads</span><span>{size}</span></div>
            </div>
        </div>
"#,
            id = note.id,
            title = encode_text(&note.title),
            subject = encode_text(&note.subject),
            rating = note.rating,
            description = encode_text(&note.description),
            tags = tags,
            author = encode_text(&note.author),
            date = note.upload_date.format(DATE_FORMAT),
            downloads = note.downloads,
            size = encode_text(&note.file_size),
        )
    }

    #[instrument(level = "debug", skip_all, fields(shown = listing.len()))]
    pub fn render(&self, listing: &Listing, state: &ViewState) -> String {
        let body = if listing.is_empty() {
            format!(
                r#"    <div class="empty">
        <h3>{EMPTY_STATE_TITLE}</h3>
        <p>{EMPTY_STATE_HINT}</p>
    </div>
"#
            )
        } else {
            let mut grid = String::from("    <div class=\"grid\">\n");
            for note in &listing.notes {
                grid.push_str(&self.render_card(note));
            }
            grid.push_str("    </div>\n");
            grid
        };

        let mut filters = format!(
            "Subject: {} &middot; Sort: {}",
            encode_text(&state.selected_subject.to_string()),
            state.sort_key
        );
        if !state.search_term.is_empty() {
            let _ = write!(filters, " &middot; Search: &quot;{}&quot;", encode_text(&state.search_term));
        }
        let user = self
            .username
            .as_deref()
            .map(|name| format!(r#"<div class="user">Signed in as {}</div>"#, encode_text(name)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>College Notes Hub - Notes Repository</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f7ff;
        }}
        header {{
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        .count {{
            background: #eef2ff;
            padding: 0.5rem 1rem;
            border-radius: 8px;
            color: #555;
        }}
        .filters {{
            color: #666;
            font-size: 0.9em;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
            gap: 1.5rem;
        }}
        .card {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .subject {{
            background: #dbeafe;
            color: #1e40af;
            padding: 2px 10px;
            border-radius: 999px;
            font-size: 0.8em;
        }}
        .rating {{
            color: #b45309;
            font-size: 0.9em;
        }}
        .tag {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
        .note-info div {{
            display: flex;
            justify-content: space-between;
            font-size: 0.9em;
            color: #666;
        }}
        .empty {{
            text-align: center;
            padding: 3rem 0;
            color: #555;
        }}
    </style>
</head>
<body>
    <header>
        <div>
            <h2>Notes Repository</h2>
            <div class="filters">{filters}</div>
        </div>
        {user}
        <div class="count">{count} notes available</div>
    </header>
{body}</body>
</html>"#,
            filters = filters,
            user = user,
            count = listing.len(),
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_note;

    fn listing(notes: Vec<Note>) -> Listing {
        let total = notes.len();
        Listing { notes, total }
    }

    #[test]
    fn given_markup_in_title_when_rendering_then_escapes_it() {
        let note = Note {
            tags: vec!["<b>".to_string()],
            ..sample_note(1, "Vectors <script>alert(1)</script>")
        };

        let html = HtmlPresenter::new().render(&listing(vec![note]), &ViewState::new());

        assert!(html.contains("Vectors &lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("#&lt;b&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn given_empty_listing_when_rendering_then_shows_empty_state_not_grid() {
        let html = HtmlPresenter::new().render(&listing(vec![]), &ViewState::new());

        assert!(html.contains(EMPTY_STATE_TITLE));
        assert!(html.contains(EMPTY_STATE_HINT));
        assert!(!html.contains("class=\"grid\""));
        assert!(html.contains("0 notes available"));
    }

    #[test]
    fn given_search_term_when_rendering_then_header_echoes_filters() {
        let state = ViewState::new().with_search("java");

        let html = HtmlPresenter::with_username("ada").render(&listing(vec![]), &state);

        assert!(html.contains("Search: &quot;java&quot;"));
        assert!(html.contains("Sort: recent"));
        assert!(html.contains("Signed in as ada"));
    }
}
