use notehub::application::{Listing, NotesBrowser};
use notehub::domain::ViewState;
use notehub::infrastructure::SeededNoteRepository;

/// Browser over the seeded catalogue
#[allow(dead_code)]
pub fn seeded_browser() -> NotesBrowser<SeededNoteRepository> {
    NotesBrowser::new(SeededNoteRepository::new())
}

/// Browse the seeded catalogue; panics on failure, which cannot happen in-memory
#[allow(dead_code)]
pub fn browse(state: &ViewState) -> Listing {
    seeded_browser()
        .browse(state)
        .expect("Browsing seeded notes should succeed")
}

/// Known note IDs of the seeded catalogue
#[allow(dead_code)]
pub mod seeded_notes {
    pub const CALCULUS: i64 = 1;
    pub const JAVA_OOP: i64 = 2;
    pub const WWII: i64 = 3;
    pub const ORGANIC_CHEMISTRY: i64 = 4;
    pub const MICROECONOMICS: i64 = 5;
    pub const DATA_STRUCTURES: i64 = 6;

    // For testing error cases
    pub const NONEXISTENT: i64 = 999999999;
}
