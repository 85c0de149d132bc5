mod helpers;

use helpers::browse;
use notehub::domain::{SortKey, SubjectFilter, ViewState};
use notehub::ports::{HtmlPresenter, TextPresenter};

#[test]
fn given_seeded_notes_when_rendering_html_then_produces_card_per_note() {
    // Arrange
    let state = ViewState::new();
    let listing = browse(&state);

    // Act
    let html = HtmlPresenter::new().render(&listing, &state);

    // Assert
    assert!(html.contains("<!DOCTYPE html>"));
    assert_eq!(html.matches("class=\"card\"").count(), 6);
    assert!(html.contains("6 notes available"));
    assert!(html.contains("#data-structures"));
    assert!(html.contains("Jan 15, 2024"));
}

#[test]
fn given_popular_sort_when_rendering_html_then_cards_follow_listing_order() {
    let state = ViewState::new().with_sort(SortKey::Popular);
    let listing = browse(&state);

    let html = HtmlPresenter::new().render(&listing, &state);

    let dsa = html.find("Data Structures and Algorithms").unwrap();
    let java = html.find("Object-Oriented Programming in Java").unwrap();
    let wwii = html.find("Modern European History").unwrap();
    assert!(dsa < java && java < wwii);
}

#[test]
fn given_subject_without_notes_when_rendering_then_shows_empty_state() {
    let state = ViewState::new().with_subject(SubjectFilter::Only("Biology".to_string()));
    let listing = browse(&state);

    let html = HtmlPresenter::new().render(&listing, &state);
    let text = TextPresenter::new().render_listing(&listing);

    assert!(html.contains("No notes found"));
    assert!(!html.contains("class=\"card\""));
    assert!(text.contains("No notes found"));
    assert!(text.starts_with("0 notes available"));
}

#[test]
fn given_search_when_rendering_text_then_lists_matching_cards_only() {
    let listing = browse(&ViewState::new().with_search("supply"));

    let text = TextPresenter::new().render_listing(&listing);

    assert!(text.starts_with("1 notes available"));
    assert!(text.contains("[5] Microeconomics - Supply and Demand"));
    assert!(text.contains("Lisa Garcia"));
}
