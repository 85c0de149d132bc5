// src/domain/note.rs
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub author: String,
    pub description: String,
    pub upload_date: NaiveDate,
    pub downloads: u32,
    pub rating: f64,
    pub file_size: String,
    pub tags: Vec<String>,
}

impl Note {
    /// Case-insensitive substring match on title, subject, author or any tag.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |field: &str| field.to_lowercase().contains(needle);
        hit(&self.title)
            || hit(&self.subject)
            || hit(&self.author)
            || self.tags.iter().any(|tag| hit(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn note() -> Note {
        Note {
            id: 1,
            title: "Organic Chemistry - Reaction Mechanisms".to_string(),
            subject: "Chemistry".to_string(),
            author: "David Wilson".to_string(),
            description: "Electron flow diagrams".to_string(),
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            downloads: 412,
            rating: 4.7,
            file_size: "4.2 MB".to_string(),
            tags: vec!["organic".to_string(), "reactions".to_string()],
        }
    }

    #[rstest]
    #[case("")]
    #[case("reaction")]
    #[case("chemistry")]
    #[case("wilson")]
    #[case("organ")]
    fn given_matching_needle_when_searching_then_matches(#[case] needle: &str) {
        assert!(note().matches_search(needle));
    }

    #[test]
    fn given_text_only_in_description_when_searching_then_does_not_match() {
        assert!(!note().matches_search("electron"));
    }
}
