// src/infrastructure/seed.rs
use chrono::NaiveDate;
use tracing::instrument;

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

/// Fixed, in-memory note catalogue; never changes at runtime.
#[derive(Debug, Clone)]
pub struct SeededNoteRepository {
    notes: Vec<Note>,
}

impl SeededNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: seeded_notes(),
        }
    }
}

impl Default for SeededNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRepository for SeededNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn get_note(&self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn note(
    id: i64,
    title: &str,
    subject: &str,
    author: &str,
    (year, month, day): (i32, u32, u32),
    downloads: u32,
    rating: f64,
    description: &str,
    file_size: &str,
    tags: &[&str],
) -> Note {
    Note {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        upload_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        downloads,
        rating,
        file_size: file_size.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn seeded_notes() -> Vec<Note> {
    vec![
        note(
            1,
            "Advanced Calculus - Differentiation Techniques",
            "Mathematics",
            "Sarah Johnson",
            (2024, 1, 15),
            324,
            4.8,
            "Comprehensive notes covering all differentiation techniques with solved examples and practice problems.",
            "2.4 MB",
            &["calculus", "differentiation", "examples"],
        ),
        note(
            2,
            "Object-Oriented Programming in Java",
            "Computer Science",
            "Mike Chen",
            (2024, 1, 12),
            567,
            4.9,
            "Complete OOP concepts in Java including inheritance, polymorphism, and encapsulation with code examples.",
            "3.7 MB",
            &["java", "oop", "programming"],
        ),
        note(
            3,
            "Modern European History - World War II",
            "History",
            "Emily Davis",
            (2024, 1, 10),
            245,
            4.6,
            "Detailed analysis of WWII events, causes, and consequences with timeline and key figures.",
            "5.1 MB",
            &["wwii", "europe", "timeline"],
        ),
        note(
            4,
            "Organic Chemistry - Reaction Mechanisms",
            "Chemistry",
            "David Wilson",
            (2024, 1, 8),
            412,
            4.7,
            "Step-by-step breakdown of organic reaction mechanisms with electron flow diagrams.",
            "4.2 MB",
            &["organic", "reactions", "mechanisms"],
        ),
        note(
            5,
            "Microeconomics - Supply and Demand",
            "Economics",
            "Lisa Garcia",
            (2024, 1, 5),
            298,
            4.5,
            "Fundamental concepts of supply and demand with real-world applications and case studies.",
            "1.8 MB",
            &["microeconomics", "supply", "demand"],
        ),
        note(
            6,
            "Data Structures and Algorithms",
            "Computer Science",
            "Alex Thompson",
            (2024, 1, 3),
            689,
            4.9,
            "Complete guide to data structures and algorithms with implementation in Python and complexity analysis.",
            "6.3 MB",
            &["algorithms", "data-structures", "python"],
        ),
    ]
}
