// src/domain/subject.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Values offered by the repository subject filter, "All" first.
pub const BROWSE_SUBJECTS: &[&str] = &[
    "All",
    "Mathematics",
    "Computer Science",
    "History",
    "Chemistry",
    "Economics",
    "Physics",
    "Biology",
];

/// Subjects a note can be uploaded under.
pub const UPLOAD_SUBJECTS: &[&str] = &[
    "Mathematics",
    "Computer Science",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Economics",
    "Psychology",
    "Engineering",
    "Literature",
    "Other",
];

/// Look up `name` case-insensitively in `subjects`, returning the canonical spelling.
pub fn canonical_subject(subjects: &[&'static str], name: &str) -> Option<&'static str> {
    let name = name.trim();
    subjects
        .iter()
        .copied()
        .find(|subject| subject.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SubjectFilter {
    #[default]
    All,
    Only(String),
}

impl SubjectFilter {
    pub fn admits(&self, subject: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(selected) => selected == subject,
        }
    }
}

impl FromStr for SubjectFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_subject(BROWSE_SUBJECTS, s) {
            Some("All") => Ok(SubjectFilter::All),
            Some(subject) => Ok(SubjectFilter::Only(subject.to_string())),
            None => Err(DomainError::UnknownSubject(s.to_string())),
        }
    }
}

impl TryFrom<String> for SubjectFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubjectFilter> for String {
    fn from(filter: SubjectFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectFilter::All => f.write_str("All"),
            SubjectFilter::Only(subject) => f.write_str(subject),
        }
    }
}
