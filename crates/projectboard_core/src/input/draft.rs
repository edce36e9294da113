//! Project creation drafts and their validation rules.
//!
//! # Responsibility
//! - Carry raw form values (title, description, people) toward the store.
//! - Validate input shape so the store never has to re-check it.
//!
//! # Invariants
//! - `BoardStore::create` is only called with a draft that passed
//!   `validate()`; the store trusts its callers on this.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest description accepted from the form.
pub const MIN_DESCRIPTION_CHARS: usize = 5;
/// Smallest accepted people count.
pub const MIN_PEOPLE: u32 = 1;
/// Largest accepted people count.
pub const MAX_PEOPLE: u32 = 5;

/// Raw creation request gathered from the form.
///
/// A draft has no identity and no status; both are assigned by the store
/// when the draft is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    /// Checks the draft against the form's input rules.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is empty after trimming.
    /// - `DescriptionTooShort` when the trimmed description has fewer than
    ///   `MIN_DESCRIPTION_CHARS` characters.
    /// - `PeopleOutOfRange` when `people` falls outside
    ///   `MIN_PEOPLE..=MAX_PEOPLE`.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        let description_chars = self.description.trim().chars().count();
        if description_chars < MIN_DESCRIPTION_CHARS {
            return Err(DraftValidationError::DescriptionTooShort {
                chars: description_chars,
            });
        }
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&self.people) {
            return Err(DraftValidationError::PeopleOutOfRange {
                people: self.people,
            });
        }
        Ok(())
    }
}

/// Draft validation errors surfaced back to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyTitle,
    DescriptionTooShort { chars: usize },
    PeopleOutOfRange { people: u32 },
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::DescriptionTooShort { chars } => write!(
                f,
                "description must have at least {MIN_DESCRIPTION_CHARS} characters, got {chars}"
            ),
            Self::PeopleOutOfRange { people } => write!(
                f,
                "people must be between {MIN_PEOPLE} and {MAX_PEOPLE}, got {people}"
            ),
        }
    }
}

impl Error for DraftValidationError {}
