//! Note data model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note on the notes board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier
    pub id: Uuid,
    /// Note title
    pub title: String,
    /// Note body
    pub body: String,
    /// When the note was created
    pub created_at: DateTime<Local>,
    /// When the note was last changed
    pub updated_at: DateTime<Local>,
    /// True once the note has been edited after creation
    pub edited: bool,
}

impl Note {
    /// Create a note stamped with the current time
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
            edited: false,
        }
    }

    /// Replace title and body, marking the note edited
    pub fn update(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.title = title.into();
        self.body = body.into();
        self.updated_at = Local::now();
        self.edited = true;
    }

    /// Date label for the note card, e.g. "7 August 2026"
    pub fn date_label(&self) -> String {
        self.updated_at.format("%-d %B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_unedited() {
        let note = Note::new("Title", "Body");
        assert!(!note.edited);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn update_marks_edited() {
        let mut note = Note::new("Title", "Body");
        note.update("New", "Other");
        assert!(note.edited);
        assert_eq!(note.title, "New");
        assert!(note.updated_at >= note.created_at);
    }
}
