//! In-memory note storage
//!
//! Notes live only for the session; there is no persistence layer. The
//! store keeps newest-first order so fresh notes land at the top of the
//! board.

use uuid::Uuid;

use super::model::Note;

/// All notes for the session
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with sample notes
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for n in (1..=12).rev() {
            store.add(
                format!("Meeting Notes {n}"),
                "Discussed project timeline and resource allocation for the upcoming sprint.",
            );
        }
        store
    }

    /// All notes, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store has no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Add a note to the top of the board, returning its id
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> Uuid {
        let note = Note::new(title, body);
        let id = note.id;
        self.notes.insert(0, note);
        id
    }

    /// Look up a note by id
    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Update a note's title and body. Returns false for unknown ids.
    pub fn edit(&mut self, id: Uuid, title: &str, body: &str) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.update(title, body);
                true
            }
            None => false,
        }
    }

    /// Delete a note. Returns false for unknown ids.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() < before
    }

    /// Notes whose title or body contains `query`, case-insensitively.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle) || n.body.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_puts_newest_first() {
        let mut store = NoteStore::new();
        store.add("First", "a");
        store.add("Second", "b");
        assert_eq!(store.notes()[0].title, "Second");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn edit_updates_in_place() {
        let mut store = NoteStore::new();
        let id = store.add("Draft", "wip");
        assert!(store.edit(id, "Final", "done"));

        let note = store.get(id).unwrap();
        assert_eq!(note.title, "Final");
        assert!(note.edited);
        assert!(!store.edit(Uuid::new_v4(), "x", "y"));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = NoteStore::new();
        let id = store.add("Gone", "soon");
        store.add("Stays", "here");
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_body() {
        let mut store = NoteStore::new();
        store.add("Rust homework", "read the ownership chapter");
        store.add("Groceries", "milk and RUSTIC bread");
        store.add("Empty", "nothing here");

        assert_eq!(store.search("rust").len(), 2);
        assert_eq!(store.search("ownership").len(), 1);
        assert_eq!(store.search("").len(), 3);
        assert!(store.search("quantum").is_empty());
    }

    #[test]
    fn samples_fill_the_board() {
        let store = NoteStore::with_samples();
        assert_eq!(store.len(), 12);
        assert_eq!(store.notes()[0].title, "Meeting Notes 1");
    }
}
