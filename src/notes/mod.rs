//! Note-taking functionality
//!
//! A session-scoped notes board: create, edit, delete and search notes.
//! Notes are deliberately not persisted; the board resets with the app.

pub mod model;
pub mod store;

pub use model::Note;
pub use store::NoteStore;
