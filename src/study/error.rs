//! Error types for the study core

use thiserror::Error;

use super::Position;

/// Contract violations surfaced by the navigator
///
/// The core performs no I/O, so these are the only failures it can report:
/// a caller handed it indices or content that break the cursor-validity
/// invariant. They are returned as errors rather than panicking so the UI
/// layer can ignore a bad jump instead of tearing down the terminal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The course has no items, or a chapter/sub-chapter with none,
    /// so no valid cursor position exists
    #[error("course '{title}' has a chapter or sub-chapter with no items")]
    EmptyCourse {
        /// Course title, for diagnostics
        title: String,
    },

    /// A jump target that does not index an existing item
    #[error(
        "position ({}, {}, {}) is outside the course",
        .position.chapter, .position.sub_chapter, .position.item
    )]
    OutOfBounds {
        /// The rejected target
        position: Position,
    },
}
