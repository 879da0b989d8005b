//! Mentor - a TUI study companion
//!
//! Mentor bundles a course dashboard, multiple-choice quizzes, flashcard
//! review, a notes board and a calendar into one terminal app. All study
//! state lives in memory for the session; the stateful core is the course
//! progress navigator in [`study`].

pub mod app;
pub mod calendar;
pub mod config;
pub mod course;
pub mod notes;
pub mod study;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
