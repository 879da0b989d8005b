//! Course content model and the bundled catalog

pub mod catalog;
pub mod model;

pub use catalog::{BuiltinCatalog, CourseProvider, CourseSummary};
pub use model::{Chapter, Course, Flashcard, Question, SubChapter};
