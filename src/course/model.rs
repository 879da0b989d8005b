//! Content model for courses
//!
//! A course is a three-level hierarchy: chapters contain sub-chapters, which
//! contain the actual study items. The item payload is generic so the same
//! hierarchy carries multiple-choice questions and flashcards alike. Content
//! is immutable once loaded; all mutable study state lives in
//! [`crate::study`].

use serde::{Deserialize, Serialize};

use crate::study::Position;

/// A complete course: ordered chapters of study items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course<I> {
    /// Display title
    pub title: String,
    /// Chapters in order
    pub chapters: Vec<Chapter<I>>,
}

impl<I> Course<I> {
    /// Create an empty course with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), chapters: Vec::new() }
    }

    /// Total number of items across all chapters
    pub fn leaf_count(&self) -> usize {
        self.chapters.iter().map(Chapter::leaf_count).sum()
    }

    /// Get the item at a position, if it exists
    pub fn get(&self, pos: Position) -> Option<&I> {
        self.chapters
            .get(pos.chapter)
            .and_then(|c| c.sub_chapters.get(pos.sub_chapter))
            .and_then(|s| s.items.get(pos.item))
    }

    /// Check that a position indexes an existing item
    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Position of the very last item, if the course has any
    pub fn last_position(&self) -> Option<Position> {
        let (chapter_idx, chapter) =
            self.chapters.iter().enumerate().rev().find(|(_, c)| c.leaf_count() > 0)?;
        let (sub_idx, sub) =
            chapter.sub_chapters.iter().enumerate().rev().find(|(_, s)| !s.items.is_empty())?;
        Some(Position::new(chapter_idx, sub_idx, sub.items.len() - 1))
    }
}

/// A chapter within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter<I> {
    /// Chapter title
    pub title: String,
    /// Sub-chapters in order
    pub sub_chapters: Vec<SubChapter<I>>,
}

impl<I> Chapter<I> {
    /// Create an empty chapter
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), sub_chapters: Vec::new() }
    }

    /// Number of items under this chapter
    pub fn leaf_count(&self) -> usize {
        self.sub_chapters.iter().map(|s| s.items.len()).sum()
    }
}

/// A sub-chapter holding the actual study items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubChapter<I> {
    /// Sub-chapter title
    pub title: String,
    /// Study items in order
    pub items: Vec<I>,
}

impl<I> SubChapter<I> {
    /// Create a sub-chapter from its items
    pub fn new(title: impl Into<String>, items: Vec<I>) -> Self {
        Self { title: title.into(), items }
    }
}

/// A multiple-choice question
///
/// Options may repeat; the correct option is identified by value, so a
/// duplicate of the correct text also counts as correct when selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text
    pub prompt: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// The correct option, by value (must appear in `options`)
    pub correct_option: String,
    /// Shown after the question is answered
    pub explanation: String,
}

impl Question {
    /// Create a question from its parts
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<&str>,
        correct_option: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(String::from).collect(),
            correct_option: correct_option.into(),
            explanation: explanation.into(),
        }
    }

    /// Whether the option at `index` matches the correct option
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| *o == self.correct_option)
    }
}

/// A two-sided flashcard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// Prompt side
    pub front: String,
    /// Answer side
    pub back: String,
}

impl Flashcard {
    /// Create a flashcard
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self { front: front.into(), back: back.into() }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_chapter_course() -> Course<Flashcard> {
        let mut course = Course::new("Test Course");

        let mut ch1 = Chapter::new("Chapter 1");
        ch1.sub_chapters.push(SubChapter::new(
            "Basics",
            vec![Flashcard::new("a", "1"), Flashcard::new("b", "2")],
        ));
        course.chapters.push(ch1);

        let mut ch2 = Chapter::new("Chapter 2");
        ch2.sub_chapters.push(SubChapter::new("More", vec![Flashcard::new("c", "3")]));
        course.chapters.push(ch2);

        course
    }

    #[test]
    fn leaf_count_sums_all_sub_chapters() {
        let course = two_chapter_course();
        assert_eq!(course.leaf_count(), 3);
        assert_eq!(course.chapters[0].leaf_count(), 2);
    }

    #[test]
    fn get_returns_item_at_position() {
        let course = two_chapter_course();
        let card = course.get(Position::new(1, 0, 0)).unwrap();
        assert_eq!(card.front, "c");
        assert!(course.get(Position::new(1, 0, 1)).is_none());
    }

    #[test]
    fn last_position_points_at_final_item() {
        let course = two_chapter_course();
        assert_eq!(course.last_position(), Some(Position::new(1, 0, 0)));

        let empty: Course<Flashcard> = Course::new("Empty");
        assert_eq!(empty.last_position(), None);
    }

    #[test]
    fn duplicate_correct_option_counts_as_correct() {
        let q = Question::new("Pick green", vec!["green", "red", "green"], "green", "Both work.");
        assert!(q.is_correct(0));
        assert!(!q.is_correct(1));
        assert!(q.is_correct(2));
        assert!(!q.is_correct(7));
    }
}
