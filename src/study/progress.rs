//! Per-item study progress
//!
//! Progress is a flat mapping from a composite position key to a small
//! status record, rather than nested arrays mirroring the course tree.
//! Every position in the course gets an entry at construction and the map
//! is never resized, so the ledger stays shape-congruent with its course
//! by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::course::Course;

/// A (chapter, sub-chapter, item) coordinate in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub chapter: usize,
    pub sub_chapter: usize,
    pub item: usize,
}

impl Position {
    /// First item of the first sub-chapter of the first chapter
    pub const ORIGIN: Position = Position { chapter: 0, sub_chapter: 0, item: 0 };

    pub fn new(chapter: usize, sub_chapter: usize, item: usize) -> Self {
        Self { chapter, sub_chapter, item }
    }
}

/// Study status of a single item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    /// True once the item has been answered or reviewed at least once.
    /// Never cleared for the life of the session.
    pub completed: bool,
    /// User-toggled marker, independent of completion
    pub flagged: bool,
}

/// Completion and flag state for every item in one course
#[derive(Debug, Clone, Default)]
pub struct ProgressLedger {
    entries: BTreeMap<Position, ItemStatus>,
    /// Item totals per chapter, fixed at construction
    chapter_totals: Vec<usize>,
}

impl ProgressLedger {
    /// Build a ledger covering every item of `course`, all unmarked
    pub fn for_course<I>(course: &Course<I>) -> Self {
        let mut entries = BTreeMap::new();
        for (chapter_idx, chapter) in course.chapters.iter().enumerate() {
            for (sub_idx, sub) in chapter.sub_chapters.iter().enumerate() {
                for item_idx in 0..sub.items.len() {
                    entries.insert(
                        Position::new(chapter_idx, sub_idx, item_idx),
                        ItemStatus::default(),
                    );
                }
            }
        }
        let chapter_totals = course.chapters.iter().map(|c| c.leaf_count()).collect();
        Self { entries, chapter_totals }
    }

    /// Status of one position (default for positions outside the course)
    pub fn status(&self, pos: Position) -> ItemStatus {
        self.entries.get(&pos).copied().unwrap_or_default()
    }

    /// Mark a position completed. Returns true if the status changed.
    pub fn mark_completed(&mut self, pos: Position) -> bool {
        match self.entries.get_mut(&pos) {
            Some(status) if !status.completed => {
                status.completed = true;
                true
            }
            _ => false,
        }
    }

    /// Flip the flag at a position, returning the new value
    pub fn toggle_flag(&mut self, pos: Position) -> bool {
        match self.entries.get_mut(&pos) {
            Some(status) => {
                status.flagged = !status.flagged;
                status.flagged
            }
            None => false,
        }
    }

    /// Total number of items tracked
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of completed items
    pub fn completed_count(&self) -> usize {
        self.entries.values().filter(|s| s.completed).count()
    }

    /// Course-level completion percentage (0.0 for an empty course)
    pub fn course_percent(&self) -> f64 {
        percent(self.completed_count(), self.total())
    }

    /// Completion percentage for each chapter
    pub fn chapter_percents(&self) -> Vec<f64> {
        let mut completed = vec![0usize; self.chapter_totals.len()];
        for (pos, status) in &self.entries {
            if status.completed {
                completed[pos.chapter] += 1;
            }
        }
        completed
            .iter()
            .zip(&self.chapter_totals)
            .map(|(&done, &total)| percent(done, total))
            .collect()
    }

    /// `(completed, total)` for one sub-chapter, for sidebar counters
    pub fn sub_chapter_counts(&self, chapter: usize, sub_chapter: usize) -> (usize, usize) {
        let mut done = 0;
        let mut total = 0;
        for (pos, status) in &self.entries {
            if pos.chapter == chapter && pos.sub_chapter == sub_chapter {
                total += 1;
                if status.completed {
                    done += 1;
                }
            }
        }
        (done, total)
    }

    /// Whether every item of a sub-chapter is completed
    pub fn sub_chapter_complete(&self, chapter: usize, sub_chapter: usize) -> bool {
        let (done, total) = self.sub_chapter_counts(chapter, sub_chapter);
        total > 0 && done == total
    }
}

fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    done as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::course::{Chapter, Flashcard, SubChapter};

    /// 2 chapters, each a single sub-chapter of 2 cards (4 leaves)
    fn square_course() -> Course<Flashcard> {
        let mut course = Course::new("Square");
        for n in 1..=2 {
            let mut ch = Chapter::new(format!("Chapter {n}"));
            ch.sub_chapters.push(SubChapter::new(
                "Only",
                vec![Flashcard::new("q1", "a1"), Flashcard::new("q2", "a2")],
            ));
            course.chapters.push(ch);
        }
        course
    }

    #[test]
    fn new_ledger_is_unmarked() {
        let ledger = ProgressLedger::for_course(&square_course());
        assert_eq!(ledger.total(), 4);
        assert_eq!(ledger.completed_count(), 0);
        assert_eq!(ledger.course_percent(), 0.0);
        assert_eq!(ledger.chapter_percents(), vec![0.0, 0.0]);
    }

    #[test]
    fn percentages_match_completed_leaves() {
        let mut ledger = ProgressLedger::for_course(&square_course());

        assert!(ledger.mark_completed(Position::new(0, 0, 0)));
        assert_eq!(ledger.course_percent(), 25.0);
        assert_eq!(ledger.chapter_percents(), vec![50.0, 0.0]);

        assert!(ledger.mark_completed(Position::new(0, 0, 1)));
        assert_eq!(ledger.chapter_percents(), vec![100.0, 0.0]);
        assert_eq!(ledger.course_percent(), 50.0);
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut ledger = ProgressLedger::for_course(&square_course());
        assert!(ledger.mark_completed(Position::ORIGIN));
        assert!(!ledger.mark_completed(Position::ORIGIN));
        assert_eq!(ledger.completed_count(), 1);
    }

    #[test]
    fn mark_completed_outside_course_is_a_no_op() {
        let mut ledger = ProgressLedger::for_course(&square_course());
        assert!(!ledger.mark_completed(Position::new(9, 0, 0)));
        assert_eq!(ledger.completed_count(), 0);
    }

    #[test]
    fn toggle_flag_is_involutive() {
        let mut ledger = ProgressLedger::for_course(&square_course());
        let pos = Position::new(1, 0, 1);

        assert!(ledger.toggle_flag(pos));
        assert!(ledger.status(pos).flagged);
        assert!(!ledger.toggle_flag(pos));
        assert!(!ledger.status(pos).flagged);
    }

    #[test]
    fn flags_do_not_affect_percentages() {
        let mut ledger = ProgressLedger::for_course(&square_course());
        ledger.toggle_flag(Position::ORIGIN);
        assert_eq!(ledger.course_percent(), 0.0);
    }

    #[test]
    fn empty_course_percent_is_zero() {
        let course: Course<Flashcard> = Course::new("Empty");
        let ledger = ProgressLedger::for_course(&course);
        assert_eq!(ledger.course_percent(), 0.0);
        assert!(ledger.chapter_percents().is_empty());
    }

    #[test]
    fn sub_chapter_counts_and_completion() {
        let mut ledger = ProgressLedger::for_course(&square_course());
        assert_eq!(ledger.sub_chapter_counts(0, 0), (0, 2));
        assert!(!ledger.sub_chapter_complete(0, 0));

        ledger.mark_completed(Position::new(0, 0, 0));
        ledger.mark_completed(Position::new(0, 0, 1));
        assert_eq!(ledger.sub_chapter_counts(0, 0), (2, 2));
        assert!(ledger.sub_chapter_complete(0, 0));
        assert!(!ledger.sub_chapter_complete(1, 0));
    }
}
