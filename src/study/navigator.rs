//! The course progress navigator
//!
//! One navigator instance drives one study session: it owns the immutable
//! course, the per-item progress ledger, and the cursor, and it exposes the
//! discrete operations the views invoke (answer, advance, jump, flag,
//! shuffle). Each operation is a synchronous state transition; there is no
//! I/O and no background work anywhere in this module.

use crate::course::Course;

use super::error::NavError;
use super::progress::{ItemStatus, Position, ProgressLedger};
use super::shuffle::IndexPicker;

/// What happens when the cursor advances past the last item
///
/// Quiz sessions hold at the end (exam semantics), flashcard decks cycle.
/// The choice is made explicitly at construction rather than baked into
/// either flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndPolicy {
    /// Forward navigation at the last item is a no-op; the course has a
    /// terminal state
    Hold,
    /// Forward navigation at the last item returns to the first item, and
    /// backward navigation from the first wraps to the last
    Wrap,
}

/// Navigation and progress state for one course session
///
/// Invariants, maintained by every operation:
/// - the cursor always indexes an existing item (guaranteed at
///   construction by rejecting courses with empty chapters or
///   sub-chapters),
/// - an item is "answered" exactly when an option is selected,
/// - completion is sticky: once an item is completed it stays completed
///   for the life of the session.
#[derive(Debug)]
pub struct ProgressNavigator<I> {
    course: Course<I>,
    end_policy: EndPolicy,
    ledger: ProgressLedger,
    cursor: Position,
    /// Option chosen for the current item, if any. Cleared on every
    /// navigation; `is_answered` is derived from it.
    selected_option: Option<usize>,
    // Derived percentages, recomputed whenever completion changes
    course_percent: f64,
    chapter_percents: Vec<f64>,
}

impl<I> ProgressNavigator<I> {
    /// Start a session over `course` at its first item
    ///
    /// Fails with [`NavError::EmptyCourse`] if the course has no chapters,
    /// or any chapter or sub-chapter with nothing in it; every other
    /// operation relies on the hierarchy having an item at every level.
    pub fn new(course: Course<I>, end_policy: EndPolicy) -> Result<Self, NavError> {
        let well_formed = !course.chapters.is_empty()
            && course.chapters.iter().all(|c| {
                !c.sub_chapters.is_empty() && c.sub_chapters.iter().all(|s| !s.items.is_empty())
            });
        if !well_formed {
            return Err(NavError::EmptyCourse { title: course.title });
        }

        let ledger = ProgressLedger::for_course(&course);
        let course_percent = ledger.course_percent();
        let chapter_percents = ledger.chapter_percents();

        Ok(Self {
            course,
            end_policy,
            ledger,
            cursor: Position::ORIGIN,
            selected_option: None,
            course_percent,
            chapter_percents,
        })
    }

    /// The course this session runs over
    pub fn course(&self) -> &Course<I> {
        &self.course
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// The item under the cursor
    pub fn current_item(&self) -> &I {
        let Position { chapter, sub_chapter, item } = self.cursor;
        &self.course.chapters[chapter].sub_chapters[sub_chapter].items[item]
    }

    /// Option selected for the current item, if any
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    /// Whether the current item has been answered this visit
    pub fn is_answered(&self) -> bool {
        self.selected_option.is_some()
    }

    /// 1-based ordinal of the current item across the whole course
    pub fn item_number(&self) -> usize {
        let before_chapters: usize = self.course.chapters[..self.cursor.chapter]
            .iter()
            .map(|c| c.leaf_count())
            .sum();
        let before_subs: usize = self.course.chapters[self.cursor.chapter].sub_chapters
            [..self.cursor.sub_chapter]
            .iter()
            .map(|s| s.items.len())
            .sum();
        before_chapters + before_subs + self.cursor.item + 1
    }

    /// Total items in the course
    pub fn total_items(&self) -> usize {
        self.ledger.total()
    }

    /// Record the answer for the current item
    ///
    /// The first answer is sticky: once answered, further selections are
    /// ignored until the navigator moves. Option indices are not validated;
    /// the views render the same option list they select from. Answering
    /// marks the item completed and refreshes the derived percentages.
    pub fn select_option(&mut self, option: usize) {
        if self.is_answered() {
            return;
        }
        self.selected_option = Some(option);
        if self.ledger.mark_completed(self.cursor) {
            self.recompute_progress();
        }
    }

    /// Mark the current item completed without answer semantics
    ///
    /// The flashcard flow calls this when leaving a card forward: seeing a
    /// card counts as reviewing it. Idempotent.
    pub fn mark_reviewed(&mut self) {
        if self.ledger.mark_completed(self.cursor) {
            self.recompute_progress();
        }
    }

    /// Move to the next item; backs both "continue" and "skip"
    ///
    /// Crosses sub-chapter and chapter boundaries in order. At the very end
    /// of the course the end policy decides: `Wrap` returns to the first
    /// item, `Hold` leaves the cursor where it is. Never marks anything
    /// completed. Always clears the transient answer state.
    pub fn advance(&mut self) {
        self.reset_transient();

        let Position { chapter, sub_chapter, item } = self.cursor;
        let subs = &self.course.chapters[chapter].sub_chapters;

        if item + 1 < subs[sub_chapter].items.len() {
            self.cursor.item += 1;
        } else if sub_chapter + 1 < subs.len() {
            self.cursor = Position::new(chapter, sub_chapter + 1, 0);
        } else if chapter + 1 < self.course.chapters.len() {
            self.cursor = Position::new(chapter + 1, 0, 0);
        } else if self.end_policy == EndPolicy::Wrap {
            self.cursor = Position::ORIGIN;
        }
    }

    /// Move to the previous item
    ///
    /// Mirror of [`advance`](Self::advance): under `Wrap` the first item
    /// wraps to the last item of the course, under `Hold` it stays put.
    pub fn previous(&mut self) {
        self.reset_transient();

        let Position { chapter, sub_chapter, item } = self.cursor;

        if item > 0 {
            self.cursor.item -= 1;
        } else if sub_chapter > 0 {
            let prev = &self.course.chapters[chapter].sub_chapters[sub_chapter - 1];
            self.cursor = Position::new(chapter, sub_chapter - 1, prev.items.len() - 1);
        } else if chapter > 0 {
            let prev_chapter = &self.course.chapters[chapter - 1];
            let sub = prev_chapter.sub_chapters.len() - 1;
            let last_item = prev_chapter.sub_chapters[sub].items.len() - 1;
            self.cursor = Position::new(chapter - 1, sub, last_item);
        } else if self.end_policy == EndPolicy::Wrap {
            if let Some(last) = self.course.last_position() {
                self.cursor = last;
            }
        }
    }

    /// Jump directly to a position (sidebar navigation)
    ///
    /// Rejects positions outside the course with
    /// [`NavError::OutOfBounds`]. Completion and flag state are untouched;
    /// only the cursor and the transient answer state change.
    pub fn jump_to(&mut self, pos: Position) -> Result<(), NavError> {
        if !self.course.contains(pos) {
            return Err(NavError::OutOfBounds { position: pos });
        }
        self.cursor = pos;
        self.reset_transient();
        Ok(())
    }

    /// Flip the flag on the current item, returning the new value
    pub fn toggle_flag(&mut self) -> bool {
        self.ledger.toggle_flag(self.cursor)
    }

    /// Jump to a random item: a uniformly chosen chapter, then a uniformly
    /// chosen item within that chapter's flattened item list
    ///
    /// Same reset semantics as [`advance`](Self::advance).
    pub fn shuffle(&mut self, picker: &mut dyn IndexPicker) {
        let chapter_idx = picker.pick(self.course.chapters.len());
        let chapter = &self.course.chapters[chapter_idx];

        let flat: Vec<(usize, usize)> = chapter
            .sub_chapters
            .iter()
            .enumerate()
            .flat_map(|(sub, s)| (0..s.items.len()).map(move |item| (sub, item)))
            .collect();
        let (sub_chapter, item) = flat[picker.pick(flat.len())];

        self.cursor = Position::new(chapter_idx, sub_chapter, item);
        self.reset_transient();
    }

    /// Course-level completion percentage, 0–100
    pub fn course_progress(&self) -> f64 {
        self.course_percent
    }

    /// Completion percentage per chapter, 0–100 each
    pub fn chapter_progress(&self) -> &[f64] {
        &self.chapter_percents
    }

    /// Completion/flag status of any position (sidebar indicators)
    pub fn status_at(&self, pos: Position) -> ItemStatus {
        self.ledger.status(pos)
    }

    /// Whether the current item is flagged
    pub fn is_flagged(&self) -> bool {
        self.ledger.status(self.cursor).flagged
    }

    /// `(completed, total)` for one sub-chapter
    pub fn sub_chapter_counts(&self, chapter: usize, sub_chapter: usize) -> (usize, usize) {
        self.ledger.sub_chapter_counts(chapter, sub_chapter)
    }

    /// Whether every item of a sub-chapter is completed
    pub fn sub_chapter_complete(&self, chapter: usize, sub_chapter: usize) -> bool {
        self.ledger.sub_chapter_complete(chapter, sub_chapter)
    }

    fn reset_transient(&mut self) {
        self.selected_option = None;
    }

    fn recompute_progress(&mut self) {
        self.course_percent = self.ledger.course_percent();
        self.chapter_percents = self.ledger.chapter_percents();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::course::{Chapter, Flashcard, SubChapter};
    use crate::study::shuffle::SequencePicker;

    /// 2 chapters × 2 sub-chapters, item counts 2/1 and 1/2 (6 leaves)
    fn ragged_course() -> Course<Flashcard> {
        let card = |n: usize| Flashcard::new(format!("front {n}"), format!("back {n}"));

        let mut course = Course::new("Ragged");
        let mut ch1 = Chapter::new("One");
        ch1.sub_chapters.push(SubChapter::new("1a", vec![card(0), card(1)]));
        ch1.sub_chapters.push(SubChapter::new("1b", vec![card(2)]));
        course.chapters.push(ch1);

        let mut ch2 = Chapter::new("Two");
        ch2.sub_chapters.push(SubChapter::new("2a", vec![card(3)]));
        ch2.sub_chapters.push(SubChapter::new("2b", vec![card(4), card(5)]));
        course.chapters.push(ch2);

        course
    }

    /// 2 chapters, each one sub-chapter of 2 items (4 leaves)
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

    fn nav(end_policy: EndPolicy) -> ProgressNavigator<Flashcard> {
        ProgressNavigator::new(ragged_course(), end_policy).unwrap()
    }

    #[test]
    fn new_rejects_empty_courses() {
        let empty: Course<Flashcard> = Course::new("Empty");
        let err = ProgressNavigator::new(empty, EndPolicy::Hold).unwrap_err();
        assert!(matches!(err, NavError::EmptyCourse { .. }));

        // A chapter with an empty sub-chapter is just as invalid
        let mut holed = ragged_course();
        holed.chapters[1].sub_chapters.push(SubChapter::new("empty", vec![]));
        assert!(ProgressNavigator::new(holed, EndPolicy::Wrap).is_err());
    }

    #[test]
    fn advance_walks_the_whole_hierarchy_in_order() {
        let mut nav = nav(EndPolicy::Hold);
        let expected = [
            Position::new(0, 0, 0),
            Position::new(0, 0, 1),
            Position::new(0, 1, 0),
            Position::new(1, 0, 0),
            Position::new(1, 1, 0),
            Position::new(1, 1, 1),
        ];
        for (n, pos) in expected.iter().enumerate() {
            assert_eq!(nav.position(), *pos);
            assert_eq!(nav.item_number(), n + 1);
            nav.advance();
        }
    }

    #[test]
    fn hold_policy_is_terminal_at_the_last_item() {
        let mut forward = nav(EndPolicy::Hold);
        for _ in 0..10 {
            forward.advance();
        }
        assert_eq!(forward.position(), Position::new(1, 1, 1));

        // ...and saturates at the first item going backwards
        let mut backward = nav(EndPolicy::Hold);
        backward.previous();
        assert_eq!(backward.position(), Position::ORIGIN);
    }

    #[test]
    fn wrap_policy_cycles_in_both_directions() {
        let mut nav = nav(EndPolicy::Wrap);
        for _ in 0..6 {
            nav.advance();
        }
        assert_eq!(nav.position(), Position::ORIGIN);

        nav.previous();
        assert_eq!(nav.position(), Position::new(1, 1, 1));
    }

    #[test]
    fn first_answer_is_sticky() {
        let mut nav = nav(EndPolicy::Hold);
        nav.select_option(2);
        assert_eq!(nav.selected_option(), Some(2));
        assert!(nav.is_answered());

        let before = nav.course_progress();
        nav.select_option(0); // ignored
        assert_eq!(nav.selected_option(), Some(2));
        assert_eq!(nav.course_progress(), before);
    }

    #[test]
    fn answering_completes_but_skipping_does_not() {
        let mut nav = nav(EndPolicy::Hold);
        nav.select_option(0);
        assert!(nav.status_at(Position::ORIGIN).completed);

        nav.advance(); // skip the second item
        nav.advance();
        assert!(!nav.status_at(Position::new(0, 0, 1)).completed);
        assert_eq!(nav.course_progress(), 1.0 / 6.0 * 100.0);
    }

    #[test]
    fn completion_survives_navigation_but_answer_state_does_not() {
        let mut nav = nav(EndPolicy::Wrap);
        nav.select_option(1);
        nav.advance();
        assert!(!nav.is_answered());
        assert_eq!(nav.selected_option(), None);

        nav.previous();
        assert_eq!(nav.position(), Position::ORIGIN);
        // Back on a completed item: still completed, but not "answered"
        assert!(nav.status_at(Position::ORIGIN).completed);
        assert!(!nav.is_answered());
    }

    #[test]
    fn jump_to_resets_transient_and_keeps_progress() {
        let mut nav = nav(EndPolicy::Hold);
        nav.select_option(0);

        nav.jump_to(Position::new(1, 1, 1)).unwrap();
        assert_eq!(nav.position(), Position::new(1, 1, 1));
        assert!(!nav.is_answered());
        assert!(nav.status_at(Position::ORIGIN).completed);
    }

    #[test]
    fn jump_to_out_of_bounds_is_rejected_and_harmless() {
        let mut nav = nav(EndPolicy::Hold);
        let bad = Position::new(0, 0, 2);
        assert_eq!(nav.jump_to(bad), Err(NavError::OutOfBounds { position: bad }));
        assert_eq!(nav.position(), Position::ORIGIN);
    }

    #[test]
    fn flag_toggle_is_involutive_and_invisible_to_progress() {
        let mut nav = nav(EndPolicy::Hold);
        assert!(nav.toggle_flag());
        assert!(nav.is_flagged());
        assert_eq!(nav.course_progress(), 0.0);
        assert!(!nav.toggle_flag());
        assert!(!nav.is_flagged());
    }

    #[test]
    fn shuffle_is_deterministic_under_an_injected_picker() {
        let mut nav = nav(EndPolicy::Wrap);
        nav.select_option(0);

        // Chapter 1, then index 2 of its flattened items [(0,0), (1,0), (1,1)]
        let mut picker = SequencePicker::new(vec![1, 2]);
        nav.shuffle(&mut picker);
        assert_eq!(nav.position(), Position::new(1, 1, 1));
        assert!(!nav.is_answered());
    }

    #[test]
    fn concrete_percentage_case_from_four_leaves() {
        let mut nav = ProgressNavigator::new(square_course(), EndPolicy::Hold).unwrap();

        nav.select_option(0);
        assert_eq!(nav.course_progress(), 25.0);
        assert_eq!(nav.chapter_progress(), &[50.0, 0.0]);

        nav.advance();
        nav.select_option(1);
        assert_eq!(nav.chapter_progress(), &[100.0, 0.0]);
        assert_eq!(nav.course_progress(), 50.0);
    }

    #[test]
    fn sub_chapter_counters_feed_the_sidebar() {
        let mut nav = nav(EndPolicy::Hold);
        nav.select_option(0);
        assert_eq!(nav.sub_chapter_counts(0, 0), (1, 2));
        assert!(!nav.sub_chapter_complete(0, 0));

        nav.advance();
        nav.select_option(0);
        assert!(nav.sub_chapter_complete(0, 0));
    }

    proptest! {
        /// Any operation sequence keeps progress non-decreasing, the cursor
        /// on an existing item, and "answered" equal to "option selected"
        #[test]
        fn operation_sequences_preserve_invariants(ops in proptest::collection::vec(0u8..6, 0..200)) {
            let mut nav = ProgressNavigator::new(ragged_course(), EndPolicy::Wrap).unwrap();
            let mut picker = SequencePicker::new(vec![1, 0, 2, 1, 3]);
            let mut last_percent = nav.course_progress();

            for op in ops {
                match op {
                    0 => nav.select_option(0),
                    1 => nav.advance(),
                    2 => nav.previous(),
                    3 => { nav.toggle_flag(); }
                    4 => nav.shuffle(&mut picker),
                    _ => nav.mark_reviewed(),
                }

                prop_assert!(nav.course_progress() >= last_percent);
                last_percent = nav.course_progress();
                prop_assert!(nav.course().contains(nav.position()));
                prop_assert_eq!(nav.is_answered(), nav.selected_option().is_some());
                for percent in nav.chapter_progress() {
                    prop_assert!((0.0..=100.0).contains(percent));
                }
            }
        }

        /// Hold navigators never leave the course bounds however far they run
        #[test]
        fn hold_navigator_saturates(forward in any::<bool>(), steps in 0usize..40) {
            let mut nav = ProgressNavigator::new(ragged_course(), EndPolicy::Hold).unwrap();
            for _ in 0..steps {
                if forward { nav.advance() } else { nav.previous() }
            }
            prop_assert!(nav.course().contains(nav.position()));
        }
    }
}
