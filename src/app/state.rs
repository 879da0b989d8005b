//! Application state definitions

use std::collections::HashSet;

use uuid::Uuid;

use crate::calendar::{MonthView, Schedule};
use crate::course::{CourseProvider, CourseSummary, Flashcard, Question};
use crate::notes::NoteStore;
use crate::study::{EndPolicy, NavError, Position, ProgressNavigator, ThreadRngPicker};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    Quiz,
    Flashcards,
    Notes,
    Calendar,
    Help,
}

/// Text input buffer with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Input buffer
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl InputState {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Replace the buffer contents, cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.char_count();
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

/// State for the quiz sidebar course tree
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Whether the sidebar has input focus
    pub focused: bool,
    /// Currently selected row (flat index in tree)
    pub selected_index: usize,
    /// Which chapter indices are expanded
    pub expanded_chapters: HashSet<usize>,
    /// Scroll offset for long courses
    pub scroll_offset: usize,
    /// Visible height in rows (updated on render)
    pub visible_height: usize,
}

impl SidebarState {
    /// Ensure the selected row is visible by adjusting scroll offset
    pub fn ensure_selection_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        let visible = self.visible_height.saturating_sub(2);
        if visible > 0 && self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index.saturating_sub(visible) + 1;
        }
    }

    /// Expand or collapse a chapter
    pub fn toggle_chapter(&mut self, chapter: usize) {
        if !self.expanded_chapters.remove(&chapter) {
            self.expanded_chapters.insert(chapter);
        }
    }
}

/// One quiz run: the navigator plus sidebar browsing state
#[derive(Debug)]
pub struct QuizSession {
    pub nav: ProgressNavigator<Question>,
    pub sidebar: SidebarState,
}

impl QuizSession {
    pub fn new(nav: ProgressNavigator<Question>) -> Self {
        Self { nav, sidebar: SidebarState::default() }
    }

    /// Jump to the first question of a sub-chapter (sidebar selection)
    pub fn open_sub_chapter(&mut self, chapter: usize, sub_chapter: usize) {
        if let Err(err) = self.nav.jump_to(Position::new(chapter, sub_chapter, 0)) {
            tracing::warn!("sidebar jump rejected: {err}");
        }
    }
}

/// One flashcard run: the navigator plus card-face state
#[derive(Debug)]
pub struct CardSession {
    pub nav: ProgressNavigator<Flashcard>,
    /// Whether the back of the current card is showing
    pub flipped: bool,
    picker: ThreadRngPicker,
}

impl CardSession {
    pub fn new(nav: ProgressNavigator<Flashcard>) -> Self {
        Self { nav, flipped: false, picker: ThreadRngPicker }
    }

    /// Turn the current card over
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Leave the current card forward, counting it as reviewed
    pub fn next(&mut self) {
        self.nav.mark_reviewed();
        self.nav.advance();
        self.flipped = false;
    }

    /// Step back one card
    pub fn previous(&mut self) {
        self.nav.previous();
        self.flipped = false;
    }

    /// Jump to a random card
    pub fn shuffle(&mut self) {
        self.nav.shuffle(&mut self.picker);
        self.flipped = false;
    }
}

/// Which dashboard carousel has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardRow {
    #[default]
    InProgress,
    Popular,
}

/// State for the dashboard course carousels
#[derive(Debug)]
pub struct DashboardState {
    pub in_progress: Vec<CourseSummary>,
    pub popular: Vec<CourseSummary>,
    /// First visible card of the in-progress carousel
    pub in_progress_index: usize,
    /// First visible card of the popular carousel
    pub popular_index: usize,
    /// Cards that fit side by side (updated on render)
    pub visible_cards: usize,
    /// Carousel the paging keys act on
    pub focused_row: DashboardRow,
}

impl DashboardState {
    pub fn new(in_progress: Vec<CourseSummary>, popular: Vec<CourseSummary>) -> Self {
        Self {
            in_progress,
            popular,
            in_progress_index: 0,
            popular_index: 0,
            visible_cards: 4,
            focused_row: DashboardRow::default(),
        }
    }

    fn row_mut(&mut self) -> (&mut usize, usize) {
        match self.focused_row {
            DashboardRow::InProgress => (&mut self.in_progress_index, self.in_progress.len()),
            DashboardRow::Popular => (&mut self.popular_index, self.popular.len()),
        }
    }

    /// Page the focused carousel one card back
    pub fn page_prev(&mut self) {
        let (index, _) = self.row_mut();
        *index = index.saturating_sub(1);
    }

    /// Page the focused carousel one card forward, never past the end
    pub fn page_next(&mut self) {
        let visible = self.visible_cards;
        let (index, len) = self.row_mut();
        let max = len.saturating_sub(visible);
        *index = (*index + 1).min(max);
    }

    /// Move focus between the two carousels
    pub fn focus_other_row(&mut self) {
        self.focused_row = match self.focused_row {
            DashboardRow::InProgress => DashboardRow::Popular,
            DashboardRow::Popular => DashboardRow::InProgress,
        };
    }

    /// Clamp both paging indices after a resize
    pub fn clamp_for_width(&mut self, visible_cards: usize) {
        self.visible_cards = visible_cards.max(1);
        self.in_progress_index =
            self.in_progress_index.min(self.in_progress.len().saturating_sub(self.visible_cards));
        self.popular_index =
            self.popular_index.min(self.popular.len().saturating_sub(self.visible_cards));
    }
}

/// Field focus inside a two-field editor overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorField {
    #[default]
    Title,
    Body,
}

/// Overlay editor for a note (new or existing)
#[derive(Debug, Default)]
pub struct NoteEditor {
    /// Note being edited, or None when composing a new one
    pub id: Option<Uuid>,
    pub title: InputState,
    pub body: InputState,
    pub field: EditorField,
}

/// Interaction mode of the notes screen
#[derive(Debug, Default)]
pub enum NotesMode {
    #[default]
    Browse,
    Search,
    Edit(NoteEditor),
}

/// State for the notes board
#[derive(Debug)]
pub struct NotesState {
    pub store: NoteStore,
    pub mode: NotesMode,
    /// Search query applied to the board
    pub query: InputState,
    /// Selected row in the filtered list
    pub selected: usize,
    /// Scroll offset for long boards
    pub scroll_offset: usize,
    /// Visible rows (updated on render)
    pub visible_height: usize,
}

impl NotesState {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            mode: NotesMode::default(),
            query: InputState::default(),
            selected: 0,
            scroll_offset: 0,
            visible_height: 0,
        }
    }

    /// Ids of notes matching the current query, newest first
    pub fn filtered_ids(&self) -> Vec<Uuid> {
        self.store.search(&self.query.input).iter().map(|n| n.id).collect()
    }

    /// Keep the selection inside the filtered list
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_ids().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Id of the selected note, if any
    pub fn selected_id(&self) -> Option<Uuid> {
        self.filtered_ids().get(self.selected).copied()
    }

    /// Open the editor over the selected note
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(note) = self.store.get(id) else {
            return;
        };
        let mut editor = NoteEditor { id: Some(id), ..Default::default() };
        editor.title.set_text(note.title.clone());
        editor.body.set_text(note.body.clone());
        self.mode = NotesMode::Edit(editor);
    }

    /// Open the editor for a fresh note
    pub fn compose(&mut self) {
        self.mode = NotesMode::Edit(NoteEditor::default());
    }

    /// Apply the open editor to the store; empty titles are rejected
    pub fn commit_editor(&mut self) {
        let NotesMode::Edit(editor) = &self.mode else {
            return;
        };
        let title = editor.title.input.trim();
        if title.is_empty() {
            return;
        }
        let body = editor.body.input.trim().to_string();
        match editor.id {
            Some(id) => {
                self.store.edit(id, title, &body);
            }
            None => {
                self.store.add(title, body);
                self.selected = 0;
            }
        }
        self.mode = NotesMode::Browse;
    }
}

/// Overlay editor for a calendar event
#[derive(Debug, Default)]
pub struct EventEditor {
    pub title: InputState,
    pub description: InputState,
    pub field: EditorField,
}

/// State for the calendar screen
#[derive(Debug)]
pub struct CalendarState {
    pub schedule: Schedule,
    /// Open event editor, if any
    pub editor: Option<EventEditor>,
}

impl CalendarState {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule, editor: None }
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Screen to return to when leaving Help
    pub previous_screen: Screen,

    /// Quiz session state
    pub quiz: QuizSession,

    /// Flashcard session state
    pub cards: CardSession,

    /// Dashboard carousels
    pub dashboard: DashboardState,

    /// Notes board
    pub notes: NotesState,

    /// Calendar and schedule
    pub calendar: CalendarState,
}

impl AppState {
    /// Build the initial state from a content provider
    pub fn from_provider(provider: &impl CourseProvider) -> Result<Self, NavError> {
        let quiz_nav = ProgressNavigator::new(provider.quiz_course(), EndPolicy::Hold)?;
        let card_nav = ProgressNavigator::new(provider.flashcard_deck(), EndPolicy::Wrap)?;

        Ok(Self {
            screen: Screen::default(),
            previous_screen: Screen::default(),
            quiz: QuizSession::new(quiz_nav),
            cards: CardSession::new(card_nav),
            dashboard: DashboardState::new(
                provider.in_progress_courses(),
                provider.popular_courses(),
            ),
            notes: NotesState::new(NoteStore::with_samples()),
            calendar: CalendarState::new(Schedule::new(
                MonthView::current(),
                provider.seeded_events(),
            )),
        })
    }

    /// Whether key presses should go to a text editor overlay
    pub fn in_input_mode(&self) -> bool {
        match self.screen {
            Screen::Notes => matches!(self.notes.mode, NotesMode::Search | NotesMode::Edit(_)),
            Screen::Calendar => self.calendar.editor.is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::course::BuiltinCatalog;

    fn state() -> AppState {
        AppState::from_provider(&BuiltinCatalog).unwrap()
    }

    #[test]
    fn initial_screen_is_dashboard() {
        let state = state();
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(!state.in_input_mode());
    }

    #[test]
    fn input_state_edits_by_character() {
        let mut input = InputState::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_char(); // removes the second 'l'
        assert_eq!(input.input, "hélo");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn sidebar_toggle_expands_and_collapses() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle_chapter(2);
        assert!(sidebar.expanded_chapters.contains(&2));
        sidebar.toggle_chapter(2);
        assert!(!sidebar.expanded_chapters.contains(&2));
    }

    #[test]
    fn card_session_marks_reviewed_on_next_only() {
        let mut state = state();
        let origin = state.cards.nav.position();

        state.cards.flip();
        assert!(state.cards.flipped);

        state.cards.next();
        assert!(state.cards.nav.status_at(origin).completed);
        assert!(!state.cards.flipped);

        let here = state.cards.nav.position();
        state.cards.previous();
        assert!(!state.cards.nav.status_at(here).completed);
    }

    #[test]
    fn dashboard_paging_clamps_at_both_ends() {
        let mut state = state();
        state.dashboard.clamp_for_width(4);

        state.dashboard.page_prev();
        assert_eq!(state.dashboard.in_progress_index, 0);

        for _ in 0..20 {
            state.dashboard.page_next();
        }
        // 6 in-progress courses, 4 visible: the last page starts at 2
        assert_eq!(state.dashboard.in_progress_index, 2);

        state.dashboard.focus_other_row();
        for _ in 0..20 {
            state.dashboard.page_next();
        }
        assert_eq!(state.dashboard.popular_index, 1);
    }

    #[test]
    fn notes_editor_round_trip() {
        let mut state = state();
        let before = state.notes.store.len();

        state.notes.compose();
        let NotesMode::Edit(editor) = &mut state.notes.mode else {
            panic!("editor not open");
        };
        editor.title.set_text("Quiz ideas");
        editor.body.set_text("Ask about unions");
        state.notes.commit_editor();

        assert_eq!(state.notes.store.len(), before + 1);
        assert_eq!(state.notes.store.notes()[0].title, "Quiz ideas");
        assert!(matches!(state.notes.mode, NotesMode::Browse));
    }

    #[test]
    fn notes_editor_rejects_empty_titles() {
        let mut state = state();
        let before = state.notes.store.len();
        state.notes.compose();
        state.notes.commit_editor();
        // Still editing; nothing was added
        assert!(matches!(state.notes.mode, NotesMode::Edit(_)));
        assert_eq!(state.notes.store.len(), before);
    }

    #[test]
    fn quiz_sidebar_jump_lands_on_first_question() {
        let mut state = state();
        state.quiz.open_sub_chapter(1, 1);
        assert_eq!(state.quiz.nav.position(), Position::new(1, 1, 0));

        // A bogus target is logged and ignored
        state.quiz.open_sub_chapter(99, 0);
        assert_eq!(state.quiz.nav.position(), Position::new(1, 1, 0));
    }
}
