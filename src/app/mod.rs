//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::calendar::current_time_label;
use crate::config::Config;
use crate::course::BuiltinCatalog;
use crate::ui;
use crate::ui::sidebar::{self, SidebarRow};
use input::Action;
use state::{AppState, EditorField, EventEditor, NotesMode, Screen};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance over the bundled catalog
    pub fn new(config: Config) -> Result<Self> {
        let state =
            AppState::from_provider(&BuiltinCatalog).context("Failed to load bundled content")?;
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.config);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        break;
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if the app should exit
    fn handle_key(&mut self, key: KeyCode) -> bool {
        // Text overlays swallow everything first
        if self.state.in_input_mode() {
            self.handle_input_mode_key(key);
            return false;
        }

        let vim = self.config.vim_mode;
        let action = match self.state.screen {
            Screen::Dashboard => input::dashboard_action(key, vim),
            Screen::Quiz => input::quiz_action(key, vim),
            Screen::Flashcards => input::cards_action(key, vim),
            Screen::Notes => input::notes_action(key, vim),
            Screen::Calendar => input::calendar_action(key, vim),
            Screen::Help => Some(Action::Back),
        };

        match action.or_else(|| input::global_action(key)) {
            Some(Action::Quit) => return true,
            Some(Action::Help) => {
                self.state.previous_screen = self.state.screen;
                self.state.screen = Screen::Help;
            }
            Some(Action::ShowScreen(screen)) => {
                tracing::debug!("switching to {screen:?}");
                self.state.screen = screen;
            }
            Some(action) => self.dispatch(action),
            None => {}
        }
        false
    }

    /// Apply a screen-local action
    fn dispatch(&mut self, action: Action) {
        match self.state.screen {
            Screen::Dashboard => self.handle_dashboard(action),
            Screen::Quiz => self.handle_quiz(action),
            Screen::Flashcards => self.handle_cards(action),
            Screen::Notes => self.handle_notes(action),
            Screen::Calendar => self.handle_calendar(action),
            Screen::Help => {
                if action == Action::Back {
                    self.state.screen = self.state.previous_screen;
                }
            }
        }
    }

    fn handle_dashboard(&mut self, action: Action) {
        let dashboard = &mut self.state.dashboard;
        match action {
            Action::Left => dashboard.page_prev(),
            Action::Right => dashboard.page_next(),
            Action::Up | Action::Down => dashboard.focus_other_row(),
            // Opening a course card drops into the quiz flow
            Action::Select => self.state.screen = Screen::Quiz,
            _ => {}
        }
    }

    fn handle_quiz(&mut self, action: Action) {
        let quiz = &mut self.state.quiz;

        if quiz.sidebar.focused {
            match action {
                Action::Up => {
                    quiz.sidebar.selected_index = quiz.sidebar.selected_index.saturating_sub(1);
                    quiz.sidebar.ensure_selection_visible();
                }
                Action::Down => {
                    let last = sidebar::row_count(quiz).saturating_sub(1);
                    quiz.sidebar.selected_index = (quiz.sidebar.selected_index + 1).min(last);
                    quiz.sidebar.ensure_selection_visible();
                }
                Action::Continue | Action::Select => {
                    match sidebar::row_at_index(quiz, quiz.sidebar.selected_index) {
                        Some(SidebarRow::Chapter(chapter)) => {
                            quiz.sidebar.toggle_chapter(chapter);
                        }
                        Some(SidebarRow::SubChapter(chapter, sub)) => {
                            quiz.open_sub_chapter(chapter, sub);
                            quiz.sidebar.focused = false;
                        }
                        None => {}
                    }
                }
                Action::ToggleSidebarFocus | Action::Back => quiz.sidebar.focused = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::ChooseOption(option) => {
                // Only letters that name a rendered option count
                if option < quiz.nav.current_item().options.len() {
                    quiz.nav.select_option(option);
                }
            }
            // Continue only appears once the question is answered
            Action::Continue if quiz.nav.is_answered() => quiz.nav.advance(),
            Action::Skip => quiz.nav.advance(),
            Action::Flag => {
                quiz.nav.toggle_flag();
            }
            Action::ToggleSidebarFocus => quiz.sidebar.focused = true,
            Action::Back => self.state.screen = Screen::Dashboard,
            _ => {}
        }
    }

    fn handle_cards(&mut self, action: Action) {
        let cards = &mut self.state.cards;
        match action {
            Action::Flip => cards.flip(),
            Action::NextCard => cards.next(),
            Action::PreviousCard => cards.previous(),
            Action::Shuffle => cards.shuffle(),
            Action::Flag => {
                cards.nav.toggle_flag();
            }
            _ => {}
        }
    }

    fn handle_notes(&mut self, action: Action) {
        let notes = &mut self.state.notes;
        match action {
            Action::Up => {
                notes.selected = notes.selected.saturating_sub(1);
            }
            Action::Down => {
                notes.selected += 1;
                notes.clamp_selection();
            }
            Action::NewNote => notes.compose(),
            Action::EditNote => notes.edit_selected(),
            Action::DeleteNote => {
                if let Some(id) = notes.selected_id() {
                    notes.store.delete(id);
                    notes.clamp_selection();
                }
            }
            Action::Search => notes.mode = NotesMode::Search,
            Action::Back => {
                notes.query.clear();
                notes.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_calendar(&mut self, action: Action) {
        let calendar = &mut self.state.calendar;
        match action {
            Action::Left => calendar.schedule.move_selection(-1),
            Action::Right => calendar.schedule.move_selection(1),
            Action::Up => calendar.schedule.move_selection(-7),
            Action::Down => calendar.schedule.move_selection(7),
            Action::PrevMonth => calendar.schedule.prev_month(),
            Action::NextMonth => calendar.schedule.next_month(),
            Action::AddEvent => {
                if calendar.schedule.selected_day.is_none() {
                    calendar.schedule.select_day(1);
                }
                calendar.editor = Some(EventEditor::default());
            }
            Action::Back => calendar.schedule.selected_day = None,
            _ => {}
        }
    }

    /// Feed a key to whichever text overlay is open
    fn handle_input_mode_key(&mut self, key: KeyCode) {
        match self.state.screen {
            Screen::Notes => match &mut self.state.notes.mode {
                NotesMode::Search => {
                    let notes = &mut self.state.notes;
                    match key {
                        KeyCode::Esc => {
                            notes.query.clear();
                            notes.mode = NotesMode::Browse;
                            notes.clamp_selection();
                        }
                        KeyCode::Enter => {
                            notes.mode = NotesMode::Browse;
                            notes.clamp_selection();
                        }
                        _ => edit_buffer(&mut notes.query, key),
                    }
                }
                NotesMode::Edit(editor) => match key {
                    KeyCode::Esc => self.state.notes.mode = NotesMode::Browse,
                    KeyCode::Enter => self.state.notes.commit_editor(),
                    KeyCode::Tab => editor.field = next_field(editor.field),
                    _ => {
                        let buffer = match editor.field {
                            EditorField::Title => &mut editor.title,
                            EditorField::Body => &mut editor.body,
                        };
                        edit_buffer(buffer, key);
                    }
                },
                NotesMode::Browse => {}
            },
            Screen::Calendar => {
                let calendar = &mut self.state.calendar;
                let Some(editor) = &mut calendar.editor else {
                    return;
                };
                match key {
                    KeyCode::Esc => calendar.editor = None,
                    KeyCode::Enter => {
                        let title = editor.title.input.clone();
                        let description = editor.description.input.clone();
                        if calendar.schedule.add_event(&title, &description, current_time_label())
                        {
                            calendar.editor = None;
                        }
                    }
                    KeyCode::Tab => editor.field = next_field(editor.field),
                    _ => {
                        let buffer = match editor.field {
                            EditorField::Title => &mut editor.title,
                            EditorField::Body => &mut editor.description,
                        };
                        edit_buffer(buffer, key);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Apply a key to a text buffer
fn edit_buffer(buffer: &mut state::InputState, key: KeyCode) {
    match key {
        KeyCode::Char(c) => buffer.insert_char(c),
        KeyCode::Backspace => buffer.delete_char(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        _ => {}
    }
}

/// The other field of a two-field editor
fn next_field(field: EditorField) -> EditorField {
    match field {
        EditorField::Title => EditorField::Body,
        EditorField::Body => EditorField::Title,
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
