//! Event handling utilities

use crossterm::event::KeyCode;

use super::state::Screen;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation within a screen
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,

    // Screens
    ShowScreen(Screen),
    Help,
    Quit,

    // Quiz
    ChooseOption(usize),
    Continue,
    Skip,
    Flag,
    ToggleSidebarFocus,

    // Flashcards
    Flip,
    NextCard,
    PreviousCard,
    Shuffle,

    // Notes
    NewNote,
    EditNote,
    DeleteNote,
    Search,

    // Calendar
    PrevMonth,
    NextMonth,
    AddEvent,
}

/// Keys that work on every screen (outside text-input overlays)
pub fn global_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('1') => Some(Action::ShowScreen(Screen::Dashboard)),
        KeyCode::Char('2') => Some(Action::ShowScreen(Screen::Quiz)),
        KeyCode::Char('3') => Some(Action::ShowScreen(Screen::Flashcards)),
        KeyCode::Char('4') => Some(Action::ShowScreen(Screen::Notes)),
        KeyCode::Char('5') => Some(Action::ShowScreen(Screen::Calendar)),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Arrow keys, with hjkl equivalents when vim keys are on
fn movement(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Char('k') if vim => Some(Action::Up),
        KeyCode::Char('j') if vim => Some(Action::Down),
        KeyCode::Char('h') if vim => Some(Action::Left),
        KeyCode::Char('l') if vim => Some(Action::Right),
        _ => None,
    }
}

/// Key mapping for the dashboard carousels
pub fn dashboard_action(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Tab => Some(Action::Down),
        _ => movement(key, vim),
    }
}

/// Key mapping for the quiz screen
pub fn quiz_action(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        // Options are lettered a-d like the rendered list
        KeyCode::Char(c @ 'a'..='d') => Some(Action::ChooseOption(c as usize - 'a' as usize)),
        KeyCode::Enter => Some(Action::Continue),
        KeyCode::Char('s') => Some(Action::Skip),
        KeyCode::Char('f') => Some(Action::Flag),
        KeyCode::Tab => Some(Action::ToggleSidebarFocus),
        KeyCode::Esc => Some(Action::Back),
        _ => movement(key, vim),
    }
}

/// Key mapping for the flashcard screen
pub fn cards_action(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Flip),
        KeyCode::Char('n') => Some(Action::NextCard),
        KeyCode::Char('p') => Some(Action::PreviousCard),
        KeyCode::Char('r') => Some(Action::Shuffle),
        KeyCode::Char('f') => Some(Action::Flag),
        _ => match movement(key, vim) {
            Some(Action::Left) => Some(Action::PreviousCard),
            Some(Action::Right) => Some(Action::NextCard),
            other => other,
        },
    }
}

/// Key mapping for the notes board (browse mode)
pub fn notes_action(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        KeyCode::Char('n') => Some(Action::NewNote),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditNote),
        KeyCode::Char('d') => Some(Action::DeleteNote),
        KeyCode::Char('/') => Some(Action::Search),
        KeyCode::Esc => Some(Action::Back),
        _ => movement(key, vim),
    }
}

/// Key mapping for the calendar screen
pub fn calendar_action(key: KeyCode, vim: bool) -> Option<Action> {
    match key {
        KeyCode::Char('[') => Some(Action::PrevMonth),
        KeyCode::Char(']') => Some(Action::NextMonth),
        KeyCode::Char('a') | KeyCode::Char('n') => Some(Action::AddEvent),
        KeyCode::Esc => Some(Action::Back),
        _ => movement(key, vim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_switch_screens() {
        assert_eq!(global_action(KeyCode::Char('1')), Some(Action::ShowScreen(Screen::Dashboard)));
        assert_eq!(global_action(KeyCode::Char('5')), Some(Action::ShowScreen(Screen::Calendar)));
        assert_eq!(global_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn quiz_letters_choose_options() {
        assert_eq!(quiz_action(KeyCode::Char('a'), true), Some(Action::ChooseOption(0)));
        assert_eq!(quiz_action(KeyCode::Char('d'), true), Some(Action::ChooseOption(3)));
        assert_eq!(quiz_action(KeyCode::Char('e'), true), None);
    }

    #[test]
    fn vim_keys_respect_the_config_flag() {
        assert_eq!(quiz_action(KeyCode::Char('j'), true), Some(Action::Down));
        assert_eq!(quiz_action(KeyCode::Char('j'), false), None);
        assert_eq!(quiz_action(KeyCode::Down, false), Some(Action::Down));
    }

    #[test]
    fn card_arrows_map_to_deck_navigation() {
        assert_eq!(cards_action(KeyCode::Right, false), Some(Action::NextCard));
        assert_eq!(cards_action(KeyCode::Left, false), Some(Action::PreviousCard));
        assert_eq!(cards_action(KeyCode::Char(' '), false), Some(Action::Flip));
        assert_eq!(cards_action(KeyCode::Char('r'), false), Some(Action::Shuffle));
    }

    #[test]
    fn calendar_brackets_step_months() {
        assert_eq!(calendar_action(KeyCode::Char('['), false), Some(Action::PrevMonth));
        assert_eq!(calendar_action(KeyCode::Char(']'), false), Some(Action::NextMonth));
    }

    #[test]
    fn notes_slash_opens_search() {
        assert_eq!(notes_action(KeyCode::Char('/'), false), Some(Action::Search));
        assert_eq!(notes_action(KeyCode::Char('n'), false), Some(Action::NewNote));
    }
}
