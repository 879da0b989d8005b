//! UI rendering components

pub mod calendar_panel;
pub mod dashboard;
pub mod flashcards;
pub mod help;
pub mod layout;
pub mod notes_panel;
pub mod quiz;
pub mod sidebar;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, config: &Config) {
    let theme = config.active_theme();
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

    draw_tab_bar(frame, chunks[0], state.screen, &theme);

    match state.screen {
        Screen::Dashboard => dashboard::draw(frame, chunks[1], &mut state.dashboard, &theme),
        Screen::Quiz => quiz::draw(frame, chunks[1], &mut state.quiz, &theme),
        Screen::Flashcards => flashcards::draw(frame, chunks[1], &state.cards, &theme),
        Screen::Notes => notes_panel::draw(frame, chunks[1], &mut state.notes, &theme),
        Screen::Calendar => calendar_panel::draw(frame, chunks[1], &state.calendar, &theme),
        Screen::Help => help::draw(frame, chunks[1], &theme),
    }

    draw_hint_bar(frame, chunks[2], state, &theme);
}

/// The tab strip along the top
fn draw_tab_bar(frame: &mut Frame, area: Rect, current: Screen, theme: &Theme) {
    const TABS: [(Screen, &str); 5] = [
        (Screen::Dashboard, "1 Dashboard"),
        (Screen::Quiz, "2 Quiz"),
        (Screen::Flashcards, "3 Flashcards"),
        (Screen::Notes, "4 Notes"),
        (Screen::Calendar, "5 Calendar"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (screen, label) in TABS {
        let style = if screen == current {
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(bar, area);
}

/// Per-screen key hints along the bottom
fn draw_hint_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.in_input_mode() {
        "[Enter] Save    [Tab] Switch field    [Esc] Cancel"
    } else {
        match state.screen {
            Screen::Dashboard => "[\u{2190}/\u{2192}] Browse    [\u{2191}/\u{2193}] Row    [Enter] Open    [?] Help    [q] Quit",
            Screen::Quiz => {
                if state.quiz.sidebar.focused {
                    "[\u{2191}/\u{2193}] Move    [Enter] Open    [Tab] Back to question"
                } else {
                    "[a-d] Answer    [Enter] Continue    [s] Skip    [f] Flag    [Tab] Chapters"
                }
            }
            Screen::Flashcards => {
                "[Space] Flip    [\u{2190}/\u{2192}] Prev/Next    [r] Shuffle    [f] Star"
            }
            Screen::Notes => "[n] New    [e] Edit    [d] Delete    [/] Search    [\u{2191}/\u{2193}] Select",
            Screen::Calendar => "[arrows] Day    [ and ] Month back/forward    [a] Add event",
            Screen::Help => "[Esc] Back",
        }
    };

    let bar = Paragraph::new(Line::from(Span::styled(
        format!(" {hints}"),
        Style::default().fg(theme.fg_muted),
    )))
    .style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(bar, area);
}
