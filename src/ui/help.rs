//! Help screen with the key reference

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

use super::layout::centered_rect;

const KEYS: [(&str, &str); 16] = [
    ("1-5", "Switch screen"),
    ("?", "This help"),
    ("q", "Quit"),
    ("", ""),
    ("a-d", "Quiz: answer the question"),
    ("Enter", "Quiz: continue once answered"),
    ("s", "Quiz: skip without answering"),
    ("f", "Quiz: flag / Flashcards: star"),
    ("Tab", "Quiz: focus the chapter tree"),
    ("", ""),
    ("Space", "Flashcards: flip the card"),
    ("\u{2190} \u{2192}", "Flashcards: previous / next"),
    ("r", "Flashcards: shuffle"),
    ("", ""),
    ("n e d /", "Notes: new, edit, delete, search"),
    ("[ ] a", "Calendar: month back/forward, add event"),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay = centered_rect(60, 80, area);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![Line::from("")];
    for (key, description) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:>8}  "),
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description, Style::default().fg(theme.fg_secondary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
