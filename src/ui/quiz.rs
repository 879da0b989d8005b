//! Quiz screen
//!
//! Sidebar course tree on the left, the current question on the right.
//! Options are sticky once answered: the chosen option colors green or red
//! against the designated correct answer and the explanation is revealed.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::QuizSession;
use crate::theme::Theme;

use super::sidebar;

/// Minimum width before the sidebar is hidden
const SIDEBAR_WIDTH: u16 = 34;

/// Draw the quiz screen
pub fn draw(frame: &mut Frame, area: Rect, quiz: &mut QuizSession, theme: &Theme) {
    let show_sidebar = area.width > SIDEBAR_WIDTH + 40;

    let main_area = if show_sidebar {
        let chunks =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .split(area);
        sidebar::draw(frame, chunks[0], quiz, theme);
        chunks[1]
    } else {
        area
    };

    draw_question_panel(frame, main_area, quiz, theme);
}

/// Draw the question side of the screen
fn draw_question_panel(frame: &mut Frame, area: Rect, quiz: &QuizSession, theme: &Theme) {
    let border_color = if quiz.sidebar.focused { theme.border } else { theme.border_focused };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let question = quiz.nav.current_item();
    let mut lines = vec![];

    // Header: ordinal, flag state
    let mut header = vec![Span::styled(
        format!("Question {} of {}", quiz.nav.item_number(), quiz.nav.total_items()),
        Style::default().fg(theme.fg_muted),
    )];
    if quiz.nav.is_flagged() {
        header.push(Span::styled(
            "    \u{2691} flagged", // ⚑
            Style::default().fg(theme.warning),
        ));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(""));

    // Prompt
    lines.push(Line::from(Span::styled(
        question.prompt.clone(),
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Options
    let selected = quiz.nav.selected_option();
    let answered = quiz.nav.is_answered();
    for (i, option) in question.options.iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        let is_selected = selected == Some(i);

        let style = if is_selected && question.is_correct(i) {
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
        } else if answered {
            Style::default().fg(theme.fg_muted)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        let marker = if is_selected { "\u{25cf}" } else { "\u{25cb}" }; // ● ○
        lines.push(Line::from(Span::styled(format!("  {marker} {letter}) {option}"), style)));
        lines.push(Line::from(""));
    }

    // Explanation appears once answered
    if answered {
        lines.push(Line::from(Span::styled(
            "Explanation",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            question.explanation.clone(),
            Style::default().fg(theme.fg_secondary),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Continue",
            Style::default().fg(theme.fg_muted),
        )));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
