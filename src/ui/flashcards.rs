//! Flashcard screen
//!
//! One card at a time, centered: front until flipped, then the back. The
//! header carries the deck position and the current chapter name, the
//! footer a review-progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::state::CardSession;
use crate::theme::Theme;

use super::layout::centered_rect;

/// Draw the flashcard screen
pub fn draw(frame: &mut Frame, area: Rect, cards: &CardSession, theme: &Theme) {
    let card_area = centered_rect(70, 80, area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(1),
    ])
    .split(card_area);

    draw_header(frame, chunks[0], cards, theme);
    draw_card(frame, chunks[1], cards, theme);
    draw_progress(frame, chunks[2], cards, theme);
}

/// Deck position and chapter badge
fn draw_header(frame: &mut Frame, area: Rect, cards: &CardSession, theme: &Theme) {
    let pos = cards.nav.position();
    let chapter = &cards.nav.course().chapters[pos.chapter];

    let lines = vec![
        Line::from(Span::styled(
            format!("{} / {}", cards.nav.item_number(), cards.nav.total_items()),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {} ", chapter.title),
            Style::default().fg(theme.fg_primary).bg(theme.bg_tertiary),
        )),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// The card face itself
fn draw_card(frame: &mut Frame, area: Rect, cards: &CardSession, theme: &Theme) {
    let card = cards.nav.current_item();

    let (face_text, face_hint) = if cards.flipped {
        (card.back.clone(), "[Space] Flip back")
    } else {
        (card.front.clone(), "[Space] Flip")
    };

    let border_color = if cards.flipped { theme.accent_secondary } else { theme.border_focused };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Star marker in the top line of the card
    let star = if cards.nav.is_flagged() {
        Span::styled("\u{2605}", Style::default().fg(theme.warning)) // ★
    } else {
        Span::styled("\u{2606}", Style::default().fg(theme.fg_muted)) // ☆
    };

    let vertical_pad = inner.height.saturating_sub(5) / 2;
    let mut lines = vec![Line::from(star).alignment(Alignment::Right)];
    for _ in 0..vertical_pad {
        lines.push(Line::from(""));
    }
    lines.push(
        Line::from(Span::styled(
            face_text,
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(face_hint, Style::default().fg(theme.fg_muted)))
            .alignment(Alignment::Center),
    );

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// Deck review progress along the bottom
fn draw_progress(frame: &mut Frame, area: Rect, cards: &CardSession, theme: &Theme) {
    let percent = cards.nav.course_progress();
    let gauge = Gauge::default()
        .ratio(percent / 100.0)
        .label(format!("{percent:.0}% reviewed"))
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary));
    frame.render_widget(gauge, area);
}
