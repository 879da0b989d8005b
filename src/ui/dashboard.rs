//! Dashboard screen
//!
//! Two horizontal course carousels over the catalog summaries. Paging is
//! clamped so the window never runs past either end of a row.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::state::{DashboardRow, DashboardState};
use crate::course::CourseSummary;
use crate::theme::Theme;

/// Width of one course card including its gap
const CARD_WIDTH: u16 = 30;

/// Draw the dashboard screen
pub fn draw(frame: &mut Frame, area: Rect, dashboard: &mut DashboardState, theme: &Theme) {
    // Fit as many cards as the width allows and keep paging indices sane
    let visible = (area.width / CARD_WIDTH).max(1) as usize;
    dashboard.clamp_for_width(visible);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(0),
    ])
    .split(area);

    let greeting = Paragraph::new(Line::from(Span::styled(
        " Welcome back! Pick up where you left off.",
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(greeting, chunks[0]);

    draw_carousel(
        frame,
        chunks[1],
        "Jump back in",
        &dashboard.in_progress,
        dashboard.in_progress_index,
        dashboard.visible_cards,
        dashboard.focused_row == DashboardRow::InProgress,
        theme,
    );
    draw_carousel(
        frame,
        chunks[2],
        "Popular courses",
        &dashboard.popular,
        dashboard.popular_index,
        dashboard.visible_cards,
        dashboard.focused_row == DashboardRow::Popular,
        theme,
    );
}

/// One carousel row of course cards
#[allow(clippy::too_many_arguments)]
fn draw_carousel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    courses: &[CourseSummary],
    start: usize,
    visible: usize,
    focused: bool,
    theme: &Theme,
) {
    let header_style = if focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD)
    };

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(6)]).split(area);

    let more_right = start + visible < courses.len();
    let header = format!(
        " {title}  {}{}",
        if start > 0 { "\u{2190} " } else { "" },
        if more_right { "\u{2192}" } else { "" },
    );
    frame.render_widget(Paragraph::new(Line::from(Span::styled(header, header_style))), chunks[0]);

    let window: Vec<&CourseSummary> = courses.iter().skip(start).take(visible).collect();
    if window.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> =
        window.iter().map(|_| Constraint::Length(CARD_WIDTH)).collect();
    let card_areas = Layout::horizontal(constraints).split(chunks[1]);

    for (course, card_area) in window.iter().zip(card_areas.iter()) {
        draw_card(frame, *card_area, course, focused, theme);
    }
}

/// A single course card with its progress gauge
fn draw_card(frame: &mut Frame, area: Rect, course: &CourseSummary, focused: bool, theme: &Theme) {
    let border_color = if focused { theme.border_focused } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            course.category.clone(),
            Style::default().fg(theme.fg_muted),
        ))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            course.title.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true }),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{}/{} lessons", course.completed_lessons, course.total_lessons),
            Style::default().fg(theme.fg_secondary),
        ))),
        chunks[2],
    );

    let gauge = Gauge::default()
        .ratio(course.percent() / 100.0)
        .label(format!("{:.0}%", course.percent()))
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary));
    frame.render_widget(gauge, chunks[3]);
}
