//! Calendar screen
//!
//! A month grid on the left (fill days from the adjacent months rendered
//! muted), the schedule on the right. Days with events carry a dot marker;
//! the event list colors its bullets from the theme's event palette.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{CalendarState, EditorField};
use crate::theme::Theme;

use super::layout::{centered_rect, draw_empty_message, overlay_block};

/// Sunday-first weekday header
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Draw the calendar screen
pub fn draw(frame: &mut Frame, area: Rect, calendar: &CalendarState, theme: &Theme) {
    let panels =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(20)]).split(area);

    draw_month_grid(frame, panels[0], calendar, theme);
    draw_event_list(frame, panels[1], calendar, theme);

    if let Some(editor) = &calendar.editor {
        let overlay = centered_rect(60, 40, area);
        let day = calendar.schedule.selected_day.unwrap_or(1);
        let inner =
            overlay_block(frame, overlay, &format!(" New event \u{00b7} day {day} "), theme);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        draw_field(
            frame,
            chunks[0],
            "Title",
            &editor.title.input,
            editor.field == EditorField::Title,
            theme,
        );
        draw_field(
            frame,
            chunks[2],
            "Details",
            &editor.description.input,
            editor.field == EditorField::Body,
            theme,
        );
    }
}

/// The month grid with its header
fn draw_month_grid(frame: &mut Frame, area: Rect, calendar: &CalendarState, theme: &Theme) {
    let schedule = &calendar.schedule;
    let block = Block::default()
        .title(format!(" {} ", schedule.view.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(
        WEEKDAYS
            .iter()
            .map(|d| Span::styled(format!(" {d} "), Style::default().fg(theme.fg_muted)))
            .collect::<Vec<_>>(),
    ));

    for week in schedule.view.grid().chunks(7) {
        let mut spans = Vec::new();
        for cell in week {
            let selected = cell.in_month && schedule.selected_day == Some(cell.day);
            let marked = cell.in_month && schedule.has_event(cell.day);

            let style = if selected {
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD)
            } else if !cell.in_month {
                Style::default().fg(theme.fg_muted)
            } else if marked {
                Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_primary)
            };

            let marker = if marked && !selected { "." } else { " " };
            spans.push(Span::styled(format!("{:>3}{marker}", cell.day), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

/// Events for the selected day, or the whole month when no day is selected
fn draw_event_list(frame: &mut Frame, area: Rect, calendar: &CalendarState, theme: &Theme) {
    let schedule = &calendar.schedule;
    let title = match schedule.selected_day {
        Some(day) => format!(" Schedule \u{00b7} day {day} "),
        None => " Schedule ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let events: Vec<_> = match schedule.selected_day {
        Some(day) => schedule.events_on(day).collect(),
        None => schedule.events().iter().collect(),
    };

    if events.is_empty() {
        draw_empty_message(frame, inner, "Nothing scheduled \u{2014} press a to add", theme);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for event in events {
        let bullet_color = theme
            .event_colors
            .get(event.color_index)
            .copied()
            .unwrap_or(theme.accent_primary);

        lines.push(Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(bullet_color)),
            Span::styled(
                format!("{:>2}  ", event.day),
                Style::default().fg(theme.fg_muted),
            ),
            Span::styled(
                event.title.clone(),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", event.time), Style::default().fg(theme.fg_muted)),
        ]));
        if !event.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("      {}", event.description),
                Style::default().fg(theme.fg_secondary),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A labeled single-line input field
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_style = if focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted)
    };
    let cursor = if focused { "\u{2588}" } else { "" };
    let line = Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value.to_string(), Style::default().fg(theme.fg_primary)),
        Span::styled(cursor, Style::default().fg(theme.cursor)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
