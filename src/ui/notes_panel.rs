//! Notes board screen
//!
//! A searchable list of notes on the left, the selected note on the right,
//! and a centered overlay editor for composing or editing.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{EditorField, NoteEditor, NotesMode, NotesState};
use crate::theme::Theme;

use super::layout::{centered_rect, draw_empty_message, overlay_block};

/// Draw the notes screen
pub fn draw(frame: &mut Frame, area: Rect, notes: &mut NotesState, theme: &Theme) {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

    draw_search_line(frame, chunks[0], notes, theme);

    let panels =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

    draw_list(frame, panels[0], notes, theme);
    draw_detail(frame, panels[1], notes, theme);

    if let NotesMode::Edit(editor) = &notes.mode {
        draw_editor(frame, area, editor, theme);
    }
}

/// The search query (or its hint) above the board
fn draw_search_line(frame: &mut Frame, area: Rect, notes: &NotesState, theme: &Theme) {
    let searching = matches!(notes.mode, NotesMode::Search);
    let line = if searching || !notes.query.input.is_empty() {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(theme.accent_primary)),
            Span::styled(notes.query.input.clone(), Style::default().fg(theme.fg_primary)),
            Span::styled(if searching { "\u{2588}" } else { "" }, Style::default().fg(theme.cursor)),
        ])
    } else {
        Line::from(Span::styled(
            " Press / to search notes",
            Style::default().fg(theme.fg_muted),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// The filtered note list
fn draw_list(frame: &mut Frame, area: Rect, notes: &mut NotesState, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Notes ({}) ", notes.store.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    notes.visible_height = inner.height as usize;

    let ids = notes.filtered_ids();
    if ids.is_empty() {
        draw_empty_message(frame, inner, "No notes match", theme);
        return;
    }

    // Keep the selection on screen
    if notes.selected < notes.scroll_offset {
        notes.scroll_offset = notes.selected;
    }
    if notes.visible_height > 0 && notes.selected >= notes.scroll_offset + notes.visible_height {
        notes.scroll_offset = notes.selected - notes.visible_height + 1;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (row, id) in ids.iter().enumerate().skip(notes.scroll_offset).take(notes.visible_height) {
        let Some(note) = notes.store.get(*id) else {
            continue;
        };
        let style = if row == notes.selected {
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        let marker = if note.edited { " (edited)" } else { "" };
        lines.push(Line::from(Span::styled(format!("{}{marker}", note.title), style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Full text of the selected note
fn draw_detail(frame: &mut Frame, area: Rect, notes: &NotesState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(note) = notes.selected_id().and_then(|id| notes.store.get(id)) else {
        draw_empty_message(frame, inner, "Select a note, or press n to write one", theme);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            note.title.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}{}", note.date_label(), if note.edited { " \u{00b7} edited" } else { "" }),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(note.body.clone(), Style::default().fg(theme.fg_secondary))),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Centered overlay editor for one note
fn draw_editor(frame: &mut Frame, area: Rect, editor: &NoteEditor, theme: &Theme) {
    let title = if editor.id.is_some() { " Edit note " } else { " New note " };
    let overlay = centered_rect(60, 50, area);
    let inner = overlay_block(frame, overlay, title, theme);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(2),
    ])
    .split(inner);

    draw_field(frame, chunks[0], "Title", &editor.title.input, editor.field == EditorField::Title, theme);
    draw_field(frame, chunks[2], "Body", &editor.body.input, editor.field == EditorField::Body, theme);
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
