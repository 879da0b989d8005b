//! Quiz course tree sidebar
//!
//! Chapters expand to show their sub-chapters; each chapter carries a
//! progress bar and each sub-chapter a done/total counter, fed by the
//! navigator's ledger.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::QuizSession;
use crate::theme::Theme;

/// Chapter completion indicator
const CHAPTER_DONE: &str = "\u{2713}"; // ✓

/// Bar glyphs for the per-chapter progress bars
const BAR_FULL: &str = "\u{2501}"; // ━
const BAR_EMPTY: &str = "\u{2500}"; // ─

/// Width of the inline chapter progress bars
const BAR_WIDTH: usize = 16;

/// A row of the sidebar tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Chapter(usize),
    SubChapter(usize, usize),
}

/// Number of rows currently visible in the tree
pub fn row_count(quiz: &QuizSession) -> usize {
    let mut count = 0;
    for (chapter_idx, chapter) in quiz.nav.course().chapters.iter().enumerate() {
        count += 1;
        if quiz.sidebar.expanded_chapters.contains(&chapter_idx) {
            count += chapter.sub_chapters.len();
        }
    }
    count
}

/// The chapter or sub-chapter at a flat row index
pub fn row_at_index(quiz: &QuizSession, target_index: usize) -> Option<SidebarRow> {
    let mut current = 0;
    for (chapter_idx, chapter) in quiz.nav.course().chapters.iter().enumerate() {
        if current == target_index {
            return Some(SidebarRow::Chapter(chapter_idx));
        }
        current += 1;

        if quiz.sidebar.expanded_chapters.contains(&chapter_idx) {
            for sub_idx in 0..chapter.sub_chapters.len() {
                if current == target_index {
                    return Some(SidebarRow::SubChapter(chapter_idx, sub_idx));
                }
                current += 1;
            }
        }
    }
    None
}

/// Draw the sidebar tree
pub fn draw(frame: &mut Frame, area: Rect, quiz: &mut QuizSession, theme: &Theme) {
    let focused = quiz.sidebar.focused;
    let border_color = if focused { theme.border_focused } else { theme.border };

    let block = Block::default()
        .title(format!(" {} ", quiz.nav.course().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Update visible height for scroll calculations
    quiz.sidebar.visible_height = inner.height as usize;

    let mut lines: Vec<Line> = Vec::new();

    // Course-level progress at the top
    lines.push(Line::from(vec![
        Span::styled(
            progress_bar(quiz.nav.course_progress()),
            Style::default().fg(theme.accent_primary),
        ),
        Span::styled(
            format!(" {:.0}%", quiz.nav.course_progress()),
            Style::default().fg(theme.fg_secondary),
        ),
    ]));
    lines.push(Line::from(""));

    let mut flat_index = 0;
    let chapter_percents = quiz.nav.chapter_progress().to_vec();

    for (chapter_idx, chapter) in quiz.nav.course().chapters.iter().enumerate() {
        let is_expanded = quiz.sidebar.expanded_chapters.contains(&chapter_idx);
        let expand_icon = if is_expanded { "\u{25bc}" } else { "\u{25b6}" }; // ▼ ▶

        let percent = chapter_percents.get(chapter_idx).copied().unwrap_or(0.0);
        let done_marker = if percent >= 100.0 { format!(" {CHAPTER_DONE}") } else { String::new() };

        let is_selected = focused && flat_index == quiz.sidebar.selected_index;
        let chapter_style = if is_selected {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        lines.push(Line::from(Span::styled(
            format!("{expand_icon} {}{done_marker}", chapter.title),
            chapter_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", progress_bar(percent)),
            Style::default().fg(theme.accent_primary),
        )));
        flat_index += 1;

        if is_expanded {
            for (sub_idx, sub) in chapter.sub_chapters.iter().enumerate() {
                let is_sub_selected = focused && flat_index == quiz.sidebar.selected_index;
                let (done, total) = quiz.nav.sub_chapter_counts(chapter_idx, sub_idx);
                let complete = quiz.nav.sub_chapter_complete(chapter_idx, sub_idx);

                let here = quiz.nav.position();
                let style = if is_sub_selected {
                    Style::default()
                        .fg(theme.bg_primary)
                        .bg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD)
                } else if here.chapter == chapter_idx && here.sub_chapter == sub_idx {
                    // Sub-chapter currently being studied
                    Style::default().fg(theme.accent_secondary)
                } else {
                    Style::default().fg(theme.fg_secondary)
                };

                let counter_style = if complete {
                    Style::default().fg(theme.success)
                } else {
                    Style::default().fg(theme.fg_muted)
                };

                lines.push(Line::from(vec![
                    Span::styled(format!("   {} ", sub.title), style),
                    Span::styled(format!("{done}/{total}"), counter_style),
                ]));
                flat_index += 1;
            }
        }
    }

    // Handle scroll offset
    let visible_height = inner.height as usize;
    let start = quiz.sidebar.scroll_offset;
    let end = (start + visible_height).min(lines.len());
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    frame.render_widget(Paragraph::new(visible_lines), inner);
}

/// Fixed-width bar like `━━━────` for a 0–100 percentage
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", BAR_FULL.repeat(filled), BAR_EMPTY.repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::course::BuiltinCatalog;
    use crate::course::CourseProvider;
    use crate::study::{EndPolicy, ProgressNavigator};

    fn session() -> QuizSession {
        let nav = ProgressNavigator::new(BuiltinCatalog.quiz_course(), EndPolicy::Hold).unwrap();
        QuizSession::new(nav)
    }

    #[test]
    fn collapsed_tree_shows_only_chapters() {
        let quiz = session();
        assert_eq!(row_count(&quiz), 5);
    }

    #[test]
    fn expanding_a_chapter_adds_its_sub_chapters() {
        let mut quiz = session();
        quiz.sidebar.toggle_chapter(0);
        // 5 chapters + 2 sub-chapters of the first
        assert_eq!(row_count(&quiz), 7);
    }

    #[test]
    fn row_indexing_interleaves_expanded_chapters() {
        let mut quiz = session();
        quiz.sidebar.toggle_chapter(0);

        assert_eq!(row_at_index(&quiz, 0), Some(SidebarRow::Chapter(0)));
        assert_eq!(row_at_index(&quiz, 1), Some(SidebarRow::SubChapter(0, 0)));
        assert_eq!(row_at_index(&quiz, 2), Some(SidebarRow::SubChapter(0, 1)));
        assert_eq!(row_at_index(&quiz, 3), Some(SidebarRow::Chapter(1)));
        assert_eq!(row_at_index(&quiz, 99), None);
    }

    #[test]
    fn progress_bar_fills_with_percent() {
        assert_eq!(progress_bar(0.0), BAR_EMPTY.repeat(BAR_WIDTH));
        assert_eq!(progress_bar(100.0), BAR_FULL.repeat(BAR_WIDTH));
        assert!(progress_bar(50.0).contains(BAR_FULL));
    }
}
