//! Calendar and schedule widget state
//!
//! A month grid plus an in-memory event list. The grid is Sunday-first and
//! padded with the neighboring months' days so every row is a full week,
//! matching how calendar UIs are usually drawn. Events are keyed by day of
//! month only; the schedule is sample/session data, not a real datebook.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of colors the UI palette cycles through for events
pub const EVENT_COLOR_COUNT: usize = 5;

/// A scheduled event on a day of the month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Day of month, 1-based
    pub day: u32,
    /// Event title
    pub title: String,
    /// Free-form description (often an email address in the sample data)
    pub description: String,
    /// Display time, e.g. "3:30 PM"
    pub time: String,
    /// Index into the UI accent palette, assigned round-robin on insert
    pub color_index: usize,
}

impl Event {
    /// Create an event; the color is assigned when it enters a [`Schedule`]
    pub fn new(
        day: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            day,
            title: title.into(),
            description: description.into(),
            time: time.into(),
            color_index: 0,
        }
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day number as displayed
    pub day: u32,
    /// False for leading/trailing fill days from the adjacent months
    pub in_month: bool,
}

/// A year/month pair with grid and stepping arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl MonthView {
    /// The month containing today
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self { year: today.year(), month: today.month() }
    }

    /// Header label, e.g. "March 2023"
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    /// Number of days in this month
    pub fn day_count(&self) -> u32 {
        let (next_year, next_month) =
            if self.month == 12 { (self.year + 1, 1) } else { (self.year, self.month + 1) };
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
        match (first, next) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 30,
        }
    }

    /// The previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// The next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Sunday-first grid of whole weeks covering this month
    pub fn grid(&self) -> Vec<DayCell> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };

        let lead = first.weekday().num_days_from_sunday();
        let prev_days = self.prev().day_count();

        let mut cells = Vec::new();
        for n in 0..lead {
            cells.push(DayCell { day: prev_days - lead + n + 1, in_month: false });
        }
        for day in 1..=self.day_count() {
            cells.push(DayCell { day, in_month: true });
        }
        let mut trailing = 1;
        while cells.len() % 7 != 0 {
            cells.push(DayCell { day: trailing, in_month: false });
            trailing += 1;
        }
        cells
    }
}

/// The calendar screen's model: a month view, a day cursor, and events
#[derive(Debug)]
pub struct Schedule {
    /// Month currently displayed
    pub view: MonthView,
    /// Selected day of the displayed month, if any
    pub selected_day: Option<u32>,
    events: Vec<Event>,
}

impl Schedule {
    /// Start at the given month with pre-seeded events
    pub fn new(view: MonthView, seed: Vec<Event>) -> Self {
        let mut schedule = Self { view, selected_day: None, events: Vec::new() };
        for event in seed {
            schedule.push_event(event);
        }
        schedule
    }

    /// All events, insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events falling on a day of the month
    pub fn events_on(&self, day: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.day == day)
    }

    /// Whether any event falls on a day
    pub fn has_event(&self, day: u32) -> bool {
        self.events.iter().any(|e| e.day == day)
    }

    /// Show the previous month; the day cursor does not carry over
    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
        self.selected_day = None;
    }

    /// Show the next month
    pub fn next_month(&mut self) {
        self.view = self.view.next();
        self.selected_day = None;
    }

    /// Select a day of the displayed month; out-of-month days are ignored
    pub fn select_day(&mut self, day: u32) {
        if (1..=self.view.day_count()).contains(&day) {
            self.selected_day = Some(day);
        }
    }

    /// Move the day cursor by a signed number of days, staying in the month
    pub fn move_selection(&mut self, delta: i64) {
        let current = i64::from(self.selected_day.unwrap_or(1));
        let max = i64::from(self.view.day_count());
        let target = (current + delta).clamp(1, max);
        self.selected_day = Some(target as u32);
    }

    /// Add an event on the selected day; requires a title
    ///
    /// Returns false (and adds nothing) without a selected day or title.
    pub fn add_event(
        &mut self,
        title: &str,
        description: &str,
        time: impl Into<String>,
    ) -> bool {
        let Some(day) = self.selected_day else {
            return false;
        };
        if title.trim().is_empty() {
            return false;
        }
        self.push_event(Event::new(day, title.trim(), description.trim(), time));
        true
    }

    fn push_event(&mut self, mut event: Event) {
        event.color_index = self.events.len() % EVENT_COLOR_COUNT;
        self.events.push(event);
    }
}

/// Wall-clock time formatted the way event rows display it, e.g. "3:30 PM"
pub fn current_time_label() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn march_2023() -> MonthView {
        MonthView { year: 2023, month: 3 }
    }

    #[test]
    fn month_label_and_day_count() {
        assert_eq!(march_2023().label(), "March 2023");
        assert_eq!(march_2023().day_count(), 31);
        assert_eq!(MonthView { year: 2024, month: 2 }.day_count(), 29);
    }

    #[test]
    fn month_stepping_crosses_year_boundaries() {
        let jan = MonthView { year: 2023, month: 1 };
        assert_eq!(jan.prev(), MonthView { year: 2022, month: 12 });
        let dec = MonthView { year: 2023, month: 12 };
        assert_eq!(dec.next(), MonthView { year: 2024, month: 1 });
    }

    #[test]
    fn grid_is_whole_weeks_with_fill_days() {
        // March 1st 2023 was a Wednesday: three leading fill days
        let grid = march_2023().grid();
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid[0], DayCell { day: 26, in_month: false });
        assert_eq!(grid[3], DayCell { day: 1, in_month: true });
        assert_eq!(grid.iter().filter(|c| c.in_month).count(), 31);
        // Trailing cells restart at 1 for the next month
        assert_eq!(grid.last(), Some(&DayCell { day: 1, in_month: false }));
    }

    #[test]
    fn seeded_events_get_distinct_colors() {
        let schedule = Schedule::new(
            march_2023(),
            vec![
                Event::new(4, "a", "", "5:20 PM"),
                Event::new(12, "b", "", "3:30 PM"),
                Event::new(25, "c", "", "2:15 PM"),
            ],
        );
        let colors: Vec<usize> = schedule.events().iter().map(|e| e.color_index).collect();
        assert_eq!(colors, vec![0, 1, 2]);
    }

    #[test]
    fn add_event_requires_day_and_title() {
        let mut schedule = Schedule::new(march_2023(), Vec::new());
        assert!(!schedule.add_event("Standup", "", "9:00 AM"));

        schedule.select_day(8);
        assert!(!schedule.add_event("   ", "", "9:00 AM"));
        assert!(schedule.add_event("Standup", "team@example.com", "9:00 AM"));
        assert!(schedule.has_event(8));
        assert_eq!(schedule.events_on(8).count(), 1);
    }

    #[test]
    fn select_day_ignores_out_of_month_days() {
        let mut schedule = Schedule::new(march_2023(), Vec::new());
        schedule.select_day(42);
        assert_eq!(schedule.selected_day, None);
        schedule.select_day(31);
        assert_eq!(schedule.selected_day, Some(31));
    }

    #[test]
    fn move_selection_clamps_to_the_month() {
        let mut schedule = Schedule::new(march_2023(), Vec::new());
        schedule.select_day(30);
        schedule.move_selection(7);
        assert_eq!(schedule.selected_day, Some(31));
        schedule.move_selection(-40);
        assert_eq!(schedule.selected_day, Some(1));
    }

    #[test]
    fn changing_month_clears_the_day_cursor() {
        let mut schedule = Schedule::new(march_2023(), Vec::new());
        schedule.select_day(8);
        schedule.next_month();
        assert_eq!(schedule.view, MonthView { year: 2023, month: 4 });
        assert_eq!(schedule.selected_day, None);
    }
}
