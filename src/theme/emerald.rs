//! Emerald theme implementation
//!
//! A dark palette with the green accent the rest of the UI keys progress
//! and success states off.

use ratatui::style::Color;

use super::Theme;

/// Emerald color palette
pub const EMERALD: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(17, 24, 28),   // #11181c
    bg_secondary: Color::Rgb(24, 33, 38), // #182126
    bg_tertiary: Color::Rgb(39, 52, 58),  // #27343a

    // Foreground colors
    fg_primary: Color::Rgb(220, 228, 231),   // #dce4e7
    fg_secondary: Color::Rgb(173, 186, 191), // #adbabf
    fg_muted: Color::Rgb(106, 120, 126),     // #6a787e

    // Accent colors
    accent_primary: Color::Rgb(52, 211, 153),  // #34d399
    accent_secondary: Color::Rgb(94, 234, 212), // #5eead4

    // Semantic colors
    success: Color::Rgb(34, 197, 94),   // #22c55e
    warning: Color::Rgb(234, 179, 8),   // #eab308
    error: Color::Rgb(239, 68, 68),     // #ef4444
    info: Color::Rgb(56, 189, 248),     // #38bdf8

    // Event palette for the calendar
    event_colors: [
        Color::Rgb(16, 185, 129),  // emerald
        Color::Rgb(249, 115, 22),  // orange
        Color::Rgb(14, 165, 233),  // sky
        Color::Rgb(168, 85, 247),  // purple
        Color::Rgb(236, 72, 153),  // pink
    ],

    // UI elements
    border: Color::Rgb(39, 52, 58),          // #27343a
    border_focused: Color::Rgb(52, 211, 153), // #34d399
    selection: Color::Rgb(31, 61, 51),       // #1f3d33
    cursor: Color::Rgb(220, 228, 231),       // #dce4e7
};

// Workaround for const String
impl Theme {
    pub fn emerald() -> Self {
        Theme { name: "Emerald".to_string(), ..EMERALD }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emerald_has_correct_name() {
        let theme = Theme::emerald();
        assert_eq!(theme.name, "Emerald");
    }

    #[test]
    fn emerald_colors_are_rgb() {
        let theme = Theme::emerald();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
    }

    #[test]
    fn event_palette_matches_the_calendar_cycle() {
        let theme = Theme::emerald();
        assert_eq!(theme.event_colors.len(), crate::calendar::EVENT_COLOR_COUNT);
    }
}
