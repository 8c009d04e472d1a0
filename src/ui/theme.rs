//! Visual theme and styling.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// dotstrap's visual theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotstrapTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for running elements and the picker cursor (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for titles (magenta bold).
    pub header: Style,
    /// Style for durations (dim).
    pub duration: Style,
    /// Style for key hints (magenta dim).
    pub hint: Style,
}

impl Default for DotstrapTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DotstrapTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().fg(Color::Green),
            warning: Style::new().fg(Color::Indexed(208)),
            error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            info: Style::new().fg(Color::Magenta),
            dim: Style::new().add_modifier(Modifier::DIM),
            highlight: Style::new().add_modifier(Modifier::BOLD),
            header: Style::new()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            duration: Style::new().add_modifier(Modifier::DIM),
            hint: Style::new()
                .fg(Color::Magenta)
                .add_modifier(Modifier::DIM),
        }
    }

    /// Create a theme without colors (for --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            duration: Style::new(),
            hint: Style::new(),
        }
    }

    /// A title line.
    pub fn header_line(&self, title: &str) -> Line<'static> {
        Line::styled(title.to_string(), self.header)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_styling() {
        let theme = DotstrapTheme::plain();
        assert_eq!(theme.error, Style::new());
        assert_eq!(theme.header_line("Title").to_string(), "Title");
    }

    #[test]
    fn default_theme_colors_errors() {
        let theme = DotstrapTheme::default();
        assert_eq!(theme.error.fg, Some(Color::Red));
        assert!(theme.error.add_modifier.contains(Modifier::BOLD));
        assert_ne!(theme, DotstrapTheme::plain());
    }
}
