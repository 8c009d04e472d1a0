//! Status icons for the step list.

use ratatui::style::Style;
use ratatui::text::Span;

use super::theme::DotstrapTheme;

/// Status of one row in the progress view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Step completed successfully.
    Success,
    /// The run failed.
    Failed,
    /// Step has not run yet.
    Pending,
    /// Step is running (the spinner replaces this icon while animated).
    Running,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Pending => "◌",
            Self::Running => "◆",
            Self::Warning => "⚠",
        }
    }

    /// This status's style under `theme`.
    pub fn style(self, theme: &DotstrapTheme) -> Style {
        match self {
            Self::Success => theme.success,
            Self::Failed => theme.error,
            Self::Pending => theme.dim,
            Self::Running => theme.info,
            Self::Warning => theme.warning,
        }
    }

    /// The styled icon.
    pub fn span(self, theme: &DotstrapTheme) -> Span<'static> {
        self.paint(theme, self.icon())
    }

    /// Arbitrary text in this status's style.
    pub fn paint(self, theme: &DotstrapTheme, text: impl Into<String>) -> Span<'static> {
        Span::styled(text.into(), self.style(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Pending.icon(), "◌");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn spans_take_the_status_style() {
        let theme = DotstrapTheme::new();
        let span = StatusKind::Warning.span(&theme);
        assert_eq!(span.content, "⚠");
        assert_eq!(span.style, theme.warning);
        assert_eq!(StatusKind::Running.paint(&theme, "⠙").style, theme.info);
    }
}
