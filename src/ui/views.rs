//! The three screens as ratatui widgets.

use std::time::Duration;

use indicatif::HumanDuration;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, Paragraph, StatefulWidget, Widget, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::platform::OsKind;
use crate::runner::{RunPhase, RunState};

use super::icons::StatusKind;
use super::picker::Picker;
use super::theme::DotstrapTheme;

/// Title of the OS picker.
pub const PICKER_TITLE: &str = "Select Your Operating System";

/// First line of the success banner.
pub const SUCCESS_BANNER: &str = "Installation complete!";

/// Rows the tallest screen needs: the Linux progress view with a warning.
pub const VIEW_HEIGHT: u16 = 14;

const NEXT_STEPS: [&str; 3] = [
    "Restart your terminal",
    "Run 'nvim' to start Neovim",
    "LazyVim will install plugins on first run",
];

/// Draw whatever `app` currently shows. Nothing once the user quit.
pub fn draw(frame: &mut Frame, app: &App, theme: &DotstrapTheme) {
    if app.has_quit() {
        return;
    }
    let area = frame.area();
    match app.screen() {
        Screen::Picker(picker) => frame.render_widget(PickerView { picker, theme }, area),
        Screen::Install { os, state, .. } => match state.phase() {
            RunPhase::Succeeded => frame.render_widget(
                SuccessBanner {
                    elapsed: state.elapsed(),
                    theme,
                },
                area,
            ),
            RunPhase::Failed(error) => frame.render_widget(
                ErrorBanner {
                    message: &error,
                    theme,
                },
                area,
            ),
            RunPhase::Idle | RunPhase::Running(_) => frame.render_widget(
                ProgressView {
                    os: *os,
                    state,
                    spinner: app.spinner().frame(),
                    theme,
                },
                area,
            ),
        },
    }
}

/// The OS picker.
pub struct PickerView<'a> {
    pub picker: &'a Picker,
    pub theme: &'a DotstrapTheme,
}

impl Widget for PickerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let options = self.picker.options();
        let [title, list, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(options.len() as u16),
            Constraint::Length(2),
        ])
        .areas(area);

        Paragraph::new(theme.header_line(PICKER_TITLE)).render(title, buf);

        let width = options.iter().map(|os| os.label().len()).max().unwrap_or(0);
        let items: Vec<ListItem> = options
            .iter()
            .map(|os| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<width$}", os.label(), width = width)),
                    Span::raw("  "),
                    Span::styled(os.description(), theme.dim),
                ]))
            })
            .collect();
        let mut state = self.picker.list_state().clone();
        StatefulWidget::render(
            List::new(items)
                .highlight_symbol("› ")
                .highlight_style(theme.highlight),
            list,
            buf,
            &mut state,
        );

        Paragraph::new(vec![
            Line::default(),
            Line::styled("↑/↓ move · enter select · q quit", theme.hint),
        ])
        .render(hint, buf);
    }
}

/// Live progress while steps run.
pub struct ProgressView<'a> {
    pub os: OsKind,
    pub state: &'a RunState,
    /// Current spinner frame.
    pub spinner: &'a str,
    pub theme: &'a DotstrapTheme,
}

impl ProgressView<'_> {
    fn step_item(&self, index: usize) -> Option<ListItem<'static>> {
        let theme = self.theme;
        let step = self.state.step(index)?;
        let mut spans = vec![Span::raw("  ")];
        if index < self.state.current_step() {
            spans.push(StatusKind::Success.span(theme));
            spans.push(Span::raw(format!(" {}", step.name())));
        } else if self.state.in_flight() == Some(index) {
            spans.push(StatusKind::Running.paint(theme, self.spinner));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(step.name().to_string(), theme.highlight));
            spans.push(Span::styled(format!(" {}", step.description()), theme.dim));
        } else {
            spans.push(StatusKind::Pending.span(theme));
            spans.push(Span::styled(format!(" {}", step.name()), theme.dim));
        }
        Some(ListItem::new(Line::from(spans)))
    }
}

impl Widget for ProgressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let count = self.state.steps().len();
        let [header, steps, progress, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(count as u16),
            Constraint::Length(if self.state.progress().is_some() { 2 } else { 0 }),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            StatusKind::Running.paint(theme, self.spinner),
            Span::raw(" "),
            Span::styled(
                format!("Installing dotfiles for {}...", self.os.label()),
                theme.highlight,
            ),
        ]))
        .render(header, buf);

        let items: Vec<ListItem> = (0..count).filter_map(|i| self.step_item(i)).collect();
        Widget::render(List::new(items), steps, buf);

        if let Some(message) = self.state.progress() {
            Paragraph::new(vec![
                Line::default(),
                Line::from(vec![
                    StatusKind::Warning.span(theme),
                    Span::styled(format!(" {}", message), theme.warning),
                ]),
            ])
            .wrap(Wrap { trim: true })
            .render(progress, buf);
        }
    }
}

/// Banner shown after every step succeeded.
pub struct SuccessBanner<'a> {
    pub elapsed: Option<Duration>,
    pub theme: &'a DotstrapTheme,
}

impl Widget for SuccessBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut lines = vec![
            Line::from(vec![
                StatusKind::Success.span(theme),
                Span::styled(format!(" {}", SUCCESS_BANNER), theme.success),
            ]),
            Line::default(),
            Line::styled("Next steps:", theme.highlight),
        ];
        lines.extend(
            NEXT_STEPS
                .iter()
                .enumerate()
                .map(|(i, step)| Line::raw(format!("  {}. {}", i + 1, step))),
        );
        if let Some(elapsed) = self.elapsed {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Finished in {}", HumanDuration(elapsed)),
                theme.duration,
            ));
        }
        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}

/// One-line banner for a failed run.
pub struct ErrorBanner<'a> {
    pub message: &'a str,
    pub theme: &'a DotstrapTheme,
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            StatusKind::Failed.span(self.theme),
            Span::styled(format!(" Error: {}", self.message), self.theme.error),
        ]))
        .wrap(Wrap { trim: false })
        .render(area, buf);
    }
}
