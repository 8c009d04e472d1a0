//! Renderer double for tests.
//!
//! `RecordingRenderer` implements [`Renderer`] by drawing each frame onto a
//! ratatui [`TestBackend`] and keeping the resulting rows as plain text.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dotstrap::app::{App, Renderer};
//! use dotstrap::environment::FakeEnvironment;
//! use dotstrap::platform::PlatformProfile;
//! use dotstrap::steps::Step;
//! use dotstrap::ui::RecordingRenderer;
//!
//! let app = App::new(
//!     Arc::new(FakeEnvironment::new("/home/dev")),
//!     |_: &PlatformProfile| Vec::<Step>::new(),
//! );
//! let mut renderer = RecordingRenderer::new();
//! renderer.render(&app).unwrap();
//! assert!(renderer.last_frame_contains("Select Your Operating System"));
//! ```

use std::fmt::Display;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::app::{App, Renderer};
use crate::error::{DotstrapError, Result};

use super::theme::DotstrapTheme;
use super::views::{draw, VIEW_HEIGHT};

/// Rows of `buf` as text, trailing blanks trimmed from each row and
/// trailing empty rows dropped.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn draw_failed(err: impl Display) -> DotstrapError {
    DotstrapError::Other(anyhow::anyhow!("drawing to the test backend failed: {}", err))
}

/// Captures rendered frames.
#[derive(Debug)]
pub struct RecordingRenderer {
    width: u16,
    height: u16,
    frames: Vec<Vec<String>>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::with_size(100, VIEW_HEIGHT)
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw onto a `width` x `height` screen.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    /// Every frame, oldest first.
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Whether any line of the most recent frame contains `text`.
    pub fn last_frame_contains(&self, text: &str) -> bool {
        self.last_frame()
            .map(|lines| lines.iter().any(|l| l.contains(text)))
            .unwrap_or(false)
    }

    /// Whether any frame ever contained `text`.
    pub fn ever_contained(&self, text: &str) -> bool {
        self.frames
            .iter()
            .flatten()
            .any(|line| line.contains(text))
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, app: &App) -> Result<()> {
        let theme = DotstrapTheme::plain();
        let mut terminal =
            Terminal::new(TestBackend::new(self.width, self.height)).map_err(draw_failed)?;
        terminal
            .draw(|frame| draw(frame, app, &theme))
            .map_err(draw_failed)?;
        self.frames.push(buffer_lines(terminal.backend().buffer()));
        Ok(())
    }
}
