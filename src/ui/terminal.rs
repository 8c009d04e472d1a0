//! Terminal plumbing: raw mode, input and tick threads, the inline viewport.

use std::io::{self, Stdout, Write};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::app::{App, Event, Key, Renderer};
use crate::error::Result;

use super::theme::DotstrapTheme;
use super::views::{draw, VIEW_HEIGHT};

/// Keeps the terminal in raw mode for as long as it lives.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        tracing::debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("Failed to restore terminal: {}", err);
        }
    }
}

/// Reduce a terminal key event to a [`Key`].
pub fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char('q') => Key::Quit,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// How long the input thread waits for a key before releasing the terminal
/// reader, which ratatui also needs when it re-reads the cursor position.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Forward key presses to the event loop until it goes away.
pub fn spawn_input(events: Sender<Event>) -> Result<()> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || loop {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    tracing::warn!("Polling terminal input failed: {}", err);
                    break;
                }
            }
            match event::read() {
                Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if events.send(Event::Key(map_key(key))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("Reading terminal input failed: {}", err);
                    break;
                }
            }
        })?;
    Ok(())
}

/// Post [`Event::Tick`] every `interval` until the event loop goes away.
pub fn spawn_ticker(events: Sender<Event>, interval: Duration) -> Result<()> {
    thread::Builder::new()
        .name("ticker".into())
        .spawn(move || loop {
            thread::sleep(interval);
            if events.send(Event::Tick).is_err() {
                break;
            }
        })?;
    Ok(())
}

/// Draws into an inline viewport reserved below the cursor, so the final
/// banner stays in the scrollback after exit.
pub struct TermRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: DotstrapTheme,
}

impl TermRenderer {
    pub fn new(theme: DotstrapTheme) -> Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(VIEW_HEIGHT),
            },
        )?;
        Ok(Self { terminal, theme })
    }

    /// Park the cursor under the viewport so the shell prompt lands below
    /// the last frame instead of on top of it.
    pub fn finish(&mut self) -> Result<()> {
        let bottom = self.terminal.get_frame().area().bottom();
        self.terminal
            .set_cursor_position(Position::new(0, bottom.saturating_sub(1)))?;
        self.terminal.show_cursor()?;
        let out = self.terminal.backend_mut();
        write!(out, "\r\n")?;
        Write::flush(out)?;
        Ok(())
    }
}

impl Renderer for TermRenderer {
    fn render(&mut self, app: &App) -> Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|frame| draw(frame, app, theme))?;
        Ok(())
    }
}
