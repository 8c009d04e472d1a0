//! Terminal user interface.
//!
//! This module provides:
//! - [`views`] - The picker, progress and banner screens as ratatui widgets
//! - [`TermRenderer`] and the raw-mode input/tick threads in [`terminal`]
//! - [`RecordingRenderer`] for tests
//! - Theme, status icons, the spinner and the OS picker state

pub mod icons;
pub mod mock;
pub mod picker;
pub mod spinner;
pub mod terminal;
pub mod theme;
pub mod views;

pub use icons::StatusKind;
pub use mock::{buffer_lines, RecordingRenderer};
pub use picker::Picker;
pub use spinner::Spinner;
pub use terminal::{map_key, spawn_input, spawn_ticker, RawModeGuard, TermRenderer};
pub use theme::{should_use_colors, DotstrapTheme};
pub use views::{draw, VIEW_HEIGHT};
