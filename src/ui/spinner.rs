//! Tick-driven spinner.

/// Braille spinner frames.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A spinner advanced explicitly, one frame per tick event.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// The current frame.
    pub fn frame(&self) -> &'static str {
        FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_frames() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.frame(), "⠋");
        spinner.tick();
        assert_eq!(spinner.frame(), "⠙");
        for _ in 0..FRAMES.len() - 1 {
            spinner.tick();
        }
        assert_eq!(spinner.frame(), "⠋");
    }
}
