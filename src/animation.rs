use std::time::Duration;

/// Poll timeout of the event loop; one animation frame per tick.
pub const TICK_RATE: Duration = Duration::from_millis(120);

const SUCCESS_FRAMES: &[&[&str]] = &[
    &["", "", "  ·  ", "", ""],
    &["", "", "  ✓  ", "", ""],
    &["", "     ✓", "  ✓ ✓ ", "   ✓  ", ""],
    &["        ✓", "       ✓ ", "  ✓   ✓  ", "   ✓ ✓   ", "    ✓    "],
    &["        ✓", "       ✓ ", "  ✓   ✓  ", "   ✓ ✓   ", "    ✓    "],
];

const FAILURE_FRAMES: &[&[&str]] = &[
    &["", "  ✗ ✗  ", "   ✗   ", "  ✗ ✗  ", ""],
    &["", "    ✗ ✗", "     ✗ ", "    ✗ ✗", ""],
    &["", "✗ ✗    ", " ✗     ", "✗ ✗    ", ""],
    &["", "   ✗ ✗ ", "    ✗  ", "   ✗ ✗ ", ""],
    &["", "  ✗ ✗  ", "   ✗   ", "  ✗ ✗  ", ""],
];

/// Frame-based feedback shown after an answer is checked. It plays once
/// and then holds the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackAnimation {
    success: bool,
    frame: usize,
}

impl FeedbackAnimation {
    pub fn new(success: bool) -> Self {
        Self { success, frame: 0 }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    fn frames(&self) -> &'static [&'static [&'static str]] {
        if self.success {
            SUCCESS_FRAMES
        } else {
            FAILURE_FRAMES
        }
    }

    /// Advances one frame. Returns true when the visible frame changed.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.frame += 1;
        true
    }

    pub fn is_finished(&self) -> bool {
        self.frame + 1 >= self.frames().len()
    }

    pub fn current_frame(&self) -> &'static [&'static str] {
        let frames = self.frames();
        frames[self.frame.min(frames.len() - 1)]
    }
}
