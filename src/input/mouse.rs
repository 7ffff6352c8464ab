use glam::Vec2;

/// Tracks the cursor position between frames for mouse-look.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CursorTracker {
    /// Latest cursor position in physical pixels.
    current: Vec2,
    /// Cursor position at the previous frame (the mouse-look baseline).
    last: Vec2,
    /// Window size used to normalize deltas.
    window_size: Vec2,
}

impl CursorTracker {
    pub(crate) fn new() -> Self {
        Self {
            current: Vec2::ZERO,
            last: Vec2::ZERO,
            window_size: Vec2::ONE,
        }
    }

    pub(crate) fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.current = Vec2::new(x, y);
    }

    pub(crate) fn handle_resize(&mut self, width: u32, height: u32) {
        self.window_size = Vec2::new(width as f32, height as f32);
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.current
    }

    /// Move the baseline to the current position so the next delta starts
    /// from here.
    pub(crate) fn rebase(&mut self) {
        self.last = self.current;
    }

    /// Movement since the last frame as a fraction of the window size, then
    /// advance the baseline. A zero-sized window yields no movement.
    pub(crate) fn take_normalized_delta(&mut self) -> Vec2 {
        let delta = self.current - self.last;
        self.last = self.current;
        if self.window_size.min_element() <= 0.0 {
            return Vec2::ZERO;
        }
        delta / self.window_size
    }
}
