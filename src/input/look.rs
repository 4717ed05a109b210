//! Mouse-Look Delta Accumulation
//!
//! Raw mouse motion arrives from the host as it happens; the camera wants one
//! delta per tick. [`LookAccumulator`] collects motion between ticks and
//! hands it over atomically. Deltas are cleared when the cursor capture state
//! drops so the camera does not jump on re-capture.

/// Accumulates raw mouse-look deltas between frames.
#[derive(Debug, Clone, Default)]
pub struct LookAccumulator {
    /// Accumulated horizontal delta since last consume
    delta_x: f32,
    /// Accumulated vertical delta since last consume
    delta_y: f32,
    /// Whether the cursor is currently captured for look input
    captured: bool,
}

impl LookAccumulator {
    /// Create a new accumulator with zero deltas, cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw mouse motion. Call from the host event loop.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Take the accumulated delta and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Peek at the accumulated delta without consuming it.
    #[inline]
    pub fn peek(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    /// Update the capture state. Losing capture clears any pending delta.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Whether the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}
