//! Player Action Events
//!
//! The original prototype received input through engine callbacks; here the
//! same information arrives as explicit events. The host forwards whatever
//! its input layer produces, and [`PlayerInputState`] flattens it into the
//! per-tick state the character motor reads: a move axis and one-frame jump
//! press/release edges.

use glam::Vec2;

/// A discrete input event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Movement axis changed (x = strafe, y = forward). Range [-1, 1] per axis.
    Move(Vec2),
    /// Jump button went down this tick.
    JumpPressed,
    /// Jump button went up this tick.
    JumpReleased,
}

/// Flattened per-tick input state for the character motor.
///
/// Edges (`jump_pressed`, `jump_released`) persist until [`clear_edges`] is
/// called, so the intended flow is: apply events, run the motor update, clear.
///
/// [`clear_edges`]: PlayerInputState::clear_edges
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInputState {
    /// Current movement axis (x = strafe right, y = forward)
    pub move_axis: Vec2,
    /// Jump button went down since the last `clear_edges`
    pub jump_pressed: bool,
    /// Jump button went up since the last `clear_edges`
    pub jump_released: bool,
}

impl PlayerInputState {
    /// Create a new input state with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event from the host.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(axis) => self.move_axis = axis,
            InputEvent::JumpPressed => self.jump_pressed = true,
            InputEvent::JumpReleased => self.jump_released = true,
        }
    }

    /// Whether the move axis is large enough to count as deliberate movement.
    ///
    /// Matches the motor's 0.1 stick deadband.
    pub fn is_moving(&self) -> bool {
        self.move_axis.length() > 0.1
    }

    /// Clear the one-frame jump edges. Call after the motor update each tick.
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.jump_released = false;
    }

    /// Reset everything, including the move axis.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
