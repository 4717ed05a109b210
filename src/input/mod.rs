//! Input Module
//!
//! Platform-agnostic input for the prototype actors. Nothing here touches a
//! windowing system: the host translates its own events into [`InputEvent`]s
//! and raw mouse deltas, and the actors consume plain state each tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use platform_proto::input::{InputEvent, PlayerInputState, LookAccumulator};
//! use glam::Vec2;
//!
//! let mut input = PlayerInputState::new();
//! let mut look = LookAccumulator::new();
//!
//! // Event loop:
//! input.apply(InputEvent::Move(Vec2::new(0.0, 1.0)));
//! input.apply(InputEvent::JumpPressed);
//! look.accumulate(4.0, -1.5);
//!
//! // Update loop, once per tick:
//! let (dx, dy) = look.consume();
//! // ... feed input + (dx, dy) to the motor and camera ...
//! input.clear_edges();
//! ```

pub mod actions;
pub mod cursor;
pub mod look;

pub use actions::{InputEvent, PlayerInputState};
pub use cursor::CursorGrab;
pub use look::LookAccumulator;
