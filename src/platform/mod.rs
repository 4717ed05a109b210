//! Platform Module
//!
//! Ping-pong moving platforms. A [`PlatformMover`] walks between two fixed
//! waypoints, pausing at each end, and exposes its frame-derived velocity so
//! characters standing on it can move with it.

pub mod mover;

pub use mover::{PlatformMover, PlatformPhase};
