//! Player Module
//!
//! The character motor: camera-relative movement with asymmetric
//! acceleration, an analytically derived jump arc, coyote time, jump
//! buffering, and platform velocity inheritance.

pub mod motor;

pub use motor::CharacterMotor;
