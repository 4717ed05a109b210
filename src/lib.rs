//! Third-Person Prototype Core
//!
//! The gameplay logic of a small third-person platforming prototype, kept
//! engine-agnostic: a follow camera with obstruction avoidance, ping-pong
//! moving platforms, and a character motor with an analytically derived jump
//! arc, coyote time, jump buffering, and platform riding.
//!
//! Each actor is a plain struct advanced once per tick by its `update`
//! method. The host engine owns the loop: it feeds input and delta time in,
//! applies the returned velocities/poses through its own collision solver,
//! and mirrors the results back. The only inbound seam is
//! [`scene::SceneRaycast`], the ray query both the camera and the motor use.
//!
//! A typical tick:
//!
//! ```rust,ignore
//! platform.update(dt);
//! let velocity = motor.update(dt, &input, Some(camera.view_forward()), grounded, &scene);
//! // ... host moves the character by `velocity * dt`, resolves collisions,
//! // then calls motor.set_position(resolved) and reports `grounded` ...
//! camera.update(dt, mouse_delta, motor.position(), &scene);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod platform;
pub mod player;
pub mod scene;

pub use camera::FollowCamera;
pub use config::{CameraConfig, ConfigError, MotorConfig, PlatformConfig, TuningFile};
pub use input::{CursorGrab, InputEvent, LookAccumulator, PlayerInputState};
pub use platform::{PlatformMover, PlatformPhase};
pub use player::CharacterMotor;
pub use scene::{EmptyScene, RayHit, SceneRaycast};
