//! Character Motor
//!
//! Grounded/airborne movement for a third-person character. Each tick the
//! motor turns input plus scene queries into a single velocity vector; the
//! host hands that to its collision-aware move primitive and reports the
//! resolved position back via [`CharacterMotor::set_position`].
//!
//! # Jump Arc
//!
//! Gravity and jump velocity are not tuned directly. They are derived from
//! two designer-facing parameters, apex height `h` and total jump duration
//! `d` (apex at `d/2`), via projectile kinematics:
//!
//! ```text
//! gravity       = -2h / (d/2)^2
//! jump_velocity = |gravity| * (d/2)
//! ```
//!
//! so a jump always reaches exactly `h` meters at `d/2` seconds regardless
//! of tick rate. Example: h = 4, d = 0.8 gives gravity = -50, velocity = 20.
//!
//! # Jump Forgiveness
//!
//! Two countdowns gate the jump. The coyote timer is refreshed while
//! grounded and runs down in the air; the buffer timer starts on any jump
//! press. A jump fires only while both are positive and consumes both, so a
//! press slightly before landing or slightly after walking off a ledge still
//! registers.

use glam::{Quat, Vec2, Vec3};

use crate::config::MotorConfig;
use crate::input::PlayerInputState;
use crate::scene::SceneRaycast;

/// Movement below this magnitude does not rotate the character (prevents
/// facing jitter at rest).
const TURN_THRESHOLD: f32 = 0.01;

/// Third-person character motor.
///
/// Owns its own velocity state; position is owned by the host's collision
/// resolver and mirrored here for the ground probe.
#[derive(Debug, Clone)]
pub struct CharacterMotor {
    /// Tuning parameters
    config: MotorConfig,
    /// Gravity derived from jump_height/jump_duration (negative, m/s^2)
    gravity: f32,
    /// Take-off velocity derived from jump_height/jump_duration (m/s)
    jump_velocity: f32,

    /// Current world position, mirrored from the host after each move
    position: Vec3,
    /// Facing rotation, slerped toward the movement direction
    rotation: Quat,
    /// Horizontal velocity (XZ plane, y always zero)
    horizontal_velocity: Vec3,
    /// Vertical velocity (positive = up)
    vertical_velocity: f32,
    /// Whether the character was grounded on the last update
    grounded: bool,
    /// Remaining coyote grace (seconds)
    coyote_remaining: f32,
    /// Remaining jump-buffer window (seconds)
    buffer_remaining: f32,
    /// Velocity inherited from the standing surface this tick (not accumulated)
    platform_velocity: Vec3,
}

impl CharacterMotor {
    /// Create a motor at the origin with the given tuning.
    pub fn new(config: MotorConfig) -> Self {
        Self::with_position(config, Vec3::ZERO)
    }

    /// Create a motor at a specific starting position.
    pub fn with_position(config: MotorConfig, position: Vec3) -> Self {
        let (gravity, jump_velocity) = derive_jump(config.jump_height, config.jump_duration);
        Self {
            config,
            gravity,
            jump_velocity,
            position,
            rotation: Quat::IDENTITY,
            horizontal_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            grounded: true,
            coyote_remaining: 0.0,
            buffer_remaining: 0.0,
            platform_velocity: Vec3::ZERO,
        }
    }

    /// Swap in a new tuning; re-derives gravity and jump velocity.
    pub fn set_config(&mut self, config: MotorConfig) {
        let (gravity, jump_velocity) = derive_jump(config.jump_height, config.jump_duration);
        self.config = config;
        self.gravity = gravity;
        self.jump_velocity = jump_velocity;
    }

    /// Current tuning.
    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// Derived gravity (negative, m/s^2).
    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Derived take-off velocity (m/s).
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        self.jump_velocity
    }

    /// Current world position (as last reported by the host).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Report the collision-resolved position back after a move.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current facing rotation.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Facing direction (yaw 0 faces -Z).
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Current horizontal velocity (XZ plane).
    #[inline]
    pub fn horizontal_velocity(&self) -> Vec3 {
        self.horizontal_velocity
    }

    /// Current vertical velocity (positive = up).
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Velocity inherited from the standing surface on the last tick.
    #[inline]
    pub fn platform_velocity(&self) -> Vec3 {
        self.platform_velocity
    }

    /// Whether the character was grounded on the last update.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Remaining coyote grace window (seconds).
    #[inline]
    pub fn coyote_remaining(&self) -> f32 {
        self.coyote_remaining
    }

    /// Remaining jump-buffer window (seconds).
    #[inline]
    pub fn buffer_remaining(&self) -> f32 {
        self.buffer_remaining
    }

    /// Advance the motor one tick and return the velocity to hand to the
    /// host's collision-aware move.
    ///
    /// # Arguments
    /// * `dt` - Tick duration in seconds
    /// * `input` - Flattened input state (apply events before, clear edges after)
    /// * `camera_forward` - The camera's forward vector, or `None` when no
    ///   camera reference exists (movement degrades to zero)
    /// * `grounded` - The host engine's grounded check for this tick
    /// * `scene` - Ray query used for the standing-surface probe
    pub fn update(
        &mut self,
        dt: f32,
        input: &PlayerInputState,
        camera_forward: Option<Vec3>,
        grounded: bool,
        scene: &impl SceneRaycast,
    ) -> Vec3 {
        // Clamp delta time to prevent physics explosions
        let dt = dt.clamp(0.0001, 0.1);

        self.grounded = grounded;

        // Landing kills any residual downward velocity.
        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = 0.0;
        }

        // Timers: coyote refreshes on ground, runs down in the air; the
        // buffer always runs down and is restarted by a press edge.
        if grounded {
            self.coyote_remaining = self.config.coyote_time;
        } else {
            self.coyote_remaining = (self.coyote_remaining - dt).max(0.0);
        }
        self.buffer_remaining = (self.buffer_remaining - dt).max(0.0);
        if input.jump_pressed {
            self.buffer_remaining = self.config.jump_buffer_time;
        }

        // Standing-surface probe, re-queried every grounded tick so the
        // character can hop between platforms without any handoff state.
        self.platform_velocity = if grounded {
            scene
                .raycast(self.position, Vec3::NEG_Y, self.config.ground_probe_depth)
                .map(|hit| hit.surface_velocity)
                .unwrap_or(Vec3::ZERO)
        } else {
            Vec3::ZERO
        };

        let move_direction = camera_relative_direction(input.move_axis, camera_forward);
        self.turn_toward(move_direction, dt);
        self.apply_horizontal(move_direction, input.is_moving(), grounded, dt);
        self.apply_jump(input);

        // Gravity, with the fall speed clamped so the character never drops
        // faster than max_fall_speed.
        self.vertical_velocity += self.gravity * dt;
        self.vertical_velocity = self.vertical_velocity.max(self.config.max_fall_speed);

        self.horizontal_velocity + Vec3::Y * self.vertical_velocity + self.platform_velocity
    }

    /// Slerp the facing toward the movement direction.
    fn turn_toward(&mut self, direction: Vec3, dt: f32) {
        if direction.length() < TURN_THRESHOLD {
            return;
        }
        // Yaw such that facing() == direction (yaw 0 faces -Z).
        let target_yaw = (-direction.x).atan2(-direction.z);
        let target = Quat::from_rotation_y(target_yaw);
        let t = (self.config.turn_speed * dt).min(1.0);
        self.rotation = self.rotation.slerp(target, t);
    }

    /// Rate-limited approach toward the desired horizontal velocity.
    ///
    /// This is deliberately linear convergence (`move_towards`), not a
    /// spring: acceleration while moving, deceleration toward zero when the
    /// input is released, and only half acceleration while airborne.
    fn apply_horizontal(&mut self, direction: Vec3, moving: bool, grounded: bool, dt: f32) {
        let desired = direction * self.config.max_speed;
        let accel = if grounded {
            self.config.accel
        } else {
            self.config.accel * 0.5
        };

        self.horizontal_velocity = if moving {
            self.horizontal_velocity.move_towards(desired, accel * dt)
        } else {
            self.horizontal_velocity
                .move_towards(Vec3::ZERO, self.config.decel * dt)
        };
    }

    /// Fire a buffered jump when eligible; apply one-shot early-release cut.
    fn apply_jump(&mut self, input: &PlayerInputState) {
        if self.buffer_remaining > 0.0 && self.coyote_remaining > 0.0 {
            self.vertical_velocity = self.jump_velocity;
            self.buffer_remaining = 0.0;
            self.coyote_remaining = 0.0;
        }

        // Releasing jump while still ascending halves the remaining ascent,
        // once per release edge (variable jump height).
        if input.jump_released && self.vertical_velocity > 0.0 {
            self.vertical_velocity *= 0.5;
        }
    }
}

/// Derive (gravity, jump_velocity) from apex height and total duration.
fn derive_jump(height: f32, duration: f32) -> (f32, f32) {
    let half = duration * 0.5;
    let gravity = -(2.0 * height) / (half * half);
    let jump_velocity = gravity.abs() * half;
    (gravity, jump_velocity)
}

/// Project the 2D move axis into world space relative to the camera's yaw.
///
/// Pitch and roll are discarded so camera tilt never pushes the character
/// into the ground; diagonals are normalized so they are no faster than
/// cardinal movement. A missing camera reference yields zero.
fn camera_relative_direction(axis: Vec2, camera_forward: Option<Vec3>) -> Vec3 {
    let Some(forward) = camera_forward else {
        return Vec3::ZERO;
    };

    let flat_forward = Vec3::new(forward.x, 0.0, forward.z);
    if flat_forward.length_squared() < 1e-6 {
        // Camera looking straight up or down: no usable heading.
        return Vec3::ZERO;
    }
    let flat_forward = flat_forward.normalize();
    let right = flat_forward.cross(Vec3::Y).normalize();

    (flat_forward * axis.y + right * axis.x).normalize_or_zero()
}
