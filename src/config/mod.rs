//! Config Module
//!
//! Centralized tuning for all three actors. Every field is a designer-facing
//! knob; `Default` carries the values the prototype shipped with. The
//! aggregate [`TuningFile`] round-trips through JSON so tunings can be edited
//! without recompiling.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tuning for the follow camera.
///
/// Angles are in degrees. Pitch is positive looking up, so the default range
/// of [-60, 5] lets the camera swing from well above the player (looking
/// down) to just below the pivot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Horizontal look sensitivity (degrees per pixel of mouse motion)
    pub sensitivity_x: f32,
    /// Vertical look sensitivity (degrees per pixel of mouse motion)
    pub sensitivity_y: f32,
    /// Lowest allowed pitch in degrees (most downward-looking)
    pub min_pitch: f32,
    /// Highest allowed pitch in degrees (most upward-looking)
    pub max_pitch: f32,
    /// How far behind the pivot the camera sits when unobstructed (meters)
    pub default_distance: f32,
    /// Height of the camera pivot above the player position (meters)
    pub pivot_height: f32,
    /// Rate at which the rendered camera position eases toward its target
    pub follow_smoothing: f32,
    /// Rate at which the pivot eases toward the player (softens stairs/bumps)
    pub pivot_smoothing: f32,
    /// Rate at which the camera distance eases when obstructed or recovering
    pub obstruction_smoothing: f32,
    /// Gap kept between the camera and obstructing geometry (meters)
    pub obstruction_margin: f32,
    /// Camera position changes smaller than this are ignored (meters)
    pub deadzone: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity_x: 0.3,
            sensitivity_y: 0.3,
            min_pitch: -60.0,
            max_pitch: 5.0,
            default_distance: 5.0,
            pivot_height: 1.5,
            follow_smoothing: 10.0,
            pivot_smoothing: 5.0,
            obstruction_smoothing: 15.0,
            obstruction_margin: 0.1,
            deadzone: 0.1,
        }
    }
}

/// Tuning for the character motor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotorConfig {
    /// Top horizontal speed (m/s)
    pub max_speed: f32,
    /// Horizontal acceleration while grounded (m/s^2); halved while airborne
    pub accel: f32,
    /// Horizontal deceleration when there is no input (m/s^2)
    pub decel: f32,
    /// How quickly the character turns to face its movement direction
    pub turn_speed: f32,
    /// Apex height of a full jump (meters)
    pub jump_height: f32,
    /// Total duration of a full jump, apex at half this time (seconds)
    pub jump_duration: f32,
    /// Fall speed clamp, negative (m/s)
    pub max_fall_speed: f32,
    /// Grace window for jumping after walking off a ledge (seconds)
    pub coyote_time: f32,
    /// Window during which an early jump press is remembered (seconds)
    pub jump_buffer_time: f32,
    /// Depth of the downward standing-surface probe (meters)
    pub ground_probe_depth: f32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            accel: 10.0,
            decel: 15.0,
            turn_speed: 10.0,
            jump_height: 2.0,
            jump_duration: 0.5,
            max_fall_speed: -20.0,
            coyote_time: 0.15,
            jump_buffer_time: 0.15,
            ground_probe_depth: 1.1,
        }
    }
}

/// Tuning for a ping-pong moving platform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// First waypoint in world space
    pub point_a: Vec3,
    /// Second waypoint in world space
    pub point_b: Vec3,
    /// Travel speed between waypoints (m/s)
    pub move_speed: f32,
    /// How long the platform pauses at each waypoint (seconds)
    pub wait_time: f32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            point_a: Vec3::ZERO,
            point_b: Vec3::new(4.0, 0.0, 0.0),
            move_speed: 2.0,
            wait_time: 2.0,
        }
    }
}

/// Aggregate tuning file covering all three actors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningFile {
    pub camera: CameraConfig,
    pub motor: MotorConfig,
    pub platform: PlatformConfig,
}

/// Errors from loading or saving a tuning file.
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem error (missing file, permissions, ...)
    Io(io::Error),
    /// The file exists but is not valid tuning JSON
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "tuning file I/O error: {e}"),
            ConfigError::Json(e) => write!(f, "tuning file parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl TuningFile {
    /// Load a tuning file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let tuning = serde_json::from_str(&data)?;
        Ok(tuning)
    }

    /// Save this tuning file to disk as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
