//! Third-Person Follow Camera
//!
//! Orbits a smoothed pivot above the player. Mouse deltas drive yaw and a
//! clamped pitch; the camera sits behind the pivot along the look direction
//! at a distance that shrinks when level geometry would block the view and
//! recovers when the view clears. A small deadzone on the rendered position
//! keeps the camera rock-still during micro-movement.
//!
//! Three independent smoothing rates are in play:
//! - `pivot_smoothing` eases the pivot toward the player (softens stairs)
//! - `obstruction_smoothing` eases the orbit distance in and out
//! - `follow_smoothing` eases the rendered position toward its target

use glam::{Mat4, Vec2, Vec3};

use crate::config::CameraConfig;
use crate::scene::SceneRaycast;

/// The follow camera rig.
///
/// Call [`update`](Self::update) once per tick with the frame's mouse delta
/// and the player's position, then read [`position`](Self::position) and
/// [`view_forward`](Self::view_forward) (or [`view_matrix`](Self::view_matrix))
/// to render.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Tuning knobs (immutable after construction)
    config: CameraConfig,
    /// Orbit yaw in degrees; 0 looks down -Z
    yaw: f32,
    /// Orbit pitch in degrees, positive looking up, clamped to config range
    pitch: f32,
    /// Smoothed pivot the camera orbits (eases toward player + pivot height)
    pivot: Vec3,
    /// Current orbit distance, eased between obstructed and default
    distance: f32,
    /// Rendered camera position, eased and deadzoned
    position: Vec3,
}

impl FollowCamera {
    /// Create a camera looking at `player_position` from the default distance,
    /// directly behind it (yaw 0). No smoothing on the first frame: the rig
    /// starts exactly at its rest pose.
    pub fn new(config: CameraConfig, player_position: Vec3) -> Self {
        let pivot = player_position + Vec3::Y * config.pivot_height;
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            pivot,
            distance: config.default_distance,
            position: Vec3::ZERO,
            config,
        };
        camera.position = camera.orbit_position();
        camera
    }

    /// Rendered camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The smoothed pivot the camera looks at.
    #[inline]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Current orbit yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current orbit pitch in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance, in [0, default_distance].
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Direction from the rendered position toward the pivot.
    ///
    /// This is the forward the character motor uses for camera-relative
    /// movement. Zero only in the degenerate case where the camera sits
    /// exactly on the pivot.
    pub fn view_forward(&self) -> Vec3 {
        (self.pivot - self.position).normalize_or_zero()
    }

    /// Right-handed view matrix looking from the camera at the pivot.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.pivot, Vec3::Y)
    }

    /// Advance the rig by one tick.
    ///
    /// # Arguments
    /// * `dt` - Frame delta time in seconds
    /// * `mouse_delta` - Mouse motion this frame in pixels (+x right, +y down)
    /// * `player_position` - The player's feet position in world space
    /// * `scene` - Ray query for the obstruction check
    pub fn update(
        &mut self,
        dt: f32,
        mouse_delta: Vec2,
        player_position: Vec3,
        scene: &impl SceneRaycast,
    ) {
        let dt = dt.clamp(0.0001, 0.1);

        self.apply_look(mouse_delta);

        // Pivot eases toward the point above the player's head.
        let pivot_target = player_position + Vec3::Y * self.config.pivot_height;
        let pivot_t = (self.config.pivot_smoothing * dt).min(1.0);
        self.pivot = self.pivot.lerp(pivot_target, pivot_t);

        self.apply_obstruction(dt, scene);

        // Rendered position chases the orbit pose, but only once the gap
        // clears the deadzone; tiny corrections are swallowed.
        let desired = self.orbit_position();
        if self.position.distance(desired) > self.config.deadzone {
            let follow_t = (self.config.follow_smoothing * dt).min(1.0);
            self.position = self.position.lerp(desired, follow_t);
        }
    }

    /// Turn mouse pixels into orbit angles. Pitch is clamped, yaw wraps free.
    fn apply_look(&mut self, mouse_delta: Vec2) {
        self.yaw += mouse_delta.x * self.config.sensitivity_x;
        self.pitch = (self.pitch - mouse_delta.y * self.config.sensitivity_y)
            .clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Cast from the pivot toward where the camera wants to sit and ease the
    /// orbit distance toward the nearest clear spot (or back to default).
    fn apply_obstruction(&mut self, dt: f32, scene: &impl SceneRaycast) {
        let back = -self.look_forward();
        let target = match scene.raycast(self.pivot, back, self.config.default_distance) {
            Some(hit) => hit.distance - self.config.obstruction_margin,
            None => self.config.default_distance,
        };
        let target = target.clamp(0.0, self.config.default_distance);

        let t = (self.config.obstruction_smoothing * dt).min(1.0);
        self.distance += (target - self.distance) * t;
    }

    /// Unit look direction from the orbit angles.
    fn look_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }

    /// Where the camera wants to sit: behind the pivot along the look
    /// direction at the current orbit distance.
    fn orbit_position(&self) -> Vec3 {
        self.pivot - self.look_forward() * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EmptyScene, RayHit};

    const DT: f32 = 0.016;

    fn test_camera() -> FollowCamera {
        FollowCamera::new(CameraConfig::default(), Vec3::ZERO)
    }

    #[test]
    fn test_rest_pose_is_behind_pivot() {
        let camera = test_camera();
        let expected_pivot = Vec3::new(0.0, 1.5, 0.0);
        assert_eq!(camera.pivot(), expected_pivot);
        // Yaw 0 looks down -Z, so the camera sits on +Z behind the pivot
        let expected = expected_pivot + Vec3::Z * 5.0;
        assert!(camera.position().distance(expected) < 1e-5);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = test_camera();
        let scene = EmptyScene;

        // Drag the mouse way up (negative y raises pitch)
        camera.update(DT, Vec2::new(0.0, -10_000.0), Vec3::ZERO, &scene);
        assert_eq!(camera.pitch(), 5.0, "Pitch should clamp at max_pitch");

        // And way down
        camera.update(DT, Vec2::new(0.0, 10_000.0), Vec3::ZERO, &scene);
        assert_eq!(camera.pitch(), -60.0, "Pitch should clamp at min_pitch");
    }

    #[test]
    fn test_yaw_accumulates_unclamped() {
        let mut camera = test_camera();
        let scene = EmptyScene;
        for _ in 0..10 {
            camera.update(DT, Vec2::new(200.0, 0.0), Vec3::ZERO, &scene);
        }
        // 10 frames * 200 px * 0.3 deg/px = 600 degrees, past a full turn
        assert!((camera.yaw() - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_pivot_follows_player() {
        let mut camera = test_camera();
        let scene = EmptyScene;
        let player = Vec3::new(10.0, 0.0, -3.0);
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, player, &scene);
        }
        let expected = player + Vec3::Y * 1.5;
        assert!(
            camera.pivot().distance(expected) < 0.01,
            "Pivot should converge on the player, got {:?}",
            camera.pivot()
        );
    }

    #[test]
    fn test_obstruction_pulls_camera_in() {
        let mut camera = test_camera();
        // Wall 2m behind the pivot, whichever way the ray goes
        let scene = |_origin: Vec3, _dir: Vec3, _max: f32| Some(RayHit::fixed(2.0));

        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &scene);
        }
        // Converges on hit distance minus the margin
        assert!(
            (camera.distance() - 1.9).abs() < 0.01,
            "Distance was {}, expected ~1.9",
            camera.distance()
        );
        assert!(camera.position().distance(camera.pivot()) < 2.0);
    }

    #[test]
    fn test_distance_recovers_when_view_clears() {
        let mut camera = test_camera();
        let wall = |_origin: Vec3, _dir: Vec3, _max: f32| Some(RayHit::fixed(2.0));
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &wall);
        }
        assert!(camera.distance() < 2.0);

        let open = EmptyScene;
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &open);
        }
        assert!(
            (camera.distance() - 5.0).abs() < 0.01,
            "Distance should ease back to default, got {}",
            camera.distance()
        );
    }

    #[test]
    fn test_distance_never_goes_negative() {
        let mut camera = test_camera();
        // Hit closer than the margin; the clamp keeps distance at zero
        let scene = |_origin: Vec3, _dir: Vec3, _max: f32| Some(RayHit::fixed(0.05));
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &scene);
        }
        assert!(camera.distance() >= 0.0);
        assert!(camera.distance() < 0.01);
    }

    #[test]
    fn test_deadzone_swallows_micro_movement() {
        let mut camera = test_camera();
        let scene = EmptyScene;

        // Settle at rest first
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &scene);
        }
        let settled = camera.position();

        // A nudge well inside the deadzone must not move the camera
        camera.update(DT, Vec2::ZERO, Vec3::new(0.01, 0.0, 0.0), &scene);
        assert_eq!(
            camera.position(),
            settled,
            "Sub-deadzone movement should not disturb the camera"
        );
    }

    #[test]
    fn test_large_movement_escapes_deadzone() {
        let mut camera = test_camera();
        let scene = EmptyScene;
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, Vec3::ZERO, &scene);
        }
        let settled = camera.position();

        let player = Vec3::new(5.0, 0.0, 0.0);
        for _ in 0..500 {
            camera.update(DT, Vec2::ZERO, player, &scene);
        }
        assert!(
            camera.position().distance(settled) > 1.0,
            "Camera should chase a real player move"
        );
    }

    #[test]
    fn test_view_forward_points_at_pivot() {
        let mut camera = test_camera();
        let scene = EmptyScene;
        camera.update(DT, Vec2::new(137.0, -42.0), Vec3::ZERO, &scene);

        let forward = camera.view_forward();
        let to_pivot = (camera.pivot() - camera.position()).normalize();
        assert!((forward - to_pivot).length() < 1e-6);
        assert!((forward.length() - 1.0).abs() < 1e-5);
    }
}
