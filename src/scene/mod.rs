//! Scene Query Module
//!
//! The seam between the actors and the host engine's spatial queries.
//! The camera rig and the character motor both need to cast rays into the
//! level (camera: obstruction check, motor: standing-surface probe), but the
//! level geometry itself lives in the host. [`SceneRaycast`] is the narrow
//! interface the host implements; everything the actors need back is a
//! [`RayHit`].
//!
//! A blanket implementation for closures keeps test scenes cheap to write:
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use platform_proto::scene::RayHit;
//!
//! // Flat ground at y = 0, nothing else.
//! let scene = |origin: Vec3, dir: Vec3, max: f32| -> Option<RayHit> {
//!     if dir.y < 0.0 {
//!         let t = origin.y / -dir.y;
//!         (t <= max).then(|| RayHit::fixed(t))
//!     } else {
//!         None
//!     }
//! };
//! ```

use glam::Vec3;

/// Result of a scene ray query.
///
/// Carries the hit distance plus the velocity of whatever surface was hit.
/// Static level geometry reports zero velocity; a moving platform reports its
/// frame-derived velocity so a character standing on it can inherit it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// Velocity of the hit surface (zero for static geometry)
    pub surface_velocity: Vec3,
}

impl RayHit {
    /// Create a hit with an explicit surface velocity.
    pub fn new(distance: f32, surface_velocity: Vec3) -> Self {
        Self {
            distance,
            surface_velocity,
        }
    }

    /// Create a hit against static (non-moving) geometry.
    pub fn fixed(distance: f32) -> Self {
        Self {
            distance,
            surface_velocity: Vec3::ZERO,
        }
    }
}

/// Ray query interface the host engine (or a test double) implements.
///
/// `dir` is expected to be normalized; hits beyond `max_distance` must not be
/// reported. A query that finds nothing returns `None` and the caller falls
/// back to its prior defaults (no obstruction, no surface inheritance).
pub trait SceneRaycast {
    /// Cast a ray and return the closest hit within `max_distance`, if any.
    fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit>;
}

impl<F> SceneRaycast for F
where
    F: Fn(Vec3, Vec3, f32) -> Option<RayHit>,
{
    fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        self(origin, dir, max_distance)
    }
}

/// A scene with no geometry at all. Every ray misses.
///
/// Useful as a default for hosts that have not wired collision yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneRaycast for EmptyScene {
    fn raycast(&self, _origin: Vec3, _dir: Vec3, _max_distance: f32) -> Option<RayHit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene_never_hits() {
        let scene = EmptyScene;
        let hit = scene.raycast(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y, 100.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_closure_scene() {
        // Ground plane at y = 0
        let scene = |origin: Vec3, dir: Vec3, max: f32| -> Option<RayHit> {
            if dir.y < 0.0 {
                let t = origin.y / -dir.y;
                (t <= max).then(|| RayHit::fixed(t))
            } else {
                None
            }
        };

        let hit = scene.raycast(Vec3::new(0.0, 2.0, 0.0), -Vec3::Y, 10.0);
        assert!(hit.is_some());
        assert!((hit.unwrap().distance - 2.0).abs() < 1e-6);

        // Out of range
        let miss = scene.raycast(Vec3::new(0.0, 20.0, 0.0), -Vec3::Y, 10.0);
        assert!(miss.is_none());
    }

    #[test]
    fn test_fixed_hit_has_zero_velocity() {
        let hit = RayHit::fixed(3.0);
        assert_eq!(hit.surface_velocity, Vec3::ZERO);
        assert_eq!(hit.distance, 3.0);
    }
}
