//! Ping-Pong Platform Mover
//!
//! A two-state machine: MOVING walks the platform at constant speed toward
//! the current waypoint; WAITING counts down a pause, then flips the heading
//! to the other waypoint and resumes. The heading is a strict A/B toggle, so
//! the platform can never end up targeting the waypoint it is sitting on.
//!
//! Velocity is derived every tick as `(position - previous) / dt` before the
//! platform moves, and exposed read-only. A character rides the platform by
//! adding this velocity to its own for the tick, rather than being parented
//! to the platform.

use glam::Vec3;

use crate::config::PlatformConfig;

/// Arrival epsilon: the platform counts as having reached a waypoint when it
/// is closer than this (meters).
const ARRIVAL_EPSILON: f32 = 0.05;

/// Which phase of the ping-pong cycle the platform is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformPhase {
    /// Traveling toward the current heading waypoint
    Moving,
    /// Paused at a waypoint, counting down the wait
    Waiting,
}

/// Which waypoint the platform is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    PointA,
    PointB,
}

impl Heading {
    fn flipped(self) -> Self {
        match self {
            Heading::PointA => Heading::PointB,
            Heading::PointB => Heading::PointA,
        }
    }
}

/// A platform that shuttles between two waypoints with a pause at each end.
#[derive(Debug, Clone)]
pub struct PlatformMover {
    /// Waypoints and speeds (immutable after construction)
    config: PlatformConfig,
    /// Current world position
    position: Vec3,
    /// Position at the start of the previous tick, for velocity derivation
    previous_position: Vec3,
    /// Velocity over the last tick, (position - previous) / dt
    velocity: Vec3,
    /// Current phase of the cycle
    phase: PlatformPhase,
    /// Waypoint currently being traveled toward
    heading: Heading,
    /// Remaining pause time while waiting (seconds)
    wait_remaining: f32,
}

impl PlatformMover {
    /// Create a platform at waypoint A, heading toward waypoint B.
    pub fn new(config: PlatformConfig) -> Self {
        Self {
            position: config.point_a,
            previous_position: config.point_a,
            velocity: Vec3::ZERO,
            phase: PlatformPhase::Moving,
            heading: Heading::PointB,
            wait_remaining: 0.0,
            config,
        }
    }

    /// Current world position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Velocity over the last tick. Zero on the first tick and while waiting.
    ///
    /// This is the read-only query riders use to inherit platform motion.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current phase of the ping-pong cycle.
    #[inline]
    pub fn phase(&self) -> PlatformPhase {
        self.phase
    }

    /// The waypoint currently being traveled toward.
    pub fn current_target(&self) -> Vec3 {
        match self.heading {
            Heading::PointA => self.config.point_a,
            Heading::PointB => self.config.point_b,
        }
    }

    /// Advance the platform by one tick.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        // Velocity over the tick that just ended, before this tick's move.
        self.velocity = (self.position - self.previous_position) / dt;
        self.previous_position = self.position;

        match self.phase {
            PlatformPhase::Waiting => {
                self.wait_remaining -= dt;
                if self.wait_remaining <= 0.0 {
                    self.heading = self.heading.flipped();
                    self.phase = PlatformPhase::Moving;
                }
            }
            PlatformPhase::Moving => {
                let target = self.current_target();
                // Capped step: a large tick lands exactly on the waypoint
                // instead of stepping past it and missing the arrival check.
                self.position = self
                    .position
                    .move_towards(target, self.config.move_speed * dt);

                if self.position.distance(target) < ARRIVAL_EPSILON {
                    self.phase = PlatformPhase::Waiting;
                    self.wait_remaining = self.config.wait_time;
                }
            }
        }
    }
}
