//! Camera Tests - Follow Behavior and View Math
//!
//! Integration tests for the follow camera: orbiting, obstruction handling,
//! the view matrix, and feeding the camera's forward into the motor for
//! camera-relative movement.

use glam::{Vec2, Vec3};
use platform_proto::config::{CameraConfig, MotorConfig};
use platform_proto::scene::{EmptyScene, RayHit};
use platform_proto::{CharacterMotor, FollowCamera, InputEvent, PlayerInputState};

const DT: f32 = 0.016;

// ============================================================================
// Follow Behavior Tests
// ============================================================================

#[test]
fn test_camera_starts_at_rest_pose() {
    let camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);

    assert_eq!(camera.pivot(), Vec3::new(0.0, 1.5, 0.0));
    assert_eq!(camera.distance(), 5.0);
    // Yaw 0 looks down -Z, so the camera starts on the +Z side
    assert!(camera.position().z > 0.0);
}

#[test]
fn test_camera_tracks_a_moving_player() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    let scene = EmptyScene;

    // Walk the player along +X; the camera keeps up
    let mut player = Vec3::ZERO;
    for _ in 0..600 {
        player.x += 3.0 * DT;
        camera.update(DT, Vec2::ZERO, player, &scene);
    }

    let pivot_gap = camera.pivot().distance(player + Vec3::Y * 1.5);
    assert!(
        pivot_gap < 0.2,
        "Pivot lagged {pivot_gap}m behind a steadily moving player"
    );
    // Camera stays roughly a default distance behind the pivot
    let orbit = camera.position().distance(camera.pivot());
    assert!((orbit - 5.0).abs() < 0.2, "Orbit distance was {orbit}");
}

#[test]
fn test_orbiting_keeps_distance() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    let scene = EmptyScene;

    // Spin the camera a full turn in small steps
    for _ in 0..240 {
        camera.update(DT, Vec2::new(5.0, 0.0), Vec3::ZERO, &scene);
    }

    let orbit = camera.position().distance(camera.pivot());
    assert!(
        (orbit - 5.0).abs() < 0.2,
        "Orbit distance drifted to {orbit} while spinning"
    );
}

#[test]
fn test_wall_behind_camera_pulls_it_in() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    // Wall 1.5m behind the pivot in every direction
    let wall = |_origin: Vec3, _dir: Vec3, _max: f32| Some(RayHit::fixed(1.5));

    for _ in 0..600 {
        camera.update(DT, Vec2::ZERO, Vec3::ZERO, &wall);
    }
    assert!(
        (camera.distance() - 1.4).abs() < 0.02,
        "Expected hit distance minus margin, got {}",
        camera.distance()
    );

    // Clearing the wall restores the default distance
    let open = EmptyScene;
    for _ in 0..600 {
        camera.update(DT, Vec2::ZERO, Vec3::ZERO, &open);
    }
    assert!((camera.distance() - 5.0).abs() < 0.02);
}

// ============================================================================
// View Math Tests
// ============================================================================

#[test]
fn test_view_matrix_centers_the_pivot() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    let scene = EmptyScene;
    for _ in 0..60 {
        camera.update(DT, Vec2::new(30.0, -10.0), Vec3::new(2.0, 0.0, -1.0), &scene);
    }

    // The pivot lands on the view-space -Z axis, one camera distance away
    let view_pivot = camera.view_matrix().transform_point3(camera.pivot());
    let expected_depth = camera.position().distance(camera.pivot());
    assert!(view_pivot.x.abs() < 1e-3, "Pivot off-axis: {view_pivot:?}");
    assert!(view_pivot.y.abs() < 1e-3, "Pivot off-axis: {view_pivot:?}");
    assert!((view_pivot.z + expected_depth).abs() < 1e-3);
}

#[test]
fn test_view_forward_is_unit_length() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    let scene = EmptyScene;
    camera.update(DT, Vec2::new(123.0, 45.0), Vec3::new(1.0, 0.0, 1.0), &scene);

    let forward = camera.view_forward();
    assert!((forward.length() - 1.0).abs() < 1e-5);
}

// ============================================================================
// Camera-Relative Movement Tests
// ============================================================================

#[test]
fn test_player_walks_where_the_camera_looks() {
    let mut camera = FollowCamera::new(CameraConfig::default(), Vec3::ZERO);
    let mut motor = CharacterMotor::new(MotorConfig::default());
    let scene = EmptyScene;

    // Turn the camera 90 degrees (300 px * 0.3 deg/px), then settle
    camera.update(DT, Vec2::new(300.0, 0.0), Vec3::ZERO, &scene);
    for _ in 0..600 {
        camera.update(DT, Vec2::ZERO, Vec3::ZERO, &scene);
    }

    // Push forward on the stick; the motor should head along the camera's
    // flattened forward, which now points down +X
    let mut input = PlayerInputState::new();
    input.apply(InputEvent::Move(Vec2::new(0.0, 1.0)));
    for _ in 0..300 {
        motor.update(DT, &input, Some(camera.view_forward()), true, &scene);
        input.clear_edges();
    }

    let velocity = motor.horizontal_velocity();
    assert!(
        velocity.x > 4.5,
        "Expected near max speed along +X, got {velocity:?}"
    );
    assert!(
        velocity.z.abs() < 0.3,
        "Movement leaked off the camera axis: {velocity:?}"
    );
}

#[test]
fn test_no_camera_means_no_movement() {
    let mut motor = CharacterMotor::new(MotorConfig::default());
    let scene = EmptyScene;

    let mut input = PlayerInputState::new();
    input.apply(InputEvent::Move(Vec2::new(0.0, 1.0)));
    for _ in 0..60 {
        motor.update(DT, &input, None, true, &scene);
        input.clear_edges();
    }

    assert_eq!(
        motor.horizontal_velocity(),
        Vec3::ZERO,
        "Without a camera reference the motor must stay put"
    );
}
