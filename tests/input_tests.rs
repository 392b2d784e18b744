// Host-side tests for pure input and camera functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod input {
    include!("../src/input.rs");
}

use camera::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use input::*;

#[test]
fn ray_rect_hits_facing_plane() {
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 0.0));
    let t = ray_rect(Vec3::new(0.0, 0.0, 12.0), -Vec3::Z, model, Vec2::new(8.0, 8.0));
    assert!(t.is_some());
    assert!((t.unwrap() - 12.0).abs() < 1e-5);
}

#[test]
fn ray_rect_misses_outside_extent() {
    let model = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
    let result = ray_rect(Vec3::new(0.0, 0.0, 12.0), -Vec3::Z, model, Vec2::new(8.0, 8.0));
    assert!(result.is_none());
}

#[test]
fn ray_rect_is_double_sided() {
    let model = Mat4::IDENTITY;
    let t = ray_rect(Vec3::new(0.5, 0.5, -3.0), Vec3::Z, model, Vec2::new(2.0, 2.0));
    assert!((t.unwrap() - 3.0).abs() < 1e-5);
}

#[test]
fn ray_rect_ignores_planes_behind_the_origin() {
    let model = Mat4::IDENTITY;
    let result = ray_rect(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, model, Vec2::new(2.0, 2.0));
    assert!(result.is_none());
}

#[test]
fn ray_rect_parallel_ray_misses() {
    let model = Mat4::IDENTITY;
    let result = ray_rect(Vec3::new(0.0, 0.0, 1.0), Vec3::X, model, Vec2::new(2.0, 2.0));
    assert!(result.is_none());
}

#[test]
fn ray_rect_respects_rotation() {
    // A 4x1 strip rolled a quarter turn becomes a 1x4 strip
    let model = Mat4::from_quat(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
    let size = Vec2::new(4.0, 1.0);
    let down = -Vec3::Z;
    assert!(ray_rect(Vec3::new(0.0, 1.5, 5.0), down, model, size).is_some());
    assert!(ray_rect(Vec3::new(1.5, 0.0, 5.0), down, model, size).is_none());
}

#[test]
fn pointer_from_client_maps_corners_and_center() {
    let vp = Viewport::new(1000.0, 500.0);
    assert_eq!(
        PointerState::from_client(500.0, 250.0, vp),
        PointerState { x: 0.0, y: 0.0 }
    );
    assert_eq!(
        PointerState::from_client(0.0, 0.0, vp),
        PointerState { x: -1.0, y: 1.0 }
    );
    assert_eq!(
        PointerState::from_client(1000.0, 500.0, vp),
        PointerState { x: 1.0, y: -1.0 }
    );
}

#[test]
fn pointer_from_client_with_empty_viewport_is_centered() {
    let vp = Viewport::new(0.0, 0.0);
    assert_eq!(
        PointerState::from_client(10.0, 10.0, vp),
        PointerState::default()
    );
}

#[test]
fn scroll_mapping_is_linear_and_starts_at_zero() {
    assert_eq!(scroll_to_camera_y(0.0, 900.0), 0.0);
    assert!((scroll_to_camera_y(450.0, 900.0) + 7.5).abs() < 1e-5);
    assert!((scroll_to_camera_y(1800.0, 900.0) + 30.0).abs() < 1e-5);
    assert_eq!(scroll_to_camera_y(300.0, 0.0), 0.0);
}

fn test_camera() -> ParallaxCamera {
    ParallaxCamera::new(12.0, 45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0)
}

#[test]
fn center_ray_looks_down_negative_z() {
    let cam = test_camera();
    let (ro, rd) = cam.ray_from_ndc(Vec2::ZERO);
    assert!((ro - Vec3::new(0.0, 0.0, 12.0)).length() < 1e-5);
    assert!((rd - (-Vec3::Z)).length() < 1e-4);
}

#[test]
fn ray_passes_through_projected_point() {
    let mut cam = test_camera();
    cam.local_y = -4.0;
    cam.group_offset = Vec2::new(0.03, -0.02);
    let world = Vec3::new(3.0, -5.0, 0.0);
    let clip = cam.view_proj() * world.extend(1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);

    let (ro, rd) = cam.ray_from_ndc(ndc);
    let t = -ro.z / rd.z;
    let hit = ro + rd * t;
    assert!((hit - world).length() < 1e-3, "hit {:?}", hit);
}

#[test]
fn parallax_approach_uses_damping() {
    let mut cam = test_camera();
    cam.approach_parallax(Vec2::new(0.04, -0.02), 0.5);
    assert!((cam.group_offset - Vec2::new(0.02, -0.01)).length() < 1e-6);
    cam.approach_parallax(Vec2::new(0.04, -0.02), 1.0);
    assert!((cam.group_offset - Vec2::new(0.04, -0.02)).length() < 1e-6);
}
