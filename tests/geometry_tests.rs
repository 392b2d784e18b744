// Host-side tests for the subdivided plane mesh.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::{Vec2, Vec3};

#[test]
fn plane_has_expected_counts() {
    let g = plane_geometry(Vec2::new(8.0, 4.5), [16, 9]);
    assert_eq!(g.vertices.len(), 17 * 10);
    assert_eq!(g.indices.len(), 16 * 9 * 6);
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));
}

#[test]
fn plane_corners_and_uvs() {
    let g = plane_geometry(Vec2::new(8.0, 4.0), [4, 2]);
    let first = g.vertices.first().unwrap();
    let last = g.vertices.last().unwrap();
    // Top-left first, bottom-right last
    assert_eq!(first.position, [-4.0, 2.0, 0.0]);
    assert_eq!(first.uv, [0.0, 1.0]);
    assert_eq!(last.position, [4.0, -2.0, 0.0]);
    assert_eq!(last.uv, [1.0, 0.0]);
}

#[test]
fn triangles_face_positive_z() {
    let g = plane_geometry(Vec2::new(2.0, 2.0), [3, 3]);
    for tri in g.indices.chunks(3) {
        let p = |i: u32| Vec3::from_array(g.vertices[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0, "triangle {:?} faces away", tri);
    }
}

#[test]
fn zero_segments_fall_back_to_a_single_cell() {
    let g = plane_geometry(Vec2::new(1.0, 1.0), [0, 0]);
    assert_eq!(g.vertices.len(), 4);
    assert_eq!(g.indices.len(), 6);
}
