// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_constants_are_within_bounds() {
    assert!(RIPPLE_TICK_MS > 0.0);
    assert!(RIPPLE_UP_STEP > 0.0 && RIPPLE_UP_STEP < RIPPLE_CEILING);
    assert!(RIPPLE_DOWN_STEP > 0.0 && RIPPLE_DOWN_STEP < RIPPLE_CEILING);
    assert!(RIPPLE_FLOOR > 0.0 && RIPPLE_FLOOR < RIPPLE_CEILING);
    assert!(RIPPLE_EPSILON < RIPPLE_DOWN_STEP * 0.5);
}

#[test]
fn down_ramp_outlasts_up_ramp() {
    let up_ticks = RIPPLE_CEILING / RIPPLE_UP_STEP;
    let down_ticks = (RIPPLE_CEILING - RIPPLE_FLOOR) / RIPPLE_DOWN_STEP;
    assert!(down_ticks >= 2.0 * up_ticks);
    // The swap lands no later than the ripple peak
    assert!(TEXTURE_SWAP_DELAY_MS <= up_ticks.round() as f64 * RIPPLE_TICK_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_constants_are_sane() {
    assert!(SECTION_DISTANCE > 0.0);
    assert!(PARALLAX_FACTOR > 0.0);
    assert!(MESH_TILT_FACTOR > 0.0);
    assert!(PARALLAX_DAMPING > 0.0 && PARALLAX_DAMPING <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn surfaces_reference_valid_textures() {
    for def in SURFACE_DEFS.iter() {
        for t in def.textures {
            assert!(t < TEXTURE_PATHS.len(), "{} uses texture {}", def.name, t);
        }
        assert!(def.size[0] > 0.0 && def.size[1] > 0.0);
        assert!(def.segments[0] > 0 && def.segments[1] > 0);
    }
    // Each picture owns its own texture pair
    let mut used: Vec<usize> = SURFACE_DEFS.iter().flat_map(|d| d.textures).collect();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used.len(), SURFACE_COUNT * 2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_pictures() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}
