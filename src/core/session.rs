// Page session state and the per-frame update.
//
// Every piece of mutable scene state lives in [`Session`]. Input handlers
// write the pointer, scroll and viewport fields; the frame loop calls
// [`Session::tick`]; the click handler calls [`Session::click`]. All of them
// run on the page's single event thread.

use super::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, SURFACE_COUNT};
use super::picking::{pick_surfaces, CursorStyle, HoverTracker};
use super::ripple::RippleAnimator;
use super::scene::{build_surfaces, ClickableSurface};
use crate::camera::{scroll_to_camera_y, ParallaxCamera};
use crate::constants::{MESH_TILT_FACTOR, PARALLAX_DAMPING, PARALLAX_FACTOR};
use crate::input::{PointerState, Viewport};
use glam::Vec2;

pub struct Session {
    pub surfaces: [ClickableSurface; SURFACE_COUNT],
    pub animator: RippleAnimator,
    pub pointer: PointerState,
    pub scroll_offset: f32,
    pub viewport: Viewport,
    pub camera: ParallaxCamera,
    pub hover: HoverTracker,
}

impl Session {
    pub fn new(viewport: Viewport, scroll_offset: f32) -> Self {
        let camera = ParallaxCamera::new(
            CAMERA_Z,
            CAMERA_FOV_DEG.to_radians(),
            viewport.aspect(),
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        Self {
            surfaces: build_surfaces(),
            animator: RippleAnimator::new(),
            pointer: PointerState::default(),
            scroll_offset,
            viewport,
            camera,
            hover: HoverTracker::default(),
        }
    }

    pub fn set_pointer_client(&mut self, client_x: f32, client_y: f32) {
        self.pointer = PointerState::from_client(client_x, client_y, self.viewport);
    }

    pub fn set_scroll(&mut self, scroll_offset: f32) {
        self.scroll_offset = scroll_offset;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    /// One display frame of scene updates, up to but not including the
    /// render. Returns the cursor style to apply, if it changed.
    pub fn tick(&mut self, elapsed_sec: f32, dt_ms: f64) -> Option<CursorStyle> {
        self.animator.advance(dt_ms, &mut self.surfaces);

        for surface in self.surfaces.iter_mut().filter(|s| s.animates_time) {
            surface.params.time = elapsed_sec;
        }

        self.camera.local_y = scroll_to_camera_y(self.scroll_offset, self.viewport.height);

        let pointer = self.pointer;
        let parallax = Vec2::new(pointer.x * PARALLAX_FACTOR, -pointer.y * PARALLAX_FACTOR);
        self.camera.approach_parallax(parallax, PARALLAX_DAMPING);

        let tilt = Vec2::new(-pointer.y * MESH_TILT_FACTOR, pointer.x * MESH_TILT_FACTOR);
        for surface in self.surfaces.iter_mut() {
            surface.tilt = tilt;
        }

        let (ro, rd) = self.camera.ray_from_ndc(pointer.ndc());
        let hits = pick_surfaces(ro, rd, &self.surfaces);
        self.hover.update(hits.first().copied())
    }

    /// Handle a click anywhere on the page. Returns whether a ripple started.
    pub fn click(&mut self) -> bool {
        if self.animator.is_busy() {
            return false;
        }
        let Some(hit) = self.hover.current() else {
            return false;
        };
        let started = self.animator.trigger(hit.surface, &mut self.surfaces);
        if started {
            let surface = &self.surfaces[hit.surface];
            log::info!(
                "[click] ripple on {} (variant {})",
                surface.name,
                surface.variant
            );
        }
        started
    }
}
