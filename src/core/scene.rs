// Clickable picture planes and the per-surface shader parameters.
//
// The three planes share one type and live in a fixed-size array; anything
// that needs "the surface that was clicked" selects it by index.

use super::constants::{
    SurfaceDef, OSCILLATION_FREQUENCY, PICTURE_TINT, SURFACE_COUNT, SURFACE_DEFS,
};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Index into the texture manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Values uploaded to the picture shader for one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PictureParams {
    pub frequency: f32,
    pub time: f32,
    pub oscillation_frequency: f32,
    pub color: [f32; 3],
    pub amplitude: f32,
}

#[derive(Clone, Debug)]
pub struct ClickableSurface {
    pub name: &'static str,
    pub position: Vec3,
    /// Fixed z rotation in radians.
    pub roll: f32,
    /// Pointer-driven x/y rotation in radians.
    pub tilt: Vec2,
    pub size: Vec2,
    pub segments: [u32; 2],
    pub textures: [TextureId; 2],
    /// Selected texture variant, flipped as soon as a click is accepted.
    pub variant: usize,
    /// Variant currently bound in the shader; catches up with `variant`
    /// when the delayed swap fires.
    pub bound_variant: usize,
    pub params: PictureParams,
    /// Whether the frame ticker drives this surface's time uniform.
    pub animates_time: bool,
}

impl ClickableSurface {
    pub fn from_def(def: &SurfaceDef) -> Self {
        Self {
            name: def.name,
            position: Vec3::from_array(def.position),
            roll: def.roll_deg.to_radians(),
            tilt: Vec2::ZERO,
            size: Vec2::from_array(def.size),
            segments: def.segments,
            textures: [TextureId(def.textures[0]), TextureId(def.textures[1])],
            variant: 0,
            bound_variant: 0,
            params: PictureParams {
                frequency: def.frequency,
                time: 0.0,
                oscillation_frequency: OSCILLATION_FREQUENCY,
                color: PICTURE_TINT,
                amplitude: 0.0,
            },
            animates_time: def.animates_time,
        }
    }

    /// World transform: translation, then Euler XYZ rotation (tilt x, tilt y, roll).
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.tilt.x)
            * Quat::from_rotation_y(self.tilt.y)
            * Quat::from_rotation_z(self.roll);
        Mat4::from_rotation_translation(rotation, self.position)
    }

    pub fn toggle_variant(&mut self) {
        self.variant = 1 - self.variant.min(1);
    }

    pub fn commit_variant(&mut self) {
        self.bound_variant = self.variant;
    }

    #[inline]
    pub fn bound_texture(&self) -> TextureId {
        self.textures[self.bound_variant.min(1)]
    }
}

pub fn build_surfaces() -> [ClickableSurface; SURFACE_COUNT] {
    SURFACE_DEFS.map(|def| ClickableSurface::from_def(&def))
}
