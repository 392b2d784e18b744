use crate::constants::SECTION_DISTANCE;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Perspective camera held by a parallax group.
///
/// The camera itself only moves vertically (scroll); the group it sits in is
/// nudged by the pointer. The camera never rotates and looks down -Z.
#[derive(Clone, Debug)]
pub struct ParallaxCamera {
    pub group_offset: Vec2,
    pub local_y: f32,
    pub distance: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl ParallaxCamera {
    pub fn new(distance: f32, fovy_radians: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            group_offset: Vec2::ZERO,
            local_y: 0.0,
            distance,
            fovy_radians,
            aspect,
            znear,
            zfar,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.group_offset.x,
            self.group_offset.y + self.local_y,
            self.distance,
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move the group offset `damping` of the way towards `target`.
    pub fn approach_parallax(&mut self, target: Vec2, damping: f32) {
        self.group_offset += (target - self.group_offset) * damping.clamp(0.0, 1.0);
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates. Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}

/// Camera height for a page scroll offset; one viewport of scroll moves one
/// section down.
#[inline]
pub fn scroll_to_camera_y(scroll_offset: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    -scroll_offset / viewport_height * SECTION_DISTANCE
}
