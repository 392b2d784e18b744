use glam::{Mat4, Vec2, Vec3};

/// Size of the browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Last known pointer position in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upwards, both in \[-1, 1\] while the
/// pointer is inside the viewport.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Self::default();
        }
        Self {
            x: client_x / viewport.width * 2.0 - 1.0,
            y: -(client_y / viewport.height) * 2.0 + 1.0,
        }
    }

    #[inline]
    pub fn ndc(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Intersect a ray with a double-sided rectangle of `size` lying in the local
/// XY plane of `model`. Returns the distance along the ray.
#[inline]
pub fn ray_rect(ray_origin: Vec3, ray_dir: Vec3, model: Mat4, size: Vec2) -> Option<f32> {
    let inv = model.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let hit = o + d * t;
    let half = size * 0.5;
    (hit.x.abs() <= half.x && hit.y.abs() <= half.y).then_some(t)
}
