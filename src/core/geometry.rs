use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

pub struct PlaneGeometry {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

/// Subdivided plane in the XY plane, centred on the origin and facing +Z.
///
/// Rows run from the top edge down; `uv.y` is 1 at the top. Each cell is split
/// into two counter-clockwise triangles.
pub fn plane_geometry(size: Vec2, segments: [u32; 2]) -> PlaneGeometry {
    let grid_x = segments[0].max(1);
    let grid_y = segments[1].max(1);
    let cols = grid_x + 1;
    let half = size * 0.5;
    let cell = Vec2::new(size.x / grid_x as f32, size.y / grid_y as f32);

    let mut vertices = Vec::with_capacity((cols * (grid_y + 1)) as usize);
    for iy in 0..=grid_y {
        let y = iy as f32 * cell.y - half.y;
        for ix in 0..=grid_x {
            let x = ix as f32 * cell.x - half.x;
            vertices.push(PlaneVertex {
                position: [x, -y, 0.0],
                uv: [
                    ix as f32 / grid_x as f32,
                    1.0 - iy as f32 / grid_y as f32,
                ],
            });
        }
    }

    let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + cols * iy;
            let b = ix + cols * (iy + 1);
            let c = (ix + 1) + cols * (iy + 1);
            let d = (ix + 1) + cols * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    PlaneGeometry { vertices, indices }
}
