// Scene layout and shader defaults for the landing page.

// Camera
pub const CAMERA_Z: f32 = 12.0; // eye distance from the picture plane
pub const CAMERA_FOV_DEG: f32 = 45.0; // vertical field of view
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Picture shader defaults
pub const BASE_WAVE_FREQUENCY: f32 = 1.0;
pub const SECTION_WAVE_FREQUENCY: f32 = BASE_WAVE_FREQUENCY * 1.5;
pub const OSCILLATION_FREQUENCY: f32 = 5.0;
pub const PICTURE_TINT: [f32; 3] = [0.667, 0.0, 1.0]; // #aa00ff

/// Texture manifest, indexed by `TextureId`.
pub const TEXTURE_PATHS: [&str; 6] = [
    "images/NachoLanding0.jpg",
    "images/NachoLanding1.jpg",
    "images/Section2-1.png",
    "images/Section2-2.png",
    "images/Section2-3.png",
    "images/Section2-4.png",
];

/// Static description of one clickable picture plane.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceDef {
    pub name: &'static str,
    pub position: [f32; 3],
    pub roll_deg: f32,
    pub size: [f32; 2],
    pub segments: [u32; 2],
    pub textures: [usize; 2],
    pub frequency: f32,
    pub animates_time: bool,
}

pub const SURFACE_COUNT: usize = 3;

pub const SURFACE_DEFS: [SurfaceDef; SURFACE_COUNT] = [
    SurfaceDef {
        name: "landing",
        position: [5.0, 0.0, 0.0],
        roll_deg: -2.0,
        size: [8.0, 8.0],
        segments: [256, 256],
        textures: [0, 1],
        frequency: BASE_WAVE_FREQUENCY,
        animates_time: true,
    },
    SurfaceDef {
        name: "section2-left",
        position: [5.0, -13.0, 0.0],
        roll_deg: 10.0,
        size: [8.0, 4.5],
        segments: [512, 288],
        textures: [2, 3],
        frequency: SECTION_WAVE_FREQUENCY,
        animates_time: false,
    },
    SurfaceDef {
        name: "section2-right",
        position: [-4.0, -17.0, 0.0],
        roll_deg: -2.0,
        size: [9.6, 5.4],
        segments: [512, 288],
        textures: [4, 5],
        frequency: SECTION_WAVE_FREQUENCY,
        animates_time: false,
    },
];
