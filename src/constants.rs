// Animation timing and interaction tuning. Times in milliseconds, distances
// in world units.

// Ripple animator: one step per tick
pub const RIPPLE_TICK_MS: f64 = 10.0;
pub const RIPPLE_UP_STEP: f32 = 0.05;
pub const RIPPLE_DOWN_STEP: f32 = 0.02;
pub const RIPPLE_CEILING: f32 = 1.0;
pub const RIPPLE_FLOOR: f32 = 0.1;
// Tolerance when comparing accumulated float steps against the bounds
pub const RIPPLE_EPSILON: f32 = 1e-4;

// Delay between a click and the texture swap on the clicked picture
pub const TEXTURE_SWAP_DELAY_MS: f64 = 200.0;

// Scroll: one viewport height of scrolling moves the camera this far down
pub const SECTION_DISTANCE: f32 = 15.0;

// Pointer parallax
pub const PARALLAX_FACTOR: f32 = 0.05; // camera group offset per unit of pointer NDC
pub const MESH_TILT_FACTOR: f32 = 0.05; // picture rotation (radians) per unit of pointer NDC
pub const PARALLAX_DAMPING: f32 = 1.0; // fraction of the remaining offset applied per frame

// Drawing surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
