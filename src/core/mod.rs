pub mod constants;
pub mod geometry;
pub mod picking;
pub mod ripple;
pub mod scene;
pub mod session;
pub mod texture;

pub use constants::*;
pub use picking::CursorStyle;
pub use scene::{ClickableSurface, TextureId};
pub use session::Session;
pub use texture::{decode_image, DecodedImage};

// Shader bundled as a string constant
pub static PICTURE_WGSL: &str = include_str!("../../shaders/picture.wgsl");
