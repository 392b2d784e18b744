use anyhow::Context;

/// Tightly packed RGBA8 pixels ready for upload.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// 1x1 stand-in for an asset that failed to load.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Decode a JPEG or PNG file into RGBA8.
pub fn decode_image(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory(bytes).context("decoding texture image")?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    anyhow::ensure!(width > 0 && height > 0, "texture image is empty");
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
