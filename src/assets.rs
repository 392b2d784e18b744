use crate::core::{decode_image, DecodedImage, TEXTURE_PATHS};
use crate::loading;
use anyhow::{anyhow, bail};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Stand-in colour for a picture that failed to load
const MISSING_TEXTURE_RGBA: [u8; 4] = [255, 0, 255, 255];

pub async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?,
    )
    .await
    .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode every manifest texture in `TextureId` order, driving the
/// loading bar as each one lands.
pub async fn load_textures(window: &web::Window, document: &web::Document) -> Vec<DecodedImage> {
    let total = TEXTURE_PATHS.len();
    let mut images = Vec::with_capacity(total);
    loading::set_progress(document, 0.0);
    for (i, path) in TEXTURE_PATHS.iter().enumerate() {
        let decoded = match fetch_bytes(window, path).await {
            Ok(bytes) => decode_image(&bytes),
            Err(e) => Err(e),
        };
        match decoded {
            Ok(img) => {
                log::info!("[assets] {} {}x{}", path, img.width, img.height);
                images.push(img);
            }
            Err(e) => {
                log::error!("[assets] {} failed: {:?}", path, e);
                images.push(DecodedImage::solid(MISSING_TEXTURE_RGBA));
            }
        }
        loading::set_progress(document, (i + 1) as f32 / total as f32);
    }
    loading::finish(document);
    images
}
