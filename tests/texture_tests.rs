// Host-side tests for texture decoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod texture {
    include!("../src/core/texture.rs");
}

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use texture::*;

fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .expect("encode test image");
    bytes
}

#[test]
fn decodes_png_to_rgba8() {
    let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
    let decoded = decode_image(&encode(&img, ImageFormat::Png)).unwrap();
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
    assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 40]);
    assert_eq!(decoded.bytes_per_row(), 12);
}

#[test]
fn decodes_jpeg_as_opaque() {
    let rgb = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("encode test image");
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (8, 8));
    assert!(decoded.rgba.chunks(4).all(|px| px[3] == 255));
}

#[test]
fn rejects_garbage() {
    assert!(decode_image(b"definitely not an image").is_err());
    assert!(decode_image(&[]).is_err());
}

#[test]
fn solid_placeholder_is_one_pixel() {
    let img = DecodedImage::solid([255, 0, 255, 255]);
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(img.rgba, vec![255, 0, 255, 255]);
}
