//! Shared fixtures for provider integration tests.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use medio_core::{Dimensions, MediaFile, ProviderOptions};
use medio_provider::test_helpers::MockStore;
use medio_provider::Provider;

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded_bytes(width, height, image::ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded_bytes(width, height, image::ImageFormat::Jpeg)
}

fn encoded_bytes(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    image::DynamicImage::ImageRgba8(img)
        .to_rgb8()
        .write_to(&mut cursor, format)
        .unwrap();
    buffer
}

/// A file with known dimensions (no defensive re-encode of the original).
pub fn media_file(hash: &str, ext: &str, mime: &str, buffer: Vec<u8>) -> MediaFile {
    MediaFile {
        buffer,
        ext: ext.to_string(),
        mime: mime.to_string(),
        hash: hash.to_string(),
        path: None,
        dimensions: Some(Dimensions {
            width: 64,
            height: 64,
        }),
        size_kb: 0.0,
        url: None,
    }
}

/// Options with two thumbnail specs and WebP siblings enabled.
pub fn image_options() -> ProviderOptions {
    serde_json::from_value(serde_json::json!({
        "params": {"bucket": "media-bucket"},
        "videoParams": {"bucket": "video-bucket"},
        "prefix": "media/",
        "thumbnails": [
            {"name": "thumbnail", "options": {"width": 16, "height": 16}},
            {"name": "medium", "options": {"width": 32, "height": 32}}
        ],
        "webp": true
    }))
    .unwrap()
}

/// Build a provider over two mocks and hand back both for assertions.
pub fn provider_with(options: ProviderOptions) -> (Provider, Arc<MockStore>, Arc<MockStore>) {
    let default_store = Arc::new(MockStore::new("https://cdn.example.com"));
    let video_store = Arc::new(MockStore::new("https://videos.example.com"));
    let provider = Provider::with_stores(options, default_store.clone(), video_store.clone());
    (provider, default_store, video_store)
}
