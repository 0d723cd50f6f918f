//! Variant generation.
//!
//! For each configured spec the source image is resized and re-encoded in its
//! own format, optionally joined by a WebP sibling. Specs are processed with
//! parallel fan-out; the first failure rejects the whole batch and partial
//! results are discarded.

use anyhow::{Context, Result};
use bytes::Bytes;
use futures::future::try_join_all;
use image::DynamicImage;
use std::io::Cursor;
use std::sync::Arc;

use medio_core::{ImageFormat, ResizeOptions, VariantSpec};

use crate::encode::encode;
use crate::resize::apply_resize;

const WEBP_EXT: &str = ".webp";
const WEBP_MIME: &str = "image/webp";

/// A derived, resized re-encoded copy of an original image. Ephemeral: its
/// identity going forward is purely the storage key it is written under.
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    /// Name prefix from the originating spec.
    pub name: String,
    /// Extension including the leading dot.
    pub ext: String,
    pub mime: String,
    pub buffer: Bytes,
}

/// Generate one batch of variants per spec.
///
/// The inner sequence order is fixed: primary re-encoded image first, WebP
/// sibling second (only when `webp_siblings` is set and the source mime is
/// not already WebP). A source extension outside {png, jpg, jpeg, webp}
/// yields an empty batch for every spec; that is a silent no-op, not an
/// error.
pub async fn generate(
    buffer: &[u8],
    source_ext: &str,
    source_mime: &str,
    specs: &[VariantSpec],
    webp_siblings: bool,
    quality: u8,
) -> Result<Vec<Vec<GeneratedVariant>>> {
    let format = match ImageFormat::from_ext(source_ext) {
        Some(format) => format,
        None => return Ok(specs.iter().map(|_| Vec::new()).collect()),
    };

    let img = Arc::new(decode_blocking(buffer.to_vec()).await?);
    let want_webp = webp_siblings && source_mime != WEBP_MIME;
    let ext = source_ext.to_string();

    tracing::debug!(
        specs = specs.len(),
        webp_siblings = want_webp,
        "generating image variants"
    );

    let tasks = specs.iter().map(|spec| {
        let img = Arc::clone(&img);
        let name = spec.name.clone();
        let options = spec.options;
        let ext = ext.clone();

        tokio::task::spawn_blocking(move || -> Result<Vec<GeneratedVariant>> {
            let resized = apply_resize(&img, options);
            let mut batch = Vec::with_capacity(2);
            batch.push(GeneratedVariant {
                name: name.clone(),
                ext,
                mime: format.mime().to_string(),
                buffer: encode(&resized, format, quality)
                    .with_context(|| format!("encoding variant {name}"))?,
            });
            if want_webp {
                batch.push(GeneratedVariant {
                    name: name.clone(),
                    ext: WEBP_EXT.to_string(),
                    mime: WEBP_MIME.to_string(),
                    buffer: encode(&resized, ImageFormat::WebP, quality)
                        .with_context(|| format!("encoding webp sibling for {name}"))?,
                });
            }
            Ok(batch)
        })
    });

    try_join_all(tasks)
        .await
        .context("variant generation task panicked")?
        .into_iter()
        .collect()
}

/// Defensive re-encode of an original whose dimensions are unknown: resize
/// against the configured options and re-encode in the source's own format.
///
/// Returns `None` when the source extension is not a supported image format.
pub async fn reencode(
    buffer: Vec<u8>,
    source_ext: &str,
    options: ResizeOptions,
    quality: u8,
) -> Result<Option<Vec<u8>>> {
    let format = match ImageFormat::from_ext(source_ext) {
        Some(format) => format,
        None => return Ok(None),
    };

    let out = tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
        let img = decode(&buffer)?;
        let resized = apply_resize(&img, options);
        Ok(encode(&resized, format, quality)?.to_vec())
    })
    .await
    .context("re-encode task panicked")??;

    Ok(Some(out))
}

async fn decode_blocking(data: Vec<u8>) -> Result<DynamicImage> {
    // Image decode is CPU-bound; run off the async pool to avoid blocking other tasks.
    tokio::task::spawn_blocking(move || decode(&data))
        .await
        .context("decode task panicked")?
}

fn decode(data: &[u8]) -> Result<DynamicImage> {
    let img = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    Ok(img)
}
