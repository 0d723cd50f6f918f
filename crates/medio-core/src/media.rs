//! Media asset model and classification.
//!
//! A [`MediaFile`] is constructed by the caller before `upload` is invoked,
//! mutated in place by the upload pipeline (buffer replacement, size
//! recomputation, url assignment), and read again by `delete`, which
//! re-derives the same storage keys from `hash`/`ext`/`path`.

use serde::{Deserialize, Serialize};

/// Extensions classified as video assets and routed to the video store.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mov", "avi", "wmv", "flv", "mkv", "webm", "mpg", "mpeg", "3gp", "ogv",
];

/// Name prefixes reserved for derived variants. A hash starting with one of
/// these marks an already-derived asset that must not be re-processed.
pub const RESERVED_VARIANT_PREFIXES: &[&str] = &["thumbnail_", "large_", "medium_", "small_"];

/// Pixel dimensions of an image asset.
///
/// Absence on a [`MediaFile`] means the asset has not been dimension-inspected
/// yet; the upload pipeline then performs a defensive resize of the original.
/// Callers that have already inspected the image are responsible for setting
/// this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// An asset being stored.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Raw bytes; may be replaced by a re-encoded buffer during upload.
    pub buffer: Vec<u8>,
    /// Extension including the leading dot, e.g. `.png`.
    pub ext: String,
    pub mime: String,
    /// Content-derived identifier used as the base of the storage key.
    pub hash: String,
    /// Optional logical subdirectory.
    pub path: Option<String>,
    /// Known pixel dimensions, if the asset has been inspected.
    pub dimensions: Option<Dimensions>,
    /// Size in kilobytes; recomputed after re-encoding.
    pub size_kb: f64,
    /// Set by the upload pipeline on success.
    pub url: Option<String>,
}

impl MediaFile {
    /// Classify this file once; thread the result through instead of
    /// re-checking string membership.
    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(&self.ext)
    }

    /// Whether the hash marks an already-derived variant.
    pub fn is_derived(&self) -> bool {
        RESERVED_VARIANT_PREFIXES
            .iter()
            .any(|prefix| self.hash.starts_with(prefix))
    }
}

/// Supported image formats for variant generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Parse a file extension (with or without leading dot, any case).
    pub fn from_ext(ext: &str) -> Option<Self> {
        match normalize_ext(ext).as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }
}

/// Media kind, resolved once at classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image(ImageFormat),
    Video,
    Other,
}

impl MediaKind {
    pub fn classify(ext: &str) -> Self {
        if let Some(format) = ImageFormat::from_ext(ext) {
            MediaKind::Image(format)
        } else if is_video_extension(ext) {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// Case-insensitive video-extension check; tolerates a leading dot.
pub fn is_video_extension(ext: &str) -> bool {
    let normalized = normalize_ext(ext);
    VIDEO_EXTENSIONS.contains(&normalized.as_str())
}

fn normalize_ext(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Derive the storage key for an object.
///
/// Format: `{prefix}{path/}{variantName_}{hash}{ext}`, where `variantName_`
/// is empty for the original. Delete must produce byte-identical keys to what
/// upload produced or deletion silently no-ops, so all key derivation goes
/// through here.
pub fn object_key(
    prefix: &str,
    path: Option<&str>,
    variant: Option<&str>,
    hash: &str,
    ext: &str,
) -> String {
    let path_part = path.map(|p| format!("{}/", p)).unwrap_or_default();
    let variant_part = variant.map(|v| format!("{}_", v)).unwrap_or_default();
    format!("{}{}{}{}{}", prefix, path_part, variant_part, hash, ext)
}
