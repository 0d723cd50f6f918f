//! Provider configuration.
//!
//! The CMS hands the provider a single options object at initialization; it
//! deserializes into [`ProviderOptions`]. Two independent stores (default and
//! video) are described, each with its own credentials, endpoint, bucket, and
//! custom domain. Configuration is resolved once and never mutated.

use serde::Deserialize;

use crate::acl::AccessLevel;
use crate::error::ProviderError;

/// Sentinel value meaning "no custom domain configured".
const DOMAIN_UNSET: &str = "-";

const DEFAULT_QUALITY: u8 = 80;

/// Fixed request parameters for one object store (e.g. bucket name).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreParams {
    #[serde(alias = "Bucket")]
    pub bucket: String,
}

/// A named resize specification, e.g. `{name: "thumbnail", options: {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantSpec {
    /// Prefix label used in the storage key: `{name}_{hash}{ext}`.
    pub name: String,
    pub options: ResizeOptions,
}

/// Resize parameters, passed opaquely to the resize engine.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: FitMode,
}

/// How the image is fitted to the target dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the box, cropping overflow.
    #[default]
    Cover,
    /// Fit within the box, preserving aspect ratio.
    Contain,
    /// Like contain, but never enlarge.
    Inside,
    /// Cover the box without cropping; output may exceed one dimension.
    Outside,
    /// Stretch to the exact box, ignoring aspect ratio.
    Fill,
}

/// Immutable provider configuration, resolved once at initialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderOptions {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
    pub params: StoreParams,

    pub video_region: Option<String>,
    pub video_access_key_id: Option<String>,
    pub video_secret_access_key: Option<String>,
    pub video_endpoint: Option<String>,
    pub video_params: StoreParams,

    /// Key prefix applied to every object.
    pub prefix: String,
    /// Canned ACL override; validated lazily via [`ProviderOptions::access_level`].
    pub access_level: Option<String>,
    pub custom_domain: Option<String>,
    pub custom_video_domain: Option<String>,

    /// Named resize specs for derived image variants.
    pub thumbnails: Vec<VariantSpec>,
    /// Generate WebP siblings for variants and the original.
    pub webp: bool,
    /// Re-encode quality (0-100), applied uniformly across formats.
    pub quality: u8,
    /// Resize options for the defensive re-encode of oversized originals.
    pub optimize: Option<ResizeOptions>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        ProviderOptions {
            region: None,
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            params: StoreParams::default(),
            video_region: None,
            video_access_key_id: None,
            video_secret_access_key: None,
            video_endpoint: None,
            video_params: StoreParams::default(),
            prefix: String::new(),
            access_level: None,
            custom_domain: None,
            custom_video_domain: None,
            thumbnails: Vec::new(),
            webp: false,
            quality: DEFAULT_QUALITY,
            optimize: None,
        }
    }
}

impl ProviderOptions {
    /// Resolve the configured access level. Fails with
    /// [`ProviderError::InvalidConfiguration`] on an unknown value.
    pub fn access_level(&self) -> Result<AccessLevel, ProviderError> {
        AccessLevel::resolve(self.access_level.as_deref())
    }

    /// Explicit credentials for the default store, trimmed of whitespace.
    /// Returned only when both halves are present and non-empty; otherwise
    /// the ambient credential chain applies.
    pub fn credentials(&self) -> Option<(String, String)> {
        trimmed_pair(
            self.access_key_id.as_deref(),
            self.secret_access_key.as_deref(),
        )
    }

    /// Explicit credentials for the video store. Same rules as
    /// [`ProviderOptions::credentials`].
    pub fn video_credentials(&self) -> Option<(String, String)> {
        trimmed_pair(
            self.video_access_key_id.as_deref(),
            self.video_secret_access_key.as_deref(),
        )
    }

    /// Custom domain for the default store, with the `"-"` sentinel and empty
    /// strings normalized away.
    pub fn custom_domain(&self) -> Option<&str> {
        normalize_domain(self.custom_domain.as_deref())
    }

    /// Custom domain for the video store.
    pub fn custom_video_domain(&self) -> Option<&str> {
        normalize_domain(self.custom_video_domain.as_deref())
    }
}

fn normalize_domain(domain: Option<&str>) -> Option<&str> {
    domain.filter(|d| !d.is_empty() && *d != DOMAIN_UNSET)
}

fn trimmed_pair(key_id: Option<&str>, secret: Option<&str>) -> Option<(String, String)> {
    let key_id = key_id.map(str::trim).filter(|s| !s.is_empty())?;
    let secret = secret.map(str::trim).filter(|s| !s.is_empty())?;
    Some((key_id.to_string(), secret.to_string()))
}
