//! Medio Provider Library
//!
//! The file-storage provider surface: uploads, derives, and deletes media
//! assets against two S3-compatible object stores (a default store and a
//! separate video store, each independently configured).
//!
//! ```no_run
//! # async fn demo() -> Result<(), medio_core::ProviderError> {
//! use medio_core::ProviderOptions;
//! use medio_provider::Provider;
//!
//! let options: ProviderOptions = serde_json::from_str(r#"{
//!     "region": "us-east-1",
//!     "params": {"bucket": "media"},
//!     "videoParams": {"bucket": "videos"},
//!     "prefix": "media/",
//!     "thumbnails": [{"name": "thumbnail", "options": {"width": 245, "height": 156}}],
//!     "webp": true
//! }"#).unwrap();
//!
//! let provider = Provider::new(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod test_helpers;

use std::sync::Arc;

use medio_core::{ProviderError, ProviderOptions};
use medio_storage::{ObjectStore, S3ObjectStore, S3StoreConfig};

/// The provider: immutable options plus one client per target store.
pub struct Provider {
    options: ProviderOptions,
    default_store: Arc<dyn ObjectStore>,
    video_store: Arc<dyn ObjectStore>,
}

impl Provider {
    /// Build both store clients from the provider options.
    ///
    /// When no separate video bucket is configured the video store shares the
    /// default bucket; its credentials, endpoint, and domain still resolve
    /// independently.
    pub async fn new(options: ProviderOptions) -> Result<Self, ProviderError> {
        let default_store = S3ObjectStore::new(S3StoreConfig {
            bucket: options.params.bucket.clone(),
            region: options.region.clone(),
            credentials: options.credentials(),
            endpoint: options.endpoint.clone(),
            custom_domain: options.custom_domain().map(String::from),
        })
        .await?;

        let video_bucket = if options.video_params.bucket.is_empty() {
            options.params.bucket.clone()
        } else {
            options.video_params.bucket.clone()
        };
        let video_store = S3ObjectStore::new(S3StoreConfig {
            bucket: video_bucket,
            region: options.video_region.clone().or_else(|| options.region.clone()),
            credentials: options.video_credentials(),
            endpoint: options.video_endpoint.clone(),
            custom_domain: options.custom_video_domain().map(String::from),
        })
        .await?;

        Ok(Self::with_stores(
            options,
            Arc::new(default_store),
            Arc::new(video_store),
        ))
    }

    /// Build a provider from the raw options object the CMS hands over at
    /// initialization.
    pub async fn from_value(value: serde_json::Value) -> Result<Self, ProviderError> {
        let options: ProviderOptions = serde_json::from_value(value)
            .map_err(|e| ProviderError::InvalidConfiguration(e.to_string()))?;
        Self::new(options).await
    }

    /// Build a provider over externally constructed stores. Used by tests and
    /// by callers that inject their own backends.
    pub fn with_stores(
        options: ProviderOptions,
        default_store: Arc<dyn ObjectStore>,
        video_store: Arc<dyn ObjectStore>,
    ) -> Self {
        Provider {
            options,
            default_store,
            video_store,
        }
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }
}
