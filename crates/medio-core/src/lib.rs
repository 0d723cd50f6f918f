//! Medio Core Library
//!
//! This crate provides the domain model, configuration, and error types shared
//! across all medio components: the `MediaFile` asset model, media-kind
//! classification, access-level resolution, and object-key derivation.
//!
//! # Object key format
//!
//! Every stored object uses the same key layout:
//!
//! `{prefix}{path/}{variantName_}{hash}{ext}`
//!
//! where `variantName_` is empty for the original asset. Key generation is
//! centralized in [`media::object_key`] so upload and delete always derive
//! byte-identical keys.

pub mod acl;
pub mod config;
pub mod error;
pub mod media;

// Re-export commonly used types
pub use acl::AccessLevel;
pub use config::{FitMode, ProviderOptions, ResizeOptions, StoreParams, VariantSpec};
pub use error::ProviderError;
pub use media::{object_key, Dimensions, ImageFormat, MediaFile, MediaKind};
