//! Error types module
//!
//! This module provides the provider-wide error taxonomy. Storage and image
//! processing failures are carried as strings because the originating crates
//! own their concrete error types; they convert into `ProviderError` at the
//! pipeline boundary.

/// Provider operation errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A configuration value failed validation (e.g. an unknown access level).
    /// Raised at upload/delete call time, not at provider construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Any failure reported by the object-store client, propagated verbatim.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Any failure from image decode/resize/encode, propagated verbatim.
    /// A single variant failure rejects the whole generation batch.
    #[error("Image processing error: {0}")]
    ImageProcessing(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
