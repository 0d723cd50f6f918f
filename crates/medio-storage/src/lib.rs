//! Medio Storage Library
//!
//! Object-store abstraction and the S3-compatible implementation. Each
//! configured target store (default, video) is an independent
//! [`S3ObjectStore`] instance with its own credentials, endpoint, bucket, and
//! custom-domain rewrite; no shared global SDK state.

pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use s3::{S3ObjectStore, S3StoreConfig};
pub use traits::{ObjectStore, StorageError, StorageResult};
