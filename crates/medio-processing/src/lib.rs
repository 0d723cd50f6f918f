//! Medio Processing Library
//!
//! Image decode, resize, and re-encode for derived variants. The supported
//! source formats are PNG, JPEG, and WebP; anything else passes through the
//! pipelines untouched.

pub mod encode;
pub mod resize;
pub mod variants;

// Re-export commonly used types
pub use encode::encode;
pub use resize::apply_resize;
pub use variants::{generate, reencode, GeneratedVariant};
