//! Upload and delete pipelines.
//!
//! Upload: classify the file, generate and store derived variants for
//! thumbnailable images, defensively re-encode originals with unknown
//! dimensions, then store the original in the correct target store and record
//! its URL. The first error rejects the whole call; already-uploaded variants
//! are not rolled back.
//!
//! Delete: remove every derived variant (and WebP siblings) from the default
//! store, then the original from its target store. Side-delete failures are
//! logged and swallowed; only the original's outcome is surfaced.

use futures::future::join_all;

use medio_core::{
    media::is_video_extension, object_key, AccessLevel, MediaFile, MediaKind, ProviderError,
};

use crate::Provider;

const WEBP_EXT: &str = ".webp";

impl Provider {
    /// Upload a file and its derived variants. On success `file.url` is set;
    /// success is observed only via absence of an error and that mutation.
    pub async fn upload(&self, file: &mut MediaFile) -> Result<(), ProviderError> {
        let acl = self.options.access_level()?;
        let kind = file.kind();

        if self.is_thumbnailable(file, kind) {
            let batches = medio_processing::generate(
                &file.buffer,
                &file.ext,
                &file.mime,
                &self.options.thumbnails,
                self.options.webp,
                self.options.quality,
            )
            .await
            .map_err(|e| ProviderError::ImageProcessing(e.to_string()))?;

            for variant in batches.iter().flatten() {
                let key = self.key_for(file, Some(&variant.name), &variant.ext);
                self.default_store
                    .put(
                        &key,
                        variant.buffer.to_vec(),
                        &variant.mime,
                        effective_acl(acl, &variant.ext),
                    )
                    .await?;
            }

            // Unknown dimensions mean the original was never inspected:
            // resize it against the configured optimize options before storing.
            if file.dimensions.is_none() {
                if let Some(optimize) = self.options.optimize {
                    let reencoded = medio_processing::reencode(
                        file.buffer.clone(),
                        &file.ext,
                        optimize,
                        self.options.quality,
                    )
                    .await
                    .map_err(|e| ProviderError::ImageProcessing(e.to_string()))?;

                    if let Some(buffer) = reencoded {
                        file.size_kb = round_kb(buffer.len());
                        file.buffer = buffer;
                    }
                }
            }
        }

        let key = self.key_for(file, None, &file.ext);
        let store = if kind.is_video() {
            &self.video_store
        } else {
            &self.default_store
        };

        let url = store
            .put(
                &key,
                file.buffer.clone(),
                &file.mime,
                effective_acl(acl, &file.ext),
            )
            .await?;
        file.url = Some(url);

        tracing::info!(hash = %file.hash, key = %key, "upload complete");
        Ok(())
    }

    /// Delete a file, its variants, and its WebP siblings.
    pub async fn delete(&self, file: &MediaFile) -> Result<(), ProviderError> {
        self.options.access_level()?;
        let kind = file.kind();

        let mut side_keys = Vec::new();
        if self.is_thumbnailable(file, kind) {
            for spec in &self.options.thumbnails {
                side_keys.push(self.key_for(file, Some(&spec.name), &file.ext));
                if self.options.webp {
                    side_keys.push(self.key_for(file, Some(&spec.name), WEBP_EXT));
                }
            }
        }
        if self.options.webp {
            side_keys.push(self.key_for(file, None, WEBP_EXT));
        }

        // All side deletes run together and are joined before the primary
        // delete; their failures are logged but never surfaced to the caller.
        let side_deletes = side_keys.iter().map(|key| async move {
            (key.as_str(), self.default_store.delete(key).await)
        });
        for (key, result) in join_all(side_deletes).await {
            if let Err(e) = result {
                tracing::error!(key = %key, error = %e, "failed to delete derived asset");
            }
        }

        let store = if self.targets_video_store(file, kind) {
            &self.video_store
        } else {
            &self.default_store
        };
        store.delete(&self.key_for(file, None, &file.ext)).await?;

        tracing::info!(hash = %file.hash, "delete complete");
        Ok(())
    }

    /// A file gets derived variants iff thumbnails are configured, it is an
    /// image, and its hash does not mark an already-derived variant.
    fn is_thumbnailable(&self, file: &MediaFile, kind: MediaKind) -> bool {
        !self.options.thumbnails.is_empty()
            && matches!(kind, MediaKind::Image(_))
            && !file.is_derived()
    }

    /// The original lives in the video store when its extension says video,
    /// or when its recorded URL points at the custom video domain (covers
    /// assets whose extension no longer matches after re-encoding).
    fn targets_video_store(&self, file: &MediaFile, kind: MediaKind) -> bool {
        if kind.is_video() {
            return true;
        }
        match (file.url.as_deref(), self.options.custom_video_domain()) {
            (Some(url), Some(domain)) => url.contains(domain),
            _ => false,
        }
    }

    fn key_for(&self, file: &MediaFile, variant: Option<&str>, ext: &str) -> String {
        object_key(
            &self.options.prefix,
            file.path.as_deref(),
            variant,
            &file.hash,
            ext,
        )
    }
}

/// ACL forced to `private` for video extensions. For image-derived variants
/// this branch never triggers; it is kept as a documented no-op.
fn effective_acl(acl: AccessLevel, ext: &str) -> AccessLevel {
    if is_video_extension(ext) {
        AccessLevel::Private
    } else {
        acl
    }
}

/// Size in kilobytes (bytes/1000), rounded to 2 decimals.
fn round_kb(bytes: usize) -> f64 {
    (bytes as f64 / 1000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extension_forces_private_acl() {
        assert_eq!(
            effective_acl(AccessLevel::PublicRead, ".mp4"),
            AccessLevel::Private
        );
        assert_eq!(
            effective_acl(AccessLevel::PublicRead, ".png"),
            AccessLevel::PublicRead
        );
    }

    #[test]
    fn kilobytes_round_to_two_decimals() {
        assert_eq!(round_kb(1234), 1.23);
        assert_eq!(round_kb(1250), 1.25);
        assert_eq!(round_kb(0), 0.0);
        assert_eq!(round_kb(1_000_000), 1000.0);
    }
}
