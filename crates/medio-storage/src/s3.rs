use crate::traits::{ObjectStore, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use bytes::Bytes;
use medio_core::AccessLevel;

const DEFAULT_REGION: &str = "us-east-1";

/// Explicit configuration for one S3-compatible store instance.
///
/// Each store gets its own config object passed directly to the constructor;
/// nothing is read from or written to shared SDK-wide state.
#[derive(Debug, Clone, Default)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: Option<String>,
    /// Explicit `(access_key_id, secret_access_key)` pair. When absent the
    /// ambient AWS credential chain applies.
    pub credentials: Option<(String, String)>,
    /// Custom endpoint URL for S3-compatible providers
    /// (e.g., "http://localhost:9000" for MinIO, "https://nyc3.digitaloceanspaces.com" for DigitalOcean Spaces)
    pub endpoint: Option<String>,
    /// Optional URL prefix substituted for the provider's native location URL.
    pub custom_domain: Option<String>,
}

/// S3-compatible object store implementation
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
    endpoint: Option<String>,
    custom_domain: Option<String>,
}

impl S3ObjectStore {
    /// Create a new store instance from its own configuration.
    pub async fn new(config: S3StoreConfig) -> StorageResult<Self> {
        if config.bucket.is_empty() {
            return Err(StorageError::ConfigError(
                "bucket name not configured".to_string(),
            ));
        }

        let region_provider = RegionProviderChain::first_try(
            config.region.clone().map(aws_config::Region::new),
        )
        .or_default_provider()
        .or_else(aws_config::Region::new(DEFAULT_REGION));

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let region = shared_config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&shared_config);

        if let Some((key_id, secret)) = config.credentials {
            s3_config_builder = s3_config_builder
                .credentials_provider(Credentials::new(key_id, secret, None, None, "provider"));
        }

        if let Some(ref endpoint) = config.endpoint {
            // Path-style addressing is required by most S3-compatible providers (MinIO, etc.)
            s3_config_builder = s3_config_builder
                .endpoint_url(endpoint)
                .force_path_style(true);
        }

        let client = Client::from_conf(s3_config_builder.build());

        Ok(S3ObjectStore {
            client,
            bucket: config.bucket,
            region,
            endpoint: config.endpoint,
            custom_domain: config.custom_domain,
        })
    }

    /// Generate the public URL for an object.
    ///
    /// A configured custom domain always wins. Otherwise S3-compatible
    /// providers get path-style URLs built from the endpoint, and AWS proper
    /// gets the standard virtual-hosted format.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref domain) = self.custom_domain {
            return format!("{}/{}", domain.trim_end_matches('/'), key);
        }
        if let Some(ref endpoint) = self.endpoint {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }
}

fn canned_acl(level: AccessLevel) -> ObjectCannedAcl {
    match level {
        AccessLevel::Private => ObjectCannedAcl::Private,
        AccessLevel::PublicRead => ObjectCannedAcl::PublicRead,
        AccessLevel::PublicReadWrite => ObjectCannedAcl::PublicReadWrite,
        AccessLevel::AuthenticatedRead => ObjectCannedAcl::AuthenticatedRead,
        AccessLevel::BucketOwnerRead => ObjectCannedAcl::BucketOwnerRead,
        AccessLevel::BucketOwnerFullControl => ObjectCannedAcl::BucketOwnerFullControl,
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        acl: AccessLevel,
    ) -> StorageResult<String> {
        let size = data.len() as u64;
        let body = ByteStream::from(Bytes::from(data));
        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .acl(canned_acl(acl))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.generate_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            acl = %acl,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let start = std::time::Instant::now();

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 delete failed"
                );
                StorageError::DeleteFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 delete successful"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(config: S3StoreConfig) -> S3ObjectStore {
        S3ObjectStore::new(config).await.unwrap()
    }

    #[tokio::test]
    async fn rejects_missing_bucket() {
        let result = S3ObjectStore::new(S3StoreConfig::default()).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }

    #[tokio::test]
    async fn generates_aws_url_without_endpoint() {
        let store = store_with(S3StoreConfig {
            bucket: "media-bucket".to_string(),
            region: Some("eu-west-1".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(
            store.generate_url("media/abc123.png"),
            "https://media-bucket.s3.eu-west-1.amazonaws.com/media/abc123.png"
        );
    }

    #[tokio::test]
    async fn generates_path_style_url_with_endpoint() {
        let store = store_with(S3StoreConfig {
            bucket: "media-bucket".to_string(),
            region: Some("us-east-1".to_string()),
            endpoint: Some("http://localhost:9000/".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(
            store.generate_url("abc123.png"),
            "http://localhost:9000/media-bucket/abc123.png"
        );
    }

    #[tokio::test]
    async fn custom_domain_overrides_native_url() {
        let store = store_with(S3StoreConfig {
            bucket: "media-bucket".to_string(),
            region: Some("us-east-1".to_string()),
            endpoint: Some("http://localhost:9000".to_string()),
            custom_domain: Some("https://cdn.example.com/".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(
            store.generate_url("media/abc123.png"),
            "https://cdn.example.com/media/abc123.png"
        );
    }
}
