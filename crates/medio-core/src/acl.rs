//! Canned access levels for uploaded objects.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::ProviderError;

/// The closed set of canned ACLs an object may be uploaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
}

const VALID_ACCESS_LEVELS: &[&str] = &[
    "private",
    "public-read",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
];

impl AccessLevel {
    /// Resolve the configured access level string.
    ///
    /// An unset value defaults to `public-read`. A set value must be one of
    /// the fixed canned-ACL set or resolution fails with
    /// [`ProviderError::InvalidConfiguration`] naming the value and listing
    /// the valid choices.
    pub fn resolve(configured: Option<&str>) -> Result<Self, ProviderError> {
        match configured {
            None => Ok(AccessLevel::PublicRead),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::PublicRead => "public-read",
            AccessLevel::PublicReadWrite => "public-read-write",
            AccessLevel::AuthenticatedRead => "authenticated-read",
            AccessLevel::BucketOwnerRead => "bucket-owner-read",
            AccessLevel::BucketOwnerFullControl => "bucket-owner-full-control",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(AccessLevel::Private),
            "public-read" => Ok(AccessLevel::PublicRead),
            "public-read-write" => Ok(AccessLevel::PublicReadWrite),
            "authenticated-read" => Ok(AccessLevel::AuthenticatedRead),
            "bucket-owner-read" => Ok(AccessLevel::BucketOwnerRead),
            "bucket-owner-full-control" => Ok(AccessLevel::BucketOwnerFullControl),
            other => Err(ProviderError::InvalidConfiguration(format!(
                "unknown access level {:?}, expected one of: {}",
                other,
                VALID_ACCESS_LEVELS.join(", ")
            ))),
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
