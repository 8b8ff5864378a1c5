//! Persisted storage references.
//!
//! A record never stores a URL, signed or otherwise. It stores a compact
//! `"{bucket},{key}"` pair which is resolved into a freshly presigned URL on
//! every read. The comma delimiter is safe because bucket names cannot
//! contain commas and generated keys are base64url plus `/` and `.`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const DELIMITER: char = ',';

/// A `(bucket, key)` pair addressing one stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRef {
    pub bucket: String,
    pub key: String,
}

impl StorageRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        StorageRef {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse the persisted form. The reference must split into exactly two
    /// non-empty components; anything else is rejected rather than guessed at.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut parts = raw.splitn(3, DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(bucket), Some(key), None) if !bucket.is_empty() && !key.is_empty() => {
                Ok(StorageRef::new(bucket, key))
            }
            _ => Err(AppError::MalformedReference(format!(
                "expected \"bucket{}key\", got {:?}",
                DELIMITER, raw
            ))),
        }
    }
}

impl fmt::Display for StorageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.bucket, DELIMITER, self.key)
    }
}
