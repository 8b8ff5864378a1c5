//! Configuration module
//!
//! Environment-driven configuration for the API server, storage backend and
//! media tooling. Call sites receive a fully-built `Config`; nothing reads
//! the environment after startup.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8091;
const DEFAULT_MAX_THUMBNAIL_BYTES: usize = 10 << 20; // 10 MiB
const DEFAULT_MAX_VIDEO_BYTES: usize = 1 << 30; // 1 GiB
const DEFAULT_SIGNED_URL_TTL_SECS: u64 = 3600;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub database_url: String,
    pub jwt_secret: String,
    // Storage configuration
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub s3_endpoint: Option<String>,
    // Upload limits, enforced during the streamed read
    pub max_thumbnail_size_bytes: usize,
    pub max_video_size_bytes: usize,
    /// Expiry window for presigned GET URLs
    pub signed_url_ttl_secs: u64,
    // Media tooling
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
}

impl Config {
    /// Load configuration from the environment. `DATABASE_URL`, `JWT_SECRET`
    /// and `S3_BUCKET` are required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server_port: parse_env("SERVER_PORT", DEFAULT_PORT)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            s3_bucket: env::var("S3_BUCKET").context("S3_BUCKET must be set")?,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            max_thumbnail_size_bytes: parse_env(
                "MAX_THUMBNAIL_SIZE_BYTES",
                DEFAULT_MAX_THUMBNAIL_BYTES,
            )?,
            max_video_size_bytes: parse_env("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_BYTES)?,
            signed_url_ttl_secs: parse_env("SIGNED_URL_TTL_SECS", DEFAULT_SIGNED_URL_TTL_SECS)?,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
        })
    }

    /// Production deployments emit JSON logs; everything else gets the
    /// human-readable format.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{} is not a valid value", key)),
        Err(_) => Ok(default),
    }
}
