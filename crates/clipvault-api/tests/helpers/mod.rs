//! Test harness: in-memory backends and probe/remux doubles so the full
//! HTTP surface can be exercised without Postgres, S3 or ffmpeg.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempPath;
use uuid::Uuid;

use clipvault_api::auth::jwt;
use clipvault_api::setup::routes::build_router;
use clipvault_api::state::AppState;
use clipvault_core::models::Video;
use clipvault_core::Config;
use clipvault_db::{MemoryVideoRepository, VideoRepository};
use clipvault_processing::{FastStartRemuxer, MediaProber, ProcessingError};
use clipvault_storage::MemoryObjectStore;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const TEST_BUCKET: &str = "clips-test";
pub const SIGNED_URL_TTL_SECS: u64 = 3600;
pub const MAX_THUMBNAIL_BYTES: usize = 1024;
pub const MAX_VIDEO_BYTES: usize = 4096;

/// Bytes the marker remuxer prepends, standing in for a moved moov atom.
pub const FASTSTART_MARKER: &[u8] = b"moov";

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        database_url: "postgres://unused".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        s3_bucket: TEST_BUCKET.to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        max_thumbnail_size_bytes: MAX_THUMBNAIL_BYTES,
        max_video_size_bytes: MAX_VIDEO_BYTES,
        signed_url_ttl_secs: SIGNED_URL_TTL_SECS,
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
    }
}

/// Prober double returning fixed dimensions, or a probe failure when none
/// are configured.
pub struct StaticProber {
    pub dimensions: Option<(u32, u32)>,
}

#[async_trait]
impl MediaProber for StaticProber {
    async fn dimensions(&self, _path: &Path) -> Result<(u32, u32), ProcessingError> {
        self.dimensions
            .ok_or_else(|| ProcessingError::Probe("no video stream found".to_string()))
    }
}

/// Remuxer double: writes a new scratch file with a marker prefix so tests
/// can verify the remuxed copy (not the original) was stored.
pub struct MarkerRemuxer;

#[async_trait]
impl FastStartRemuxer for MarkerRemuxer {
    async fn remux(&self, input: &Path) -> Result<TempPath, ProcessingError> {
        let data = tokio::fs::read(input).await?;
        let output = tempfile::NamedTempFile::new()?.into_temp_path();
        let mut rewritten = FASTSTART_MARKER.to_vec();
        rewritten.extend_from_slice(&data);
        tokio::fs::write(&output, rewritten).await?;
        Ok(output)
    }
}

/// Remuxer double that always fails.
pub struct FailingRemuxer;

#[async_trait]
impl FastStartRemuxer for FailingRemuxer {
    async fn remux(&self, _input: &Path) -> Result<TempPath, ProcessingError> {
        Err(ProcessingError::Remux("ffmpeg exited with 1".to_string()))
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub videos: Arc<MemoryVideoRepository>,
    pub storage: Arc<MemoryObjectStore>,
}

pub fn spawn_app_with(
    prober_dimensions: Option<(u32, u32)>,
    remuxer: Arc<dyn FastStartRemuxer>,
) -> TestApp {
    let videos = Arc::new(MemoryVideoRepository::new());
    let storage = Arc::new(MemoryObjectStore::new(TEST_BUCKET));

    let state = Arc::new(AppState::new(
        test_config(),
        videos.clone(),
        storage.clone(),
        Arc::new(StaticProber {
            dimensions: prober_dimensions,
        }),
        remuxer,
    ));

    let server = TestServer::new(build_router(state)).expect("failed to start test server");

    TestApp {
        server,
        videos,
        storage,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(Some((1920, 1080)), Arc::new(MarkerRemuxer))
}

pub fn bearer(user_id: Uuid) -> String {
    let token = jwt::issue_token(user_id, TEST_JWT_SECRET, 3600).expect("failed to issue token");
    format!("Bearer {}", token)
}

pub async fn seed_video(app: &TestApp, user_id: Uuid) -> Video {
    let video = Video::new(user_id, "test clip".to_string(), None);
    app.videos.create(&video).await.expect("failed to seed");
    video
}
