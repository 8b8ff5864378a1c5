//! Shared application state.
//!
//! Every handle here is constructed once at startup and shared read-only by
//! all in-flight requests. Tests substitute in-memory backends and
//! probe/remux doubles through the same constructor.

use std::sync::Arc;

use clipvault_core::Config;
use clipvault_db::VideoRepository;
use clipvault_processing::{FastStartRemuxer, MediaProber};
use clipvault_storage::ObjectStore;

pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    pub storage: Arc<dyn ObjectStore>,
    pub prober: Arc<dyn MediaProber>,
    pub remuxer: Arc<dyn FastStartRemuxer>,
    /// Exact-match media-type allowlists per endpoint kind.
    pub thumbnail_allowed_content_types: Vec<String>,
    pub video_allowed_content_types: Vec<String>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoRepository>,
        storage: Arc<dyn ObjectStore>,
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn FastStartRemuxer>,
    ) -> Self {
        AppState {
            config,
            videos,
            storage,
            prober,
            remuxer,
            thumbnail_allowed_content_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
            ],
            video_allowed_content_types: vec!["video/mp4".to_string()],
        }
    }
}
