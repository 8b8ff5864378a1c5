//! On-demand signed URL resolution.
//!
//! Records persist only `(bucket, key)` references. Every read resolves
//! those into freshly presigned URLs with a fixed TTL; a signed URL is never
//! written back anywhere.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use clipvault_core::models::{StorageRef, Video};
use clipvault_storage::ObjectStore;

use crate::error::HttpAppError;

/// API representation of a video record. URLs are derived per response,
/// never stored.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

async fn sign_ref(
    storage: &dyn ObjectStore,
    reference: Option<&StorageRef>,
    ttl: Duration,
) -> Result<Option<String>, HttpAppError> {
    match reference {
        Some(r) => {
            let url = storage.presigned_get_url(&r.bucket, &r.key, ttl).await?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

/// Resolve a record's stored references into a response with time-limited
/// access URLs.
pub async fn resolve_video(
    video: Video,
    storage: &dyn ObjectStore,
    ttl: Duration,
) -> Result<VideoResponse, HttpAppError> {
    let thumbnail_url = sign_ref(storage, video.thumbnail_ref.as_ref(), ttl).await?;
    let video_url = sign_ref(storage, video.video_ref.as_ref(), ttl).await?;

    Ok(VideoResponse {
        id: video.id,
        user_id: video.user_id,
        title: video.title,
        description: video.description,
        thumbnail_url,
        video_url,
        created_at: video.created_at,
        updated_at: video.updated_at,
    })
}
