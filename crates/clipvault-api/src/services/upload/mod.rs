//! Upload orchestration.
//!
//! One linear pipeline per request, fail-fast, no retries at this layer:
//! ownership check → ingest → (video only: probe → classify → remux) →
//! key derivation → object-store put → record pointer update. The record is
//! mutated only after the put has been confirmed, so a failed upload leaves
//! it untouched. Scratch files are owned by this pipeline and dropped on
//! every exit path.

pub mod ingest;

use axum::extract::Multipart;
use chrono::Utc;
use mime::Mime;
use tempfile::NamedTempFile;
use uuid::Uuid;

use clipvault_core::models::{AspectClass, StorageRef, Video};
use clipvault_core::AppError;
use clipvault_storage::derive_object_key;

use crate::error::HttpAppError;
use crate::state::AppState;

pub const THUMBNAIL_FIELD: &str = "thumbnail";
pub const VIDEO_FIELD: &str = "video";

/// Images are never probed, so their keys live under a fixed prefix instead
/// of a geometry bucket.
const THUMBNAIL_KEY_PREFIX: &str = "thumbnails";

/// Walk the multipart stream until the named file field appears and spool it
/// to a scratch file. Other fields are skipped.
async fn spool_named_field(
    multipart: &mut Multipart,
    field_name: &str,
    allowed_content_types: &[String],
    max_bytes: usize,
) -> Result<(NamedTempFile, Mime), AppError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read multipart: {}", e)))?;

        let Some(mut field) = field else {
            return Err(AppError::BadRequest(format!(
                "missing multipart field '{}'",
                field_name
            )));
        };

        if field.name() == Some(field_name) {
            return ingest::spool_field(&mut field, allowed_content_types, max_bytes).await;
        }
    }
}

/// Fetch the owning record and verify the authenticated actor owns it.
async fn owned_record(
    state: &AppState,
    video_id: Uuid,
    actor_id: Uuid,
) -> Result<Video, AppError> {
    let video = state.videos.get(video_id).await?;
    if video.user_id != actor_id {
        return Err(AppError::Unauthorized(
            "record is owned by another user".to_string(),
        ));
    }
    Ok(video)
}

/// Thumbnail path: type validation → spool → store. No inspection, no remux.
pub async fn upload_thumbnail(
    state: &AppState,
    actor_id: Uuid,
    video_id: Uuid,
    multipart: &mut Multipart,
) -> Result<Video, HttpAppError> {
    let mut video = owned_record(state, video_id, actor_id).await?;

    let (scratch, media_type) = spool_named_field(
        multipart,
        THUMBNAIL_FIELD,
        &state.thumbnail_allowed_content_types,
        state.config.max_thumbnail_size_bytes,
    )
    .await?;

    let key = derive_object_key(THUMBNAIL_KEY_PREFIX, media_type.subtype().as_str())?;

    state
        .storage
        .put_file(&key, media_type.essence_str(), scratch.path())
        .await?;

    video.thumbnail_ref = Some(StorageRef::new(state.storage.bucket(), &key));
    video.updated_at = Utc::now();
    state.videos.update(&video).await?;

    tracing::info!(
        video_id = %video.id,
        key = %key,
        "Thumbnail upload committed"
    );

    Ok(video)
}

/// Video path: type validation → spool → probe → classify → remux (mandatory,
/// no silent fallback) → store the remuxed file.
pub async fn upload_video(
    state: &AppState,
    actor_id: Uuid,
    video_id: Uuid,
    multipart: &mut Multipart,
) -> Result<Video, HttpAppError> {
    let mut video = owned_record(state, video_id, actor_id).await?;

    let (scratch, media_type) = spool_named_field(
        multipart,
        VIDEO_FIELD,
        &state.video_allowed_content_types,
        state.config.max_video_size_bytes,
    )
    .await?;

    // Classification comes from the untouched original; the remuxed copy is
    // what gets stored.
    let (width, height) = state.prober.dimensions(scratch.path()).await?;
    let aspect = AspectClass::from_dimensions(width, height);

    let remuxed = state.remuxer.remux(scratch.path()).await?;

    let key = derive_object_key(aspect.key_prefix(), "mp4")?;

    state
        .storage
        .put_file(&key, media_type.essence_str(), &remuxed)
        .await?;

    video.video_ref = Some(StorageRef::new(state.storage.bucket(), &key));
    video.updated_at = Utc::now();
    state.videos.update(&video).await?;

    tracing::info!(
        video_id = %video.id,
        key = %key,
        width,
        height,
        aspect = aspect.key_prefix(),
        "Video upload committed"
    );

    Ok(video)
}
