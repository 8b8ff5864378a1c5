//! Upload handlers. Thin shims over the upload orchestrator; the response is
//! the updated record with references resolved to fresh signed URLs, so raw
//! bucket URLs never leave the service.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::services::signing::{resolve_video, VideoResponse};
use crate::services::upload;
use crate::state::AppState;

pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(video_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video =
        upload::upload_thumbnail(&state, auth.user_id, video_id, &mut multipart).await?;

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    let response = resolve_video(video, state.storage.as_ref(), ttl).await?;
    Ok(Json(response))
}

pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(video_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = upload::upload_video(&state, auth.user_id, video_id, &mut multipart).await?;

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    let response = resolve_video(video, state.storage.as_ref(), ttl).await?;
    Ok(Json(response))
}
