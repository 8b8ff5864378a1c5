//! Video record handlers: create a draft record, read a record with its
//! stored references resolved into fresh time-limited URLs.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clipvault_core::models::Video;
use clipvault_core::AppError;

use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::services::signing::{resolve_video, VideoResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Json(body): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), HttpAppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".to_string()).into());
    }

    let video = Video::new(auth.user_id, body.title, body.description);
    state.videos.create(&video).await?;

    tracing::info!(video_id = %video.id, user_id = %auth.user_id, "Video record created");

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    let response = resolve_video(video, state.storage.as_ref(), ttl).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_video(
    State(state): State<Arc<AppState>>,
    _auth: AuthContext,
    Path(video_id): Path<Uuid>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = state.videos.get(video_id).await?;

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    let response = resolve_video(video, state.storage.as_ref(), ttl).await?;
    Ok(Json(response))
}
