//! In-memory video repository, used by tests in place of Postgres.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use clipvault_core::models::Video;
use clipvault_core::AppError;

use crate::repository::VideoRepository;

#[derive(Default)]
pub struct MemoryVideoRepository {
    videos: Mutex<HashMap<Uuid, Video>>,
}

impl MemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for MemoryVideoRepository {
    async fn create(&self, video: &Video) -> Result<(), AppError> {
        self.videos
            .lock()
            .unwrap()
            .insert(video.id, video.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Video, AppError> {
        self.videos
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("video {} not found", id)))
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        let mut videos = self.videos.lock().unwrap();
        if !videos.contains_key(&video.id) {
            return Err(AppError::NotFound(format!("video {} not found", video.id)));
        }
        videos.insert(video.id, video.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipvault_core::models::StorageRef;

    #[tokio::test]
    async fn create_get_update_round_trip() {
        let repo = MemoryVideoRepository::new();
        let mut video = Video::new(Uuid::new_v4(), "clip".to_string(), None);
        repo.create(&video).await.unwrap();

        video.video_ref = Some(StorageRef::new("clips", "other/abc.mp4"));
        repo.update(&video).await.unwrap();

        let fetched = repo.get(video.id).await.unwrap();
        assert_eq!(
            fetched.video_ref,
            Some(StorageRef::new("clips", "other/abc.mp4"))
        );
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let repo = MemoryVideoRepository::new();
        let err = repo.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let video = Video::new(Uuid::new_v4(), "clip".to_string(), None);
        assert!(matches!(
            repo.update(&video).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
