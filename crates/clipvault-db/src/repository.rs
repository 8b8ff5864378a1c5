use async_trait::async_trait;
use uuid::Uuid;

use clipvault_core::models::Video;
use clipvault_core::AppError;

/// Narrow contract over the metadata store. A failed upload must leave the
/// record exactly as it was, so the orchestrator calls `update` only after
/// the object store has confirmed the put.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: &Video) -> Result<(), AppError>;

    /// Fetch a record by id; `NotFound` if it does not exist.
    async fn get(&self, id: Uuid) -> Result<Video, AppError>;

    /// Replace the stored record (pointers included) wholesale.
    async fn update(&self, video: &Video) -> Result<(), AppError>;
}
