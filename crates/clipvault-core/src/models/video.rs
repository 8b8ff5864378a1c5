//! The owning record for uploaded media.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StorageRef;

/// A video record. Holds at most one thumbnail pointer and one media
/// pointer; each is replaced wholesale on a successful upload (the previous
/// object is orphaned, not deleted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    /// Owning user. Uploads may only target records whose owner matches the
    /// authenticated actor.
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_ref: Option<StorageRef>,
    pub video_ref: Option<StorageRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    pub fn new(user_id: Uuid, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            thumbnail_ref: None,
            video_ref: None,
            created_at: now,
            updated_at: now,
        }
    }
}
