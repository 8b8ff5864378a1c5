//! Record lifecycle tests: create, read with signed references, health.

mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use clipvault_core::models::StorageRef;
use clipvault_db::VideoRepository;

use helpers::{bearer, seed_video, spawn_app, TEST_BUCKET};

#[tokio::test]
async fn create_video_returns_created_record() {
    let app = spawn_app();
    let user_id = Uuid::new_v4();

    let response = app
        .server
        .post("/api/v1/videos")
        .add_header("Authorization", bearer(user_id))
        .json(&json!({ "title": "boot footage", "description": "first take" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["title"], "boot footage");
    assert_eq!(body["description"], "first take");
    assert_eq!(body["user_id"], user_id.to_string());
    assert!(body["thumbnail_url"].is_null());
    assert!(body["video_url"].is_null());

    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    let record = app.videos.get(id).await.unwrap();
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn create_video_rejects_blank_title() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/v1/videos")
        .add_header("Authorization", bearer(Uuid::new_v4()))
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_video_signs_fresh_urls_from_stored_references() {
    let app = spawn_app();
    let user_id = Uuid::new_v4();
    let mut video = seed_video(&app, user_id).await;

    video.thumbnail_ref = Some(StorageRef::new(TEST_BUCKET, "thumbnails/abc.png"));
    video.video_ref = Some(StorageRef::new(TEST_BUCKET, "landscape/xyz.mp4"));
    app.videos.update(&video).await.unwrap();

    let response = app
        .server
        .get(&format!("/api/v1/videos/{}", video.id))
        .add_header("Authorization", bearer(user_id))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let thumbnail_url = body["thumbnail_url"].as_str().unwrap();
    let video_url = body["video_url"].as_str().unwrap();
    assert!(thumbnail_url.contains("thumbnails/abc.png"));
    assert!(video_url.contains("landscape/xyz.mp4"));
    assert!(video_url.contains("X-Amz-Expires=3600"));
}

#[tokio::test]
async fn get_unknown_video_is_not_found() {
    let app = spawn_app();

    let response = app
        .server
        .get(&format!("/api/v1/videos/{}", Uuid::new_v4()))
        .add_header("Authorization", bearer(Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_without_token_is_rejected() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/v1/videos")
        .json(&json!({ "title": "no auth" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthz_is_public() {
    let app = spawn_app();

    let response = app.server.get("/healthz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
