//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;

/// Slack on top of the configured video limit for multipart framing. The
/// real per-type byte caps are enforced during the streamed read.
const MULTIPART_OVERHEAD_BYTES: usize = 1 << 20;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_state = Arc::new(AuthState {
        jwt_secret: state.config.jwt_secret.clone(),
    });

    let body_limit = state.config.max_video_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let protected = Router::new()
        .route("/api/v1/videos", post(handlers::videos::create_video))
        .route("/api/v1/videos/{id}", get(handlers::videos::get_video))
        .route(
            "/api/v1/videos/{id}/thumbnail",
            post(handlers::uploads::upload_thumbnail),
        )
        .route(
            "/api/v1/videos/{id}/video",
            post(handlers::uploads::upload_video),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    let public = Router::new().route("/healthz", get(handlers::health::healthz));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
