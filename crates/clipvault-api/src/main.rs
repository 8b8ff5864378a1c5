use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use clipvault_api::setup;
use clipvault_api::state::AppState;
use clipvault_core::Config;
use clipvault_db::PgVideoRepository;
use clipvault_processing::{FfmpegRemuxer, FfprobeProber};
use clipvault_storage::S3ObjectStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await?;

    let repository = PgVideoRepository::new(pool);
    repository.migrate().await?;

    let storage = S3ObjectStore::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )
    .await?;

    let prober = FfprobeProber::new(config.ffprobe_path.clone())?;
    let remuxer = FfmpegRemuxer::new(config.ffmpeg_path.clone())?;

    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(repository),
        Arc::new(storage),
        Arc::new(prober),
        Arc::new(remuxer),
    ));

    let app = setup::routes::build_router(state);
    setup::server::start_server(&config, app).await?;

    Ok(())
}
