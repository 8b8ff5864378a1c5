//! Record store for video metadata.
//!
//! The orchestrator only sees `VideoRepository`; the Postgres implementation
//! backs production and the in-memory one backs tests. Operations are
//! transactional at single-record granularity, which is all the upload
//! pipeline requires.

pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryVideoRepository;
pub use postgres::PgVideoRepository;
pub use repository::VideoRepository;
