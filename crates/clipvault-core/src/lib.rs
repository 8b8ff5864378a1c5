//! Core types shared across the clipvault workspace: configuration, the
//! error taxonomy, and the domain models (video records, storage references,
//! aspect classification).

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
