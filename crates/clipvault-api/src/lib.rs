//! clipvault API server: HTTP surface, auth, and the upload orchestrator.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
