//! Object storage for clipvault.
//!
//! The `ObjectStore` trait is the only surface the rest of the workspace
//! sees; the S3 backend is used in production and the in-memory backend in
//! tests. Storage keys are derived here too, from OS entropy, so no key is
//! ever a function of user input.

pub mod keys;
pub mod memory;
pub mod s3;
pub mod traits;

pub use keys::derive_object_key;
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;
pub use traits::{ObjectStore, StorageError, StorageResult};
