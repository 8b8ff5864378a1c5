pub mod aspect;
pub mod storage_ref;
pub mod video;

pub use aspect::AspectClass;
pub use storage_ref::StorageRef;
pub use video::Video;
