//! External media tooling for clipvault: stream probing (ffprobe) and
//! fast-start remuxing (ffmpeg), both behind traits so tests can substitute
//! doubles without spawning real binaries.

pub mod error;
pub mod faststart;
pub mod probe;

pub use error::ProcessingError;
pub use faststart::{FastStartRemuxer, FfmpegRemuxer};
pub use probe::{FfprobeProber, MediaProber};
