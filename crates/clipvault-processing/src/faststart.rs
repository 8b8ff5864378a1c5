//! Fast-start remuxing.
//!
//! Rewrites an MP4 container so the moov atom precedes the media data,
//! letting players start progressive playback before the whole file is
//! downloaded. Structural rewrite only, no re-encode.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tempfile::TempPath;
use tokio::process::Command;

use crate::error::ProcessingError;
use crate::probe::validate_path;

/// Produces a fast-start copy of a local video file. The input is never
/// mutated; the output is a fresh scratch file removed when the returned
/// `TempPath` drops.
#[async_trait]
pub trait FastStartRemuxer: Send + Sync {
    async fn remux(&self, input: &Path) -> Result<TempPath, ProcessingError>;
}

pub struct FfmpegRemuxer {
    ffmpeg_path: String,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: String) -> Result<Self, ProcessingError> {
        validate_path(&ffmpeg_path)?;
        Ok(Self { ffmpeg_path })
    }
}

#[async_trait]
impl FastStartRemuxer for FfmpegRemuxer {
    #[tracing::instrument(skip(self), fields(
        process.executable.path = %self.ffmpeg_path,
        ffmpeg.operation = "faststart"
    ))]
    async fn remux(&self, input: &Path) -> Result<TempPath, ProcessingError> {
        validate_path(&input.to_string_lossy())?;

        let output_path = tempfile::Builder::new()
            .prefix("clipvault-faststart-")
            .suffix(".mp4")
            .tempfile()?
            .into_temp_path();

        let start = std::time::Instant::now();

        let status = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-map", "0", "-c", "copy", "-movflags", "+faststart", "-f", "mp4", "-y"])
            .arg(&output_path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ProcessingError::Remux(format!("failed to execute ffmpeg: {}", e)))?;

        if !status.success() {
            return Err(ProcessingError::Remux(format!(
                "ffmpeg exited with {}",
                status
            )));
        }

        let output_len = tokio::fs::metadata(&output_path)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if output_len == 0 {
            return Err(ProcessingError::Remux(
                "ffmpeg produced no output file".to_string(),
            ));
        }

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            output_bytes = output_len,
            "Fast-start remux completed"
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_tool_path() {
        assert!(FfmpegRemuxer::new("ffmpeg".to_string()).is_ok());
        assert!(FfmpegRemuxer::new("ffmpeg | cat".to_string()).is_err());
    }
}
