//! Media probing - stream dimension extraction via ffprobe.

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use crate::error::ProcessingError;

/// Validate that a path doesn't contain shell metacharacters or dangerous sequences
pub(crate) fn validate_path(path: &str) -> Result<(), ProcessingError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(ProcessingError::InvalidPath(format!(
            "path contains dangerous characters: {}",
            path
        )));
    }
    if path.contains("..") {
        return Err(ProcessingError::InvalidPath(format!(
            "path contains directory traversal: {}",
            path
        )));
    }
    Ok(())
}

/// Obtains the pixel dimensions of the primary video stream of a local file.
#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProcessingError>;
}

pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Result<Self, ProcessingError> {
        validate_path(&ffprobe_path)?;
        Ok(Self { ffprobe_path })
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[tracing::instrument(skip(self), fields(
        process.executable.path = %self.ffprobe_path,
        ffmpeg.operation = "probe"
    ))]
    async fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProcessingError> {
        validate_path(&path.to_string_lossy())?;

        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(path)
            .output()
            .await
            .map_err(|e| ProcessingError::Probe(format!("failed to execute ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(ProcessingError::Probe(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let (width, height) = parse_probe_output(&output.stdout)?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            width,
            height,
            "Video probe completed"
        );

        Ok((width, height))
    }
}

/// Parse ffprobe's JSON output into the first video stream's dimensions.
pub fn parse_probe_output(stdout: &[u8]) -> Result<(u32, u32), ProcessingError> {
    let probe_data: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::Probe(format!("failed to parse ffprobe output: {}", e)))?;

    let stream = probe_data["streams"]
        .get(0)
        .ok_or_else(|| ProcessingError::Probe("no video stream found".to_string()))?;

    let width = stream["width"]
        .as_u64()
        .ok_or_else(|| ProcessingError::Probe("could not parse width".to_string()))?
        as u32;

    let height = stream["height"]
        .as_u64()
        .ok_or_else(|| ProcessingError::Probe("could not parse height".to_string()))?
        as u32;

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_from_probe_json() {
        let stdout = br#"{"streams":[{"index":0,"codec_name":"h264","width":1920,"height":1080}]}"#;
        assert_eq!(parse_probe_output(stdout).unwrap(), (1920, 1080));
    }

    #[test]
    fn rejects_output_without_streams() {
        let stdout = br#"{"streams":[]}"#;
        assert!(matches!(
            parse_probe_output(stdout),
            Err(ProcessingError::Probe(_))
        ));
    }

    #[test]
    fn rejects_stream_missing_dimensions() {
        let stdout = br#"{"streams":[{"index":0,"codec_name":"aac"}]}"#;
        assert!(matches!(
            parse_probe_output(stdout),
            Err(ProcessingError::Probe(_))
        ));
    }

    #[test]
    fn rejects_non_json_output() {
        assert!(parse_probe_output(b"not json").is_err());
    }

    #[test]
    fn validates_tool_path() {
        assert!(FfprobeProber::new("ffprobe".to_string()).is_ok());
        assert!(FfprobeProber::new("ffprobe; rm -rf /".to_string()).is_err());
        assert!(FfprobeProber::new("../ffprobe".to_string()).is_err());
    }
}
