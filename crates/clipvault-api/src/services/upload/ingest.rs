//! Stream ingestion: multipart field → scratch file.
//!
//! The declared content type is parsed as a real media type and matched
//! exactly against the endpoint's allowlist; the byte budget is enforced
//! while reading, not from headers. The returned scratch file is deleted on
//! drop, so every exit path of the caller (success, error, cancellation)
//! releases it.

use axum::extract::multipart::Field;
use mime::Mime;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use clipvault_core::AppError;

/// Spool one multipart field to a scratch file, enforcing the allowlist and
/// a hard byte cap during the read.
pub async fn spool_field(
    field: &mut Field<'_>,
    allowed_content_types: &[String],
    max_bytes: usize,
) -> Result<(NamedTempFile, Mime), AppError> {
    let declared = field
        .content_type()
        .ok_or_else(|| AppError::InvalidInput("missing content type on file field".to_string()))?;

    let media_type: Mime = declared
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("unparseable content type: {}", declared)))?;

    if !allowed_content_types
        .iter()
        .any(|allowed| allowed == media_type.essence_str())
    {
        return Err(AppError::InvalidInput(format!(
            "content type {} not allowed; expected one of: {}",
            media_type.essence_str(),
            allowed_content_types.join(", ")
        )));
    }

    let scratch = NamedTempFile::new()?;
    let mut file = tokio::fs::File::from_std(scratch.reopen()?);

    let mut written: usize = 0;
    loop {
        let chunk = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload stream: {}", e)))?;
        let Some(chunk) = chunk else { break };

        written += chunk.len();
        if written > max_bytes {
            // Abort mid-read; the scratch file drops with this function's
            // error path and nothing has touched the backend.
            return Err(AppError::PayloadTooLarge(format!(
                "upload exceeds maximum of {} bytes",
                max_bytes
            )));
        }

        file.write_all(&chunk).await?;
    }

    if written == 0 {
        return Err(AppError::InvalidInput("uploaded file is empty".to_string()));
    }

    file.flush().await?;

    tracing::debug!(
        size_bytes = written,
        content_type = %media_type,
        "Spooled upload to scratch file"
    );

    Ok((scratch, media_type))
}
