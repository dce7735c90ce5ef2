//! Resume upload handling: receive one PDF from a multipart body, extract its text,
//! and remove the temporary file before anything else happens.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::extract::Multipart;
use tracing::{info, warn};

use crate::errors::AppError;

/// Multipart field carrying the file.
pub const RESUME_FIELD: &str = "resume";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024; // 5MB
/// Request body limit for the upload route: the file plus multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_RESUME_BYTES + 64 * 1024;

/// Pulls plain text out of a document on disk. Called from a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String>;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
        pdf_extract::extract_text(path).map_err(|e| anyhow!("PDF extraction failed: {e}"))
    }
}

/// Reads the `resume` field, enforcing content type and size before buffering further.
pub async fn receive_resume(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or("application/octet-stream");
        if content_type != PDF_CONTENT_TYPE {
            return Err(AppError::InvalidInput(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(upload_error)? {
            if data.len() + chunk.len() > MAX_RESUME_BYTES {
                return Err(too_large());
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(AppError::InvalidInput("Uploaded file is empty".to_string()));
        }
        return Ok(data);
    }

    Err(AppError::InvalidInput("No file uploaded".to_string()))
}

/// Writes the upload to a temporary file under `upload_dir`, extracts its text, and deletes
/// the file. The file is removed on every path, including extractor failure or panic.
pub async fn extract_resume_text(
    extractor: Arc<dyn TextExtractor>,
    upload_dir: PathBuf,
    pdf: Vec<u8>,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile_in(&upload_dir)
            .context("creating temporary upload file")?;
        file.write_all(&pdf)
            .and_then(|_| file.flush())
            .context("writing temporary upload file")?;

        let extracted = extractor.extract_text(file.path());

        if let Err(e) = file.close() {
            warn!("Failed to remove temporary upload: {e}");
        }

        extracted.map_err(|e| {
            warn!("Resume text extraction failed: {e:#}");
            unreadable()
        })
    })
    .await
    .map_err(|e| {
        warn!("Resume extraction task aborted: {e}");
        unreadable()
    })??;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::InvalidInput(
            "The uploaded PDF contains no readable text".to_string(),
        ));
    }

    info!("Extracted {} characters of resume text", text.len());
    Ok(text)
}

fn upload_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::InvalidInput(format!("Failed to read upload: {}", e.body_text()))
    }
}

fn too_large() -> AppError {
    AppError::InvalidInput(format!(
        "File too large. Maximum size is {} MB",
        MAX_RESUME_BYTES / (1024 * 1024)
    ))
}

fn unreadable() -> AppError {
    AppError::InvalidInput("Could not read text from the uploaded PDF".to_string())
}

#[cfg(test)]
pub mod test_extractors {
    use super::*;

    /// Returns the uploaded bytes as text, proving the temp file was written.
    pub struct EchoExtractor;

    impl TextExtractor for EchoExtractor {
        fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
            Ok(std::fs::read_to_string(path)?)
        }
    }

    pub struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_text(&self, _path: &Path) -> anyhow::Result<String> {
            Err(anyhow!("not a PDF"))
        }
    }
}
