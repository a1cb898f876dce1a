//! Document text extraction — the upstream boundary of the parsing pipeline.
//!
//! Everything past this layer works on plain text; extraction is the only
//! step that can fail, and the only one that touches a blocking library.
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can substitute a
//! canned extractor without a real document.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Decodes `bytes` into raw text. Dispatch is by file extension; the
    /// caller surfaces the error before segmentation ever runs.
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}

/// Extension-dispatching extractor: PDF via `pdf-extract`, plain-text
/// formats via lossy UTF-8 decode.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let extension = filename
            .rsplit('.')
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => {
                // pdf-extract is synchronous and CPU-bound; keep it off the
                // async runtime's worker threads.
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                })
                .await
                .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))?
                .map_err(|e| AppError::Extraction(e.to_string()))?;

                info!("Extracted {} chars from {filename}", text.len());
                Ok(text)
            }
            "txt" | "text" | "md" => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            other => Err(AppError::UnsupportedFileType(format!(
                "cannot extract text from '.{other}' files; upload a PDF or plain text"
            ))),
        }
    }
}
