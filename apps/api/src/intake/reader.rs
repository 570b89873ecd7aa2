//! Resume Reader — one-shot asynchronous decode of an uploaded file into text.
//!
//! PDFs are accepted by the validator but never parsed: their bytes are decoded
//! as text like any other file. Invalid UTF-8 sequences become U+FFFD, so
//! whatever literal text a PDF carries is still mined.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::upload::UploadedFile;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The reader could make no text of the file at all.
    #[error("File '{name}' is not readable as text")]
    Undecodable { name: String },

    #[error("Reading '{name}' was interrupted: {reason}")]
    Interrupted { name: String, reason: String },
}

/// Source of resume text. Carried in `AppState` as `Arc<dyn ResumeReader>`.
#[async_trait]
pub trait ResumeReader: Send + Sync {
    async fn read_text(&self, file: &UploadedFile) -> Result<String, ReadError>;
}

/// Decodes the file's bytes as UTF-8 (lossily) on the blocking pool.
pub struct PlainTextReader;

#[async_trait]
impl ResumeReader for PlainTextReader {
    async fn read_text(&self, file: &UploadedFile) -> Result<String, ReadError> {
        let name = file.name.clone();
        let contents = file.contents.clone();

        let text = tokio::task::spawn_blocking(move || {
            String::from_utf8_lossy(&contents).into_owned()
        })
        .await
        .map_err(|e| ReadError::Interrupted {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        debug!("Decoded {} characters from '{}'", text.chars().count(), name);
        Ok(text)
    }
}
