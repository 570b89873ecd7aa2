use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file handed to the service by the multipart upload boundary.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    /// MIME type reported by the client. Informational only; the type check
    /// looks at the file name's extension.
    pub content_type: Option<String>,
    pub contents: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, contents: Bytes) -> Self {
        Self {
            name: name.into(),
            size: contents.len() as u64,
            content_type,
            contents,
        }
    }

    /// Same file under a different name, used after collision resolution.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Display-ready summary of an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileInfo {
    pub name: String,
    /// Size in megabytes, e.g. `"1.25 MB"`.
    pub size: String,
    pub content_type: Option<String>,
}
