use serde::{Deserialize, Serialize};

use crate::models::upload::{FileInfo, UploadedFile};

/// Extensions accepted for resumes and interviewer documents.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt"];
pub const MAX_FILE_SIZE_MB: u64 = 5;
pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * BYTES_PER_MB;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarnings {
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: ValidationErrors,
    pub warnings: ValidationWarnings,
}

impl ValidationResult {
    /// All error messages that are set, type first.
    pub fn error_messages(&self) -> Vec<String> {
        [&self.errors.file_type, &self.errors.size]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

/// Lowercased text after the last `.`; the whole name when there is no dot.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

pub fn is_allowed_type(name: &str) -> bool {
    let ext = file_extension(name);
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

/// Size in megabytes with two decimals, e.g. `"2.60"`.
pub fn format_size_mb(size: u64) -> String {
    format!("{:.2}", size as f64 / BYTES_PER_MB as f64)
}

/// Validates an uploaded file's type and size.
///
/// The file is valid only when both checks pass. Valid files above half the
/// size limit carry a non-blocking warning.
pub fn validate(name: &str, size: u64) -> ValidationResult {
    let type_valid = is_allowed_type(name);
    let size_valid = size <= MAX_FILE_SIZE_BYTES;
    let size_mb = format_size_mb(size);

    let allowed = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(" or ");

    let is_valid = type_valid && size_valid;

    ValidationResult {
        is_valid,
        errors: ValidationErrors {
            file_type: (!type_valid)
                .then(|| format!("File type not supported. Please upload {allowed} files.")),
            size: (!size_valid).then(|| {
                format!("File size ({size_mb} MB) exceeds {MAX_FILE_SIZE_MB}MB limit.")
            }),
        },
        warnings: ValidationWarnings {
            size: (is_valid && size > MAX_FILE_SIZE_BYTES / 2).then(|| {
                format!("Large file detected ({size_mb} MB). This might take longer to process.")
            }),
        },
    }
}

pub fn validate_file(file: &UploadedFile) -> ValidationResult {
    validate(&file.name, file.size)
}

pub fn file_info(file: &UploadedFile) -> FileInfo {
    FileInfo {
        name: file.name.clone(),
        size: format!("{} MB", format_size_mb(file.size)),
        content_type: file.content_type.clone(),
    }
}
