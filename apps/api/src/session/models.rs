use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::models::Message;
use crate::intake::validation::ValidationWarnings;
use crate::models::role::UserRole;
use crate::models::upload::FileInfo;
use crate::questions::sequencer::{Progress, SequencerPhase};
use crate::questions::Question;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    NotStarted,
    Active,
    Ended,
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub user_role: UserRole,
    pub job_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub job_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateFileRequest {
    pub name: String,
    pub size: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub user_role: UserRole,
    pub job_role: Option<String>,
    pub status: InterviewStatus,
    pub loading: bool,
    pub error: Option<String>,
    pub has_resume: bool,
    pub question: QuestionView,
    pub uploaded_files: Vec<String>,
    pub message_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub question: Option<Question>,
    pub progress: Progress,
    pub has_more: bool,
    pub phase: SequencerPhase,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file: FileInfo,
    /// Name the file was recorded under after collision resolution.
    pub stored_as: String,
    pub warnings: ValidationWarnings,
    pub mined_questions: usize,
    /// True when a newer upload finished first and this one was discarded.
    pub superseded: bool,
    pub session: SessionView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
    pub session: SessionView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleOption {
    pub name: String,
    pub dedicated_bank: bool,
}
