//! Axum route handlers for the Session API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::transcript::export_file_name;
use crate::errors::AppError;
use crate::intake::reader::ReadError;
use crate::intake::validation::{file_info, validate, validate_file, ValidationResult};
use crate::models::upload::UploadedFile;
use crate::questions::bank::{has_dedicated_bank, SELECTABLE_ROLES};
use crate::session::interview::{InterviewSession, LoadOutcome};
use crate::session::models::{
    CreateSessionRequest, MessagesResponse, QuestionView, RoleOption, SendMessageRequest,
    SessionView, SetRoleRequest, UploadResponse, ValidateFileRequest,
};
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(String::from);
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        return Ok(UploadedFile::new(name, content_type, contents));
    }
    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in upload"
    )))
}

fn reject_invalid(file: &UploadedFile, validation: &ValidationResult) -> AppError {
    warn!(
        "Rejected upload '{}' ({} bytes): {:?}",
        file.name,
        file.size,
        validation.error_messages()
    );
    AppError::Validation(validation.error_messages().join(" "))
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<Vec<RoleOption>> {
    Json(
        SELECTABLE_ROLES
            .iter()
            .map(|role| RoleOption {
                name: role.to_string(),
                dedicated_bank: has_dedicated_bank(role),
            })
            .collect(),
    )
}

/// POST /api/v1/files/validate
///
/// Dry-run validation from a file's name and size, before any bytes are sent.
pub async fn handle_validate_file(
    Json(req): Json<ValidateFileRequest>,
) -> Json<ValidationResult> {
    Json(validate(&req.name, req.size))
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> (StatusCode, Json<SessionView>) {
    let session = InterviewSession::new(req.user_role, req.job_role, state.config.shuffle_seed);
    let shared = state.sessions.insert(session).await;
    let view = shared.lock().await.view();
    info!(
        "New {} session {} ({} live)",
        view.user_role.as_str(),
        view.id,
        state.sessions.len().await
    );
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let view = session.lock().await.view();
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/role
pub async fn handle_set_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    session.set_job_role(req.job_role);
    Ok(Json(session.view()))
}

// ────────────────────────────────────────────────────────────────────────────
// Uploads
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/resume
///
/// Validates the file, records it under a collision-free name, decodes its
/// text and rebuilds the question pool. A rejected file never starts a load.
/// The session lock is released while the text is decoded, so a later valid
/// upload may supersede this one.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let file = read_upload(multipart).await?;

    let validation = validate_file(&file);
    if !validation.is_valid {
        return Err(reject_invalid(&file, &validation));
    }

    let (token, stored_as) = {
        let mut session = session.lock().await;
        (session.begin_load(), session.register_upload(&file.name))
    };
    let file = file.renamed(stored_as.clone());
    info!("Reading resume '{}' for session {id}", file.name);

    let outcome = state.resume_reader.read_text(&file).await;

    let mut session = session.lock().await;
    let (mined_questions, superseded) = match session.finish_resume_load(token, outcome) {
        LoadOutcome::Applied { mined_questions } => (mined_questions, false),
        LoadOutcome::Stale => (0, true),
        LoadOutcome::Failed(err @ ReadError::Undecodable { .. }) => {
            return Err(AppError::UnprocessableEntity(err.to_string()));
        }
        LoadOutcome::Failed(err @ ReadError::Interrupted { .. }) => {
            return Err(AppError::Internal(anyhow!(err)));
        }
    };

    Ok(Json(UploadResponse {
        file: file_info(&file),
        stored_as,
        warnings: validation.warnings,
        mined_questions,
        superseded,
        session: session.view(),
    }))
}

/// POST /api/v1/sessions/:id/documents
///
/// Interviewer-only attachment. The file is validated and named but not mined.
pub async fn handle_upload_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let file = read_upload(multipart).await?;

    let validation = validate_file(&file);
    if !validation.is_valid {
        return Err(reject_invalid(&file, &validation));
    }

    let mut session = session.lock().await;
    let stored_as = session.attach_document(&file.name)?;
    let file = file.renamed(stored_as.clone());
    info!("Attached document '{}' to session {id}", stored_as);

    Ok(Json(UploadResponse {
        file: file_info(&file),
        stored_as,
        warnings: validation.warnings,
        mined_questions: 0,
        superseded: false,
        session: session.view(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Questions
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/question
pub async fn handle_current_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let view = session.lock().await.question_view();
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/question/next
///
/// Advances the cursor. At the last question the cursor stays put and the
/// returned view has `has_more: false`.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    session.next_question();
    Ok(Json(session.question_view()))
}

/// POST /api/v1/sessions/:id/question/restart
pub async fn handle_restart_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    session.restart_questions();
    Ok(Json(session.question_view()))
}

// ────────────────────────────────────────────────────────────────────────────
// Interview flow and chat
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/interview/start
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    session.start_interview()?;
    Ok(Json(session.view()))
}

/// POST /api/v1/sessions/:id/interview/end
pub async fn handle_end_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    session.end_interview();
    Ok(Json(session.view()))
}

/// GET /api/v1/sessions/:id/messages
pub async fn handle_list_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessagesResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let session = session.lock().await;
    Ok(Json(MessagesResponse {
        messages: session.transcript().messages().to_vec(),
        session: session.view(),
    }))
}

/// POST /api/v1/sessions/:id/messages
///
/// Returns only the messages added by this call: the user's own message and
/// any AI replies.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<MessagesResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut session = session.lock().await;
    let messages = session.submit_message(&req.content)?;
    Ok(Json(MessagesResponse {
        messages,
        session: session.view(),
    }))
}

/// DELETE /api/v1/sessions/:id/messages
pub async fn handle_clear_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.get(id).await?;
    session.lock().await.clear_messages();
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.get(id).await?;
    let text = session.lock().await.export_transcript();
    let file_name = export_file_name(Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        text,
    ))
}
