pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/files/validate", post(handlers::handle_validate_file))
        // Sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/role", put(handlers::handle_set_role))
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/documents",
            post(handlers::handle_upload_document),
        )
        // Question sequencing
        .route(
            "/api/v1/sessions/:id/question",
            get(handlers::handle_current_question),
        )
        .route(
            "/api/v1/sessions/:id/question/next",
            post(handlers::handle_next_question),
        )
        .route(
            "/api/v1/sessions/:id/question/restart",
            post(handlers::handle_restart_questions),
        )
        // Interview flow and chat
        .route(
            "/api/v1/sessions/:id/interview/start",
            post(handlers::handle_start_interview),
        )
        .route(
            "/api/v1/sessions/:id/interview/end",
            post(handlers::handle_end_interview),
        )
        .route(
            "/api/v1/sessions/:id/messages",
            get(handlers::handle_list_messages)
                .post(handlers::handle_send_message)
                .delete(handlers::handle_clear_messages),
        )
        .route("/api/v1/sessions/:id/export", get(handlers::handle_export))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
