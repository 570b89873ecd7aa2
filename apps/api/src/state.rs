use std::sync::Arc;

use crate::config::Config;
use crate::intake::reader::ResumeReader;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable resume decoder. Default: PlainTextReader.
    pub resume_reader: Arc<dyn ResumeReader>,
}
