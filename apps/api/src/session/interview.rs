//! One interview session: question sequencer, chat transcript, and upload
//! bookkeeping, owned together and never shared with other sessions.
//!
//! Resume loads are asynchronous. `begin_load` hands out a generation token;
//! only the result carrying the latest token is applied (last write wins).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::models::{Message, Sender};
use crate::chat::responses;
use crate::chat::transcript::Transcript;
use crate::errors::AppError;
use crate::intake::naming::resolve_collision;
use crate::intake::reader::ReadError;
use crate::models::role::UserRole;
use crate::questions::bank::role_bank;
use crate::questions::pool::build_pool;
use crate::questions::sequencer::Sequencer;
use crate::questions::Question;
use crate::session::models::{InterviewStatus, QuestionView, SessionView};

pub const READ_ERROR_MESSAGE: &str = "Error reading resume file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug)]
pub enum LoadOutcome {
    Applied { mined_questions: usize },
    /// A newer load was started after this one; the result was dropped.
    Stale,
    Failed(ReadError),
}

#[derive(Debug)]
pub struct InterviewSession {
    pub id: Uuid,
    user_role: UserRole,
    job_role: Option<String>,
    resume_text: Option<String>,
    uploaded_files: Vec<String>,
    sequencer: Sequencer,
    transcript: Transcript,
    status: InterviewStatus,
    loading: bool,
    error: Option<String>,
    load_generation: u64,
    /// Picks canned replies; kept apart from the sequencer's shuffling source.
    reply_rng: StdRng,
    created_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Creates a session with a role-only pool and a welcome message.
    /// A `seed` makes both shuffling and reply selection reproducible.
    pub fn new(user_role: UserRole, job_role: Option<String>, seed: Option<u64>) -> Self {
        let mut master = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut shuffle_rng = StdRng::seed_from_u64(master.gen());
        let reply_rng = StdRng::seed_from_u64(master.gen());

        let pool = build_pool(job_role.as_deref(), None, &mut shuffle_rng);
        let mut transcript = Transcript::default();
        transcript.add_welcome(user_role);

        Self {
            id: Uuid::new_v4(),
            user_role,
            job_role,
            resume_text: None,
            uploaded_files: Vec::new(),
            sequencer: Sequencer::new(pool, shuffle_rng),
            transcript,
            status: InterviewStatus::NotStarted,
            loading: false,
            error: None,
            load_generation: 0,
            reply_rng,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn rebuild_pool(&mut self) {
        let pool = build_pool(
            self.job_role.as_deref(),
            self.resume_text.as_deref(),
            self.sequencer.rng_mut(),
        );
        debug!("Session {} rebuilt pool with {} questions", self.id, pool.len());
        self.sequencer.replace_pool(pool);
    }

    pub fn set_job_role(&mut self, job_role: Option<String>) {
        self.job_role = job_role;
        self.rebuild_pool();
        info!(
            "Session {} switched job role to {}",
            self.id,
            self.job_role.as_deref().unwrap_or("default")
        );
    }

    // ────────────────────────────────────────────────────────────────────────
    // Uploads
    // ────────────────────────────────────────────────────────────────────────

    /// Records `file_name` among this session's uploads, renamed if needed so
    /// it does not collide with an earlier one. Returns the stored name.
    pub fn register_upload(&mut self, file_name: &str) -> String {
        let existing: HashSet<String> = self.uploaded_files.iter().cloned().collect();
        let stored = resolve_collision(file_name, &existing);
        if stored != file_name {
            debug!("Renamed upload '{}' to '{}'", file_name, stored);
        }
        self.uploaded_files.push(stored.clone());
        stored
    }

    pub fn uploaded_files(&self) -> &[String] {
        &self.uploaded_files
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.load_generation += 1;
        self.loading = true;
        self.error = None;
        LoadToken(self.load_generation)
    }

    /// Applies the result of a resume read started with `token`.
    ///
    /// A read failure falls back to role-only questions and records an error.
    pub fn finish_resume_load(
        &mut self,
        token: LoadToken,
        outcome: Result<String, ReadError>,
    ) -> LoadOutcome {
        if token.0 != self.load_generation {
            debug!("Session {} dropped stale resume load {}", self.id, token.0);
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match outcome {
            Ok(text) => {
                self.resume_text = Some(text);
                self.rebuild_pool();
                let banked = role_bank(self.job_role.as_deref()).len();
                let mined_questions = self.sequencer.pool().len().saturating_sub(banked);
                info!("Session {} mined {} resume questions", self.id, mined_questions);
                LoadOutcome::Applied { mined_questions }
            }
            Err(err) => {
                warn!("Session {} resume read failed: {err}", self.id);
                self.resume_text = None;
                self.rebuild_pool();
                self.error = Some(READ_ERROR_MESSAGE.to_string());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Attaches an interviewer document. Candidates upload resumes instead.
    pub fn attach_document(&mut self, file_name: &str) -> Result<String, AppError> {
        if self.user_role != UserRole::Interviewer {
            return Err(AppError::Forbidden);
        }
        let stored = self.register_upload(file_name);
        self.transcript
            .add_system(format!("Document uploaded: {stored}"));
        Ok(stored)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Interview flow
    // ────────────────────────────────────────────────────────────────────────

    /// Starts (or restarts) the interview from a reshuffled pool and asks the
    /// first question.
    pub fn start_interview(&mut self) -> Result<Option<Question>, AppError> {
        if self.loading {
            return Err(AppError::UnprocessableEntity(
                "Questions are still loading".to_string(),
            ));
        }
        self.sequencer.restart();
        self.status = InterviewStatus::Active;
        self.transcript.add_system(responses::INTERVIEW_STARTED);

        let first = self.sequencer.current().cloned();
        if let Some(question) = &first {
            self.transcript.add_text(question.clone(), Sender::Ai);
        }
        info!("Session {} interview started", self.id);
        Ok(first)
    }

    /// Ends a running interview with the closing line and mock feedback.
    /// Returns false if no interview was running.
    pub fn end_interview(&mut self) -> bool {
        if self.status != InterviewStatus::Active {
            return false;
        }
        self.status = InterviewStatus::Ended;
        self.transcript.add_system(responses::INTERVIEW_ENDED);
        self.transcript.add_text(responses::CLOSING, Sender::Ai);
        self.transcript.add_text(responses::feedback(), Sender::Ai);
        info!("Session {} interview ended", self.id);
        true
    }

    /// Records a message from the user and appends whatever the AI says back.
    /// Returns every message added by this call.
    pub fn submit_message(&mut self, content: &str) -> Result<Vec<Message>, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }
        let before = self.transcript.len();
        self.transcript
            .add_text(content, Sender::from(self.user_role));

        if self.status == InterviewStatus::Active {
            if self.sequencer.has_more() {
                let ack = responses::acknowledgement(&mut self.reply_rng);
                self.transcript.add_text(ack, Sender::Ai);
                if let Some(next) = self.sequencer.advance().cloned() {
                    self.transcript.add_text(next, Sender::Ai);
                }
            } else {
                self.end_interview();
            }
        } else if self.user_role == UserRole::Candidate {
            // Outside an interview the AI chats freely instead of asking questions.
            let reply = responses::follow_up(&mut self.reply_rng);
            self.transcript.add_text(reply, Sender::Ai);
        }

        Ok(self.transcript.messages()[before..].to_vec())
    }

    pub fn next_question(&mut self) -> Option<Question> {
        self.sequencer.advance().cloned()
    }

    pub fn restart_questions(&mut self) {
        self.sequencer.restart();
    }

    pub fn clear_messages(&mut self) {
        self.transcript.clear();
    }

    pub fn export_transcript(&self) -> String {
        self.transcript.export(self.user_role)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Views
    // ────────────────────────────────────────────────────────────────────────

    pub fn question_view(&self) -> QuestionView {
        QuestionView {
            question: self.sequencer.current().cloned(),
            progress: self.sequencer.progress(),
            has_more: self.sequencer.has_more(),
            phase: self.sequencer.phase(),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            user_role: self.user_role,
            job_role: self.job_role.clone(),
            status: self.status,
            loading: self.loading,
            error: self.error.clone(),
            has_resume: self.resume_text.is_some(),
            question: self.question_view(),
            uploaded_files: self.uploaded_files.clone(),
            message_count: self.transcript.len(),
            created_at: self.created_at,
        }
    }
}
