use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Candidate,
    Interviewer,
    Ai,
    System,
}

impl From<UserRole> for Sender {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Candidate => Sender::Candidate,
            UserRole::Interviewer => Sender::Interviewer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub kind: MessageKind,
    pub timestamp: DateTime<Utc>,
    /// Local wall-clock time as `HH:MM`.
    pub formatted_time: String,
}

impl Message {
    pub fn new(content: impl Into<String>, sender: Sender, kind: MessageKind) -> Self {
        Self::at(content, sender, kind, Local::now())
    }

    pub fn at(
        content: impl Into<String>,
        sender: Sender,
        kind: MessageKind,
        when: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            kind,
            timestamp: when.with_timezone(&Utc),
            formatted_time: when.format("%H:%M").to_string(),
        }
    }
}
