use serde::{Deserialize, Serialize};

/// Which side of the table the user sits on for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Candidate,
    Interviewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Interviewer => "interviewer",
        }
    }
}
