use chrono::NaiveDate;

use crate::chat::models::{Message, MessageKind, Sender};
use crate::chat::responses;
use crate::models::role::UserRole;

/// Ordered chat history of one session. Lives only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn add_text(&mut self, content: impl Into<String>, sender: Sender) -> &Message {
        self.push(Message::new(content, sender, MessageKind::Text))
    }

    pub fn add_system(&mut self, content: impl Into<String>) -> &Message {
        self.push(Message::new(content, Sender::System, MessageKind::System))
    }

    pub fn add_welcome(&mut self, role: UserRole) -> &Message {
        self.add_text(responses::welcome(role), Sender::Ai)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Plain-text export, one `[HH:MM] <Label>: <content>` line per message.
    /// Messages from `viewer` are labelled `You`.
    pub fn export(&self, viewer: UserRole) -> String {
        let own = Sender::from(viewer);
        self.messages
            .iter()
            .map(|msg| {
                let label = if msg.sender == own {
                    "You"
                } else {
                    match msg.sender {
                        Sender::System => "System",
                        Sender::Ai => "AI Interviewer",
                        Sender::Candidate | Sender::Interviewer => "Interviewer",
                    }
                };
                format!("[{}] {}: {}", msg.formatted_time, label, msg.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("interview-chat-{}.txt", date.format("%Y-%m-%d"))
}
