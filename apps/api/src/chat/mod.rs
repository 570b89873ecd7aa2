// Simulated chat: message model, transcript with text export, canned replies.

pub mod models;
pub mod responses;
pub mod transcript;
