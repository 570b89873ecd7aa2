// Interview sessions: per-session state, the in-memory store, and HTTP handlers.

pub mod handlers;
pub mod interview;
pub mod models;
pub mod store;
