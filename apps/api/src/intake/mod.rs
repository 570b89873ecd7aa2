// File intake: type/size validation, collision-free naming, and text decoding
// of uploaded resumes.

pub mod naming;
pub mod reader;
pub mod validation;
