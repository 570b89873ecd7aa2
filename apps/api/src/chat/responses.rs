//! Canned interviewer lines. Nothing here is generated; replies are picked
//! from fixed lists with the session's random source.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::role::UserRole;

/// Said between a candidate's answer and the next question.
pub const ACKNOWLEDGEMENTS: &[&str] = &[
    "Thank you for that answer. Let's move on to the next question.",
    "That's interesting. I'd like to ask you something else now.",
    "Good explanation. Here's another question for you.",
    "I appreciate your detailed response. Let's continue with the next topic.",
];

/// Free-chat prompts used when no interview is running.
pub const FOLLOW_UPS: &[&str] = &[
    "That's an interesting perspective. Could you elaborate more on that?",
    "Thank you for sharing. How would you handle a similar situation in a different context?",
    "I see. Can you give me a specific example from your experience?",
    "That's helpful. What would you do differently if you faced this challenge again?",
];

pub const CLOSING: &str =
    "Thank you for completing the interview! I'll provide a summary of your performance:";

pub const FEEDBACK_LINES: &[&str] = &[
    "✨ Strong Points:",
    "- Clear communication style",
    "- Good technical knowledge",
    "- Structured responses",
    "",
    "🎯 Areas for Improvement:",
    "- Provide more specific examples",
    "- Elaborate on technical decisions",
    "",
    "Overall Score: 8.5/10",
];

pub const INTERVIEW_STARTED: &str = "Interview started";
pub const INTERVIEW_ENDED: &str = "Interview ended";

pub fn welcome(role: UserRole) -> &'static str {
    match role {
        UserRole::Candidate => "Welcome to your interview! I'll be asking you some questions. Please take your time to think and respond thoughtfully.",
        UserRole::Interviewer => "Welcome! You can now chat with the candidate. Feel free to upload relevant documents or ask questions.",
    }
}

pub fn feedback() -> String {
    FEEDBACK_LINES.join("\n")
}

pub fn acknowledgement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(ACKNOWLEDGEMENTS, rng)
}

pub fn follow_up<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(FOLLOW_UPS, rng)
}

fn pick<R: Rng + ?Sized>(lines: &[&'static str], rng: &mut R) -> &'static str {
    lines.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_acknowledgement_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            assert!(ACKNOWLEDGEMENTS.contains(&acknowledgement(&mut rng)));
        }
    }

    #[test]
    fn test_follow_up_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(FOLLOW_UPS.contains(&follow_up(&mut rng)));
    }

    #[test]
    fn test_feedback_block_ends_with_score() {
        let text = feedback();
        assert!(text.starts_with("✨ Strong Points:"));
        assert!(text.ends_with("Overall Score: 8.5/10"));
        assert_eq!(text.lines().count(), FEEDBACK_LINES.len());
    }

    #[test]
    fn test_welcome_differs_by_role() {
        assert_ne!(welcome(UserRole::Candidate), welcome(UserRole::Interviewer));
        assert!(welcome(UserRole::Interviewer).contains("upload"));
    }
}
