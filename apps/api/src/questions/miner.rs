//! Resume Text Miner — turns raw resume text into extra interview questions.
//!
//! Three signals, emitted in this order:
//! 1. Technologies from a fixed vocabulary (case-sensitive, word-bounded),
//!    deduplicated in first-seen order, two questions each.
//! 2. "N years of experience": senior pair when N > 5, early-career pair otherwise.
//! 3. Any mention of "project": two project-elaboration questions.
//!
//! Mining never fails; text without any signal yields no questions.

use std::sync::OnceLock;

use regex::Regex;

use crate::questions::Question;

/// Years above which the senior-track questions are asked.
pub const SENIOR_YEARS_THRESHOLD: u64 = 5;

const TECHNOLOGIES: &str =
    r"\b(React|Angular|Vue|Node|Python|Java|JavaScript|TypeScript|SQL|MongoDB|AWS|Docker)\b";
const EXPERIENCE: &str = r"(?i)(\d+)[\s-]*years? of experience";

const SENIOR_QUESTIONS: [&str; 2] = [
    "How has your approach to problem-solving evolved over your career?",
    "What leadership challenges have you faced and how did you overcome them?",
];

const EARLY_CAREER_QUESTIONS: [&str; 2] = [
    "What's the most important lesson you've learned in your career so far?",
    "How do you stay updated with the latest industry trends?",
];

const PROJECT_QUESTIONS: [&str; 2] = [
    "Could you elaborate on one of the projects mentioned in your resume?",
    "What was the most challenging technical problem you solved in your projects?",
];

fn technology_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TECHNOLOGIES).expect("technology pattern is valid"))
}

fn experience_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EXPERIENCE).expect("experience pattern is valid"))
}

/// Distinct technologies in the order they first appear.
pub fn extract_technologies(resume_text: &str) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for m in technology_regex().find_iter(resume_text) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    seen
}

/// Years from the first "N years of experience" phrase, if any.
/// Digit runs too long for `u64` saturate.
pub fn extract_years_of_experience(resume_text: &str) -> Option<u64> {
    let caps = experience_regex().captures(resume_text)?;
    let digits = caps.get(1)?.as_str();
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

pub fn mentions_projects(resume_text: &str) -> bool {
    resume_text.to_lowercase().contains("project")
}

pub fn mine_questions(resume_text: &str) -> Vec<Question> {
    let mut questions = Vec::new();

    for tech in extract_technologies(resume_text) {
        questions.push(format!("Can you describe a project where you used {tech}?"));
        questions.push(format!(
            "What are the best practices you follow when working with {tech}?"
        ));
    }

    if let Some(years) = extract_years_of_experience(resume_text) {
        let pair = if years > SENIOR_YEARS_THRESHOLD {
            SENIOR_QUESTIONS
        } else {
            EARLY_CAREER_QUESTIONS
        };
        questions.extend(pair.iter().map(|q| q.to_string()));
    }

    if mentions_projects(resume_text) {
        questions.extend(PROJECT_QUESTIONS.iter().map(|q| q.to_string()));
    }

    questions
}
