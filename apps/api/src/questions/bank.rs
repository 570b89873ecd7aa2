//! Static question banks keyed by job role.

pub const FRONTEND_DEVELOPER: &str = "Frontend Developer";
pub const BACKEND_DEVELOPER: &str = "Backend Developer";
pub const FULL_STACK_DEVELOPER: &str = "Full Stack Developer";

/// Roles offered by the role picker. Only the first three have their own bank;
/// the rest fall back to the default bank.
pub const SELECTABLE_ROLES: &[&str] = &[
    FRONTEND_DEVELOPER,
    BACKEND_DEVELOPER,
    FULL_STACK_DEVELOPER,
    "Data Scientist",
    "Product Manager",
    "UX/UI Designer",
    "DevOps Engineer",
    "Software Engineer",
];

const FRONTEND_QUESTIONS: &[&str] = &[
    "Can you explain the difference between controlled and uncontrolled components in React?",
    "How do you handle state management in your React applications?",
    "What's your experience with responsive design and CSS frameworks?",
    "How do you optimize the performance of a React application?",
    "Explain your approach to testing React components",
];

const BACKEND_QUESTIONS: &[&str] = &[
    "How do you handle database optimization and query performance?",
    "Explain your experience with RESTful API design",
    "How do you implement authentication and authorization?",
    "What's your approach to handling large-scale data processing?",
    "How do you ensure the security of an API?",
];

const FULL_STACK_QUESTIONS: &[&str] = &[
    "How do you coordinate frontend and backend development?",
    "Explain your experience with deployment and DevOps",
    "How do you handle data consistency across the stack?",
    "What's your approach to system architecture?",
    "How do you manage state between frontend and backend?",
];

const DEFAULT_QUESTIONS: &[&str] = &[
    "Tell me about your most challenging project",
    "How do you handle tight deadlines?",
    "What's your approach to learning new technologies?",
    "How do you handle conflicts in a team?",
    "Where do you see yourself in 5 years?",
];

/// Returns the bank for `role`. Unknown or missing roles get the default bank.
pub fn role_bank(role: Option<&str>) -> &'static [&'static str] {
    match role {
        Some(FRONTEND_DEVELOPER) => FRONTEND_QUESTIONS,
        Some(BACKEND_DEVELOPER) => BACKEND_QUESTIONS,
        Some(FULL_STACK_DEVELOPER) => FULL_STACK_QUESTIONS,
        _ => DEFAULT_QUESTIONS,
    }
}

pub fn has_dedicated_bank(role: &str) -> bool {
    matches!(
        role,
        FRONTEND_DEVELOPER | BACKEND_DEVELOPER | FULL_STACK_DEVELOPER
    )
}
