use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::questions::bank::role_bank;
use crate::questions::miner::mine_questions;
use crate::questions::Question;

/// Ordered questions for one interview session.
///
/// Only ever rebuilt or reshuffled as a whole; questions are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Pool in the given order, without shuffling.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Fisher-Yates permutation of the current questions.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }
}

/// Role bank followed by resume-mined questions, before shuffling.
pub fn collect_questions(role: Option<&str>, resume_text: Option<&str>) -> Vec<Question> {
    let mut questions: Vec<Question> = role_bank(role).iter().map(|q| q.to_string()).collect();
    if let Some(text) = resume_text {
        questions.extend(mine_questions(text));
    }
    questions
}

/// Builds the shuffled pool for a (role, resume) pair. Duplicates between the
/// role bank and mined questions are kept.
pub fn build_pool<R: Rng + ?Sized>(
    role: Option<&str>,
    resume_text: Option<&str>,
    rng: &mut R,
) -> QuestionPool {
    let mut pool = QuestionPool::from_questions(collect_questions(role, resume_text));
    pool.shuffle(rng);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::bank::{role_bank, FRONTEND_DEVELOPER};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_frontend_pool_is_permutation_of_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = build_pool(Some(FRONTEND_DEVELOPER), None, &mut rng);
        let bank: Vec<String> = role_bank(Some(FRONTEND_DEVELOPER))
            .iter()
            .map(|q| q.to_string())
            .collect();
        assert_eq!(pool.len(), 5);
        assert_eq!(sorted(pool.questions().to_vec()), sorted(bank));
    }

    #[test]
    fn test_seeded_build_matches_seeded_shuffle() {
        let resume = "Python and AWS, 8 years of experience";
        let mut expected = collect_questions(Some("Backend Developer"), Some(resume));
        expected.shuffle(&mut StdRng::seed_from_u64(42));

        let pool = build_pool(
            Some("Backend Developer"),
            Some(resume),
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(pool.questions(), expected.as_slice());
    }

    #[test]
    fn test_resume_questions_appended_after_bank() {
        let questions = collect_questions(None, Some("Docker"));
        assert_eq!(questions.len(), 7);
        for (question, banked) in questions.iter().zip(role_bank(None)) {
            assert_eq!(question, banked);
        }
        assert!(questions[5].contains("Docker"));
    }

    #[test]
    fn test_empty_resume_text_adds_nothing() {
        assert_eq!(collect_questions(None, Some("")).len(), 5);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mut pool = QuestionPool::from_questions(vec!["Q".into(), "Q".into(), "R".into()]);
        pool.shuffle(&mut StdRng::seed_from_u64(1));
        assert_eq!(pool.questions().iter().filter(|q| q.as_str() == "Q").count(), 2);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_shuffle_covers_every_question() {
        let resume = "React Angular Vue Node Python Java JavaScript TypeScript SQL MongoDB AWS Docker project 12 years of experience";
        let unshuffled = collect_questions(Some("Full Stack Developer"), Some(resume));
        for seed in 0..20 {
            let pool = build_pool(
                Some("Full Stack Developer"),
                Some(resume),
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(sorted(pool.questions().to_vec()), sorted(unshuffled.clone()));
        }
    }
}
