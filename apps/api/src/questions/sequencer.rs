//! Question Sequencer — a cursor over a `QuestionPool`.
//!
//! ```text
//! Empty (len == 0)
//! Active (index < len - 1)  --advance-->  ...  --advance-->  Exhausted (index == len - 1)
//!   ^                                                             |
//!   +--------------------------- restart -------------------------+
//! ```
//!
//! No operation panics; missing data comes back as `None` or a safe default.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::questions::pool::QuestionPool;
use crate::questions::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerPhase {
    Empty,
    Active,
    Exhausted,
}

/// 1-based position for display. `total == 0` means there is nothing to show;
/// callers must guard before computing a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct Sequencer<R: Rng = StdRng> {
    pool: QuestionPool,
    index: usize,
    rng: R,
}

impl<R: Rng> Sequencer<R> {
    /// Wraps an already-built pool. The pool is not reshuffled here.
    pub fn new(pool: QuestionPool, rng: R) -> Self {
        Self { pool, index: 0, rng }
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> SequencerPhase {
        if self.pool.is_empty() {
            SequencerPhase::Empty
        } else if self.has_more() {
            SequencerPhase::Active
        } else {
            SequencerPhase::Exhausted
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.pool.get(self.index)
    }

    pub fn has_more(&self) -> bool {
        self.index + 1 < self.pool.len()
    }

    /// Moves to the next question and returns it. Does nothing once the last
    /// question is reached.
    pub fn advance(&mut self) -> Option<&Question> {
        if !self.has_more() {
            return None;
        }
        self.index += 1;
        debug!("Advanced to question {}/{}", self.index + 1, self.pool.len());
        self.pool.get(self.index)
    }

    /// Back to the first question of a freshly reshuffled pool. The question
    /// set itself is unchanged.
    pub fn restart(&mut self) {
        self.index = 0;
        self.pool.shuffle(&mut self.rng);
        debug!("Sequencer restarted with {} questions", self.pool.len());
    }

    /// Swaps in a newly built pool and rewinds to its first question.
    pub fn replace_pool(&mut self, pool: QuestionPool) {
        self.pool = pool;
        self.index = 0;
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.index + 1,
            total: self.pool.len(),
        }
    }

    /// Mutable access to the sequencer's random source, shared with callers
    /// that build pools for the same session.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn three() -> Sequencer {
        let pool = QuestionPool::from_questions(vec!["a".into(), "b".into(), "c".into()]);
        Sequencer::new(pool, StdRng::seed_from_u64(3))
    }

    fn sorted(questions: &[Question]) -> Vec<Question> {
        let mut v = questions.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_walks_to_exhaustion() {
        let mut seq = three();
        assert_eq!(seq.phase(), SequencerPhase::Active);
        assert!(seq.has_more());
        assert_eq!(seq.current().map(String::as_str), Some("a"));

        assert_eq!(seq.advance().map(String::as_str), Some("b"));
        assert_eq!(seq.index(), 1);
        assert_eq!(seq.advance().map(String::as_str), Some("c"));
        assert_eq!(seq.index(), 2);

        assert!(!seq.has_more());
        assert_eq!(seq.phase(), SequencerPhase::Exhausted);
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.index(), 2);
        assert_eq!(seq.current().map(String::as_str), Some("c"));
    }

    #[test]
    fn test_restart_rewinds_and_keeps_question_set() {
        let mut seq = three();
        seq.advance();
        seq.advance();
        seq.restart();
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.phase(), SequencerPhase::Active);
        assert_eq!(
            sorted(seq.pool().questions()),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_restart_is_deterministic_with_seeded_rng() {
        let mut a = three();
        let mut b = three();
        a.restart();
        b.restart();
        assert_eq!(a.pool(), b.pool());
    }

    #[test]
    fn test_empty_pool_is_safe() {
        let mut seq = Sequencer::new(QuestionPool::default(), StdRng::seed_from_u64(0));
        assert_eq!(seq.phase(), SequencerPhase::Empty);
        assert_eq!(seq.current(), None);
        assert_eq!(seq.advance(), None);
        assert!(!seq.has_more());
        seq.restart();
        assert_eq!(seq.phase(), SequencerPhase::Empty);
        assert_eq!(seq.progress(), Progress { current: 1, total: 0 });
    }

    #[test]
    fn test_single_question_is_immediately_exhausted() {
        let pool = QuestionPool::from_questions(vec!["only".into()]);
        let mut seq = Sequencer::new(pool, StdRng::seed_from_u64(0));
        assert_eq!(seq.phase(), SequencerPhase::Exhausted);
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.progress(), Progress { current: 1, total: 1 });
    }

    #[test]
    fn test_progress_is_one_based() {
        let mut seq = three();
        assert_eq!(seq.progress(), Progress { current: 1, total: 3 });
        seq.advance();
        assert_eq!(seq.progress(), Progress { current: 2, total: 3 });
    }

    #[test]
    fn test_replace_pool_rewinds() {
        let mut seq = three();
        seq.advance();
        seq.replace_pool(QuestionPool::from_questions(vec!["x".into(), "y".into()]));
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.current().map(String::as_str), Some("x"));
        assert_eq!(seq.progress().total, 2);
    }
}
