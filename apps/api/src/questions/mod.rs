// Question Sequencing Engine: role banks, resume mining, pool construction,
// and the per-session cursor over the pool.

pub mod bank;
pub mod miner;
pub mod pool;
pub mod sequencer;

/// An interview question. Identity is its text only.
pub type Question = String;
