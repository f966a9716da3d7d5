//! Single-error correction for checked sequences
//!
//! Correction searches the neighbourhood of a broken sequence:
//! 1. Every adjacent pair of distinct words is swapped and re-verified
//! 2. Every position is replaced with every other word and re-verified
//!
//! Every sequence that verifies is returned. This is a best-effort repair, not
//! unique decoding: a single substitution error yields one verifying candidate
//! per position, and nothing marks which one was intended. All trials run on
//! copies, the caller's sequence is never modified.
//!
//! Cost is `O(m)` folds for transpositions and `O((m + 1) * 2^k)` folds for
//! substitutions. Substitution positions are independent, so that phase can
//! be spread across a rayon pool.

mod config;
mod types;

pub use config::{CorrectionConfig, SearchMode};
pub use types::{Candidate, CandidateSet, Repair};

use crate::domain::Digit;
use crate::engine::ChecksumEngine;
use crate::error::{DammError, Result};
use log::{debug, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Replacement digits that make the sequence verify, grouped by position
type SubstitutionHits = Vec<(usize, Vec<Digit>)>;

/// Exhaustive substitution and transposition search over one engine
pub struct Corrector<'a> {
    engine: &'a ChecksumEngine,
    config: CorrectionConfig,
    mode: SearchMode,
    pool: Option<ThreadPool>,
}

impl<'a> Corrector<'a> {
    pub fn new(engine: &'a ChecksumEngine) -> Self {
        Self::with_config(engine, CorrectionConfig::default())
    }

    /// Create a corrector; a dedicated thread pool is built here, once
    pub fn with_config(engine: &'a ChecksumEngine, config: CorrectionConfig) -> Self {
        let mut mode = config.search_mode();
        let pool = match mode {
            SearchMode::DedicatedPool(threads) => {
                match ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => Some(pool),
                    Err(err) => {
                        warn!(
                            "Could not build a {}-thread pool ({}), using the global pool",
                            threads, err
                        );
                        mode = SearchMode::GlobalPool;
                        None
                    }
                }
            }
            SearchMode::Sequential | SearchMode::GlobalPool => None,
        };
        Self {
            engine,
            config,
            mode,
            pool,
        }
    }

    /// Scheduling actually in use, after any pool fallback
    pub fn search_mode(&self) -> SearchMode {
        self.mode
    }

    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    /// Find all single-edit repairs of a broken checked sequence
    ///
    /// # Errors
    /// * `WrongSequenceLength` - the sequence is not `m + 1` words
    /// * `UnknownSymbol` - a word is not in the alphabet
    /// * `AlreadyValid` - the sequence already verifies
    pub fn correct<S: AsRef<str>>(&self, checked: &[S]) -> Result<CandidateSet> {
        let digits = self.engine.to_digits(checked, self.engine.checked_len())?;
        if self.engine.verify_digits(&digits) {
            return Err(DammError::AlreadyValid);
        }

        let mut candidates = CandidateSet::new();

        let swaps = self.transposition_hits(&digits);
        debug!("Transposition search: {} verifying swaps", swaps.len());
        for position in swaps {
            let mut trial = digits.clone();
            trial.swap(position, position + 1);
            candidates.insert(Candidate {
                words: self.engine.to_words(&trial),
                repair: Repair::Transposition { position },
            });
        }

        let substitutions = match (&self.pool, self.mode) {
            (_, SearchMode::Sequential) => self.substitution_hits(&digits),
            (Some(pool), _) => pool.install(|| self.substitution_hits_parallel(&digits)),
            (None, _) => self.substitution_hits_parallel(&digits),
        };
        for (position, replacements) in substitutions {
            for replacement in replacements {
                let mut trial = digits.clone();
                trial[position] = replacement;
                candidates.insert(Candidate {
                    words: self.engine.to_words(&trial),
                    repair: Repair::Substitution {
                        position,
                        original: self.engine.symbol(digits[position]).to_string(),
                        replacement: self.engine.symbol(replacement).to_string(),
                    },
                });
            }
        }

        debug!("Correction found {} candidates", candidates.len());
        Ok(candidates)
    }

    /// Positions `j` where swapping `j` and `j + 1` yields a valid sequence
    fn transposition_hits(&self, digits: &[Digit]) -> Vec<usize> {
        let mut trial = digits.to_vec();
        let mut hits = Vec::new();
        for position in 0..digits.len().saturating_sub(1) {
            if digits[position] == digits[position + 1] {
                continue;
            }
            trial.swap(position, position + 1);
            if self.engine.verify_digits(&trial) {
                hits.push(position);
            }
            trial.swap(position, position + 1);
        }
        hits
    }

    fn substitution_hits(&self, digits: &[Digit]) -> SubstitutionHits {
        (0..digits.len())
            .map(|position| (position, self.substitutions_at(digits, position)))
            .collect()
    }

    /// Runs on whichever rayon pool is current
    fn substitution_hits_parallel(&self, digits: &[Digit]) -> SubstitutionHits {
        // Indexed collect keeps position order
        (0..digits.len())
            .into_par_iter()
            .map(|position| (position, self.substitutions_at(digits, position)))
            .collect()
    }

    /// Every other word at `position` that makes the sequence verify
    fn substitutions_at(&self, digits: &[Digit], position: usize) -> Vec<Digit> {
        let current = digits[position];
        let mut trial = digits.to_vec();
        let mut hits = Vec::new();
        for value in 0..self.engine.field_exponent().symbol_count() {
            let replacement = Digit::new(value);
            if replacement == current {
                continue;
            }
            trial[position] = replacement;
            if self.engine.verify_digits(&trial) {
                hits.push(replacement);
            }
        }
        hits
    }
}

impl ChecksumEngine {
    /// Correct a broken checked sequence with the default configuration
    pub fn correct<S: AsRef<str>>(&self, checked: &[S]) -> Result<CandidateSet> {
        Corrector::new(self).correct(checked)
    }
}
