//! Quasigroup checksums for word sequences
//!
//! Generalizes the Damm check digit algorithm to alphabets of `2^k` words, such
//! as mnemonic seed word lists. A payload of `m` words gets one checksum word
//! appended. The checksum detects every single word substitution and every
//! swap of two distinct adjacent words, and [`ChecksumEngine::correct`] can
//! search for repairs of such errors.
//!
//! This is an error detection scheme, not an authentication primitive.

pub mod correct;
pub mod domain;
pub mod engine;
pub mod error;
pub mod generate;
pub mod polynomial;
pub mod wordlist;

pub use correct::{Candidate, CandidateSet, CorrectionConfig, Corrector, Repair, SearchMode};
pub use engine::ChecksumEngine;
pub use error::{DammError, Result};
pub use generate::Generator;
