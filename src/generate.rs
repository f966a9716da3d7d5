//! Random seed generation with a trailing checksum word

use crate::domain::Digit;
use crate::engine::ChecksumEngine;
use log::trace;
use rand::{CryptoRng, Rng};

/// Draws uniformly random payloads and appends their checksum
///
/// The randomness source is always a cryptographically secure generator.
/// Seed unpredictability matters to the application even though the
/// checksum itself is not a security primitive.
pub struct Generator<'a> {
    engine: &'a ChecksumEngine,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a ChecksumEngine) -> Self {
        Self { engine }
    }

    /// Generate a checked sequence using the thread-local CSPRNG
    pub fn generate(&self) -> Vec<String> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a checked sequence using a caller-supplied CSPRNG
    pub fn generate_with<R: CryptoRng>(&self, rng: &mut R) -> Vec<String> {
        let words = self.engine.field_exponent().symbol_count();
        let mut digits: Vec<Digit> = (0..self.engine.payload_len())
            .map(|_| Digit::new(rng.random_range(0..words)))
            .collect();
        let checksum = self.engine.fold(&digits);
        digits.push(checksum);
        trace!("Generated payload with checksum digit {}", checksum);
        self.engine.to_words(&digits)
    }
}

impl ChecksumEngine {
    /// Generate a random checked sequence of `m + 1` words
    pub fn generate(&self) -> Vec<String> {
        Generator::new(self).generate()
    }
}
