//! Core domain types for checksum operations
//!
//! Type-safe wrappers that keep field exponents, word indices and raw
//! counts from being mixed up.

use crate::polynomial;

/// Exponent `k` of the field GF(2^k); the alphabet holds `2^k` words
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldExponent(u32);

impl FieldExponent {
    /// Wrap `k` if a reduction polynomial is tabulated for it
    pub fn new(k: u32) -> Option<Self> {
        polynomial::polynomial_exponents(k).map(|_| FieldExponent(k))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Number of words in an alphabet over this field
    pub fn symbol_count(&self) -> u64 {
        1u64 << self.0
    }
}

impl std::fmt::Display for FieldExponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a word in the alphabet, i.e. its value in GF(2^k)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digit(u64);

impl Digit {
    /// The additive identity; a checked sequence folds to this when valid
    pub const ZERO: Digit = Digit(0);

    pub fn new(value: u64) -> Self {
        Digit(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Digit {
    fn from(index: usize) -> Self {
        Digit(index as u64)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
