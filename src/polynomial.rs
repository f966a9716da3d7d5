//! Irreducible polynomials over GF(2) and the reduction masks derived from them
//!
//! Each entry lists the exponents of a monic irreducible polynomial of degree `k`
//! (the leading exponent is `k` itself). The constant term is implied and added
//! when the mask is built. Values come from the HP Labs table of low-weight
//! irreducible polynomials (HPL-98-135).
//!
//! The mask is the only parameter that turns the per-word fold into
//! multiplication by `x` modulo the field polynomial. A wrong mask still
//! produces checksums, it just silently loses the error detection guarantees,
//! so masks are only ever read from this table.

use crate::error::{DammError, Result};
use std::ops::RangeInclusive;

/// Smallest field exponent in the table
pub const MIN_FIELD_EXPONENT: u32 = 2;

/// Largest field exponent in the table
pub const MAX_FIELD_EXPONENT: u32 = 32;

/// Monic irreducible polynomials for GF(2^k), k = 2..=32, constant term implied
pub const IRREDUCIBLE_POLYNOMIALS: &[(u32, &[u32])] = &[
    (2, &[2, 1]),
    (3, &[3, 1]),
    (4, &[4, 1]),
    (5, &[5, 2]),
    (6, &[6, 1]),
    (7, &[7, 1]),
    (8, &[8, 4, 3, 1]),
    (9, &[9, 1]),
    (10, &[10, 3]),
    (11, &[11, 2]),
    (12, &[12, 3]),
    (13, &[13, 4, 3, 1]),
    (14, &[14, 5]),
    (15, &[15, 1]),
    (16, &[16, 5, 3, 1]),
    (17, &[17, 3]),
    (18, &[18, 3]),
    (19, &[19, 5, 2, 1]),
    (20, &[20, 3]),
    (21, &[21, 2]),
    (22, &[22, 1]),
    (23, &[23, 5]),
    (24, &[24, 4, 3, 1]),
    (25, &[25, 3]),
    (26, &[26, 4, 3, 1]),
    (27, &[27, 5, 2, 1]),
    (28, &[28, 1]),
    (29, &[29, 2]),
    (30, &[30, 1]),
    (31, &[31, 3]),
    (32, &[32, 7, 3, 2]),
];

/// Range of field exponents with a tabulated polynomial
pub fn supported_field_sizes() -> RangeInclusive<u32> {
    MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT
}

/// Look up the polynomial exponents for GF(2^k)
pub fn polynomial_exponents(k: u32) -> Option<&'static [u32]> {
    IRREDUCIBLE_POLYNOMIALS
        .iter()
        .find(|(degree, _)| *degree == k)
        .map(|(_, exponents)| *exponents)
}

/// A `k+1` bit reduction mask for GF(2^k)
///
/// Bit `k` (the monic leading term) and bit 0 (the implied constant term)
/// are always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReductionMask {
    degree: u32,
    bits: u64,
}

impl ReductionMask {
    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Bit that signals the accumulator has left the field after a shift
    #[inline]
    pub fn overflow_bit(&self) -> u64 {
        1u64 << self.degree
    }
}

impl std::fmt::Display for ReductionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.bits)
    }
}

/// Build the reduction mask for GF(2^k)
pub fn build_mask(k: u32) -> Result<ReductionMask> {
    let exponents = polynomial_exponents(k).ok_or(DammError::UnsupportedFieldSize(k))?;
    let bits = exponents
        .iter()
        .fold(1u64, |mask, &exponent| mask | (1u64 << exponent));
    Ok(ReductionMask { degree: k, bits })
}
