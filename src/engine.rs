//! Quasigroup checksum engine over an alphabet of `2^k` words
//!
//! The engine generalizes the Damm check digit algorithm from decimal digits
//! to any alphabet whose size is a power of two. Each word is treated as an
//! element of GF(2^k) and folded into an accumulator with
//!
//! ```text
//! acc = reduce(2 * (acc XOR digit))
//! ```
//!
//! which is the quasigroup operation `a * b = reduce(2 * (a XOR b))`. This
//! operation is totally anti-symmetric, so every single word substitution and
//! every transposition of two distinct adjacent words changes the result.
//!
//! A checked sequence is the payload followed by the word that makes the
//! whole sequence fold to zero (`alphabet[0]`).

use crate::domain::{Digit, FieldExponent};
use crate::error::{DammError, Result};
use crate::polynomial::{self, ReductionMask};
use log::debug;
use rustc_hash::FxHashMap as HashMap;

/// Immutable checksum state for one `(k, m, alphabet)` triple
pub struct ChecksumEngine {
    field: FieldExponent,
    payload_len: usize,
    alphabet: Vec<String>,
    digits: HashMap<String, Digit>,
    mask: ReductionMask,
}

impl ChecksumEngine {
    /// Create an engine for `2^k` words and payloads of `m` words
    ///
    /// # Errors
    /// * `InvalidFieldSize` - no reduction polynomial is tabulated for `k`
    /// * `InvalidPayloadSize` - `m` is zero
    /// * `DuplicateOrWrongSizeAlphabet` - the alphabet is not exactly `2^k` distinct words
    pub fn new(k: u32, m: usize, alphabet: Vec<String>) -> Result<Self> {
        let field = FieldExponent::new(k).ok_or(DammError::InvalidFieldSize(k))?;
        if m < 1 {
            return Err(DammError::InvalidPayloadSize(m));
        }

        let expected = field.symbol_count();
        if alphabet.len() as u64 != expected {
            return Err(DammError::DuplicateOrWrongSizeAlphabet {
                expected,
                actual: alphabet.len(),
                duplicate: None,
            });
        }

        let mut digits = HashMap::default();
        digits.reserve(alphabet.len());
        for (index, word) in alphabet.iter().enumerate() {
            if digits.insert(word.clone(), Digit::from(index)).is_some() {
                return Err(DammError::DuplicateOrWrongSizeAlphabet {
                    expected,
                    actual: alphabet.len(),
                    duplicate: Some(word.clone()),
                });
            }
        }

        let mask = polynomial::build_mask(k).map_err(|_| DammError::InvalidFieldSize(k))?;
        debug!(
            "Checksum engine: k={} ({} words), m={}, mask={}",
            k, expected, m, mask
        );

        Ok(Self {
            field,
            payload_len: m,
            alphabet,
            digits,
            mask,
        })
    }

    pub fn field_exponent(&self) -> FieldExponent {
        self.field
    }

    /// Number of words in a payload (without checksum)
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Number of words in a checked sequence (payload plus checksum)
    pub fn checked_len(&self) -> usize {
        self.payload_len + 1
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn mask(&self) -> ReductionMask {
        self.mask
    }

    /// Position of `word` in the alphabet, if it is a member
    pub fn digit_of(&self, word: &str) -> Option<Digit> {
        self.digits.get(word).copied()
    }

    /// Word at `digit`, or `None` if the digit lies outside this alphabet
    pub fn word(&self, digit: Digit) -> Option<&str> {
        self.alphabet.get(digit.as_usize()).map(String::as_str)
    }

    /// The zero word, `alphabet[0]`
    pub fn zero_word(&self) -> &str {
        self.symbol(Digit::ZERO)
    }

    /// Word for a digit produced by this engine's own fold or lookup
    #[inline]
    pub(crate) fn symbol(&self, digit: Digit) -> &str {
        &self.alphabet[digit.as_usize()]
    }

    /// Compute the checksum word for a sequence
    ///
    /// With `includes_checksum == false` the sequence must be a payload of `m`
    /// words and the result is the word to append. With `true` the sequence
    /// must be `m + 1` words and a valid sequence yields the zero word.
    pub fn checksum<S: AsRef<str>>(
        &self,
        sequence: &[S],
        includes_checksum: bool,
    ) -> Result<&str> {
        let expected = if includes_checksum {
            self.checked_len()
        } else {
            self.payload_len
        };
        let digits = self.to_digits(sequence, expected)?;
        Ok(self.symbol(self.fold(&digits)))
    }

    /// Check a sequence of `m + 1` words
    ///
    /// Returns `Ok(false)` for a well-formed sequence whose checksum does not
    /// match. Malformed input (wrong length, unknown words) is an error.
    pub fn verify<S: AsRef<str>>(&self, checked: &[S]) -> Result<bool> {
        let digits = self.to_digits(checked, self.checked_len())?;
        Ok(self.fold(&digits) == Digit::ZERO)
    }

    /// Map words to digits, checking length first and then membership
    pub(crate) fn to_digits<S: AsRef<str>>(
        &self,
        sequence: &[S],
        expected: usize,
    ) -> Result<Vec<Digit>> {
        if sequence.len() != expected {
            return Err(DammError::WrongSequenceLength {
                expected,
                actual: sequence.len(),
            });
        }
        sequence
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let word = word.as_ref();
                self.digit_of(word).ok_or_else(|| DammError::UnknownSymbol {
                    position,
                    symbol: word.to_string(),
                })
            })
            .collect()
    }

    /// Fold digits through the quasigroup, left to right
    #[inline]
    pub(crate) fn fold(&self, digits: &[Digit]) -> Digit {
        let overflow = self.mask.overflow_bit();
        let mask = self.mask.bits();
        let acc = digits.iter().fold(0u64, |acc, digit| {
            let shifted = (acc ^ digit.value()) << 1;
            if shifted & overflow != 0 {
                shifted ^ mask
            } else {
                shifted
            }
        });
        Digit::new(acc)
    }

    /// Whether a digit sequence of checked length folds to zero
    #[inline]
    pub(crate) fn verify_digits(&self, digits: &[Digit]) -> bool {
        self.fold(digits) == Digit::ZERO
    }

    pub(crate) fn to_words(&self, digits: &[Digit]) -> Vec<String> {
        digits.iter().map(|&d| self.symbol(d).to_string()).collect()
    }
}

impl std::fmt::Debug for ChecksumEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecksumEngine")
            .field("k", &self.field.get())
            .field("m", &self.payload_len)
            .field("words", &self.alphabet.len())
            .field("mask", &self.mask)
            .finish()
    }
}
