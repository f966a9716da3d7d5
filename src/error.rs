//! Error types for checksum, verification and correction operations

use thiserror::Error;

/// Errors reported by the checksum engine
///
/// Every variant is a synchronous input validation failure. None of them are
/// transient, so callers should not retry. A sequence that simply fails to
/// verify is not an error: `verify` returns `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DammError {
    /// No irreducible polynomial is tabulated for this field exponent
    #[error("No irreducible polynomial is tabulated for GF(2^{0})")]
    UnsupportedFieldSize(u32),

    /// The engine was asked for a field exponent it cannot support
    #[error("Invalid word list size: 2^{0} words is not supported")]
    InvalidFieldSize(u32),

    /// Payload length must be at least one word
    #[error("Invalid payload size: {0} (must be at least 1)")]
    InvalidPayloadSize(usize),

    /// Alphabet has the wrong number of words or repeats a word
    #[error(
        "Word list must contain exactly {expected} distinct words (got {actual}{})",
        duplicate_suffix(.duplicate)
    )]
    DuplicateOrWrongSizeAlphabet {
        expected: u64,
        actual: usize,
        duplicate: Option<String>,
    },

    /// Sequence length differs from the payload or checked length
    #[error("Invalid sequence length: expected {expected} words, got {actual}")]
    WrongSequenceLength { expected: usize, actual: usize },

    /// A word in the sequence is not in the alphabet
    #[error("Unknown word {symbol:?} at position {position}")]
    UnknownSymbol { position: usize, symbol: String },

    /// Correction was requested for a sequence that already verifies
    #[error("The sequence is already valid")]
    AlreadyValid,
}

fn duplicate_suffix(duplicate: &Option<String>) -> String {
    duplicate
        .as_ref()
        .map(|word| format!(", duplicate {:?}", word))
        .unwrap_or_default()
}

/// Type alias for Result with DammError
pub type Result<T> = std::result::Result<T, DammError>;
