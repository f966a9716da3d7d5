//! Data types for correction results

use rustc_hash::FxHashSet as HashSet;

/// The single edit that turns the broken input into a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Repair {
    /// Words at `position` and `position + 1` were swapped
    Transposition { position: usize },
    /// Word at `position` was replaced
    Substitution {
        position: usize,
        original: String,
        replacement: String,
    },
}

impl Repair {
    pub fn position(&self) -> usize {
        match self {
            Repair::Transposition { position } | Repair::Substitution { position, .. } => *position,
        }
    }

    pub fn is_transposition(&self) -> bool {
        matches!(self, Repair::Transposition { .. })
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, Repair::Substitution { .. })
    }
}

impl std::fmt::Display for Repair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Repair::Transposition { position } => {
                write!(f, "swap words {} and {}", position + 1, position + 2)
            }
            Repair::Substitution {
                position,
                original,
                replacement,
            } => write!(
                f,
                "replace word {} ({:?}) with {:?}",
                position + 1,
                original,
                replacement
            ),
        }
    }
}

/// A checked sequence that verifies, plus the edit that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub words: Vec<String>,
    pub repair: Repair,
}

/// Distinct verifying candidates in discovery order
///
/// Transposition candidates come first, then substitutions, each class in
/// position order. The order is stable for a given input but callers should
/// not attach meaning to indices.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
    seen: HashSet<Vec<String>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate unless an identical sequence is already present
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.seen.contains(&candidate.words) {
            return false;
        }
        self.seen.insert(candidate.words.clone());
        self.candidates.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        let key: Vec<String> = sequence.iter().map(|w| w.as_ref().to_string()).collect();
        self.seen.contains(&key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Candidate sequences without their provenance
    pub fn sequences(&self) -> impl Iterator<Item = &[String]> {
        self.candidates.iter().map(|c| c.words.as_slice())
    }

    pub fn into_sequences(self) -> Vec<Vec<String>> {
        self.candidates.into_iter().map(|c| c.words).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}
