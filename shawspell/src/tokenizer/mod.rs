//! Word-boundary tokenization used to pick checkable words out of a span.

use unic_segment::{WordBoundIndices, Words};

pub mod case_handling;

/// Extension methods for splitting text on Unicode word boundaries.
pub trait Tokenize {
    /// All word-bound segments with their byte offsets, separators included.
    fn word_bound_indices(&self) -> WordBoundIndices;
    /// Only the segments containing at least one alphanumeric code point.
    fn words(&self) -> Words;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices {
        WordBoundIndices::new(self)
    }

    fn words(&self) -> Words {
        Words::new(self, |s| s.chars().any(|ch| ch.is_alphanumeric()))
    }
}
