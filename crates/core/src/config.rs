//! Generator configuration.
//!
//! A [`GeneratorConfig`] captures everything besides the corpus that decides
//! what a [`Generator`](crate::Generator) emits: the optional PRNG seed and the
//! sentence and paragraph sizing rules. Two generators built from the same
//! corpus and an identical seeded config produce identical text.

use crate::error::PlacetextError;
use serde::{Deserialize, Serialize};

/// Default lower bound on words per sentence.
pub const DEFAULT_MIN_WORDS_PER_SENTENCE: usize = 5;
/// Default upper bound on words per sentence.
pub const DEFAULT_MAX_WORDS_PER_SENTENCE: usize = 15;
/// Default number of sentences in each paragraph.
pub const DEFAULT_SENTENCES_PER_PARAGRAPH: usize = 4;

/// Immutable generation settings.
///
/// Deserializes from camelCase JSON (`minWordsPerSentence`, ...) with every
/// field optional; missing fields take the documented defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// PRNG seed. `None` seeds from the clock and OS entropy.
    pub seed: Option<i64>,
    /// Inclusive lower bound on words per sentence.
    pub min_words_per_sentence: usize,
    /// Inclusive upper bound on words per sentence.
    pub max_words_per_sentence: usize,
    /// Sentences emitted for each paragraph.
    pub sentences_per_paragraph: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_words_per_sentence: DEFAULT_MIN_WORDS_PER_SENTENCE,
            max_words_per_sentence: DEFAULT_MAX_WORDS_PER_SENTENCE,
            sentences_per_paragraph: DEFAULT_SENTENCES_PER_PARAGRAPH,
        }
    }
}

impl GeneratorConfig {
    /// Returns a copy of this config with the given seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy of this config with the given per-sentence word bounds.
    pub fn with_sentence_words(mut self, min: usize, max: usize) -> Self {
        self.min_words_per_sentence = min;
        self.max_words_per_sentence = max;
        self
    }

    /// Returns a copy of this config with the given paragraph length.
    pub fn with_sentences_per_paragraph(mut self, count: usize) -> Self {
        self.sentences_per_paragraph = count;
        self
    }

    /// Number of distinct sentence lengths, `max - min + 1`.
    ///
    /// Returns `PlacetextError::InvalidSentenceRange` if the bounds are
    /// inverted or the count does not fit in a `usize` (`0..=usize::MAX`).
    pub fn sentence_length_span(&self) -> Result<usize, PlacetextError> {
        let (min, max) = (self.min_words_per_sentence, self.max_words_per_sentence);
        max.checked_sub(min)
            .and_then(|width| width.checked_add(1))
            .ok_or(PlacetextError::InvalidSentenceRange { min, max })
    }

    /// Validates that the per-sentence word bounds form a usable range.
    pub fn validate(&self) -> Result<(), PlacetextError> {
        self.sentence_length_span().map(|_| ())
    }
}
