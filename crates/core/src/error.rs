//! Error types for placetext.

use thiserror::Error;

/// Errors produced while configuring or running text generation.
///
/// Every variant except [`PlacetextError::Io`] is an invalid-input error: the
/// caller passed something unusable and no text was produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacetextError {
    /// The corpus had no words.
    #[error("invalid input: corpus cannot be empty")]
    EmptyCorpus,

    /// More than one of words, sentences or paragraphs was requested.
    #[error("invalid input: only one of words, sentences, or paragraphs can be specified")]
    ConflictingOutputs,

    /// A corpus name did not match any built-in corpus.
    #[error("invalid input: unknown corpus '{0}'; expected a built-in name or a list of words")]
    UnknownCorpus(String),

    /// The per-sentence word bounds were inverted, or so wide that the
    /// number of possible lengths overflows.
    #[error("invalid input: unusable words-per-sentence range (min {min}, max {max})")]
    InvalidSentenceRange { min: usize, max: usize },

    /// A word list could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl PlacetextError {
    /// Returns `true` for errors caused by unusable caller input.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PlacetextError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_displays_readable_message() {
        let msg = PlacetextError::EmptyCorpus.to_string();
        assert!(
            msg.contains("corpus cannot be empty"),
            "expected message about the empty corpus, got: {msg}"
        );
    }

    #[test]
    fn conflicting_outputs_names_all_selectors() {
        let msg = PlacetextError::ConflictingOutputs.to_string();
        assert!(msg.contains("words"), "missing words in: {msg}");
        assert!(msg.contains("sentences"), "missing sentences in: {msg}");
        assert!(msg.contains("paragraphs"), "missing paragraphs in: {msg}");
    }

    #[test]
    fn unknown_corpus_includes_name() {
        let msg = PlacetextError::UnknownCorpus("pirate".into()).to_string();
        assert!(msg.contains("pirate"), "missing corpus name in: {msg}");
    }

    #[test]
    fn invalid_sentence_range_includes_bounds() {
        let msg = PlacetextError::InvalidSentenceRange { min: 9, max: 4 }.to_string();
        assert!(msg.contains('9'), "missing min in: {msg}");
        assert!(msg.contains('4'), "missing max in: {msg}");
    }

    #[test]
    fn io_is_not_invalid_input() {
        assert!(!PlacetextError::Io("disk".into()).is_invalid_input());
        assert!(PlacetextError::EmptyCorpus.is_invalid_input());
        assert!(PlacetextError::ConflictingOutputs.is_invalid_input());
        assert!(PlacetextError::UnknownCorpus("x".into()).is_invalid_input());
        assert!(PlacetextError::InvalidSentenceRange { min: 2, max: 1 }.is_invalid_input());
    }

    #[test]
    fn placetext_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlacetextError>();
    }

    #[test]
    fn placetext_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PlacetextError>();
    }
}
