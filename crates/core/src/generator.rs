//! Seeded text generator.
//!
//! A [`Generator`] borrows a corpus, owns one [`Mulberry32`] stream, and turns
//! draws from that stream into words, sentences, and paragraphs. Every output
//! method advances the same stream, so the generator behaves like a tape:
//! calling `words(3)` before `sentences(1)` yields different text than the
//! reverse order, but the same call sequence on the same seed is always
//! byte-identical.

use crate::config::GeneratorConfig;
use crate::error::PlacetextError;
use crate::prng::Mulberry32;
use tracing::{debug, trace};

/// Separator placed between paragraphs.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Stateful placeholder-text generator over a borrowed corpus.
///
/// `S` is anything that views as a string, so both `&[&str]` and
/// `&[String]` corpora work without copying.
#[derive(Debug, Clone)]
pub struct Generator<'a, S> {
    corpus: &'a [S],
    config: GeneratorConfig,
    sentence_span: usize,
    seed: u32,
    rng: Mulberry32,
}

impl<'a, S: AsRef<str>> Generator<'a, S> {
    /// Creates a generator over `corpus`.
    ///
    /// Returns `PlacetextError::EmptyCorpus` if the corpus has no words, or
    /// `PlacetextError::InvalidSentenceRange` if the config's maximum words
    /// per sentence is below its minimum or the range covers every `usize`.
    pub fn new(corpus: &'a [S], config: GeneratorConfig) -> Result<Self, PlacetextError> {
        if corpus.is_empty() {
            return Err(PlacetextError::EmptyCorpus);
        }
        let sentence_span = config.sentence_length_span()?;

        let rng = match config.seed {
            Some(seed) => Mulberry32::new(seed),
            None => Mulberry32::from_entropy(),
        };
        let seed = rng.state();
        debug!(
            corpus_len = corpus.len(),
            seed,
            seeded = config.seed.is_some(),
            min_words = config.min_words_per_sentence,
            max_words = config.max_words_per_sentence,
            sentences_per_paragraph = config.sentences_per_paragraph,
            "generator created"
        );

        Ok(Self {
            corpus,
            config,
            sentence_span,
            seed,
            rng,
        })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The 32-bit seed the stream started from.
    ///
    /// For unseeded generators this is the derived seed; feeding it back
    /// through [`GeneratorConfig::with_seed`] replays the same output.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generates `count` space-separated words, uncapitalized and unpunctuated.
    ///
    /// Returns an empty string when `count` is 0.
    pub fn words(&mut self, count: usize) -> String {
        trace!(count, "words");
        self.join_words(count)
    }

    /// Generates `count` sentences separated by single spaces.
    ///
    /// Each sentence holds between `min_words_per_sentence` and
    /// `max_words_per_sentence` words (inclusive), starts with an uppercase
    /// character and ends with a period. Returns an empty string when
    /// `count` is 0.
    pub fn sentences(&mut self, count: usize) -> String {
        trace!(count, "sentences");
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Generates `count` paragraphs separated by a blank line.
    ///
    /// Each paragraph is exactly `sentences_per_paragraph` sentences drawn
    /// from the shared stream. Returns an empty string when `count` is 0.
    pub fn paragraphs(&mut self, count: usize) -> String {
        trace!(count, "paragraphs");
        let per_paragraph = self.config.sentences_per_paragraph;
        (0..count)
            .map(|_| self.sentences(per_paragraph))
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR)
    }

    fn pick_word(&mut self) -> &'a str {
        let corpus = self.corpus;
        corpus[self.rng.next_int(corpus.len())].as_ref()
    }

    fn join_words(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| self.pick_word())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence(&mut self) -> String {
        // min + draw never exceeds max: the draw is below the span.
        let word_count =
            self.config.min_words_per_sentence + self.rng.next_int(self.sentence_span);
        let mut sentence = capitalize_first(&self.join_words(word_count));
        sentence.push('.');
        sentence
    }
}

/// Uppercases the first character of `s`, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
