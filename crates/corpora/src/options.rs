//! Options accepted by [`generate_text`](crate::generate_text).
//!
//! [`GenerateOptions`] mirrors the JSON shape callers send:
//!
//! ```json
//! { "corpus": "tech", "sentences": 2, "seed": 42, "maxWordsPerSentence": 8 }
//! ```
//!
//! Every field is optional. `corpus` is either a built-in name or an array
//! of words, and at most one of `words`, `sentences`, `paragraphs` may be set.

use crate::BuiltinCorpus;
use placetext_core::{Generator, GeneratorConfig, PlacetextError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Sentence count used when no output selector is given.
pub const DEFAULT_SENTENCES: usize = 3;

/// Where the words come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CorpusSource {
    /// A built-in corpus name, resolved at generation time.
    Named(String),
    /// A caller-supplied word list.
    Custom(Vec<String>),
}

impl CorpusSource {
    /// Reads a custom word list, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped. An
    /// empty file yields an empty list, which generation later rejects with
    /// `PlacetextError::EmptyCorpus`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlacetextError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PlacetextError::Io(format!("{}: {e}", path.display())))?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(CorpusSource::Custom(words))
    }
}

impl Default for CorpusSource {
    fn default() -> Self {
        CorpusSource::Named(BuiltinCorpus::default().name().to_owned())
    }
}

impl From<BuiltinCorpus> for CorpusSource {
    fn from(corpus: BuiltinCorpus) -> Self {
        CorpusSource::Named(corpus.name().to_owned())
    }
}

impl From<Vec<String>> for CorpusSource {
    fn from(words: Vec<String>) -> Self {
        CorpusSource::Custom(words)
    }
}

/// The single kind of output a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Words(usize),
    Sentences(usize),
    Paragraphs(usize),
}

impl OutputKind {
    /// Runs the matching generator operation.
    pub fn render<S: AsRef<str>>(self, generator: &mut Generator<'_, S>) -> String {
        match self {
            OutputKind::Words(n) => generator.words(n),
            OutputKind::Sentences(n) => generator.sentences(n),
            OutputKind::Paragraphs(n) => generator.paragraphs(n),
        }
    }
}

/// High-level generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Corpus to draw from. Defaults to `classic`.
    pub corpus: CorpusSource,
    /// Number of words to generate.
    pub words: Option<i64>,
    /// Number of sentences to generate.
    pub sentences: Option<i64>,
    /// Number of paragraphs to generate.
    pub paragraphs: Option<i64>,
    /// Seed for reproducible output.
    pub seed: Option<i64>,
    /// Minimum words per sentence (default 5).
    pub min_words_per_sentence: Option<usize>,
    /// Maximum words per sentence (default 15).
    pub max_words_per_sentence: Option<usize>,
    /// Sentences per paragraph (default 4).
    pub sentences_per_paragraph: Option<usize>,
}

impl GenerateOptions {
    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns a copy drawing from `corpus`.
    pub fn with_corpus(mut self, corpus: impl Into<CorpusSource>) -> Self {
        self.corpus = corpus.into();
        self
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves the output selector.
    ///
    /// Returns `PlacetextError::ConflictingOutputs` if more than one of
    /// words, sentences, paragraphs is set. Negative counts become 0, which
    /// generates an empty string.
    pub fn output(&self) -> Result<OutputKind, PlacetextError> {
        let selected = [self.words, self.sentences, self.paragraphs]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if selected > 1 {
            return Err(PlacetextError::ConflictingOutputs);
        }

        Ok(match (self.words, self.paragraphs) {
            (Some(n), _) => OutputKind::Words(clamp_count(n)),
            (_, Some(n)) => OutputKind::Paragraphs(clamp_count(n)),
            _ => OutputKind::Sentences(self.sentences.map_or(DEFAULT_SENTENCES, clamp_count)),
        })
    }

    /// Builds the generator config, falling back to the defaults for unset fields.
    pub fn generator_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            seed: self.seed,
            min_words_per_sentence: self
                .min_words_per_sentence
                .unwrap_or(defaults.min_words_per_sentence),
            max_words_per_sentence: self
                .max_words_per_sentence
                .unwrap_or(defaults.max_words_per_sentence),
            sentences_per_paragraph: self
                .sentences_per_paragraph
                .unwrap_or(defaults.sentences_per_paragraph),
        }
    }
}

fn clamp_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
