#![deny(unsafe_code)]
//! Corpus registry: maps built-in corpus names to their word lists and
//! provides the high-level [`generate_text`] entry point.
//!
//! This crate sits between `placetext-core` (which knows nothing about
//! specific word lists) and the CLI, so name resolution and option handling
//! live in one place.

pub mod generate;
pub mod options;
pub mod words;

use placetext_core::PlacetextError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use generate::{generate, generate_text, Generated};
pub use options::{CorpusSource, GenerateOptions, OutputKind};

/// All built-in corpus names, in listing order.
const CORPUS_NAMES: &[&str] = &["classic", "tech", "startup", "concise", "musk"];

/// Enumeration of the bundled word lists.
///
/// Use [`BuiltinCorpus::from_name`] for string-based lookup (CLI, JSON options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinCorpus {
    /// Lorem ipsum.
    #[default]
    Classic,
    /// Programming jargon.
    Tech,
    /// Business buzzwords.
    Startup,
    /// Short common words.
    Concise,
    /// Rockets and electric cars.
    Musk,
}

impl BuiltinCorpus {
    /// Every built-in corpus, in listing order.
    pub const ALL: [BuiltinCorpus; 5] = [
        BuiltinCorpus::Classic,
        BuiltinCorpus::Tech,
        BuiltinCorpus::Startup,
        BuiltinCorpus::Concise,
        BuiltinCorpus::Musk,
    ];

    /// Looks up a corpus by its lower-case name.
    ///
    /// Returns `PlacetextError::UnknownCorpus` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, PlacetextError> {
        match name {
            "classic" => Ok(BuiltinCorpus::Classic),
            "tech" => Ok(BuiltinCorpus::Tech),
            "startup" => Ok(BuiltinCorpus::Startup),
            "concise" => Ok(BuiltinCorpus::Concise),
            "musk" => Ok(BuiltinCorpus::Musk),
            _ => Err(PlacetextError::UnknownCorpus(name.to_string())),
        }
    }

    /// The name accepted by [`BuiltinCorpus::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            BuiltinCorpus::Classic => "classic",
            BuiltinCorpus::Tech => "tech",
            BuiltinCorpus::Startup => "startup",
            BuiltinCorpus::Concise => "concise",
            BuiltinCorpus::Musk => "musk",
        }
    }

    /// The bundled word list.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            BuiltinCorpus::Classic => words::CLASSIC,
            BuiltinCorpus::Tech => words::TECH,
            BuiltinCorpus::Startup => words::STARTUP,
            BuiltinCorpus::Concise => words::CONCISE,
            BuiltinCorpus::Musk => words::MUSK,
        }
    }

    /// Returns a slice of all recognized corpus names.
    pub fn list_names() -> &'static [&'static str] {
        CORPUS_NAMES
    }
}

impl FromStr for BuiltinCorpus {
    type Err = PlacetextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for BuiltinCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
