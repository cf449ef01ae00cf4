#![deny(unsafe_code)]
//! Core of the placetext placeholder-text generator.
//!
//! Provides the `Mulberry32` PRNG, `GeneratorConfig`, the corpus-agnostic
//! `Generator` that composes words, sentences and paragraphs from a seeded
//! stream, and the shared `PlacetextError` type.

pub mod config;
pub mod error;
pub mod generator;
pub mod prng;

pub use config::GeneratorConfig;
pub use error::PlacetextError;
pub use generator::Generator;
pub use prng::Mulberry32;
