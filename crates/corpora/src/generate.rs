//! The one-call entry point: options in, text out.

use crate::options::{CorpusSource, GenerateOptions};
use crate::BuiltinCorpus;
use placetext_core::{Generator, PlacetextError};
use tracing::debug;

/// Text produced by [`generate`], with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    /// Starting seed of the stream; equals the requested seed modulo 2^32.
    pub seed: u32,
}

/// Generates placeholder text from high-level options.
///
/// Validation happens before any text is produced:
/// - more than one output selector → `PlacetextError::ConflictingOutputs`
/// - unknown built-in name → `PlacetextError::UnknownCorpus`
/// - empty custom word list → `PlacetextError::EmptyCorpus`
/// - inverted or overflowing sentence bounds → `PlacetextError::InvalidSentenceRange`
pub fn generate(options: &GenerateOptions) -> Result<Generated, PlacetextError> {
    let output = options.output()?;

    let custom: Vec<&str>;
    let corpus: &[&str] = match &options.corpus {
        CorpusSource::Named(name) => BuiltinCorpus::from_name(name)?.words(),
        CorpusSource::Custom(words) => {
            custom = words.iter().map(String::as_str).collect();
            &custom
        }
    };

    let mut generator = Generator::new(corpus, options.generator_config())?;
    debug!(?output, seed = generator.seed(), "generating text");
    let text = output.render(&mut generator);

    Ok(Generated {
        text,
        seed: generator.seed(),
    })
}

/// Generates placeholder text from high-level options, discarding the seed.
///
/// See [`generate`] for the error cases.
pub fn generate_text(options: &GenerateOptions) -> Result<String, PlacetextError> {
    generate(options).map(|generated| generated.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(f: impl FnOnce(&mut GenerateOptions)) -> GenerateOptions {
        let mut opts = GenerateOptions::default();
        f(&mut opts);
        opts
    }

    #[test]
    fn default_options_produce_three_classic_sentences() {
        let text = generate_text(&GenerateOptions::default()).unwrap();
        assert!(!text.is_empty());
        assert_eq!(text.matches('.').count(), 3);
        for word in text.split(' ') {
            let word = word.trim_end_matches('.').to_lowercase();
            assert!(BuiltinCorpus::Classic.words().contains(&word.as_str()));
        }
    }

    #[test]
    fn words_option_returns_exact_count() {
        let text = generate_text(&with(|o| o.words = Some(5))).unwrap();
        assert_eq!(text.split(' ').count(), 5);
    }

    #[test]
    fn sentences_option_returns_exact_count() {
        let text = generate_text(&with(|o| o.sentences = Some(2))).unwrap();
        assert_eq!(text.matches('.').count(), 2);
    }

    #[test]
    fn paragraphs_option_returns_exact_count() {
        let text = generate_text(&with(|o| o.paragraphs = Some(2))).unwrap();
        assert_eq!(text.split("\n\n").count(), 2);
    }

    #[test]
    fn custom_corpus_matches_reference_vector() {
        let opts = GenerateOptions {
            corpus: CorpusSource::Custom(vec!["apple".into(), "banana".into(), "cherry".into()]),
            words: Some(3),
            seed: Some(100),
            ..Default::default()
        };
        assert_eq!(generate_text(&opts).unwrap(), "apple apple banana");
    }

    #[test]
    fn seeded_calls_are_reproducible() {
        let opts = GenerateOptions::default()
            .with_corpus(BuiltinCorpus::Tech)
            .with_seed(42);
        assert_eq!(generate_text(&opts).unwrap(), generate_text(&opts).unwrap());
    }

    #[test]
    fn generate_reports_seed() {
        let generated = generate(&GenerateOptions::default().with_seed(-1)).unwrap();
        assert_eq!(generated.seed, u32::MAX);
    }

    #[test]
    fn unseeded_seed_replays_output() {
        let first = generate(&with(|o| o.paragraphs = Some(1))).unwrap();
        let replay = generate(&with(|o| {
            o.paragraphs = Some(1);
            o.seed = Some(i64::from(first.seed));
        }))
        .unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn conflicting_selectors_fail() {
        let opts = with(|o| {
            o.words = Some(1);
            o.sentences = Some(1);
        });
        assert_eq!(generate_text(&opts), Err(PlacetextError::ConflictingOutputs));
    }

    #[test]
    fn unknown_corpus_fails() {
        let opts = GenerateOptions::default().with_corpus(CorpusSource::Named("pirate".into()));
        assert_eq!(
            generate_text(&opts),
            Err(PlacetextError::UnknownCorpus("pirate".into()))
        );
    }

    #[test]
    fn empty_custom_corpus_fails() {
        let opts = GenerateOptions::default().with_corpus(Vec::<String>::new());
        assert_eq!(generate_text(&opts), Err(PlacetextError::EmptyCorpus));
    }

    #[test]
    fn inverted_sentence_bounds_fail() {
        let opts = with(|o| {
            o.min_words_per_sentence = Some(6);
            o.max_words_per_sentence = Some(3);
        });
        assert_eq!(
            generate_text(&opts),
            Err(PlacetextError::InvalidSentenceRange { min: 6, max: 3 })
        );
    }

    #[test]
    fn unbounded_sentence_range_fails_instead_of_overflowing() {
        let opts = GenerateOptions {
            corpus: CorpusSource::Custom(vec!["a".into(), "b".into()]),
            sentences: Some(1),
            seed: Some(1),
            min_words_per_sentence: Some(0),
            max_words_per_sentence: Some(usize::MAX),
            ..Default::default()
        };
        assert_eq!(
            generate_text(&opts),
            Err(PlacetextError::InvalidSentenceRange {
                min: 0,
                max: usize::MAX
            })
        );
    }

    #[test]
    fn sentence_bounds_pass_through() {
        let opts = with(|o| {
            o.seed = Some(3);
            o.min_words_per_sentence = Some(3);
            o.max_words_per_sentence = Some(3);
            o.sentences = Some(4);
        });
        let text = generate_text(&opts).unwrap();
        for sentence in text.split_inclusive('.') {
            assert_eq!(sentence.trim().trim_end_matches('.').split(' ').count(), 3);
        }
    }

    #[test]
    fn json_options_drive_generation() {
        let opts = GenerateOptions::from_json(
            r#"{"corpus": ["apple", "banana", "cherry"], "words": 3, "seed": 100}"#,
        )
        .unwrap();
        assert_eq!(generate_text(&opts).unwrap(), "apple apple banana");
    }
}
