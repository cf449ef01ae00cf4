#![deny(unsafe_code)]
//! CLI binary for the placetext placeholder-text generator.
//!
//! Subcommands:
//! - `words <N>`, `sentences <N>`, `paragraphs <N>`: generate text
//! - `generate --options <JSON>`: generate from a JSON options object
//! - `corpora`: print the built-in corpus names

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use placetext_corpora::{generate, BuiltinCorpus, CorpusSource, GenerateOptions, Generated};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "placetext", about = "Seeded placeholder text generator")]
struct Cli {
    /// Output as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate N space-separated words.
    Words {
        count: u32,
        #[command(flatten)]
        gen_args: GenArgs,
    },
    /// Generate N sentences.
    Sentences {
        count: u32,
        #[command(flatten)]
        gen_args: GenArgs,
    },
    /// Generate N paragraphs separated by blank lines.
    Paragraphs {
        count: u32,
        #[command(flatten)]
        gen_args: GenArgs,
    },
    /// Generate from a JSON options object, e.g. '{"corpus":"tech","sentences":2}'.
    Generate {
        #[arg(long)]
        options: String,
    },
    /// List built-in corpora.
    Corpora,
}

/// Corpus and sizing flags shared by the generation subcommands.
#[derive(Args)]
struct GenArgs {
    /// Built-in corpus name (classic, tech, startup, concise, musk).
    #[arg(short, long, default_value = "classic")]
    corpus: String,

    /// Custom corpus file, one word per line.
    #[arg(long, conflicts_with = "corpus")]
    corpus_file: Option<PathBuf>,

    /// PRNG seed for deterministic output.
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Minimum words per sentence.
    #[arg(long)]
    min_words: Option<usize>,

    /// Maximum words per sentence.
    #[arg(long)]
    max_words: Option<usize>,

    /// Sentences per paragraph.
    #[arg(long)]
    sentences_per_paragraph: Option<usize>,
}

impl GenArgs {
    fn into_options(self) -> Result<GenerateOptions, CliError> {
        let corpus = match self.corpus_file {
            Some(path) => match CorpusSource::from_file(&path)? {
                CorpusSource::Custom(words) if words.is_empty() => {
                    return Err(CliError::EmptyCorpusFile(path));
                }
                source => source,
            },
            None => CorpusSource::Named(self.corpus),
        };
        Ok(GenerateOptions {
            corpus,
            seed: self.seed,
            min_words_per_sentence: self.min_words,
            max_words_per_sentence: self.max_words,
            sentences_per_paragraph: self.sentences_per_paragraph,
            ..Default::default()
        })
    }
}

/// Maps a subcommand onto library options. `None` for non-generating commands.
fn build_options(command: Command) -> Result<Option<GenerateOptions>, CliError> {
    let options = match command {
        Command::Words { count, gen_args } => GenerateOptions {
            words: Some(i64::from(count)),
            ..gen_args.into_options()?
        },
        Command::Sentences { count, gen_args } => GenerateOptions {
            sentences: Some(i64::from(count)),
            ..gen_args.into_options()?
        },
        Command::Paragraphs { count, gen_args } => GenerateOptions {
            paragraphs: Some(i64::from(count)),
            ..gen_args.into_options()?
        },
        Command::Generate { options } => {
            GenerateOptions::from_json(&options).map_err(|e| CliError::invalid_options(&e))?
        }
        Command::Corpora => return Ok(None),
    };
    Ok(Some(options))
}

fn corpus_label(corpus: &CorpusSource) -> &str {
    match corpus {
        CorpusSource::Named(name) => name,
        CorpusSource::Custom(_) => "custom",
    }
}

/// `--json` listing for the `corpora` command.
fn corpora_json(names: &[&str]) -> Value {
    json!({ "corpora": names })
}

/// `--json` report for a generation command.
fn generated_json(corpus: &CorpusSource, generated: &Generated) -> Value {
    json!({
        "corpus": corpus_label(corpus),
        "seed": generated.seed,
        "text": generated.text,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    let Some(options) = build_options(cli.command)? else {
        let names = BuiltinCorpus::list_names();
        if json {
            println!("{}", serde_json::to_string_pretty(&corpora_json(names))?);
        } else {
            for name in names {
                println!("{name}");
            }
        }
        return Ok(());
    };

    debug!(corpus = corpus_label(&options.corpus), "options resolved");
    let generated = generate(&options)?;

    if json {
        let info = generated_json(&options.corpus, &generated);
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", generated.text);
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!("{}", serde_json::to_string_pretty(&e.to_json()).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
