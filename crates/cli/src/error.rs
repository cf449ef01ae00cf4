//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generation error (unknown corpus, conflicting selectors, bad bounds)
//! - 11: I/O error (reading a corpus file)
//! - 12: input error (bad --options JSON, corpus file without words)
//! - 13: serialization error

use placetext_core::PlacetextError;
use serde_json::{json, Value};
use std::fmt;
use std::path::PathBuf;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// Invalid generation input rejected by the library.
    Generation(PlacetextError),
    /// A corpus file could not be read.
    Io(String),
    /// The `--options` argument was not a valid options object.
    InvalidOptions {
        line: usize,
        column: usize,
        category: &'static str,
        detail: String,
    },
    /// A `--corpus-file` contained only blank lines.
    EmptyCorpusFile(PathBuf),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Wraps a failure to parse the `--options` JSON, keeping its position.
    pub fn invalid_options(e: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match e.classify() {
            Category::Syntax => "malformed JSON",
            Category::Eof => "truncated JSON",
            Category::Data => "unexpected value",
            Category::Io => "unreadable input",
        };
        CliError::InvalidOptions {
            line: e.line(),
            column: e.column(),
            category,
            detail: e.to_string(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => 10,
            CliError::Io(_) => 11,
            CliError::InvalidOptions { .. } | CliError::EmptyCorpusFile(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// The `--json` error report written to stderr.
    ///
    /// Always has `error` and `exit_code`; options errors add the `line`
    /// and `column` of the offending JSON.
    pub fn to_json(&self) -> Value {
        let mut report = json!({
            "error": self.to_string(),
            "exit_code": self.exit_code(),
        });
        if let CliError::InvalidOptions { line, column, .. } = self {
            report["line"] = json!(line);
            report["column"] = json!(column);
        }
        report
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generation(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::InvalidOptions {
                category, detail, ..
            } => write!(f, "invalid --options ({category}): {detail}"),
            CliError::EmptyCorpusFile(path) => {
                write!(f, "corpus file {} has no words", path.display())
            }
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PlacetextError> for CliError {
    fn from(e: PlacetextError) -> Self {
        match e {
            PlacetextError::Io(msg) => CliError::Io(msg),
            other => CliError::Generation(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_error(json: &str) -> CliError {
        let e = placetext_corpora::GenerateOptions::from_json(json).unwrap_err();
        CliError::invalid_options(&e)
    }

    #[test]
    fn generation_errors_exit_with_10() {
        let err = CliError::from(PlacetextError::ConflictingOutputs);
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("only one of"));
    }

    #[test]
    fn corpus_file_read_failure_exits_with_11() {
        let err = CliError::from(PlacetextError::Io("words.txt: not found".into()));
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn malformed_options_keep_position() {
        let err = options_error("{\n  \"words\": 3,\n  oops\n}");
        match &err {
            CliError::InvalidOptions {
                line,
                category,
                column,
                ..
            } => {
                assert_eq!(*line, 3);
                assert!(*column > 0);
                assert_eq!(*category, "malformed JSON");
            }
            other => panic!("expected InvalidOptions, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().starts_with("invalid --options (malformed JSON)"));
    }

    #[test]
    fn truncated_options_are_classified() {
        let err = options_error(r#"{"words": 3"#);
        assert!(err.to_string().contains("truncated JSON"));
    }

    #[test]
    fn wrongly_typed_corpus_is_unexpected_value() {
        let err = options_error(r#"{"corpus": 5}"#);
        assert!(err.to_string().contains("unexpected value"));
    }

    #[test]
    fn empty_corpus_file_names_the_path() {
        let err = CliError::EmptyCorpusFile(PathBuf::from("blank.txt"));
        assert_eq!(err.exit_code(), 12);
        assert_eq!(err.to_string(), "corpus file blank.txt has no words");
    }

    #[test]
    fn output_serialization_failure_exits_with_13() {
        let bad_json = serde_json::from_str::<Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn json_report_has_error_and_exit_code() {
        let report = CliError::from(PlacetextError::UnknownCorpus("pirate".into())).to_json();
        assert_eq!(report["exit_code"], 10);
        assert!(report["error"].as_str().unwrap().contains("pirate"));
        assert!(report.get("line").is_none());
    }

    #[test]
    fn json_report_for_options_includes_position() {
        let report = options_error("{\"words\": }").to_json();
        assert_eq!(report["exit_code"], 12);
        assert_eq!(report["line"], 1);
        assert!(report["column"].as_u64().unwrap() > 0);
    }
}
