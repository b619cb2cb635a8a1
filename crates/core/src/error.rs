// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal argument errors.

use crate::version::CurlVersion;
use curlconv_shell::{underline, Span, Word};
use thiserror::Error;

/// A command line curl itself would refuse.
///
/// `arg` is always the argument as typed (`--verb`, `-XPOST`), so the
/// message points at what the user wrote rather than the option it
/// resolved to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("option {arg}: is unknown")]
    UnknownOption { arg: String },

    /// A shortened `--prefix` matching several options.
    #[error("option {arg}: is ambiguous")]
    AmbiguousOption { arg: String },

    #[error("option {arg}: requires parameter")]
    MissingParameter { arg: String },

    /// `--no-x` where `x` is not a negatable flag.
    #[error("option {arg}: cannot be negated")]
    NotNegatable { arg: String },

    /// A short letter that meant something else in an older release.
    #[error("option {arg}: {history}")]
    ChangedShortOption { arg: String, history: &'static str },

    /// A spelling the emulated curl release no longer accepts.
    #[error("option {arg}: is unknown, it was removed in curl {version}")]
    RemovedOption { arg: String, version: CurlVersion },

    /// An option name that depends on an expansion.
    #[error("this {kind} could {verb} anything\n{excerpt}", verb = expansion_verb(.kind))]
    ExpansionInOption { kind: &'static str, excerpt: String },

    #[error("no URL specified!")]
    NoUrl,

    #[error("invalid value for --form/-F: {value:?}")]
    InvalidForm { value: String },

    /// A `name=(` multipart group with no closing `=)`.
    #[error("unterminated nested form group in --form/-F: {value:?}")]
    UnterminatedFormGroup { value: String },
}

fn expansion_verb(kind: &str) -> &'static str {
    match kind {
        "command" => "return",
        _ => "be",
    }
}

impl ArgumentError {
    /// The error for an expansion found where an option name was expected.
    /// The excerpt underlines token `index` inside the rendered argument.
    pub fn expansion(arg: &Word, index: usize) -> Self {
        let tokens = arg.tokens();
        let start: usize = tokens[..index.min(tokens.len())]
            .iter()
            .map(|t| t.text().len())
            .sum();
        let (kind, len) = tokens
            .get(index)
            .map(|t| (t.describe(), t.text().len()))
            .unwrap_or(("variable", 0));
        ArgumentError::ExpansionInOption {
            kind,
            excerpt: underline(&arg.to_string(), Span::new(start, start + len)),
        }
    }

    /// The argument the error is about, when there is one.
    pub fn arg(&self) -> Option<&str> {
        match self {
            ArgumentError::UnknownOption { arg }
            | ArgumentError::AmbiguousOption { arg }
            | ArgumentError::MissingParameter { arg }
            | ArgumentError::NotNegatable { arg }
            | ArgumentError::ChangedShortOption { arg, .. }
            | ArgumentError::RemovedOption { arg, .. } => Some(arg),
            ArgumentError::InvalidForm { value } | ArgumentError::UnterminatedFormGroup { value } => {
                Some(value)
            }
            ArgumentError::ExpansionInOption { .. } | ArgumentError::NoUrl => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
