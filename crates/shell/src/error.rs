// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer errors.

use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Fatal errors raised while splitting a command line into words.
///
/// There is no recovery: a misparsed argument would silently produce a
/// different request. Use [`ShellParsingError::context`] to render a caret
/// excerpt of the offending input.
///
/// # Examples
///
/// ```ignore
/// use curlconv_shell::{tokenize, ShellParsingError};
///
/// let err = tokenize("curl 'https://example.com").unwrap_err();
/// assert!(matches!(err, ShellParsingError::UnterminatedQuote { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellParsingError {
    /// The input holds no command at all.
    #[error("no arguments provided")]
    NoArguments,

    /// A quoted string runs to the end of input.
    ///
    /// `kind` names the quoting style ("single-quoted string",
    /// "double-quoted string", "ANSI-C string").
    #[error("unterminated {kind} starting at position {}", span.start)]
    UnterminatedQuote {
        kind: &'static str,
        /// From the opening quote to end of input.
        span: Span,
    },

    /// `${`, `$(` or a backtick with no closing delimiter.
    #[error("unterminated {kind} starting at position {}", span.start)]
    UnterminatedExpansion { kind: &'static str, span: Span },

    /// An escape sequence that cannot be decoded, such as `\cé`.
    #[error("invalid escape sequence {escape:?} at position {}", span.start)]
    InvalidEscape { escape: String, span: Span },

    /// A heredoc whose delimiter line never appears.
    #[error("heredoc is missing its closing {delimiter:?} line")]
    UnterminatedHeredoc { delimiter: String, span: Span },

    /// The first word is not `curl`.
    #[error("command should begin with \"curl\" but instead begins with {found:?}")]
    NotCurl {
        /// The first word, clipped to 30 characters.
        found: String,
        span: Span,
    },
}

impl ShellParsingError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ShellParsingError::NoArguments => None,
            ShellParsingError::UnterminatedQuote { span, .. }
            | ShellParsingError::UnterminatedExpansion { span, .. }
            | ShellParsingError::InvalidEscape { span, .. }
            | ShellParsingError::UnterminatedHeredoc { span, .. }
            | ShellParsingError::NotCurl { span, .. } => Some(*span),
        }
    }

    /// Caret excerpt around the error, or `None` if it has no location.
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }

    /// Rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}

/// Shorten `s` to at most `max` characters, marking the cut with `...`.
pub(crate) fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
