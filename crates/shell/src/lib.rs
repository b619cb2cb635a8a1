// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell tokenizer for pasted `curl` commands.
//!
//! Turns the text of a shell command into the argument vector the shell
//! would hand to `curl`, without running anything.
//!
//! # Quick Start
//!
//! ```ignore
//! use curlconv_shell::tokenize;
//!
//! let out = tokenize("curl -d @- https://example.com <<EOF\n{}\nEOF")?;
//! assert_eq!(out.argv[1], "-d");
//! # Ok::<(), curlconv_shell::ShellParsingError>(())
//! ```
//!
//! # Features
//!
//! - **Quoting**: single, double, ANSI-C (`$'...'`) and backslash escapes
//! - **Expansions**: `$VAR`, `${...}`, `$(...)` and backticks are kept as
//!   opaque [`Token`]s inside a [`Word`] and reported as warnings
//! - **Redirections**: `<`, `<<`, `<<-` and `<<<` become [`Stdin`]; output
//!   redirections are dropped
//! - **Diagnostics**: every [`Warning`] carries a caret excerpt of the input
//!
//! # Words
//!
//! A [`Word`] is a sequence of literal text and expansions. Its string-like
//! methods ([`Word::split_once`], [`Word::starts_with`], ...) only ever look
//! at literal text, so an expansion is never split or matched into.

mod error;
mod lexer;
pub mod span;
mod warning;
mod word;

pub use error::ShellParsingError;
pub use lexer::{tokenize, Lexer, Stdin, Tokenized};
pub use span::{context_snippet, diagnostic_context, locate_span, underline, Span};
pub use warning::{Warning, WarningCode, Warnings};
pub use word::{Known, Token, Word, WordError};
