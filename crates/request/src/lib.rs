// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! curlconv-request: from a `curl` command to [`Request`] descriptions.
//!
//! ```ignore
//! use curlconv_core::Settings;
//! use curlconv_request::parse_command;
//!
//! let out = parse_command("curl -d 'a=1' https://example.com", &Settings::default())?;
//! assert_eq!(out.requests[0].url.method, "POST");
//! assert_eq!(out.requests[0].data.as_ref().unwrap(), "a=1");
//! # Ok::<(), curlconv_request::ConvertError>(())
//! ```
//!
//! Translation is a straight pipeline: the shell tokenizer produces the
//! argument vector, the resolver turns it into operations, and the
//! assembler builds one request per URL. Warnings from every stage are
//! returned in that order.

pub mod assemble;
pub mod data;
pub mod error;
pub mod form;
pub mod headers;
pub mod query;
pub mod request;

pub use assemble::build_requests;
pub use data::{build_data, BuiltData, DataParam};
pub use error::ConvertError;
pub use form::{parse_form, FormContent, FormParam};
pub use headers::{parse_cookies, parse_cookies_strict, Cookies, Headers};
pub use query::{parse_query_string, percent_encode, percent_encode_plus, QueryDict, QueryList};
pub use request::{NetrcMode, ProxyType, Request, RequestUrl};

use curlconv_core::{resolve, Settings};
use curlconv_shell::{tokenize, Stdin, Warning, Warnings, Word};
use serde::Serialize;

/// Everything produced for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub requests: Vec<Request>,
    pub warnings: Vec<Warning>,
}

/// Translate the text of a shell command.
pub fn parse_command(input: &str, settings: &Settings) -> Result<Translation, ConvertError> {
    let tokenized = tokenize(input)?;
    translate(
        &tokenized.argv,
        tokenized.stdin.as_ref(),
        tokenized.warnings,
        settings,
    )
}

/// Translate an argument vector that was already split, `curl` first.
pub fn parse_argv(argv: &[&str], settings: &Settings) -> Result<Translation, ConvertError> {
    let argv: Vec<Word> = argv.iter().map(|arg| Word::literal(*arg)).collect();
    translate(&argv, None, Warnings::new(), settings)
}

fn translate(
    argv: &[Word],
    stdin: Option<&Stdin>,
    mut warnings: Warnings,
    settings: &Settings,
) -> Result<Translation, ConvertError> {
    let mut global = resolve(argv, settings)?;
    warnings.extend(std::mem::take(&mut global.warnings));
    let requests = build_requests(&global, stdin, &mut warnings)?;
    tracing::debug!(
        requests = requests.len(),
        warnings = warnings.len(),
        "translated command"
    );
    Ok(Translation {
        requests,
        warnings: warnings.into_vec(),
    })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
