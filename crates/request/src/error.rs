// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level translation errors.

use curlconv_core::ArgumentError;
use curlconv_shell::ShellParsingError;
use thiserror::Error;

/// Why a command could not be translated at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The text is not a shell command we can split into words.
    #[error(transparent)]
    Shell(#[from] ShellParsingError),

    /// curl itself would reject the arguments.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl ConvertError {
    /// A caret excerpt of `input` pointing at the problem, when the error
    /// knows where it is.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        match self {
            ConvertError::Shell(err) => err.diagnostic(input),
            ConvertError::Argument(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
