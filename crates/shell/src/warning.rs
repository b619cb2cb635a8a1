// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal diagnostics collected while translating a command.

use serde::Serialize;
use std::fmt;

/// Stable, machine-readable warning codes.
///
/// Serialized in kebab-case (`glob-in-url`, `unknown-form-detail`, ...);
/// these strings are part of the public output and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCode {
    // shell
    Expansion,
    SpecialVariableName,
    CommandPreamble,
    MultipleRedirects,
    OutputRedirect,
    ExtraCommands,
    UnescapedNewline,

    // option resolution
    AmbiguousArgument,
    ShellExpansion,
    RemovedOption,
    UnsupportedOption,
    Range,
    TraceOverride,

    // url
    GlobInUrl,
    UnterminatedGlob,
    BadScheme,
    LoginInUrl,

    // request assembly
    UnknownFormDetail,
    TrailingFormData,
    DataIgnored,
    TooManyUploadFiles,
    TooManyOutputFiles,
    UploadFileWithStdinContent,
    HeaderFile,
    IgnoredHeader,
    RepeatedHeader,
    CertTypeUnknown,
    MaxTimeNotNumber,
    ConnectTimeoutNotNumber,
    Expect100TimeoutNotNumber,
}

impl WarningCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCode::Expansion => "expansion",
            WarningCode::SpecialVariableName => "special-variable-name",
            WarningCode::CommandPreamble => "command-preamble",
            WarningCode::MultipleRedirects => "multiple-redirects",
            WarningCode::OutputRedirect => "output-redirect",
            WarningCode::ExtraCommands => "extra-commands",
            WarningCode::UnescapedNewline => "unescaped-newline",
            WarningCode::AmbiguousArgument => "ambiguous-argument",
            WarningCode::ShellExpansion => "shell-expansion",
            WarningCode::RemovedOption => "removed-option",
            WarningCode::UnsupportedOption => "unsupported-option",
            WarningCode::Range => "range",
            WarningCode::TraceOverride => "trace-override",
            WarningCode::GlobInUrl => "glob-in-url",
            WarningCode::UnterminatedGlob => "unterminated-glob",
            WarningCode::BadScheme => "bad-scheme",
            WarningCode::LoginInUrl => "login-in-url",
            WarningCode::UnknownFormDetail => "unknown-form-detail",
            WarningCode::TrailingFormData => "trailing-form-data",
            WarningCode::DataIgnored => "data-ignored",
            WarningCode::TooManyUploadFiles => "too-many-upload-files",
            WarningCode::TooManyOutputFiles => "too-many-output-files",
            WarningCode::UploadFileWithStdinContent => "upload-file-with-stdin-content",
            WarningCode::HeaderFile => "header-file",
            WarningCode::IgnoredHeader => "ignored-header",
            WarningCode::RepeatedHeader => "repeated-header",
            WarningCode::CertTypeUnknown => "cert-type-unknown",
            WarningCode::MaxTimeNotNumber => "max-time-not-number",
            WarningCode::ConnectTimeoutNotNumber => "connect-timeout-not-number",
            WarningCode::Expect100TimeoutNotNumber => "expect100-timeout-not-number",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(code, message)` pair. Messages may embed a caret excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Ordered warning collector shared by every translation stage.
///
/// Each pushed warning is also emitted as a `tracing` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: WarningCode, message: impl Into<String>) {
        let warning = Warning::new(code, message);
        tracing::warn!(code = %warning.code, message = %warning.message, "translation warning");
        self.0.push(warning);
    }

    /// Append warnings already logged by another collector.
    pub fn extend(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    pub fn has(&self, code: WarningCode) -> bool {
        self.0.iter().any(|w| w.code == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Warnings {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
