// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation settings, loadable from TOML.

use crate::env;
use crate::options::Opt;
use crate::version::CurlVersion;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Knobs that change how a command line is resolved.
///
/// ```toml
/// curl_version = "7.54.0"
/// supported_args = ["url", "header", "data", "no-verbose"]
/// warn_removed_options = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Emulate this curl release: options it no longer accepts are errors.
    /// Unset means "any release", so removed spellings only warn.
    pub curl_version: Option<CurlVersion>,

    /// Options the consumer can translate. Anything else warns
    /// `unsupported-option`. Unset disables the check.
    pub supported_args: Option<BTreeSet<String>>,

    /// Warn when a spelling from an older curl release is used.
    pub warn_removed_options: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curl_version: None,
            supported_args: None,
            warn_removed_options: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Settings from the default location with environment overrides
    /// applied. A missing file yields the defaults.
    pub fn discover() -> Result<Self, SettingsError> {
        let mut settings = match env::settings_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };
        if let Some(version) = env::curl_version() {
            settings.curl_version = Some(version);
        }
        Ok(settings)
    }

    pub fn with_curl_version(mut self, version: CurlVersion) -> Self {
        self.curl_version = Some(version);
        self
    }

    pub fn with_supported_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the consumer declared support for `opt`. A negated flag is
    /// also accepted under its `no-` spelling.
    pub fn supports(&self, opt: Opt, negated: bool) -> bool {
        let Some(args) = &self.supported_args else {
            return true;
        };
        args.contains(opt.name()) || (negated && args.contains(&format!("no-{}", opt.name())))
    }

    /// Whether the emulated curl release no longer accepts a spelling that
    /// was dropped in `removed_in`.
    pub fn rejects(&self, removed_in: CurlVersion) -> bool {
        self.curl_version.is_some_and(|v| v >= removed_in)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
