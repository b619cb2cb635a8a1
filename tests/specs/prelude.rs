//! Test helpers for behavioral specifications.
//!
//! Provides a small fluent DSL over `parse_command`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use curlconv_core::{ArgumentError, AuthScheme, Settings};
pub use curlconv_request::{ConvertError, FormContent, Request, Translation};
pub use curlconv_shell::{ShellParsingError, WarningCode, Word};
pub use serde_json::json;

/// Translate `command` with default settings.
pub fn curl(command: &str) -> Outcome {
    curl_with(command, &Settings::default())
}

pub fn curl_with(command: &str, settings: &Settings) -> Outcome {
    Outcome {
        command: command.to_string(),
        result: curlconv_request::parse_command(command, settings),
    }
}

pub fn w(s: &str) -> Word {
    Word::literal(s)
}

/// The result of one translation, with chained assertions.
pub struct Outcome {
    command: String,
    result: Result<Translation, ConvertError>,
}

impl Outcome {
    /// The translation, failing the test on a fatal error.
    pub fn translation(&self) -> &Translation {
        match &self.result {
            Ok(out) => out,
            Err(err) => panic!("{:?} failed: {err}", self.command),
        }
    }

    /// The fatal error, failing the test if translation succeeded.
    pub fn error(&self) -> &ConvertError {
        match &self.result {
            Ok(out) => panic!(
                "{:?} succeeded with {} request(s)",
                self.command,
                out.requests.len()
            ),
            Err(err) => err,
        }
    }

    pub fn request(&self, index: usize) -> &Request {
        let requests = &self.translation().requests;
        requests.get(index).unwrap_or_else(|| {
            panic!(
                "{:?} has {} request(s), wanted #{index}",
                self.command,
                requests.len()
            )
        })
    }

    /// Assert the number of requests.
    pub fn requests(self, count: usize) -> Self {
        assert_eq!(
            self.translation().requests.len(),
            count,
            "request count for {:?}",
            self.command
        );
        self
    }

    pub fn method(self, index: usize, method: &str) -> Self {
        assert_eq!(self.request(index).url.method, method, "{:?}", self.command);
        self
    }

    pub fn url(self, index: usize, url: &str) -> Self {
        assert_eq!(self.request(index).url.url, url, "{:?}", self.command);
        self
    }

    pub fn data(self, index: usize, data: &str) -> Self {
        assert_eq!(
            self.request(index).data.as_ref().map(Word::to_string).as_deref(),
            Some(data),
            "{:?}",
            self.command
        );
        self
    }

    pub fn header(self, index: usize, name: &str, value: &str) -> Self {
        assert_eq!(
            self.request(index).headers.value(name).map(Word::to_string).as_deref(),
            Some(value),
            "header {name} of {:?}",
            self.command
        );
        self
    }

    /// Assert that a warning with `code` was produced.
    pub fn warns(self, code: WarningCode) -> Self {
        let warnings = &self.translation().warnings;
        assert!(
            warnings.iter().any(|w| w.code == code),
            "{:?} did not warn {code:?}: {warnings:?}",
            self.command
        );
        self
    }

    pub fn no_warnings(self) -> Self {
        let warnings = &self.translation().warnings;
        assert!(warnings.is_empty(), "{:?} warned: {warnings:?}", self.command);
        self
    }

    /// Compare a field of request #`index` as JSON (with diff on failure).
    pub fn json_eq(self, index: usize, pointer: &str, expected: serde_json::Value) -> Self {
        let value = serde_json::to_value(self.request(index)).unwrap();
        let actual = value.pointer(pointer).cloned().unwrap_or_default();
        similar_asserts::assert_eq!(actual, expected);
        self
    }
}
