// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request body and query assembly from `--data*`, `--json` and
//! `--url-query` parts.

use crate::query::percent_encode_plus;
use curlconv_core::{DataKind, DataPart};
use curlconv_shell::{Stdin, Word};
use serde::Serialize;

/// A piece of the payload: literal text, or a file curl would read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataParam {
    Text(Word),
    File {
        kind: DataKind,
        /// `name` from `--data-urlencode name@file`.
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<Word>,
        filename: Word,
    },
}

/// The payload as pieces and as one string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltData {
    pub params: Vec<DataParam>,
    /// Everything joined, files rendered as `@file` or `name=@file`.
    pub text: Word,
    /// The first file the payload reads.
    pub reads_file: Option<String>,
}

/// Join data parts the way curl does: `&` between parts except in front
/// of `--json` parts. `@file` values (except `--data-raw`) become file
/// references; `@-` is replaced by heredoc text when the shell supplies it.
pub fn build_data(parts: &[DataPart], stdin: Option<&Stdin>) -> BuiltData {
    let mut params = Vec::new();
    let mut pending = Word::new();

    for (i, part) in parts.iter().enumerate() {
        let kind = part.kind;
        let mut value = part.value.clone();
        let mut name = None;

        if i > 0 && kind != DataKind::Json {
            pending.push_str("&");
        }

        if kind == DataKind::Urlencode {
            match split_urlencoded(&value) {
                Urlencoded::Value { name, value } => {
                    if let Some(name) = name.filter(|n| !n.is_empty()) {
                        pending.push_word(&name);
                        pending.push_str("=");
                    }
                    pending.push_word(&percent_encode_plus(&value));
                    continue;
                }
                Urlencoded::File { name: file_name, file } => {
                    name = file_name.filter(|n| !n.is_empty());
                    value = file.prepend("@");
                }
            }
        }

        let mut filename = None;
        if kind != DataKind::Raw {
            if let Some(file) = value.strip_prefix("@") {
                filename = Some(file);
            }
        }

        if filename.as_ref().is_some_and(|f| *f == "-") {
            match stdin {
                Some(Stdin::Text(text)) => {
                    value = stdin_value(kind, name.as_ref(), text);
                    filename = None;
                }
                Some(Stdin::File(file)) => filename = Some(file.clone()),
                None => {}
            }
        }

        match filename {
            Some(filename) => {
                if !pending.is_empty() {
                    params.push(DataParam::Text(std::mem::take(&mut pending)));
                }
                params.push(DataParam::File {
                    kind,
                    name,
                    filename,
                });
            }
            None => pending.push_word(&value),
        }
    }
    if !pending.is_empty() {
        params.push(DataParam::Text(pending));
    }

    let mut text = Word::new();
    let mut reads_file = None;
    for param in &params {
        match param {
            DataParam::Text(word) => text.push_word(word),
            DataParam::File { name, filename, .. } => {
                reads_file.get_or_insert_with(|| filename.to_string());
                if let Some(name) = name {
                    text.push_word(name);
                    text.push_str("=");
                }
                text.push_str("@");
                text.push_word(filename);
            }
        }
    }

    tracing::debug!(
        parts = parts.len(),
        params = params.len(),
        reads_file = reads_file.as_deref(),
        "built data"
    );
    BuiltData {
        params,
        text,
        reads_file,
    }
}

enum Urlencoded {
    /// `content`, `=content` or `name=content`.
    Value { name: Option<Word>, value: Word },
    /// `@file` or `name@file`.
    File { name: Option<Word>, file: Word },
}

/// curl looks for `=` before `@`.
fn split_urlencoded(value: &Word) -> Urlencoded {
    if let Some((name, value)) = value.split_once("=") {
        return Urlencoded::Value {
            name: Some(name),
            value,
        };
    }
    match value.split_once("@") {
        Some((name, file)) => Urlencoded::File {
            name: Some(name),
            file,
        },
        None => Urlencoded::Value {
            name: None,
            value: value.clone(),
        },
    }
}

/// What `@-` reads when stdin is heredoc text.
fn stdin_value(kind: DataKind, name: Option<&Word>, text: &Word) -> Word {
    match kind {
        DataKind::Binary | DataKind::Json => text.clone(),
        DataKind::Urlencode => {
            let mut value = Word::new();
            if let Some(name) = name {
                value.push_word(name);
                value.push_str("=");
            }
            value.push_word(&percent_encode_plus(text));
            value
        }
        // `-d @file` strips carriage returns and newlines.
        DataKind::Data | DataKind::Raw => text.replace("\n", "").replace("\r", ""),
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
