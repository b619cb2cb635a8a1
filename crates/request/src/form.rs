// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `-F`/`--form` parsing.
//!
//! ```text
//! name=value[;type=mime][;filename=name][;headers=header][;encoder=enc]
//! name=@file    upload a file
//! name=<file    read the value from a file
//! name=(;type=multipart/mixed  ...  =)   nested group
//! ```

use curlconv_core::{ArgumentError, FormKind, FormPart};
use curlconv_shell::{Token, WarningCode, Warnings, Word};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormContent {
    Text(Word),
    /// `@file` or `<file`.
    File(Word),
    /// `name=(` ... `=)`.
    Group(Vec<FormParam>),
}

/// One multipart field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormParam {
    pub name: Word,
    pub content: FormContent,
    /// File name sent to the server. Defaults to the path for `@file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Word>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder: Option<Word>,
}

impl FormParam {
    fn new(name: Word, content: FormContent) -> Self {
        Self {
            name,
            content,
            filename: None,
            content_type: None,
            headers: Vec::new(),
            encoder: None,
        }
    }
}

/// Parse every `-F`/`--form-string` part of one operation.
pub fn parse_form(
    parts: &[FormPart],
    warnings: &mut Warnings,
) -> Result<Vec<FormParam>, ArgumentError> {
    // Open groups, innermost last, each with the value that opened it.
    let mut stack: Vec<(FormParam, Word)> = Vec::new();
    let mut top = Vec::new();

    for part in parts {
        let value = &part.value;
        if part.kind == FormKind::Form && *value == "=)" {
            match stack.pop() {
                Some((group, _)) => push(&mut stack, &mut top, group),
                None => {
                    warnings.push(
                        WarningCode::UnknownFormDetail,
                        "closing \"=)\" without an open form group is ignored",
                    );
                }
            }
            continue;
        }

        let Some((name, content)) = value.split_once("=") else {
            return Err(ArgumentError::InvalidForm {
                value: value.to_string(),
            });
        };

        if part.kind == FormKind::String {
            let param = FormParam::new(name, FormContent::Text(content));
            push(&mut stack, &mut top, param);
            continue;
        }

        if let Some(details) = content.strip_prefix("(") {
            let mut group = FormParam::new(name, FormContent::Group(Vec::new()));
            let (_, rest) = read_value(&details, warnings);
            apply_details(&mut group, rest, warnings);
            stack.push((group, value.clone()));
            continue;
        }

        let param = parse_field(name, &content, warnings);
        push(&mut stack, &mut top, param);
    }

    if let Some((_, opened)) = stack.into_iter().next() {
        return Err(ArgumentError::UnterminatedFormGroup {
            value: opened.to_string(),
        });
    }
    tracing::debug!(fields = top.len(), "parsed form");
    Ok(top)
}

fn push(stack: &mut [(FormParam, Word)], top: &mut Vec<FormParam>, param: FormParam) {
    if let Some((group, _)) = stack.last_mut() {
        if let FormContent::Group(children) = &mut group.content {
            children.push(param);
            return;
        }
    }
    top.push(param);
}

fn parse_field(name: Word, content: &Word, warnings: &mut Warnings) -> FormParam {
    let (is_file, sends_name, body) = if let Some(path) = content.strip_prefix("@") {
        (true, true, path)
    } else if let Some(path) = content.strip_prefix("<") {
        (true, false, path)
    } else {
        (false, false, content.clone())
    };

    if !is_file {
        // Text keeps unrecognised `;...` as part of the value.
        let (value, rest) = read_text(&body, warnings);
        let mut param = FormParam::new(name, FormContent::Text(value));
        apply_details(&mut param, rest, warnings);
        return param;
    }

    let (path, rest) = read_value(&body, warnings);
    let mut param = FormParam::new(name, FormContent::File(path.clone()));
    if sends_name {
        param.filename = Some(path);
    }
    apply_details(&mut param, rest, warnings);
    param
}

// =============================================================================
// Scanning
// =============================================================================

/// One character of literal text, or an expansion that is never a
/// delimiter.
#[derive(Debug, Clone, Copy)]
enum Unit<'a> {
    Char(char),
    Expansion(&'a Token),
}

fn units(word: &Word) -> Vec<Unit<'_>> {
    let mut units = Vec::new();
    for token in word.tokens() {
        match token.as_literal() {
            Some(text) => units.extend(text.chars().map(Unit::Char)),
            None => units.push(Unit::Expansion(token)),
        }
    }
    units
}

fn collect(units: &[Unit<'_>]) -> Word {
    let mut word = Word::new();
    for unit in units {
        match unit {
            Unit::Char(c) => word.push_char(*c),
            Unit::Expansion(token) => word.push_token((*token).clone()),
        }
    }
    word
}

fn is_char(unit: &Unit<'_>, c: char) -> bool {
    matches!(unit, Unit::Char(u) if *u == c)
}

/// Read a value up to the next `;`. A value starting with `"` is read up
/// to the closing quote, with `\"` and `\\` escapes. Returns the value and
/// whatever follows the `;` (or `None` at the end).
fn read_value(word: &Word, warnings: &mut Warnings) -> (Word, Option<Word>) {
    let units = units(word);
    let (value, next) = scan_value(&units, word, warnings);
    (value, next.map(|at| collect(&units[at..])))
}

/// Returns the value and the index just after the terminating `;`.
fn scan_value(
    units: &[Unit<'_>],
    word: &Word,
    warnings: &mut Warnings,
) -> (Word, Option<usize>) {
    let Some(first) = units.first() else {
        return (Word::new(), None);
    };
    if !is_char(first, '"') {
        return match units.iter().position(|u| is_char(u, ';')) {
            Some(at) => (collect(&units[..at]), Some(at + 1)),
            None => (collect(units), None),
        };
    }

    let mut value = Word::new();
    let mut i = 1;
    while i < units.len() {
        match units[i] {
            Unit::Char('\\') if matches!(units.get(i + 1), Some(Unit::Char('"' | '\\'))) => {
                if let Some(Unit::Char(c)) = units.get(i + 1) {
                    value.push_char(*c);
                }
                i += 2;
                continue;
            }
            Unit::Char('"') => break,
            Unit::Char(c) => value.push_char(c),
            Unit::Expansion(token) => value.push_token(token.clone()),
        }
        i += 1;
    }

    // Anything between the closing quote and the next `;` is dropped.
    let after = (i + 1).min(units.len());
    let end = units[after..]
        .iter()
        .position(|u| is_char(u, ';'))
        .map(|at| after + at);
    let trailing = &units[after..end.unwrap_or(units.len())];
    if !trailing.is_empty() {
        warnings.push(
            WarningCode::TrailingFormData,
            format!(
                "trailing data after quoted form parameter is ignored: {}",
                collect(trailing)
            ),
        );
        tracing::trace!(field = %word, "dropped trailing form data");
    }
    (value, end.map(|at| at + 1))
}

/// Text content: `;` only ends the value when a known detail follows it.
fn read_text(word: &Word, warnings: &mut Warnings) -> (Word, Option<Word>) {
    let units = units(word);
    if units.first().is_some_and(|u| is_char(u, '"')) {
        return read_value(word, warnings);
    }
    let mut at = 0;
    while let Some(found) = units[at..].iter().position(|u| is_char(u, ';')) {
        let semicolon = at + found;
        let rest = collect(&units[semicolon + 1..]);
        if detail_key(&rest.trim_start()).is_some() {
            return (collect(&units[..semicolon]), Some(rest));
        }
        at = semicolon + 1;
    }
    (word.clone(), None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detail {
    Type,
    Filename,
    Headers,
    Encoder,
}

fn detail_key(rest: &Word) -> Option<(Detail, usize)> {
    [
        ("type=", Detail::Type),
        ("filename=", Detail::Filename),
        ("headers=", Detail::Headers),
        ("encoder=", Detail::Encoder),
    ]
    .into_iter()
    .find(|(prefix, _)| rest.to_lowercase().starts_with(prefix))
    .map(|(prefix, detail)| (detail, prefix.len()))
}

/// Apply `;key=value` details. Unknown ones are skipped with a warning.
fn apply_details(param: &mut FormParam, mut rest: Option<Word>, warnings: &mut Warnings) {
    while let Some(details) = rest.take() {
        let details = details.trim_start();
        if details.is_empty() {
            break;
        }
        let Some((detail, key_len)) = detail_key(&details) else {
            let (skipped, next) = read_value(&details, warnings);
            warnings.push(
                WarningCode::UnknownFormDetail,
                format!("skip unknown form field: {skipped}"),
            );
            rest = next;
            continue;
        };
        let tail = details.slice(key_len..).unwrap_or_default();
        let (value, next) = read_value(&tail, warnings);
        match detail {
            Detail::Type => param.content_type = Some(value),
            Detail::Filename => param.filename = Some(value),
            Detail::Headers => param.headers.push(value),
            Detail::Encoder => param.encoder = Some(value),
        }
        rest = next;
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
