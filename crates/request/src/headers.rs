// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `-H`/`--proxy-header` handling and cookie strings.

use curlconv_shell::{WarningCode, Warnings, Word};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Headers whose repeated values are joined with `, `.
const COMMA_SEPARATED: &[&str] = &[
    "a-im",
    "accept",
    "accept-charset",
    "accept-encoding",
    "accept-language",
    "access-control-request-headers",
    "cache-control",
    "connection",
    "content-encoding",
    "expect",
    "forwarded",
    "if-match",
    "if-none-match",
    "range",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "via",
    "warning",
];

/// Headers whose repeated values are joined with `; `.
const SEMICOLON_SEPARATED: &[&str] = &["content-type", "cookie", "prefer"];

fn merge_separator(lower_name: &str) -> Option<&'static str> {
    if COMMA_SEPARATED.contains(&lower_name) {
        Some(", ")
    } else if SEMICOLON_SEPARATED.contains(&lower_name) {
        Some("; ")
    } else {
        None
    }
}

/// An ordered header list. A `None` value means "do not send this header"
/// (`-H 'Accept:'`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(Word, Option<Word>)>,
    /// Every header was given in lowercase, so added ones are too.
    lowercase: bool,
}

impl Headers {
    /// Parse `-H` arguments. `option` names the flag in warnings.
    pub fn parse(args: &[Word], option: &str, warnings: &mut Warnings) -> Self {
        let mut parsed = Vec::new();
        for arg in args {
            if arg.starts_with("@") {
                warnings.push(
                    WarningCode::HeaderFile,
                    format!("passing a file for {option} is not supported: {:?}", arg.to_string()),
                );
                continue;
            }
            if let Some((name, value)) = arg.split_once(":") {
                // Only `Host: ` keeps a whitespace-only value.
                let has_value = if name.to_lowercase() == "host" {
                    !value.is_empty()
                } else {
                    !value.trim().is_empty()
                };
                let value = has_value.then(|| value.strip_prefix(" ").unwrap_or(value));
                parsed.push((name, value));
            } else if let Some((name, _)) = arg.split_once(";") {
                parsed.push((name, Some(Word::new())));
            } else {
                warnings.push(
                    WarningCode::IgnoredHeader,
                    format!("{option} argument without ':' or ';' is ignored: {:?}", arg.to_string()),
                );
            }
        }

        let lowercase = !parsed.is_empty()
            && parsed.iter().all(|(name, _)| *name == name.to_lowercase());
        Self {
            entries: merge_repeats(parsed, warnings),
            lowercase,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, Option<&Word>)> {
        self.entries.iter().map(|(name, value)| (name, value.as_ref()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let lookup = name.to_lowercase();
        self.entries
            .iter()
            .position(|(h, _)| h.to_lowercase() == lookup.as_str())
    }

    /// The first matching header: `None` when absent, `Some(None)` when
    /// explicitly unset.
    pub fn get(&self, name: &str) -> Option<Option<&Word>> {
        self.position(name).map(|i| self.entries[i].1.as_ref())
    }

    /// The value of a header that will be sent.
    pub fn value(&self, name: &str) -> Option<&Word> {
        self.get(name).flatten()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn cased(&self, name: &str) -> Word {
        if self.lowercase {
            Word::literal(name.to_lowercase())
        } else {
            Word::literal(name)
        }
    }

    /// Add a header unless one with that name exists (even unset).
    pub fn set_if_missing(&mut self, name: &str, value: impl Into<Word>) -> bool {
        if self.has(name) {
            return false;
        }
        let name = self.cased(name);
        self.entries.push((name, Some(value.into())));
        true
    }

    /// Drop every explicitly unset header.
    pub fn clear_unset(&mut self) {
        self.entries.retain(|(_, value)| value.is_some());
    }
}

/// Serialized as a list of `[name, value]` pairs.
impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

/// Collapse repeated headers, grouped by lowercase name in first-seen
/// order. Values of list headers are merged, other repeats are all kept.
fn merge_repeats(
    parsed: Vec<(Word, Option<Word>)>,
    warnings: &mut Warnings,
) -> Vec<(Word, Option<Word>)> {
    let mut groups: Vec<(String, Vec<(Word, Option<Word>)>)> = Vec::new();
    for (name, value) in parsed {
        let lower = name.to_lowercase().to_string();
        match groups.iter_mut().find(|(key, _)| *key == lower) {
            Some((_, group)) => group.push((name, value)),
            None => groups.push((lower, vec![(name, value)])),
        }
    }

    let mut merged = Vec::new();
    for (lower, mut group) in groups {
        if group.len() == 1 {
            merged.append(&mut group);
            continue;
        }

        let set: Vec<_> = group.iter().filter(|(_, v)| v.is_some()).cloned().collect();
        if set.is_empty() {
            let count = group.len();
            let spellings_differ = group.windows(2).any(|pair| pair[0].0 != pair[1].0);
            if let Some(last) = group.pop() {
                if spellings_differ {
                    warnings.push(
                        WarningCode::RepeatedHeader,
                        format!("\"{}\" header unset {count} times", last.0),
                    );
                }
                merged.push(last);
            }
            continue;
        }
        if set.len() == 1 {
            merged.extend(set);
            continue;
        }

        let last_name = set.last().map(|(name, _)| name.to_string()).unwrap_or_default();
        match merge_separator(&lower) {
            Some(separator) => {
                let values: Vec<Word> = set.iter().filter_map(|(_, v)| v.clone()).collect();
                warnings.push(
                    WarningCode::RepeatedHeader,
                    format!(
                        "merged {} \"{last_name}\" headers together with \"{}\"",
                        set.len(),
                        separator.trim()
                    ),
                );
                let first_name = set[0].0.clone();
                merged.push((first_name, Some(Word::join(&values, separator))));
            }
            None => {
                warnings.push(
                    WarningCode::RepeatedHeader,
                    format!(
                        "found {} \"{last_name}\" headers, only the last one will be sent",
                        set.len()
                    ),
                );
                merged.extend(set);
            }
        }
    }
    merged
}

// =============================================================================
// Cookies
// =============================================================================

/// `name=value` pairs of a cookie string.
pub type Cookies = Vec<(Word, Word)>;

/// Parse a `Cookie` header exactly: `; `-separated `name=value` pairs with
/// unique names. Anything else is `None`.
pub fn parse_cookies_strict(cookie: &Word) -> Option<Cookies> {
    let mut cookies = Cookies::new();
    for piece in cookie.split(";") {
        let piece = piece.strip_prefix(" ").unwrap_or(piece);
        let (name, value) = piece.split_once("=")?;
        cookies.push((name, value));
    }
    unique_names(cookies)
}

/// Parse a `--cookie` string loosely: pieces are trimmed, empty pieces
/// skipped and a missing `=` means an empty value.
pub fn parse_cookies(cookie: &Word) -> Option<Cookies> {
    let mut cookies = Cookies::new();
    for piece in cookie.split(";") {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (name, value) = piece
            .split_once("=")
            .unwrap_or_else(|| (piece.clone(), Word::new()));
        cookies.push((name.trim(), value.trim()));
    }
    unique_names(cookies)
}

fn unique_names(cookies: Cookies) -> Option<Cookies> {
    let mut names: Vec<&Word> = cookies.iter().map(|(name, _)| name).collect();
    names.sort_by_key(|name| name.to_string());
    names.dedup();
    (names.len() == cookies.len()).then_some(cookies)
}

#[cfg(test)]
#[path = "headers_tests.rs"]
mod tests;
