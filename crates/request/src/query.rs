// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Percent-encoding and query string decoding.

use curlconv_shell::{Token, Word};
use serde::Serialize;

/// Decoded `key=value` pairs, in order.
pub type QueryList = Vec<(Word, Word)>;

/// Query keys mapped to one value, or several when a key repeats back to
/// back (`a=1&a=2`).
pub type QueryDict = Vec<(Word, QueryValue)>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    One(Word),
    Many(Vec<Word>),
}

/// Bytes left alone by curl's `--data-urlencode` and Python's `quote()`.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn encode_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/// Percent-encode every literal byte outside `A-Za-z0-9-._~`.
pub fn percent_encode(word: &Word) -> Word {
    word.map_literals(encode_str)
}

/// Like [`percent_encode`] but spaces become `+`.
pub fn percent_encode_plus(word: &Word) -> Word {
    word.map_literals(|s| encode_str(s).replace("%20", "+"))
}

/// Form-decode one literal: `+` is a space and `%XX` a byte. `None` when
/// an escape is malformed or the bytes are not UTF-8.
fn decode_str(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hex = s.get(i + 1..i + 3)?;
                if !hex.bytes().all(|h| h.is_ascii_hexdigit()) {
                    return None;
                }
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8(out).ok()
}

/// Form-decode the literal parts of a word; expansions pass through.
pub fn decode(word: &Word) -> Option<Word> {
    let mut decoded = Word::new();
    for token in word.tokens() {
        match token {
            Token::Literal(s) => decoded.push_str(&decode_str(s)?),
            other => decoded.push_token(other.clone()),
        }
    }
    Some(decoded)
}

/// Whether re-encoding `decoded` gives back `original`, allowing `%20`
/// where the original had `+`.
fn round_trips(decoded: &Word, original: &Word) -> bool {
    let encoded = percent_encode(decoded);
    encoded == *original || encoded.replace("%20", "+") == *original
}

/// Decode a query string (without the leading `?`).
///
/// The list is `None` unless every piece has an `=` and decodes to
/// something that encodes back to the same text. The dict is `None` as
/// well when a key repeats with another key in between.
pub fn parse_query_string(query: &Word) -> (Option<QueryList>, Option<QueryDict>) {
    if query.is_empty() {
        return (None, None);
    }

    let mut list = QueryList::new();
    for piece in query.split("&") {
        let Some((key, value)) = piece.split_once("=") else {
            return (None, None);
        };
        let (Some(decoded_key), Some(decoded_value)) = (decode(&key), decode(&value)) else {
            return (None, None);
        };
        if !round_trips(&decoded_key, &key) || !round_trips(&decoded_value, &value) {
            return (None, None);
        }
        list.push((decoded_key, decoded_value));
    }

    let dict = group_keys(&list);
    (Some(list), dict)
}

fn group_keys(list: &QueryList) -> Option<QueryDict> {
    let mut dict: Vec<(Word, Vec<Word>)> = Vec::new();
    for (key, value) in list {
        if dict.last().is_some_and(|(last, _)| last == key) {
            if let Some((_, values)) = dict.last_mut() {
                values.push(value.clone());
            }
        } else if dict.iter().any(|(k, _)| k == key) {
            return None;
        } else {
            dict.push((key.clone(), vec![value.clone()]));
        }
    }
    Some(
        dict.into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    QueryValue::One(values.remove(0))
                } else {
                    QueryValue::Many(values)
                };
                (key, value)
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
