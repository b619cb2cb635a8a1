// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// =============================================================================
// Quotes and escapes
// =============================================================================

#[test]
fn quotes_group_words() {
    assert_eq!(
        args(r#"curl 'a b' "c d" e\ f"#),
        ["curl", "a b", "c d", "e f"]
    );
}

#[test]
fn empty_quotes_are_an_argument() {
    assert_eq!(args("curl '' \"\""), ["curl", "", ""]);
}

#[test]
fn adjacent_quotes_concatenate() {
    assert_eq!(args(r#"curl -H'X: '"y"z"#), ["curl", "-HX: yz"]);
}

#[test]
fn double_quote_escapes() {
    assert_eq!(args(r#"curl "a\"b\\c\$d\x""#), ["curl", r#"a"b\c$d\x"#]);
    assert_eq!(args(r#"curl "it's""#), ["curl", "it's"]);
}

#[test]
fn single_quotes_do_not_expand() {
    let out = tokenize("curl '$HOME' '`id`'").unwrap();
    assert_eq!(out.argv[1], "$HOME");
    assert_eq!(out.argv[2], "`id`");
    assert!(out.warnings.is_empty());
}

#[test]
fn lone_dollar_is_literal() {
    assert_eq!(args(r#"curl a$ "$" $"#), ["curl", "a$", "$", "$"]);
}

#[test]
fn locale_string_is_plain_double_quoted() {
    assert_eq!(args(r#"curl $"hi there""#), ["curl", "hi there"]);
}

#[test]
fn hash_inside_word_is_literal() {
    assert_eq!(args("curl a#b"), ["curl", "a#b"]);
}

#[yare::parameterized(
    newline       = { r"$'a\nb'",    "a\nb" },
    tab           = { r"$'\t'",      "\t" },
    hex           = { r"$'\x41'",    "A" },
    octal         = { r"$'\101'",    "A" },
    high_octal    = { r"$'\351'",    "é" },
    unicode       = { r"$'\u00e9'", "é" },
    big_unicode   = { r"$'\U0001F600'", "😀" },
    quote         = { r"$'it\'s'",   "it's" },
    control       = { r"$'\cA'",     "\u{1}" },
    unknown       = { r"$'\q'",      "\\q" },
    bad_hex       = { r"$'\xzz'",    "\\xzz" },
    bad_unicode   = { r"$'\u'",      "\\u" },
)]
fn ansi_c_escapes(quoted: &str, expected: &str) {
    let out = tokenize(&format!("curl {quoted}")).unwrap();
    assert_eq!(out.argv[1].as_literal(), Some(expected));
}

#[test]
fn ansi_c_control_escape_must_be_ascii() {
    let err = tokenize(r"curl $'\cé'").unwrap_err();
    assert!(matches!(
        err,
        ShellParsingError::InvalidEscape { ref escape, .. } if escape == "\\cé"
    ));
}

// =============================================================================
// Unterminated quotes
// =============================================================================

#[yare::parameterized(
    single = { "curl 'abc",        "single-quoted string" },
    double = { "curl \"abc",       "double-quoted string" },
    escape = { "curl \"abc\\",     "double-quoted string" },
    ansi_c = { "curl $'abc",       "ANSI-C string" },
)]
fn unterminated_quote(input: &str, expected_kind: &str) {
    match tokenize(input).unwrap_err() {
        ShellParsingError::UnterminatedQuote { kind, span } => {
            assert_eq!(kind, expected_kind);
            assert_eq!(span, Span::new(5, input.len()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Line continuations
// =============================================================================

#[test]
fn backslash_newline_joins_lines() {
    assert_eq!(
        args("curl \\\n  -d x \\\r\n  example.com"),
        ["curl", "-d", "x", "example.com"]
    );
    assert_eq!(args("curl ab\\\ncd"), ["curl", "abcd"]);
}

#[test]
fn backslash_space_before_newline_warns() {
    let out = tokenize("curl -d x \\ \n  -H y").unwrap();
    let argv: Vec<String> = out.argv.iter().map(Word::to_string).collect();
    assert_eq!(argv, ["curl", "-d", "x", "-H", "y"]);
    assert_eq!(codes(&out), [WarningCode::UnescapedNewline]);
}

#[test]
fn trailing_backslash_is_dropped() {
    assert_eq!(args("curl x \\"), ["curl", "x"]);
}
