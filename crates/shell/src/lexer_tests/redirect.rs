// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// =============================================================================
// Stdin
// =============================================================================

#[test]
fn file_redirect_feeds_stdin() {
    let out = tokenize("curl -d @- < body.json").unwrap();
    assert_eq!(out.argv.len(), 3);
    assert_eq!(out.stdin, Some(Stdin::File(Word::literal("body.json"))));
    assert!(out.warnings.is_empty());
}

#[test]
fn here_string_appends_newline() {
    let out = tokenize("curl -d @- <<<'a=b'").unwrap();
    assert_eq!(out.stdin, Some(Stdin::Text(Word::literal("a=b\n"))));
}

#[test]
fn heredoc_body() {
    let out = tokenize("curl -d @- example.com <<EOF\n{\"a\": 1}\nline two\nEOF\n").unwrap();
    assert_eq!(out.argv.len(), 4);
    assert_eq!(
        out.stdin,
        Some(Stdin::Text(Word::literal("{\"a\": 1}\nline two\n")))
    );
    assert!(out.warnings.is_empty());
}

#[test]
fn heredoc_with_quoted_delimiter() {
    let out = tokenize("curl -d @- <<'END'\n$HOME\nEND").unwrap();
    assert_eq!(out.stdin, Some(Stdin::Text(Word::literal("$HOME\n"))));
}

#[test]
fn heredoc_dash_strips_tabs() {
    let out = tokenize("curl -d @- <<-EOF\n\tline\n\tEOF").unwrap();
    assert_eq!(out.stdin, Some(Stdin::Text(Word::literal("line\n"))));
}

#[test]
fn heredoc_followed_by_pipe() {
    let out = tokenize("curl -d @- <<EOF | jq .\nx\nEOF").unwrap();
    assert_eq!(out.stdin, Some(Stdin::Text(Word::literal("x\n"))));
    assert_eq!(codes(&out), [WarningCode::ExtraCommands]);
}

#[yare::parameterized(
    missing_line  = { "curl -d @- <<EOF\nbody" },
    no_body       = { "curl -d @- <<EOF" },
)]
fn unterminated_heredoc(input: &str) {
    assert!(matches!(
        tokenize(input),
        Err(ShellParsingError::UnterminatedHeredoc { ref delimiter, .. }) if delimiter == "EOF"
    ));
}

#[test]
fn second_stdin_redirect_is_ignored() {
    let out = tokenize("curl -d @- < a.txt <<<b").unwrap();
    assert_eq!(out.stdin, Some(Stdin::File(Word::literal("a.txt"))));
    assert_eq!(codes(&out), [WarningCode::MultipleRedirects]);
}

// =============================================================================
// Output
// =============================================================================

#[yare::parameterized(
    plain      = { "curl example.com > out.txt" },
    no_space   = { "curl example.com >out.txt" },
    append     = { "curl example.com >> log" },
    stderr     = { "curl example.com 2>/dev/null" },
    dup        = { "curl example.com 2>&1" },
    both       = { "curl example.com &> /dev/null" },
)]
fn output_redirects_are_ignored(input: &str) {
    let out = tokenize(input).unwrap();
    let argv: Vec<String> = out.argv.iter().map(Word::to_string).collect();
    assert_eq!(argv, ["curl", "example.com"]);
    assert_eq!(out.stdin, None);
    assert_eq!(codes(&out), [WarningCode::OutputRedirect]);
}
