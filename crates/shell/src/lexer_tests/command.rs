// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// =============================================================================
// Command name
// =============================================================================

#[yare::parameterized(
    empty        = { "" },
    blank        = { "  \n\t " },
    comment_only = { "# nothing here" },
)]
fn no_arguments(input: &str) {
    assert_eq!(tokenize(input), Err(ShellParsingError::NoArguments));
}

#[test]
fn wrong_command() {
    assert_eq!(
        tokenize("wget example.com"),
        Err(ShellParsingError::NotCurl {
            found: "wget".into(),
            span: Span::new(0, 4),
        })
    );
}

#[test]
fn long_command_name_is_clipped() {
    let name = "a".repeat(40);
    match tokenize(&name).unwrap_err() {
        ShellParsingError::NotCurl { found, .. } => {
            assert_eq!(found, format!("{}...", "a".repeat(27)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[yare::parameterized(
    plain     = { "curl example.com" },
    quoted    = { "' curl' example.com" },
    variable  = { "$curl example.com" },
    indented  = { "\n\n   curl example.com" },
)]
fn accepted_command_names(input: &str) {
    assert_eq!(tokenize(input).unwrap().argv.len(), 2);
}

#[test]
fn other_variable_is_not_curl() {
    assert!(matches!(
        tokenize("$CURL example.com"),
        Err(ShellParsingError::NotCurl { ref found, .. }) if found == "$CURL"
    ));
}

#[test]
fn assignment_before_command() {
    let out = tokenize("TOKEN=abc curl example.com").unwrap();
    assert_eq!(out.argv.len(), 2);
    assert_eq!(codes(&out), [WarningCode::CommandPreamble]);
}

#[test]
fn assignment_after_command_is_an_argument() {
    assert_eq!(args("curl A=b"), ["curl", "A=b"]);
}

// =============================================================================
// Separators
// =============================================================================

#[yare::parameterized(
    semicolon = { "curl a; curl b" },
    and       = { "curl a && echo done" },
    or        = { "curl a || exit 1" },
    pipe      = { "curl a | jq ." },
    newline   = { "curl a\ncurl b" },
    background = { "curl a & wait" },
)]
fn only_first_command_is_used(input: &str) {
    let out = tokenize(input).unwrap();
    let argv: Vec<String> = out.argv.iter().map(Word::to_string).collect();
    assert_eq!(argv, ["curl", "a"]);
    assert_eq!(codes(&out), [WarningCode::ExtraCommands]);
}

#[yare::parameterized(
    trailing_semicolon = { "curl a;" },
    trailing_comment   = { "curl a # fetch it" },
    comment_lines      = { "curl a\n\n# done\n" },
)]
fn nothing_after_command(input: &str) {
    let out = tokenize(input).unwrap();
    assert_eq!(out.argv.len(), 2);
    assert!(out.warnings.is_empty(), "{:?}", out.warnings);
}

#[test]
fn extra_command_warning_points_at_leftover() {
    let out = tokenize("curl a | jq .").unwrap();
    assert_eq!(
        out.warnings.iter().next().unwrap().message,
        "only the first command is converted, ignoring:\ncurl a | jq .\n         ^^^^"
    );
}
