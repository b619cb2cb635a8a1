// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn only_token(input: &str) -> Token {
    let out = tokenize(input).unwrap();
    assert_eq!(out.argv[1].tokens().len(), 1, "{:?}", out.argv[1]);
    out.argv[1].tokens()[0].clone()
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn bare_variable() {
    let out = tokenize("curl $URL").unwrap();
    assert_eq!(out.argv[1].tokens(), &[Token::env_var("URL")]);
    assert_eq!(codes(&out), [WarningCode::Expansion]);
    assert_eq!(
        out.warnings.iter().next().unwrap().message,
        "found shell environment variable:\ncurl $URL\n     ^^^^"
    );
}

#[test]
fn variable_inside_double_quotes() {
    let out = tokenize(r#"curl "https://$HOST/path""#).unwrap();
    let word = &out.argv[1];
    assert_eq!(word.to_string(), "https://$HOST/path");
    assert_eq!(word.tokens().len(), 3);
    assert_eq!(word.tokens()[1], Token::env_var("HOST"));
}

#[test]
fn braced_variable() {
    assert_eq!(
        only_token("curl ${HOST}"),
        Token::EnvVar {
            name: "HOST".into(),
            text: "${HOST}".into()
        }
    );
}

#[test]
fn braced_expression_keeps_whole_body() {
    let out = tokenize("curl ${HOST:-localhost}").unwrap();
    assert_eq!(
        out.argv[1].tokens(),
        &[Token::EnvVar {
            name: "HOST:-localhost".into(),
            text: "${HOST:-localhost}".into()
        }]
    );
    let message = &out.warnings.iter().next().unwrap().message;
    assert!(message.starts_with("found expansion expression"));
}

#[yare::parameterized(
    positional = { "curl $1",   "1" },
    status     = { "curl $?",   "?" },
    pid        = { "curl $$",   "$" },
    braced     = { "curl ${@}", "@" },
)]
fn special_variables(input: &str, name: &str) {
    let out = tokenize(input).unwrap();
    match &out.argv[1].tokens()[0] {
        Token::EnvVar { name: found, .. } => assert_eq!(found, name),
        other => panic!("expected variable, got {other:?}"),
    }
    assert_eq!(codes(&out), [WarningCode::SpecialVariableName]);
}

// =============================================================================
// Command substitution
// =============================================================================

#[test]
fn dollar_paren_substitution() {
    assert_eq!(only_token("curl $(cat url.txt)"), Token::command("cat url.txt"));
}

#[test]
fn nested_substitution() {
    assert_eq!(
        only_token("curl $(echo $(date))"),
        Token::command("echo $(date)")
    );
}

#[test]
fn arithmetic_is_a_substitution() {
    assert_eq!(
        only_token("curl $((1+2))"),
        Token::CommandSubstitution {
            command: "(1+2)".into(),
            text: "$((1+2))".into()
        }
    );
}

#[test]
fn quoted_paren_does_not_close() {
    assert_eq!(
        only_token(r#"curl $(echo ")")"#),
        Token::command(r#"echo ")""#)
    );
}

#[test]
fn backtick_substitution() {
    let out = tokenize("curl -H \"Authorization: `cat token`\"").unwrap();
    let word = &out.argv[2];
    assert_eq!(word.to_string(), "Authorization: `cat token`");
    assert_eq!(
        word.tokens()[1],
        Token::CommandSubstitution {
            command: "cat token".into(),
            text: "`cat token`".into()
        }
    );
    assert_eq!(codes(&out), [WarningCode::Expansion]);
}

#[yare::parameterized(
    braced   = { "curl ${A",   "${...} expansion" },
    paren    = { "curl $(ls",  "$(...) substitution" },
    backtick = { "curl `ls",   "backtick substitution" },
)]
fn unterminated_expansion(input: &str, expected_kind: &str) {
    match tokenize(input).unwrap_err() {
        ShellParsingError::UnterminatedExpansion { kind, span } => {
            assert_eq!(kind, expected_kind);
            assert_eq!(span.start, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
