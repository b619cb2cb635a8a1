// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bash compatibility tests.
//!
//! Each test hands the same command to bash (with `curl` swapped for a
//! `printf` that dumps its arguments) and to the tokenizer, then compares
//! the resulting argument vectors.

// Allow panic/unwrap/expect in test code (matches lib.rs cfg_attr)
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use curlconv_shell::tokenize;
use std::process::Command;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Arguments bash would pass to curl for `command`.
fn bash_argv(command: &str) -> Vec<String> {
    let rest = command
        .strip_prefix("curl")
        .expect("command must start with curl");
    let script = format!("printf '%s\\0' {rest}");
    let output = Command::new("bash")
        .arg("-c")
        .arg(&script)
        .output()
        .expect("failed to execute bash");
    assert!(output.status.success(), "bash failed on {script:?}");

    let stdout = String::from_utf8(output.stdout).expect("bash output is not UTF-8");
    let mut args: Vec<String> = stdout.split('\0').map(str::to_string).collect();
    // printf terminates every argument, leaving an empty tail
    args.pop();
    args
}

fn tokenizer_argv(command: &str) -> Vec<String> {
    let out = tokenize(command).unwrap();
    out.argv[1..].iter().map(|w| w.to_string()).collect()
}

fn assert_compat(command: &str) {
    assert_eq!(
        tokenizer_argv(command),
        bash_argv(command),
        "argv mismatch for {command:?}"
    );
}

// ---------------------------------------------------------------------------
// Quoting
// ---------------------------------------------------------------------------

#[test]
fn quoted_words() {
    assert_compat(r#"curl 'a b' "c d" e\ f"#);
}

#[test]
fn concatenated_quotes() {
    assert_compat(r#"curl -H'X: '"y"z"#);
}

#[test]
fn empty_arguments() {
    assert_compat(r#"curl '' "" x"#);
}

#[test]
fn double_quote_backslashes() {
    assert_compat(r#"curl "a\"b\\c\$d\x" "it's" 'say "hi"'"#);
}

#[test]
fn ansi_c_strings() {
    assert_compat(r"curl $'a\tb\x41\101' $'it\'s' $'\cA'");
}

#[test]
fn dollar_without_name() {
    assert_compat(r#"curl a$ "$" $"hi there""#);
}

#[test]
fn hash_inside_word() {
    assert_compat("curl a#b 'c#d' # trailing comment");
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn line_continuations() {
    assert_compat("curl \\\n  -X POST \\\n  -d 'a=b' \\\n  example.com");
}

#[test]
fn continuation_inside_word() {
    assert_compat("curl exam\\\nple.com");
}

#[test]
fn tabs_between_words() {
    assert_compat("curl\t-v\t\texample.com");
}
