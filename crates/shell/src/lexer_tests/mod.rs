// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer tests, grouped by shell feature.

use super::*;

mod command;
mod expansion;
mod quoting;
mod redirect;

/// Rendered argv of a command that must tokenize.
fn args(input: &str) -> Vec<String> {
    tokenize(input)
        .unwrap()
        .argv
        .iter()
        .map(Word::to_string)
        .collect()
}

fn codes(out: &Tokenized) -> Vec<WarningCode> {
    out.warnings.iter().map(|w| w.code).collect()
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn single_quotes_preserve_text(s in "[^']{0,30}") {
            let out = tokenize(&format!("curl '{s}'")).unwrap();
            prop_assert_eq!(out.argv[1].as_literal(), Some(s.as_str()));
            prop_assert!(out.warnings.is_empty());
        }

        #[test]
        fn plain_words_split_on_blanks(words in prop::collection::vec("[a-zA-Z0-9._:/=-]{1,8}", 0..6)) {
            let input = format!("curl {}", words.join("  \t"));
            let out = tokenize(&input).unwrap();
            prop_assert_eq!(out.argv.len(), words.len() + 1);
            for (word, expected) in out.argv[1..].iter().zip(&words) {
                prop_assert_eq!(word.to_string(), expected.as_str());
            }
        }

        #[test]
        fn arbitrary_input_never_panics(s in "\\PC{0,40}") {
            let _ = tokenize(&s);
            let _ = tokenize(&format!("curl {s}"));
        }
    }
}
