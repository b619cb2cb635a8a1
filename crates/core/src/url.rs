// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! curl's URL splitting.
//!
//! This is deliberately permissive: anything curl would hand to its URL API
//! is accepted and cut into scheme, userinfo, host, path, query and
//! fragment. No host or port validation is done.

use crate::config::OperationConfig;
use crate::options::Opt;
use curlconv_shell::{underline, Span, Token, WarningCode, Warnings, Word};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `scheme:` followed by one or more slashes. curl accepts a digit, `+`,
/// `-` or `.` as the first scheme character, and `http:/host`.
#[allow(clippy::expect_used)]
static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9+.-]*):/+").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static GLOB_ESCAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\[\]{}])").expect("constant regex pattern is valid"));

/// A URL cut into its parts. Joining the parts back gives the URL with
/// glob escapes removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Lowercased scheme, without `://`.
    pub scheme: Word,
    /// The scheme came from `--proto-default` or the `http` default.
    pub scheme_defaulted: bool,
    /// Raw `user[:password]` text before the `@`.
    pub auth: Option<Word>,
    pub user: Option<Word>,
    /// Empty when the userinfo has no `:`.
    pub password: Option<Word>,
    /// Host, including any `:port`.
    pub host: Word,
    /// Starts with `/` unless empty.
    pub path: Word,
    /// Starts with `?` unless empty.
    pub query: Word,
    /// Starts with `#` unless empty.
    pub fragment: Word,
}

impl ParsedUrl {
    /// `scheme://[userinfo@]host` followed by path, query and fragment.
    pub fn to_word(&self) -> Word {
        let mut word = self.scheme.clone() + "://";
        if let Some(auth) = &self.auth {
            word.push_word(auth);
            word.push_str("@");
        }
        word.push_word(&self.host);
        word.push_word(&self.path);
        word.push_word(&self.query);
        word.push_word(&self.fragment);
        word
    }
}

/// The operation options that change how a URL is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlFlags {
    /// `--globoff`: `[]{}` are literal and escapes are kept.
    pub globoff: bool,
    /// `--proto-default`.
    pub default_scheme: Option<Word>,
    /// `--disallow-username-in-url`.
    pub disallow_username_in_url: bool,
}

impl UrlFlags {
    pub fn from_config(config: &OperationConfig) -> Self {
        Self {
            globoff: config.is_on(Opt::Globoff),
            default_scheme: config.text(Opt::ProtoDefault).cloned(),
            disallow_username_in_url: config.is_on(Opt::DisallowUsernameInUrl),
        }
    }
}

/// Split `url` the way curl does, reporting anything lossy in `warnings`.
pub fn parse_url(url: &Word, flags: &UrlFlags, warnings: &mut Warnings) -> ParsedUrl {
    let mut url = url.clone();
    if !flags.globoff {
        scan_globs(&url, warnings);
        url = url.map_literals(|s| GLOB_ESCAPE_PATTERN.replace_all(s, "$1").into_owned());
    }

    let explicit = match url.tokens().first() {
        Some(Token::Literal(text)) => SCHEME_PATTERN
            .captures(text)
            .and_then(|c| Some((c.get(0)?.len(), c.get(1)?.as_str().to_lowercase()))),
        _ => None,
    };
    let (scheme, scheme_defaulted) = match explicit {
        Some((prefix_len, scheme)) => {
            url = url.slice(prefix_len..).unwrap_or_default();
            (Word::literal(scheme), false)
        }
        None => {
            let scheme = flags
                .default_scheme
                .clone()
                .unwrap_or_else(|| Word::literal("http"));
            (scheme, true)
        }
    };
    if scheme != "http" && scheme != "https" {
        warnings.push(
            WarningCode::BadScheme,
            format!("Protocol \"{scheme}\" not supported"),
        );
    }

    let (authority, rest) = match ['/', '?', '#']
        .iter()
        .filter_map(|c| url.find(&c.to_string()))
        .min()
    {
        Some(at) => (
            url.slice(..at).unwrap_or_default(),
            url.slice(at..).unwrap_or_default(),
        ),
        None => (url, Word::new()),
    };
    let (path, query, fragment) = split_path(rest);

    let mut parsed = ParsedUrl {
        scheme,
        scheme_defaulted,
        auth: None,
        user: None,
        password: None,
        host: authority.clone(),
        path,
        query,
        fragment,
    };

    if let Some((auth, host)) = authority.rsplit_once("@") {
        parsed.host = host;
        if flags.disallow_username_in_url {
            warnings.push(
                WarningCode::LoginInUrl,
                "credentials in the URL are dropped because of --disallow-username-in-url",
            );
        } else {
            let (user, password) = auth
                .split_once(":")
                .unwrap_or_else(|| (auth.clone(), Word::new()));
            parsed.auth = Some(auth);
            parsed.user = Some(user);
            parsed.password = Some(password);
        }
    }
    parsed
}

/// Fragment first, then the query from what precedes it, so a `?` after
/// `#` stays in the fragment.
fn split_path(rest: Word) -> (Word, Word, Word) {
    let (before_fragment, fragment) = match rest.find("#") {
        Some(at) => (
            rest.slice(..at).unwrap_or_default(),
            rest.slice(at..).unwrap_or_default(),
        ),
        None => (rest, Word::new()),
    };
    let (path, query) = match before_fragment.find("?") {
        Some(at) => (
            before_fragment.slice(..at).unwrap_or_default(),
            before_fragment.slice(at..).unwrap_or_default(),
        ),
        None => (before_fragment, Word::new()),
    };
    (path, query, fragment)
}

// =============================================================================
// Globbing
// =============================================================================

/// Report `[...]` and `{...}` patterns curl would expand into several
/// URLs. Expansions are opaque, so `${HOME}` is never a glob.
fn scan_globs(url: &Word, warnings: &mut Warnings) {
    let rendered = url.to_string();
    let mut open: Option<(char, usize)> = None;
    let mut offset = 0;

    for token in url.tokens() {
        let Some(text) = token.as_literal() else {
            offset += token.text().len();
            continue;
        };
        let mut escaped = false;
        for (i, c) in text.char_indices() {
            let at = offset + i;
            if escaped {
                escaped = false;
                continue;
            }
            match (c, open) {
                ('\\', _) => escaped = true,
                ('[', None) => open = Some((']', at)),
                ('{', None) => open = Some(('}', at)),
                (close, Some((expected, start))) if close == expected => {
                    open = None;
                    let pattern = &rendered[start..=at];
                    if close == ']' && is_ipv6_literal(pattern) {
                        continue;
                    }
                    warnings.push(
                        WarningCode::GlobInUrl,
                        format!(
                            "URL glob {pattern} is sent as-is, curl would expand it into several URLs\n{}",
                            underline(&rendered, Span::new(start, at + 1))
                        ),
                    );
                }
                _ => {}
            }
        }
        offset += text.len();
    }

    if let Some((expected, start)) = open {
        let opening = if expected == ']' { '[' } else { '{' };
        warnings.push(
            WarningCode::UnterminatedGlob,
            format!(
                "unmatched \"{opening}\" in URL glob\n{}",
                underline(&rendered, Span::new(start, start + 1))
            ),
        );
    }
}

/// `[::1]` and friends: curl does not glob bracketed IPv6 hosts.
fn is_ipv6_literal(pattern: &str) -> bool {
    let inner = &pattern[1..pattern.len() - 1];
    inner.contains(':')
        && inner
            .chars()
            .all(|c| c.is_ascii_hexdigit() || matches!(c, ':' | '.' | '%'))
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
