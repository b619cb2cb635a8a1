//! URL splitting as seen through whole commands.

use crate::prelude::*;
use curlconv_core::{parse_url, UrlFlags};
use curlconv_shell::Warnings;

#[yare::parameterized(
    plain        = { "http://example.com" },
    path         = { "https://example.com/a/b.txt" },
    port         = { "http://localhost:8080/" },
    query        = { "http://example.com/p?a=1&b=2" },
    fragment     = { "http://example.com/p#top" },
    all          = { "https://h/p?q=1#f" },
    query_in_frag = { "http://h/p#f?not-a-query" },
)]
fn glob_free_url_reparses(url: &str) {
    let mut warnings = Warnings::new();
    let flags = UrlFlags::default();
    let first = parse_url(&w(url), &flags, &mut warnings);
    let rebuilt = first.scheme.clone()
        + "://"
        + &first.host
        + &first.path
        + &first.query
        + &first.fragment;
    let second = parse_url(&rebuilt, &flags, &mut warnings);
    assert_eq!(first, second);
    assert!(warnings.is_empty());
}

#[test]
fn fragment_keeps_question_mark() {
    let out = curl("curl 'http://h/p#f?x'");
    let parsed = &out.request(0).url.parsed;
    assert_eq!(parsed.query, "");
    assert_eq!(parsed.fragment, "#f?x");
}

#[test]
fn globs_warn_unless_disabled() {
    curl("curl 'example.com/{a,b}'").warns(WarningCode::GlobInUrl);
    curl("curl -g 'example.com/{a,b}'").no_warnings();
}

#[test]
fn unterminated_glob_warns() {
    curl("curl 'example.com/[1-3'").warns(WarningCode::UnterminatedGlob);
}

#[test]
fn other_scheme_warns() {
    curl("curl ftp://example.com/file").warns(WarningCode::BadScheme);
}

#[test]
fn disallowed_userinfo_is_dropped() {
    let out = curl("curl --disallow-username-in-url http://u:p@example.com")
        .warns(WarningCode::LoginInUrl);
    assert_eq!(out.request(0).url.auth, None);
}

#[test]
fn userinfo_splits_at_last_at() {
    let out = curl("curl 'http://a@b:c@example.com/'");
    assert_eq!(out.request(0).url.auth, Some((w("a@b"), w("c"))));
}

#[test]
fn proto_default() {
    curl("curl --proto-default https example.com").url(0, "https://example.com");
}
