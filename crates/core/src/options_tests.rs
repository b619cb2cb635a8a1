// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn table_sizes() {
    assert_eq!(Opt::LIVE.len(), 258);
    assert_eq!(Opt::RETIRED.len(), 5);
    assert_eq!(Opt::LIVE.iter().filter(|o| o.negatable()).count(), 109);
}

#[test]
fn names_resolve_back_to_options() {
    for &opt in Opt::LIVE.iter().chain(Opt::RETIRED) {
        assert_eq!(Opt::from_name(opt.name()), Some(opt), "{opt:?}");
    }
    assert_eq!(Opt::from_name("no-verbose"), None);
    assert_eq!(Opt::from_name(""), None);
}

#[yare::parameterized(
    url        = { Opt::Url,         Arity::String, false },
    header     = { Opt::Header,      Arity::String, false },
    verbose    = { Opt::Verbose,     Arity::Flag,   true },
    head       = { Opt::Head,        Arity::Flag,   true },
    next       = { Opt::Next,        Arity::Flag,   false },
    http2      = { Opt::Http2,       Arity::Flag,   false },
    buffer     = { Opt::Buffer,      Arity::Flag,   true },
    port       = { Opt::Port,        Arity::String, false },
    env        = { Opt::Environment, Arity::Flag,   false },
)]
fn arity_and_negation(opt: Opt, arity: Arity, negatable: bool) {
    assert_eq!(opt.arity(), arity);
    assert_eq!(opt.negatable(), negatable);
}

#[yare::parameterized(
    plain              = { "verbose",           true },
    negated            = { "no-verbose",        false },
    disable            = { "disable-epsv",      false },
    negated_disable    = { "no-disable-epsv",   true },
    bare_disable       = { "disable",           true },
    abbreviated_neg    = { "no-buf",            false },
)]
fn boolean_from_spelling(spelling: &str, expected: bool) {
    assert_eq!(to_boolean(spelling), expected);
}

#[test]
fn display_and_serialize_use_curl_names() {
    assert_eq!(Opt::Http11.to_string(), "http1.1");
    assert_eq!(Opt::ThirdPartyUrl.to_string(), "3p-url");
    assert_eq!(
        serde_json::to_string(&Opt::DataUrlencode).unwrap(),
        r#""data-urlencode""#
    );
}
