// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::auth::AuthSet;

fn w(s: &str) -> Word {
    Word::literal(s)
}

fn apply_flag(config: OperationConfig, opt: Opt, on: bool) -> OperationConfig {
    let mut warnings = Warnings::new();
    match handler(opt) {
        Handler::Flag(f) => f(config, opt, on, &mut warnings),
        other => panic!("{opt} is not an operation flag: {other:?}"),
    }
}

fn apply_value(config: OperationConfig, opt: Opt, value: &str) -> (OperationConfig, Warnings) {
    let mut warnings = Warnings::new();
    let config = match handler(opt) {
        Handler::Value(f) => f(config, opt, &w(value), &mut warnings),
        other => panic!("{opt} is not an operation value: {other:?}"),
    };
    (config, warnings)
}

// =============================================================================
// Dispatch
// =============================================================================

fn arity_of(handler: &Handler) -> Arity {
    match handler {
        Handler::Flag(_) | Handler::GlobalFlag(_) | Handler::Next => Arity::Flag,
        Handler::Value(_) | Handler::GlobalValue(_) => Arity::String,
    }
}

#[test]
fn every_option_gets_a_handler_of_its_arity() {
    for &opt in Opt::LIVE.iter().chain(Opt::RETIRED) {
        assert_eq!(arity_of(&handler(opt)), opt.arity(), "{opt}");
    }
}

#[yare::parameterized(
    next     = { Opt::Next,      "next" },
    verbose  = { Opt::Verbose,   "global_flag" },
    trace    = { Opt::Trace,     "global_value" },
    insecure = { Opt::Insecure,  "flag" },
    header   = { Opt::Header,    "value" },
)]
fn dispatch_kind(opt: Opt, kind: &str) {
    let actual = match handler(opt) {
        Handler::Next => "next",
        Handler::GlobalFlag(_) => "global_flag",
        Handler::GlobalValue(_) => "global_value",
        Handler::Flag(_) => "flag",
        Handler::Value(_) => "value",
    };
    assert_eq!(actual, kind);
}

// =============================================================================
// Data
// =============================================================================

#[yare::parameterized(
    data          = { Opt::Data,          "a=b",   DataKind::Data },
    ascii         = { Opt::DataAscii,     "a=b",   DataKind::Data },
    binary_file   = { Opt::DataBinary,    "@f",    DataKind::Binary },
    binary_inline = { Opt::DataBinary,    "x",     DataKind::Data },
    raw           = { Opt::DataRaw,       "@f",    DataKind::Raw },
    urlencode     = { Opt::DataUrlencode, "a b",   DataKind::Urlencode },
    json          = { Opt::Json,          "{}",    DataKind::Json },
)]
fn data_kinds(opt: Opt, value: &str, kind: DataKind) {
    let (config, _) = apply_value(OperationConfig::new(), opt, value);
    assert_eq!(config.data, vec![DataPart::new(kind, w(value))]);
    assert_eq!(config.json, opt == Opt::Json);
}

#[test]
fn data_parts_keep_command_line_order() {
    let (config, _) = apply_value(OperationConfig::new(), Opt::Data, "a=1");
    let (config, _) = apply_value(config, Opt::DataRaw, "b=2");
    let kinds: Vec<DataKind> = config.data.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![DataKind::Data, DataKind::Raw]);
}

#[yare::parameterized(
    encoded = { "+a=%20", DataKind::Raw,       "a=%20" },
    plain   = { "a=b c",  DataKind::Urlencode, "a=b c" },
)]
fn url_query_prefix(value: &str, kind: DataKind, stored: &str) {
    let (config, _) = apply_value(OperationConfig::new(), Opt::UrlQuery, value);
    assert_eq!(config.url_query, vec![DataPart::new(kind, w(stored))]);
    assert!(config.data.is_empty());
}

#[test]
fn form_string_is_literal_kind() {
    let (config, _) = apply_value(OperationConfig::new(), Opt::Form, "a=@f");
    let (config, _) = apply_value(config, Opt::FormString, "b=@g");
    assert_eq!(config.form[0].kind, FormKind::Form);
    assert_eq!(config.form[1].kind, FormKind::String);
}

// =============================================================================
// Authentication
// =============================================================================

#[test]
fn auth_schemes_accumulate() {
    let config = apply_flag(OperationConfig::new(), Opt::Digest, true);
    let config = apply_flag(config, Opt::Ntlm, true);
    let mut expected = AuthSet::BASIC;
    expected.insert(AuthScheme::Digest);
    expected.insert(AuthScheme::Ntlm);
    assert_eq!(config.authtype, expected);
    assert_eq!(config.proxyauthtype, AuthSet::BASIC);
}

#[test]
fn negated_scheme_is_removed() {
    let config = apply_flag(OperationConfig::new(), Opt::Digest, true);
    let config = apply_flag(config, Opt::Digest, false);
    assert_eq!(config.authtype, AuthSet::BASIC);
    assert_eq!(config.flag(Opt::Digest), Some(false));
}

#[test]
fn no_basic_clears_default() {
    let config = apply_flag(OperationConfig::new(), Opt::Basic, false);
    assert!(config.authtype.is_empty());
}

#[test]
fn proxy_schemes_touch_proxy_set_only() {
    let config = apply_flag(OperationConfig::new(), Opt::ProxyNtlm, true);
    assert!(config.proxyauthtype.contains(AuthScheme::Ntlm));
    assert!(!config.authtype.contains(AuthScheme::Ntlm));
}

#[test]
fn anyauth_widens_and_negation_is_noop() {
    let config = apply_flag(OperationConfig::new(), Opt::Anyauth, true);
    assert_eq!(config.authtype, AuthSet::ANY);
    let config = apply_flag(OperationConfig::new(), Opt::Anyauth, false);
    assert_eq!(config.authtype, AuthSet::BASIC);
    let config = apply_flag(OperationConfig::new(), Opt::ProxyAnyauth, true);
    assert_eq!(config.proxyauthtype, AuthSet::ANY);
    assert_eq!(config.authtype, AuthSet::BASIC);
}

#[yare::parameterized(
    sigv4  = { Opt::AwsSigv4,     AuthScheme::AwsSigV4 },
    bearer = { Opt::Oauth2Bearer, AuthScheme::Bearer },
)]
fn token_options_enable_scheme_and_keep_value(opt: Opt, scheme: AuthScheme) {
    let (config, _) = apply_value(OperationConfig::new(), opt, "token");
    assert!(config.authtype.contains(scheme));
    assert!(config.authtype.contains(AuthScheme::Basic));
    assert_eq!(config.text(opt), Some(&w("token")));
}

// =============================================================================
// Protocol switches
// =============================================================================

#[test]
fn location_trusted_implies_location() {
    let config = apply_flag(OperationConfig::new(), Opt::LocationTrusted, true);
    assert!(config.is_on(Opt::Location));
    assert!(config.is_on(Opt::LocationTrusted));
}

#[yare::parameterized(
    http10 = { Opt::Http10,              HttpVersion::V1_0 },
    http2  = { Opt::Http2,               HttpVersion::V2 },
    prior  = { Opt::Http2PriorKnowledge, HttpVersion::V2PriorKnowledge },
    http3  = { Opt::Http3Only,           HttpVersion::V3Only },
)]
fn http_versions(opt: Opt, version: HttpVersion) {
    let config = apply_flag(OperationConfig::new(), opt, true);
    assert_eq!(config.http_version, Some(version));
}

#[test]
fn negated_version_switch_still_selects_its_version() {
    let config = apply_flag(OperationConfig::new(), Opt::Http11, true);
    let config = apply_flag(config, Opt::Http2, false);
    assert_eq!(config.http_version, Some(HttpVersion::V2));

    let config = apply_flag(OperationConfig::new(), Opt::Tlsv12, true);
    let config = apply_flag(config, Opt::Tlsv13, false);
    assert_eq!(config.tls_version, Some(TlsVersion::V1_3));
}

#[test]
fn quote_prefixes_pick_the_list() {
    let (config, _) = apply_value(OperationConfig::new(), Opt::Quote, "-DELE f");
    let (config, _) = apply_value(config, Opt::Quote, "+PWD");
    let (config, _) = apply_value(config, Opt::Quote, "NOOP");
    assert_eq!(config.postquote, vec![w("DELE f")]);
    assert_eq!(config.prequote, vec![w("PWD")]);
    assert_eq!(config.quote, vec![w("NOOP")]);
}

#[yare::parameterized(
    no_dash    = { "500",     "500-",    true },
    with_dash  = { "0-499",   "0-499",   false },
    suffix     = { "-500",    "-500",    false },
    multi      = { "0-1,5-6", "0-1,5-6", false },
)]
fn range_gets_dash(value: &str, stored: &str, warned: bool) {
    let (config, warnings) = apply_value(OperationConfig::new(), Opt::Range, value);
    assert_eq!(config.text(Opt::Range), Some(&w(stored)));
    assert_eq!(warnings.has(WarningCode::Range), warned);
}

// =============================================================================
// URL nodes
// =============================================================================

#[test]
fn url_output_and_upload_fill_nodes() {
    let (config, _) = apply_value(OperationConfig::new(), Opt::Url, "example.com");
    let (config, _) = apply_value(config, Opt::Output, "out.html");
    let (config, _) = apply_value(config, Opt::UploadFile, "in.txt");
    assert_eq!(config.urls.len(), 1);
    let node = &config.urls[0];
    assert_eq!(node.url, Some(w("example.com")));
    assert_eq!(node.output, Some(w("out.html")));
    assert_eq!(node.upload, Some(w("in.txt")));
}

#[test]
fn remote_name_all_sets_default() {
    let config = apply_flag(OperationConfig::new(), Opt::RemoteNameAll, true);
    let (config, _) = apply_value(config, Opt::Url, "u");
    assert!(config.urls[0].use_remote);
}

// =============================================================================
// Globals
// =============================================================================

fn global_value(flags: &mut GlobalFlags, opt: Opt, value: &str, warnings: &mut Warnings) {
    match handler(opt) {
        Handler::GlobalValue(f) => f(flags, opt, &w(value), warnings),
        other => panic!("{opt} is not a global value: {other:?}"),
    }
}

fn global_flag(flags: &mut GlobalFlags, opt: Opt, on: bool, warnings: &mut Warnings) {
    match handler(opt) {
        Handler::GlobalFlag(f) => f(flags, opt, on, warnings),
        other => panic!("{opt} is not a global flag: {other:?}"),
    }
}

#[test]
fn trace_after_verbose_overrides() {
    let mut flags = GlobalFlags::default();
    let mut warnings = Warnings::new();
    global_flag(&mut flags, Opt::Verbose, true, &mut warnings);
    assert!(warnings.is_empty());
    global_value(&mut flags, Opt::Trace, "log", &mut warnings);
    assert!(warnings.has(WarningCode::TraceOverride));
    assert_eq!(flags.trace, Some(w("log")));
    assert_eq!(flags.verbose, Some(false));
}

#[test]
fn verbose_after_trace_ascii_overrides() {
    let mut flags = GlobalFlags::default();
    let mut warnings = Warnings::new();
    global_value(&mut flags, Opt::TraceAscii, "log", &mut warnings);
    global_flag(&mut flags, Opt::Verbose, true, &mut warnings);
    assert_eq!(warnings.len(), 1);
    assert_eq!(flags.trace_ascii, None);
    assert_eq!(flags.verbose, Some(true));
}

#[test]
fn repeated_trace_does_not_warn() {
    let mut flags = GlobalFlags::default();
    let mut warnings = Warnings::new();
    global_value(&mut flags, Opt::Trace, "a", &mut warnings);
    global_value(&mut flags, Opt::Trace, "b", &mut warnings);
    assert!(warnings.is_empty());
    assert_eq!(flags.trace, Some(w("b")));
}

#[test]
fn trace_ascii_replaces_trace() {
    let mut flags = GlobalFlags::default();
    let mut warnings = Warnings::new();
    global_value(&mut flags, Opt::Trace, "a", &mut warnings);
    global_value(&mut flags, Opt::TraceAscii, "b", &mut warnings);
    global_value(&mut flags, Opt::TraceAscii, "c", &mut warnings);
    assert_eq!(warnings.len(), 1);
    assert_eq!(flags.trace, None);
    assert_eq!(flags.trace_ascii, Some(w("c")));
}

#[test]
fn silent_is_global() {
    let mut flags = GlobalFlags::default();
    let mut warnings = Warnings::new();
    global_flag(&mut flags, Opt::Silent, true, &mut warnings);
    assert_eq!(flags.silent, Some(true));
}
