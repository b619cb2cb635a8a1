// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{parse_argv, parse_command, ConvertError, Translation};
use curlconv_core::{HttpVersion, Settings};
use curlconv_shell::Warning;

fn run(args: &[&str]) -> Translation {
    let mut argv = vec!["curl"];
    argv.extend_from_slice(args);
    parse_argv(&argv, &Settings::default()).unwrap()
}

fn one(args: &[&str]) -> Request {
    let mut out = run(args);
    assert_eq!(out.requests.len(), 1, "requests for {args:?}");
    out.requests.remove(0)
}

fn codes(warnings: &[Warning]) -> Vec<WarningCode> {
    warnings.iter().map(|w| w.code).collect()
}

fn header(request: &Request, name: &str) -> Option<String> {
    request.headers.value(name).map(Word::to_string)
}

fn w(s: &str) -> Word {
    Word::literal(s)
}

// =============================================================================
// Method
// =============================================================================

#[yare::parameterized(
    default      = { &["http://x"],                         "GET" },
    data         = { &["-d", "a", "http://x"],              "POST" },
    form         = { &["-F", "a=1", "http://x"],            "POST" },
    get_data     = { &["-G", "-d", "a", "http://x"],        "GET" },
    head         = { &["-I", "http://x"],                   "HEAD" },
    upload       = { &["-T", "f", "http://x"],              "PUT" },
    explicit     = { &["-X", "PATCH", "-d", "a", "http://x"], "PATCH" },
    safari_null  = { &["-X", "null", "http://x"],           "GET" },
    head_beats_put = { &["-I", "-T", "f", "http://x"],      "HEAD" },
)]
fn picks_method(args: &[&str], method: &str) {
    assert_eq!(one(args).url.method, method);
}

#[test]
fn expansion_method_warns() {
    let out = parse_command("curl -X $METHOD http://x", &Settings::default()).unwrap();
    let codes = codes(&out.warnings);
    assert_eq!(codes.first(), Some(&WarningCode::Expansion));
    assert!(codes.contains(&WarningCode::ShellExpansion));
    assert_eq!(out.requests[0].url.method.to_string(), "$METHOD");
}

// =============================================================================
// URL and query
// =============================================================================

#[test]
fn get_moves_data_into_query() {
    let request = one(&["-G", "-d", "a=1", "-d", "b=2", "http://x/p?c=3"]);
    assert_eq!(request.url.url, "http://x/p?c=3&a=1&b=2");
    assert_eq!(request.url.url_without_query_list, "http://x/p");
    assert_eq!(request.url.query_list.as_ref().map(Vec::len), Some(3));
    assert_eq!(request.data, None);
    assert!(!request.headers.has("content-type"));
}

#[test]
fn get_data_replaces_url_query() {
    let request = one(&["--url-query", "q=1", "-G", "-d", "a=1", "http://x"]);
    assert_eq!(request.url.url, "http://x?a=1");
}

#[test]
fn url_query_is_encoded() {
    let request = one(&["--url-query", "a b", "http://x"]);
    assert_eq!(request.url.url, "http://x?a+b");
    assert_eq!(request.url.query_list, None);
    assert_eq!(request.url.url_without_query_list, request.url.url);
}

#[test]
fn raw_url_query_is_kept() {
    let request = one(&["--url-query", "+a b", "http://x"]);
    assert_eq!(request.url.url, "http://x?a b");
}

#[test]
fn url_query_reads_file() {
    let request = one(&["--url-query", "@q.txt", "http://x"]);
    assert_eq!(request.url.query_reads_file.as_deref(), Some("q.txt"));
}

#[test]
fn fragment_survives_query_rebuild() {
    let request = one(&["--url-query", "b=2", "http://x/p?a=1#top"]);
    assert_eq!(request.url.url, "http://x/p?a=1&b=2#top");
    assert_eq!(request.url.url_without_query_list, "http://x/p#top");
}

#[yare::parameterized(
    empty_path  = { "http://x",      "http://x/file.txt" },
    dir_path    = { "http://x/dir/", "http://x/dir/file.txt" },
    named_path  = { "http://x/name", "http://x/name" },
)]
fn upload_file_extends_path(url: &str, expected: &str) {
    let request = one(&["-T", "file.txt", url]);
    assert_eq!(request.url.url, expected);
    assert_eq!(request.url.upload_file, Some(w("file.txt")));
}

#[test]
fn get_with_upload_warns() {
    let out = run(&["-G", "-T", "f", "http://x"]);
    assert!(codes(&out.warnings).contains(&WarningCode::DataIgnored));
}

#[test]
fn userinfo_is_not_in_rendered_url() {
    let request = one(&["http://user:pw@x/p"]);
    assert_eq!(request.url.url, "http://x/p");
    assert_eq!(request.url.auth, Some((w("user"), w("pw"))));
}

// =============================================================================
// Auth
// =============================================================================

#[yare::parameterized(
    user_password = { &["-u", "a:b", "http://x"],             Some(("a", "b")) },
    user_only     = { &["-u", "a", "http://x"],               Some(("a", "")) },
    user_wins     = { &["-u", "a:b", "http://c:d@x"],         Some(("a", "b")) },
    none          = { &["http://x"],                          None },
)]
fn credentials(args: &[&str], expected: Option<(&str, &str)>) {
    let request = one(args);
    assert_eq!(request.url.auth, expected.map(|(u, p)| (w(u), w(p))));
}

#[yare::parameterized(
    default   = { &["http://x"],                                  Some(AuthScheme::Basic) },
    digest    = { &["--digest", "http://x"],                      Some(AuthScheme::Digest) },
    no_basic  = { &["--no-basic", "http://x"],                    None },
    aws       = { &["--aws-sigv4", "aws:amz", "http://x"],        Some(AuthScheme::AwsSigV4) },
    negotiate = { &["--negotiate", "http://x"],                   Some(AuthScheme::Negotiate) },
    bearer    = { &["--oauth2-bearer", "tok", "http://x"],        Some(AuthScheme::Bearer) },
)]
fn auth_types(args: &[&str], expected: Option<AuthScheme>) {
    assert_eq!(one(args).auth_type, expected);
}

#[test]
fn bearer_sets_authorization() {
    let request = one(&["--oauth2-bearer", "tok", "http://x"]);
    assert_eq!(header(&request, "authorization").as_deref(), Some("Bearer tok"));
    assert_eq!(request.oauth2_bearer, Some(w("tok")));
}

#[test]
fn explicit_authorization_wins() {
    let request = one(&["-H", "Authorization: X", "--oauth2-bearer", "tok", "http://x"]);
    assert_eq!(header(&request, "authorization").as_deref(), Some("X"));
}

// =============================================================================
// Headers
// =============================================================================

#[test]
fn derived_headers_are_added() {
    let request = one(&[
        "-A", "agent/1", "-e", "http://ref;auto", "-r", "0-99", "-z", "-Tue, 01 Jan 2030", "http://x",
    ]);
    assert_eq!(header(&request, "user-agent").as_deref(), Some("agent/1"));
    assert_eq!(header(&request, "referer").as_deref(), Some("http://ref"));
    assert!(request.referer_auto);
    assert_eq!(header(&request, "range").as_deref(), Some("bytes=0-99"));
    assert_eq!(
        header(&request, "if-unmodified-since").as_deref(),
        Some("Tue, 01 Jan 2030")
    );
}

#[yare::parameterized(
    plain  = { "2030-01-01",  "If-Modified-Since" },
    plus   = { "+2030-01-01", "If-Modified-Since" },
    equals = { "=2030-01-01", "Last-Modified" },
)]
fn time_condition_headers(cond: &str, name: &str) {
    let request = one(&["-z", cond, "http://x"]);
    assert_eq!(header(&request, name).as_deref(), Some("2030-01-01"));
}

#[test]
fn referer_auto_alone_sets_no_header() {
    let request = one(&["-e", ";auto", "http://x"]);
    assert!(request.referer_auto);
    assert!(!request.headers.has("referer"));
}

#[test]
fn range_gets_dash() {
    let request = one(&["-r", "-500", "http://x"]);
    assert_eq!(header(&request, "range").as_deref(), Some("bytes=-500"));
}

#[test]
fn unset_header_blocks_derived_one() {
    let request = one(&["-H", "User-Agent:", "-A", "agent", "http://x"]);
    assert!(request.headers.is_empty());
}

#[test]
fn data_sets_form_content_type() {
    let request = one(&["-d", "a=1", "http://x"]);
    assert_eq!(
        header(&request, "content-type").as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.data, Some(w("a=1")));
}

#[test]
fn explicit_content_type_is_kept() {
    let request = one(&["-H", "Content-Type: text/plain", "-d", "a", "http://x"]);
    assert_eq!(header(&request, "content-type").as_deref(), Some("text/plain"));
}

#[test]
fn json_sets_both_headers() {
    let request = one(&["--json", "{\"a\":1}", "http://x"]);
    assert_eq!(header(&request, "content-type").as_deref(), Some("application/json"));
    assert_eq!(header(&request, "accept").as_deref(), Some("application/json"));
    assert_eq!(request.data, Some(w("{\"a\":1}")));
    assert_eq!(request.url.method, "POST");
}

#[test]
fn proxy_headers_are_separate() {
    let request = one(&["--proxy-header", "X-P: 1", "http://x"]);
    assert!(request.headers.is_empty());
    assert_eq!(request.proxy_headers.value("x-p"), Some(&w("1")));
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn cookie_strings_and_files() {
    let request = one(&["-b", "a=1", "-b", "jar.txt", "-b", "b=2", "http://x"]);
    assert_eq!(header(&request, "cookie").as_deref(), Some("a=1; b=2"));
    assert_eq!(
        request.cookies,
        Some(vec![(w("a"), w("1")), (w("b"), w("2"))])
    );
    assert_eq!(request.cookie_files, vec![w("jar.txt")]);
}

#[test]
fn cookie_header_wins_over_option() {
    let request = one(&["-H", "Cookie: x=1", "-b", "a=1", "http://x"]);
    assert_eq!(header(&request, "cookie").as_deref(), Some("x=1"));
    assert_eq!(request.cookies, Some(vec![(w("x"), w("1"))]));
}

#[test]
fn cookie_jar_is_carried() {
    let request = one(&["-c", "out.txt", "http://x"]);
    assert_eq!(request.cookie_jar, Some(w("out.txt")));
}

// =============================================================================
// Payload
// =============================================================================

#[test]
fn multipart_fields() {
    let request = one(&["-F", "a=1", "-F", "f=@x.png", "http://x"]);
    assert_eq!(request.multipart.as_ref().map(Vec::len), Some(2));
    assert!(!request.headers.has("content-type"));
}

#[test]
fn invalid_form_is_fatal() {
    let err = parse_argv(&["curl", "-F", "nope", "http://x"], &Settings::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Argument(ArgumentError::InvalidForm { .. })
    ));
}

#[test]
fn heredoc_feeds_data() {
    let out = parse_command(
        "curl -d @- http://x <<EOF\na=1\nEOF",
        &Settings::default(),
    )
    .unwrap();
    let request = &out.requests[0];
    assert_eq!(request.data, Some(w("a=1")));
    assert_eq!(request.data_reads_file, None);
    assert!(request.stdin.is_some());
}

#[test]
fn redirected_stdin_becomes_upload() {
    let out = parse_command("curl -T - http://x/ < body.txt", &Settings::default()).unwrap();
    assert_eq!(out.requests[0].url.upload_file, Some(w("body.txt")));
}

#[test]
fn upload_of_heredoc_warns() {
    let out = parse_command("curl -T - http://x <<<'text'", &Settings::default()).unwrap();
    assert!(codes(&out.warnings).contains(&WarningCode::UploadFileWithStdinContent));
    assert_eq!(out.requests[0].url.upload_file, Some(w("-")));
}

// =============================================================================
// Operations and URLs
// =============================================================================

#[test]
fn one_request_per_url() {
    let out = run(&["-o", "a", "-o", "b", "http://1", "http://2"]);
    let outputs: Vec<_> = out.requests.iter().map(|r| r.url.output.clone()).collect();
    assert_eq!(outputs, vec![Some(w("a")), Some(w("b"))]);
}

#[test]
fn next_starts_fresh_operation() {
    let out = run(&["-H", "A: 1", "http://a", "--next", "-d", "x", "http://b"]);
    assert_eq!(out.requests.len(), 2);
    assert_eq!(out.requests[0].url.method, "GET");
    assert!(out.requests[0].headers.has("a"));
    assert_eq!(out.requests[1].url.method, "POST");
    assert!(!out.requests[1].headers.has("a"));
}

#[test]
fn remote_name_flag() {
    let request = one(&["-O", "http://x/file"]);
    assert!(request.url.remote_name);
    assert_eq!(request.url.output, None);
}

#[test]
fn extra_uploads_warn() {
    let out = run(&["-T", "a", "-T", "b", "http://x"]);
    let warning = out
        .warnings
        .iter()
        .find(|w| w.code == WarningCode::TooManyUploadFiles)
        .unwrap();
    assert_eq!(
        warning.message,
        "Got more --upload-file/-T options than URLs: \"a\", \"b\""
    );
}

#[test]
fn extra_outputs_warn() {
    let out = run(&["-o", "a", "-o", "b", "http://x"]);
    assert!(codes(&out.warnings).contains(&WarningCode::TooManyOutputFiles));
}

#[test]
fn missing_url_is_fatal() {
    let err = parse_argv(&["curl", "-v"], &Settings::default()).unwrap_err();
    assert_eq!(err, ConvertError::Argument(ArgumentError::NoUrl));
}

// =============================================================================
// Transfer options
// =============================================================================

#[yare::parameterized(
    integer     = { "5",     false },
    fraction    = { "1.5",   false },
    leading_dot = { ".5",    false },
    suffix      = { "3s",    false },
    word        = { "soon",  true },
)]
fn max_time_number_check(value: &str, warns: bool) {
    let out = run(&["-m", value, "http://x"]);
    assert_eq!(codes(&out.warnings).contains(&WarningCode::MaxTimeNotNumber), warns);
    assert_eq!(out.requests[0].timeout, Some(w(value)));
}

#[test]
fn connect_timeout_message() {
    let out = run(&["--connect-timeout", "x", "http://x"]);
    let warning = out.warnings.first().unwrap();
    assert_eq!(warning.code, WarningCode::ConnectTimeoutNotNumber);
    assert_eq!(
        warning.message,
        "option --connect-timeout: expected a proper numerical parameter: \"x\""
    );
}

#[yare::parameterized(
    with_password = { "cert.pem:secret", "cert.pem", Some("secret") },
    no_password   = { "cert.pem",        "cert.pem", None },
    empty_pass    = { "cert.pem:",       "cert.pem", None },
    escaped_colon = { "c\\:d:pw",        "c:d",      Some("pw") },
    pkcs11        = { "pkcs11:token=a",  "pkcs11:token=a", None },
)]
fn cert_password(arg: &str, cert: &str, password: Option<&str>) {
    let request = one(&["-E", arg, "http://x"]);
    assert_eq!(request.cert, Some((w(cert), password.map(w))));
}

#[yare::parameterized(
    pem     = { "pem", false },
    p12     = { "P12", false },
    unknown = { "XYZ", true },
)]
fn cert_type_check(cert_type: &str, warns: bool) {
    let out = run(&["--cert-type", cert_type, "http://x"]);
    assert_eq!(codes(&out.warnings).contains(&WarningCode::CertTypeUnknown), warns);
}

#[yare::parameterized(
    http         = { &["-x", "p:1", "http://x"],               Some("p:1"), None },
    http2        = { &["-x", "p:1", "--proxy-http2", "http://x"], Some("p:1"), Some(ProxyType::Http2) },
    http1        = { &["--proxy1.0", "p:1", "http://x"],       Some("p:1"), Some(ProxyType::Http1) },
    socks5       = { &["--socks5", "s:1080", "http://x"],      Some("s:1080"), Some(ProxyType::Socks5) },
    socks5h      = { &["--socks5-hostname", "s", "http://x"],  Some("s"), Some(ProxyType::Socks5Hostname) },
)]
fn proxies(args: &[&str], proxy: Option<&str>, kind: Option<ProxyType>) {
    let request = one(args);
    assert_eq!(request.proxy, proxy.map(w));
    assert_eq!(request.proxy_type, kind);
}

#[yare::parameterized(
    required = { &["-n", "http://x"],                      Some(NetrcMode::Required) },
    file     = { &["--netrc-file", "f", "http://x"],       Some(NetrcMode::Required) },
    optional = { &["--netrc-optional", "http://x"],        Some(NetrcMode::Optional) },
    ignored  = { &["--no-netrc", "http://x"],              Some(NetrcMode::Ignored) },
    unset    = { &["http://x"],                            None },
)]
fn netrc_modes(args: &[&str], mode: Option<NetrcMode>) {
    assert_eq!(one(args).netrc, mode);
}

#[test]
fn http_version_flags() {
    let request = one(&["--http2", "http://x"]);
    assert_eq!(request.http_version, Some(HttpVersion::V2));
    assert!(request.http2);
    assert!(!request.http3);
}

#[test]
fn switches_are_carried() {
    let request = one(&["-k", "-L", "--compressed", "-i", "--max-redirs", " 3 ", "http://x"]);
    assert!(request.insecure);
    assert!(request.follow_redirects);
    assert!(!request.follow_redirects_trusted);
    assert!(request.compressed);
    assert!(request.include);
    assert_eq!(request.max_redirects, Some(w("3")));
}

#[test]
fn global_verbosity() {
    let request = one(&["-sv", "http://x"]);
    assert!(request.verbose);
    assert!(request.silent);
}

#[test]
fn other_options_pass_through() {
    let request = one(&["--retry", "3", "-f", "-H", "A: 1", "http://x"]);
    assert_eq!(request.options.get(&Opt::Retry), Some(&OptValue::Text(w("3"))));
    assert_eq!(request.options.get(&Opt::Fail), Some(&OptValue::Flag(true)));
    assert!(!request.options.contains_key(&Opt::Header));
}

#[test]
fn repeatable_options_keep_every_value() {
    let request = one(&["--resolve", "a:80:1.2.3.4", "--resolve", "b:80:5.6.7.8", "http://x"]);
    assert_eq!(request.resolve.len(), 2);
}

#[test]
fn quote_commands_are_routed_by_prefix() {
    let request = one(&["-Q", "-DELE x", "-Q", "+CWD y", "-Q", "NOOP", "ftp://host/"]);
    assert_eq!(request.quote, vec![w("NOOP")]);
    assert_eq!(request.prequote, vec![w("CWD y")]);
    assert_eq!(request.postquote, vec![w("DELE x")]);
    assert!(!request.options.contains_key(&Opt::Quote));
}
