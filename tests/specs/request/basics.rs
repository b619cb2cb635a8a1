//! One request per URL, operations split by `--next`.

use crate::prelude::*;

#[test]
fn post_with_data() {
    let out = curl("curl -XPOST -d foo=bar example.com")
        .requests(1)
        .method(0, "POST")
        .data(0, "foo=bar")
        .no_warnings();
    let url = &out.request(0).url;
    assert_eq!(url.parsed.host, "example.com");
    assert_eq!(url.parsed.scheme, "http");
    assert!(url.parsed.scheme_defaulted);
}

#[test]
fn next_separates_operations() {
    curl("curl example.com --next -X POST example.org")
        .requests(2)
        .method(0, "GET")
        .url(0, "http://example.com")
        .method(1, "POST")
        .url(1, "http://example.org");
}

#[test]
fn operation_options_apply_to_each_url() {
    curl("curl -H 'X: 1' a.com b.com")
        .requests(2)
        .header(0, "x", "1")
        .header(1, "x", "1");
}

#[test]
fn outputs_pair_with_urls_in_order() {
    let out = curl("curl -o one a.com -o two b.com");
    assert_eq!(out.request(0).url.output, Some(w("one")));
    assert_eq!(out.request(1).url.output, Some(w("two")));
}

#[test]
fn command_without_url_is_fatal() {
    let out = curl("curl -v");
    assert_eq!(out.error(), &ConvertError::Argument(ArgumentError::NoUrl));
}

#[test]
fn head_and_upload_methods() {
    curl("curl -I example.com").method(0, "HEAD");
    curl("curl -T file.txt example.com")
        .method(0, "PUT")
        .url(0, "http://example.com/file.txt");
}

#[test]
fn json_output_shape() {
    curl("curl -H 'Accept: */*' -u me:pw https://example.com/api")
        .json_eq(0, "/url/url", json!("https://example.com/api"))
        .json_eq(0, "/url/auth", json!(["me", "pw"]))
        .json_eq(0, "/headers", json!([["Accept", "*/*"]]))
        .json_eq(0, "/auth_type", json!("basic"));
}

#[test]
fn warning_codes_are_kebab_case() {
    let out = curl("curl 'example.com/[1-3]'");
    let json = serde_json::to_value(&out.translation().warnings).unwrap();
    assert_eq!(json[0]["code"], "glob-in-url");
}
