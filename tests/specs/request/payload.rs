//! Bodies, forms, query strings and headers derived from options.

use crate::prelude::*;

#[test]
fn form_file_with_type() {
    let out = curl("curl -F 'name=@file.txt;type=text/plain' example.com").method(0, "POST");
    let parts = out.request(0).multipart.as_ref().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "name");
    assert_eq!(parts[0].content, FormContent::File(w("file.txt")));
    assert_eq!(parts[0].content_type, Some(w("text/plain")));
}

#[test]
fn form_text_with_unknown_detail_warns() {
    let out = curl("curl -F 'a=<x;bogus=1' example.com").warns(WarningCode::UnknownFormDetail);
    let parts = out.request(0).multipart.as_ref().unwrap();
    assert_eq!(parts[0].content, FormContent::File(w("x")));
}

#[test]
fn trailing_form_data_warns() {
    curl(r#"curl -F 'a="quoted"tail' example.com"#).warns(WarningCode::TrailingFormData);
}

#[test]
fn invalid_form_is_fatal() {
    let out = curl("curl -F novalue example.com");
    assert!(matches!(
        out.error(),
        ConvertError::Argument(ArgumentError::InvalidForm { .. })
    ));
}

#[test]
fn data_parts_are_joined() {
    curl("curl -d a=1 --data-urlencode 'b=x y' --data-raw @c example.com")
        .data(0, "a=1&b=x+y&@c")
        .header(0, "content-type", "application/x-www-form-urlencoded");
}

#[test]
fn data_from_file_is_reported() {
    let out = curl("curl -d @body.txt example.com");
    assert_eq!(out.request(0).data_reads_file.as_deref(), Some("body.txt"));
}

#[test]
fn get_moves_data_to_query() {
    let out = curl("curl -G -d q=rust -d page=2 'example.com/search?lang=en'")
        .method(0, "GET")
        .url(0, "http://example.com/search?lang=en&q=rust&page=2");
    let url = &out.request(0).url;
    assert_eq!(url.url_without_query_list, "http://example.com/search");
    assert_eq!(url.query_list.as_ref().map(Vec::len), Some(3));
}

#[test]
fn json_option_sets_headers() {
    curl(r#"curl --json '{"a":1}' example.com"#)
        .method(0, "POST")
        .data(0, r#"{"a":1}"#)
        .header(0, "content-type", "application/json")
        .header(0, "accept", "application/json");
}

#[test]
fn heredoc_body() {
    curl("curl -d @- example.com <<EOF\n{\"a\": 1}\nEOF")
        .data(0, "{\"a\": 1}")
        .method(0, "POST");
}

#[test]
fn cookies_become_header() {
    let out = curl("curl -b 'a=1' -b 'b=2' example.com").header(0, "cookie", "a=1; b=2");
    assert_eq!(
        out.request(0).cookies,
        Some(vec![(w("a"), w("1")), (w("b"), w("2"))])
    );
}

#[test]
fn repeated_headers_warn() {
    curl("curl -H 'X-A: 1' -H 'X-A: 2' example.com").warns(WarningCode::RepeatedHeader);
}

#[test]
fn derived_headers() {
    curl("curl -A bot -e http://ref -r 0-9 example.com")
        .header(0, "user-agent", "bot")
        .header(0, "referer", "http://ref")
        .header(0, "range", "bytes=0-9");
}
