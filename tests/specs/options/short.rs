//! Clustered short options.

use crate::prelude::*;

#[test]
fn inline_value() {
    curl("curl -XPOST -d foo=bar example.com")
        .method(0, "POST")
        .data(0, "foo=bar");
}

#[test]
fn cluster_of_flags() {
    let out = curl("curl -kLi example.com");
    let request = out.request(0);
    assert!(request.insecure);
    assert!(request.follow_redirects);
    assert!(request.include);
}

#[test]
fn value_option_ends_cluster() {
    curl("curl -kdfoo example.com").data(0, "foo");
    curl("curl -kd foo example.com").data(0, "foo");
}

#[test]
fn unknown_letter_is_fatal() {
    let out = curl("curl -kW example.com");
    assert!(matches!(
        out.error(),
        ConvertError::Argument(ArgumentError::UnknownOption { .. })
    ));
}
