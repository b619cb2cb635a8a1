//! Shell tokenizing through whole commands.

use crate::prelude::*;

#[test]
fn quotes_join_words() {
    curl(r#"curl -d 'a b'"c d" example.com"#).data(0, "a bc d");
}

#[test]
fn expansions_stay_in_one_argument() {
    let out = curl("curl -H \"Authorization: Bearer $TOKEN\" example.com")
        .warns(WarningCode::Expansion);
    let value = out.request(0).headers.value("authorization").unwrap();
    assert!(!value.is_literal());
    assert_eq!(value.to_string(), "Bearer $TOKEN");
}

#[test]
fn single_quotes_suppress_expansion() {
    curl("curl -d '$HOME' example.com").data(0, "$HOME").no_warnings();
}

#[test]
fn line_continuations() {
    curl("curl \\\n  -X PUT \\\n  example.com").method(0, "PUT");
}

#[yare::parameterized(
    single_quote = { "curl 'example.com" },
    double_quote = { "curl \"example.com" },
    substitution = { "curl $(echo example.com" },
)]
fn unterminated_is_fatal(command: &str) {
    assert!(matches!(curl(command).error(), ConvertError::Shell(_)));
}

#[test]
fn must_start_with_curl() {
    assert!(matches!(
        curl("wget example.com").error(),
        ConvertError::Shell(ShellParsingError::NotCurl { .. })
    ));
}

#[test]
fn expansion_in_option_name_is_fatal() {
    assert!(matches!(
        curl("curl --$OPT example.com").error(),
        ConvertError::Argument(ArgumentError::ExpansionInOption { .. })
    ));
}
