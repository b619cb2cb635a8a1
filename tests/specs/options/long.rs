//! Long options: abbreviations, negation and missing values.

use crate::prelude::*;

#[yare::parameterized(
    verbose   = { "curl --verb example.com" },
    data_raw  = { "curl --data-r x example.com" },
    insecure  = { "curl --insec example.com" },
    header    = { "curl --heade 'A: 1' example.com" },
)]
fn unique_prefix_matches_full_name(command: &str) {
    let full = command
        .replace("--verb ", "--verbose ")
        .replace("--data-r ", "--data-raw ")
        .replace("--insec ", "--insecure ")
        .replace("--heade ", "--header ");
    let short = curl(command);
    let long = curl(&full);
    assert_eq!(short.translation(), long.translation());
}

#[yare::parameterized(
    ver   = { "curl --ver example.com",  "--ver" },
    hea   = { "curl --hea example.com",  "--hea" },
    locat = { "curl --locat example.com", "--locat" },
)]
fn shared_prefix_is_ambiguous(command: &str, arg: &str) {
    let out = curl(command);
    assert_eq!(
        out.error(),
        &ConvertError::Argument(ArgumentError::AmbiguousOption { arg: arg.into() })
    );
}

#[test]
fn exact_name_beats_longer_option() {
    curl("curl --head example.com").method(0, "HEAD");
    let out = curl("curl --location example.com");
    assert!(out.request(0).follow_redirects);
    assert!(!out.request(0).follow_redirects_trusted);
}

#[test]
fn unknown_option_is_fatal() {
    let out = curl("curl --unknown-flag example.com");
    let err = out.error();
    assert_eq!(
        err,
        &ConvertError::Argument(ArgumentError::UnknownOption {
            arg: "--unknown-flag".into()
        })
    );
    assert!(err.to_string().contains("--unknown-flag"));
}

#[test]
fn negation_switches_off() {
    assert!(!curl("curl -k --no-insecure example.com").request(0).insecure);
    assert!(curl("curl --no-insecure -k example.com").request(0).insecure);
}

#[test]
fn string_options_are_not_negatable() {
    let out = curl("curl --no-data x example.com");
    assert!(matches!(
        out.error(),
        ConvertError::Argument(ArgumentError::NotNegatable { .. })
    ));
}

#[test]
fn missing_value_is_fatal() {
    let out = curl("curl example.com -H");
    assert_eq!(
        out.error(),
        &ConvertError::Argument(ArgumentError::MissingParameter { arg: "-H".into() })
    );
}

#[test]
fn last_value_wins_for_single_options() {
    curl("curl -A one -A two example.com").header(0, "user-agent", "two");
}

#[test]
fn repeated_headers_accumulate() {
    curl("curl -H 'A: 1' -H 'B: 2' example.com")
        .header(0, "a", "1")
        .header(0, "b", "2");
}

#[test]
fn removed_option_warns() {
    curl("curl --port 80 example.com").warns(WarningCode::RemovedOption);
}

#[test]
fn double_dash_ends_options() {
    curl("curl -X PUT -- example.com -x")
        .requests(2)
        .method(1, "PUT")
        .url(1, "http://-x");
}
