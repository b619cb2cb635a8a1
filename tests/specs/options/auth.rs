//! Authentication scheme bitmask.

use crate::prelude::*;
use curlconv_core::{resolve, AuthSet};

fn authtype(args: &[&str]) -> Vec<AuthScheme> {
    let argv: Vec<Word> = std::iter::once("curl")
        .chain(args.iter().copied())
        .map(Word::literal)
        .collect();
    let global = resolve(&argv, &Settings::default()).unwrap();
    global.configs[0].authtype.iter().collect()
}

#[test]
fn schemes_accumulate() {
    assert_eq!(
        authtype(&["--digest", "--ntlm", "example.com"]),
        vec![AuthScheme::Basic, AuthScheme::Digest, AuthScheme::Ntlm]
    );
}

#[test]
fn negation_clears_only_its_bit() {
    let argv: Vec<Word> = ["curl", "--digest", "--no-digest", "example.com"]
        .into_iter()
        .map(Word::literal)
        .collect();
    let global = resolve(&argv, &Settings::default()).unwrap();
    assert_eq!(global.configs[0].authtype, AuthSet::BASIC);
}

#[test]
fn anyauth_allows_everything_but_digest_ie() {
    let schemes = authtype(&["--anyauth", "example.com"]);
    assert!(schemes.contains(&AuthScheme::Negotiate));
    assert!(!schemes.contains(&AuthScheme::DigestIe));
}

#[test]
fn user_with_digest() {
    let out = curl("curl --user alice:secret --digest https://example.com");
    let request = out.request(0);
    assert_eq!(request.url.auth, Some((w("alice"), w("secret"))));
    assert_eq!(request.auth_type, Some(AuthScheme::Digest));
    out.json_eq(0, "/auth_type", json!("digest"));
}

#[yare::parameterized(
    basic     = { "curl -u a:b example.com",                   Some(AuthScheme::Basic) },
    ntlm      = { "curl --ntlm -u a:b example.com",            Some(AuthScheme::Ntlm) },
    negotiate = { "curl --negotiate --digest -u : example.com", Some(AuthScheme::Negotiate) },
    none      = { "curl --no-basic -u a:b example.com",        None },
)]
fn picked_scheme(command: &str, scheme: Option<AuthScheme>) {
    assert_eq!(curl(command).request(0).auth_type, scheme);
}
