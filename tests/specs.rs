//! Behavioral specifications for curlconv.
//!
//! These tests are black-box: they translate whole `curl` commands through
//! the public entry points and check the requests, warnings and errors
//! that come out.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// options/
#[path = "specs/options/long.rs"]
mod options_long;
#[path = "specs/options/short.rs"]
mod options_short;
#[path = "specs/options/auth.rs"]
mod options_auth;

// request/
#[path = "specs/request/basics.rs"]
mod request_basics;
#[path = "specs/request/payload.rs"]
mod request_payload;
#[path = "specs/request/url.rs"]
mod request_url;

// shell/
#[path = "specs/shell.rs"]
mod shell;
