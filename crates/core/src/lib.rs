// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! curlconv-core: curl's command line grammar.
//!
//! Takes the argument vector produced by `curlconv-shell` and resolves it
//! the way curl's own option parser would: long options with unambiguous
//! abbreviations and `--no-` forms, short option clusters, `--next`
//! operations, and authentication bitmasks. Also holds the URL splitter and
//! the [`Settings`] that tune resolution.
//!
//! ```ignore
//! use curlconv_core::{resolve, Opt, Settings};
//! use curlconv_shell::Word;
//!
//! let argv: Vec<Word> = ["curl", "-sX", "POST", "example.com"]
//!     .into_iter()
//!     .map(Word::literal)
//!     .collect();
//! let global = resolve(&argv, &Settings::default())?;
//! assert_eq!(global.configs[0].text(Opt::Request).unwrap(), "POST");
//! # Ok::<(), curlconv_core::ArgumentError>(())
//! ```

pub mod auth;
pub mod config;
pub mod env;
pub mod error;
pub mod handlers;
pub mod index;
pub mod options;
pub mod resolver;
pub mod settings;
pub mod url;
pub mod version;

pub use auth::{AuthScheme, AuthSet};
pub use config::{
    DataKind, DataPart, FormKind, FormPart, GlobalConfig, GlobalFlags, HttpVersion,
    OperationConfig, OptValue, SeenOption, TlsVersion, UrlNode,
};
pub use error::ArgumentError;
pub use index::{table, Lookup, OptionSpec, OptionTable};
pub use options::{to_boolean, Arity, Opt};
pub use resolver::resolve;
pub use settings::{Settings, SettingsError};
pub use url::{parse_url, ParsedUrl, UrlFlags};
pub use version::{CurlVersion, VersionParseError};
