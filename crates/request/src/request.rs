// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The language-neutral description of one HTTP request.

use crate::data::DataParam;
use crate::form::FormParam;
use crate::headers::{Cookies, Headers};
use crate::query::{QueryDict, QueryList};
use curlconv_core::{AuthScheme, HttpVersion, Opt, OptValue, ParsedUrl, TlsVersion};
use curlconv_shell::{Stdin, Word};
use indexmap::IndexMap;
use serde::Serialize;

fn is_false(value: &bool) -> bool {
    !*value
}

/// One target URL with everything that depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestUrl {
    /// As written on the command line.
    pub original: Word,
    /// `scheme://host/path?query#fragment`, with the final query.
    pub url: Word,
    pub parsed: ParsedUrl,
    /// `url` without the query when the query decoded into `query_list`,
    /// otherwise the same as `url`.
    pub url_without_query_list: Word,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_list: Option<QueryList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_dict: Option<QueryDict>,
    /// The query as built from the URL and `--url-query` parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_array: Option<Vec<DataParam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_reads_file: Option<String>,
    pub method: Word,
    /// `(user, password)` from `--user` or the URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<(Word, Word)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_file: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Word>,
    /// `-O`: save under the remote file name.
    #[serde(skip_serializing_if = "is_false")]
    pub remote_name: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxyType {
    Http1,
    Http2,
    Socks4,
    Socks4a,
    Socks5,
    Socks5Hostname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetrcMode {
    Optional,
    Required,
    /// `--no-netrc`.
    Ignored,
}

/// One request curl would send.
///
/// Header-derived options (`--user-agent`, `--cookie`, `--range`, ...) are
/// already folded into `headers`. Options without a field here are kept
/// as given in `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    pub url: RequestUrl,
    pub headers: Headers,
    #[serde(skip_serializing_if = "Headers::is_empty")]
    pub proxy_headers: Headers,

    /// `None` when every scheme was switched off.
    pub auth_type: Option<AuthScheme>,
    pub proxy_auth_type: Option<AuthScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_sigv4: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2_bearer: Option<Word>,

    /// The `Cookie` header as pairs, when it parses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Cookies>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookie_files: Vec<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_jar: Option<Word>,
    #[serde(skip_serializing_if = "is_false")]
    pub referer_auto: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_array: Option<Vec<DataParam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_reads_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipart: Option<Vec<FormParam>>,
    /// What the shell feeds curl's stdin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<Stdin>,

    #[serde(skip_serializing_if = "is_false")]
    pub insecure: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub compressed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub include: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub follow_redirects: bool,
    /// `--location-trusted`: send credentials to other hosts too.
    #[serde(skip_serializing_if = "is_false")]
    pub follow_redirects_trusted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redirects: Option<Word>,
    /// `--max-time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expect100_timeout: Option<Word>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_version: Option<HttpVersion>,
    #[serde(skip_serializing_if = "is_false")]
    pub http2: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub http3: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_version: Option<TlsVersion>,

    /// `(certificate, password)` from `--cert`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<(Word, Option<Word>)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_type: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cacert: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capath: Option<Word>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<ProxyType>,
    /// `--proxy-user`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_auth: Option<Word>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolve: Vec<Word>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connect_to: Vec<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_socket: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_unix_socket: Option<Word>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub netrc: Option<NetrcMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netrc_file: Option<Word>,

    /// `-Q` commands: `prequote` runs before the transfer, `postquote` after it.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quote: Vec<Word>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prequote: Vec<Word>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub postquote: Vec<Word>,

    #[serde(skip_serializing_if = "is_false")]
    pub verbose: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub silent: bool,

    /// Every other option of the operation, by canonical name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<Opt, OptValue>,
}
