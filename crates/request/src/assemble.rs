// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved configs in, [`Request`]s out.
//!
//! Every operation yields one request per URL. Everything that does not
//! depend on the URL (headers, body, TLS and proxy settings) is built
//! once per operation and shared by its requests.

use crate::data::{build_data, BuiltData};
use crate::form::parse_form;
use crate::headers::{parse_cookies, parse_cookies_strict, Cookies, Headers};
use crate::query::parse_query_string;
use crate::request::{NetrcMode, ProxyType, Request, RequestUrl};
use curlconv_core::{
    parse_url, ArgumentError, AuthScheme, DataKind, DataPart, GlobalConfig, OperationConfig, Opt,
    OptValue, ParsedUrl, UrlFlags, UrlNode,
};
use curlconv_shell::{Known, Stdin, WarningCode, Warnings, Word};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// What JavaScript's `parseFloat` would accept as a number prefix.
#[allow(clippy::expect_used)]
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+\.?\d*|\.\d+|Infinity)")
        .expect("constant regex pattern is valid")
});

/// Build every request of a resolved command line.
pub fn build_requests(
    global: &GlobalConfig,
    stdin: Option<&Stdin>,
    warnings: &mut Warnings,
) -> Result<Vec<Request>, ArgumentError> {
    let mut requests = Vec::new();
    for (index, config) in global.configs.iter().enumerate() {
        let built = Operation::new(global, config, stdin).build(warnings)?;
        tracing::debug!(operation = index, requests = built.len(), "assembled operation");
        requests.extend(built);
    }
    Ok(requests)
}

struct Operation<'a> {
    global: &'a GlobalConfig,
    config: &'a OperationConfig,
    stdin: Option<&'a Stdin>,
}

impl<'a> Operation<'a> {
    fn new(
        global: &'a GlobalConfig,
        config: &'a OperationConfig,
        stdin: Option<&'a Stdin>,
    ) -> Self {
        Self {
            global,
            config,
            stdin,
        }
    }

    fn build(&self, warnings: &mut Warnings) -> Result<Vec<Request>, ArgumentError> {
        let config = self.config;
        let nodes: Vec<&UrlNode> = config.urls.iter().filter(|n| n.url.is_some()).collect();
        if nodes.is_empty() {
            return Err(ArgumentError::NoUrl);
        }

        let mut headers = Headers::parse(config.list(Opt::Header), "--header/-H", warnings);
        let proxy_headers =
            Headers::parse(config.list(Opt::ProxyHeader), "--proxy-header", warnings);
        let (cookies, cookie_files) = cookies(config, &mut headers);
        let referer_auto = derived_headers(config, &mut headers);

        // `--get` turns the body into the query, replacing `--url-query`.
        let get = config.is_on(Opt::Get);
        let (body_parts, query_parts): (&[DataPart], &[DataPart]) =
            if get && !config.data.is_empty() {
                (&[][..], config.data.as_slice())
            } else {
                (config.data.as_slice(), config.url_query.as_slice())
            };
        let body = (!body_parts.is_empty()).then(|| build_data(body_parts, self.stdin));

        let flags = UrlFlags::from_config(config);
        let mut urls = Vec::with_capacity(nodes.len());
        for node in nodes {
            urls.push(self.build_url(node, &flags, query_parts, warnings));
        }
        self.warn_unmatched_files(warnings);

        let mut multipart = None;
        if config.json {
            headers.set_if_missing("Content-Type", "application/json");
            headers.set_if_missing("Accept", "application/json");
        } else if body.is_some() {
            headers.set_if_missing("Content-Type", "application/x-www-form-urlencoded");
        }
        if !config.form.is_empty() {
            multipart = Some(parse_form(&config.form, warnings)?);
        }

        let mut auth_type = config.authtype.pick();
        let aws_sigv4 = config.text(Opt::AwsSigv4).cloned();
        if aws_sigv4.is_some() {
            auth_type = Some(AuthScheme::AwsSigV4);
        }
        let mut oauth2_bearer = None;
        if auth_type == Some(AuthScheme::Bearer) {
            if let Some(token) = config.text(Opt::Oauth2Bearer) {
                headers.set_if_missing("Authorization", token.prepend("Bearer "));
                oauth2_bearer = Some(token.clone());
            }
        }
        if config.is_on(Opt::Negotiate) {
            auth_type = Some(AuthScheme::Negotiate);
        }
        headers.clear_unset();

        let (proxy, proxy_type) = proxy(config);
        let http_version = config.http_version;
        let mut urls = urls.into_iter();
        let Some(first_url) = urls.next() else {
            return Err(ArgumentError::NoUrl);
        };
        let first = Request {
            url: first_url,
            headers,
            proxy_headers,
            auth_type,
            proxy_auth_type: config.proxyauthtype.pick(),
            aws_sigv4,
            oauth2_bearer,
            cookies,
            cookie_files,
            cookie_jar: config.text(Opt::CookieJar).cloned(),
            referer_auto,
            data: body.as_ref().map(|b| b.text.clone()),
            data_array: body.as_ref().map(|b| b.params.clone()),
            data_reads_file: body.and_then(|b| b.reads_file),
            multipart,
            stdin: self.stdin.cloned(),
            insecure: config.is_on(Opt::Insecure),
            compressed: config.is_on(Opt::Compressed),
            include: config.is_on(Opt::Include),
            follow_redirects: config.is_on(Opt::Location),
            follow_redirects_trusted: config.is_on(Opt::LocationTrusted),
            max_redirects: config.text(Opt::MaxRedirs).map(Word::trim),
            timeout: numeric(config, Opt::MaxTime, WarningCode::MaxTimeNotNumber, warnings),
            connect_timeout: numeric(
                config,
                Opt::ConnectTimeout,
                WarningCode::ConnectTimeoutNotNumber,
                warnings,
            ),
            expect100_timeout: numeric(
                config,
                Opt::Expect100Timeout,
                WarningCode::Expect100TimeoutNotNumber,
                warnings,
            ),
            http_version,
            http2: http_version.is_some_and(|v| v.is_http2()),
            http3: http_version.is_some_and(|v| v.is_http3()),
            tls_version: config.tls_version,
            cert: config.text(Opt::Cert).map(split_cert),
            cert_type: cert_type(config, warnings),
            key: config.text(Opt::Key).cloned(),
            cacert: config.text(Opt::Cacert).cloned(),
            capath: config.text(Opt::Capath).cloned(),
            proxy,
            proxy_type,
            proxy_auth: config.text(Opt::ProxyUser).cloned(),
            resolve: config.list(Opt::Resolve).to_vec(),
            connect_to: config.list(Opt::ConnectTo).to_vec(),
            unix_socket: config.text(Opt::UnixSocket).cloned(),
            abstract_unix_socket: config.text(Opt::AbstractUnixSocket).cloned(),
            netrc: netrc(config),
            netrc_file: config.text(Opt::NetrcFile).cloned(),
            quote: config.quote.clone(),
            prequote: config.prequote.clone(),
            postquote: config.postquote.clone(),
            verbose: self.global.flags.verbose == Some(true),
            silent: self.global.flags.silent == Some(true),
            options: passthrough(config),
        };

        let rest: Vec<Request> = urls
            .map(|url| Request {
                url,
                ..first.clone()
            })
            .collect();
        let requests: Vec<Request> = std::iter::once(first).chain(rest).collect();
        for request in &requests {
            tracing::debug!(
                url = %request.url.url,
                method = %request.url.method,
                "assembled request"
            );
        }
        Ok(requests)
    }

    fn warn_unmatched_files(&self, warnings: &mut Warnings) {
        let config = self.config;
        let url_count = config.url_count();
        let quoted = |files: Vec<&Word>| {
            files
                .iter()
                .map(|f| format!("{:?}", f.to_string()))
                .collect::<Vec<_>>()
                .join(", ")
        };

        if config.upload_count() > url_count {
            let files = config.urls.iter().filter_map(|n| n.upload.as_ref()).collect();
            warnings.push(
                WarningCode::TooManyUploadFiles,
                format!("Got more --upload-file/-T options than URLs: {}", quoted(files)),
            );
        }
        if config.output_count() > url_count {
            let files = config.urls.iter().filter_map(|n| n.output.as_ref()).collect();
            warnings.push(
                WarningCode::TooManyOutputFiles,
                format!("Got more --output/-o options than URLs: {}", quoted(files)),
            );
        }
    }

    // -----------------------------------------------------------------------
    // Per URL
    // -----------------------------------------------------------------------

    fn build_url(
        &self,
        node: &UrlNode,
        flags: &UrlFlags,
        query_parts: &[DataPart],
        warnings: &mut Warnings,
    ) -> RequestUrl {
        let config = self.config;
        let original = node.url.clone().unwrap_or_default();
        let mut parsed = parse_url(&original, flags, warnings);

        if let Some(upload) = &node.upload {
            if parsed.path.is_empty() {
                parsed.path = upload.prepend("/");
            } else if parsed.path.ends_with("/") {
                parsed.path.push_word(upload);
            }
            if config.is_on(Opt::Get) {
                warnings.push(
                    WarningCode::DataIgnored,
                    "curl doesn't let you pass --get and --upload-file together",
                );
            }
        }

        let mut query_array = None;
        let mut query_reads_file = None;
        if !parsed.query.is_empty() || !query_parts.is_empty() {
            let mut parts = Vec::with_capacity(query_parts.len() + 1);
            if let Some(own) = parsed.query.strip_prefix("?").filter(|q| !q.is_empty()) {
                parts.push(DataPart::new(DataKind::Raw, own));
            }
            parts.extend_from_slice(query_parts);
            let BuiltData {
                params,
                text,
                reads_file,
            } = build_data(&parts, self.stdin);
            parsed.query = if text.is_empty() {
                Word::new()
            } else {
                text.prepend("?")
            };
            query_array = Some(params);
            query_reads_file = reads_file;
        }

        let url = render(&parsed, true);
        let query = parsed.query.strip_prefix("?").unwrap_or_default();
        let (query_list, query_dict) = match parse_query_string(&query) {
            (Some(list), dict) if !list.is_empty() => (Some(list), dict),
            _ => (None, None),
        };
        let url_without_query_list = if query_list.is_some() {
            render(&parsed, false)
        } else {
            url.clone()
        };

        let method = self.method(node, warnings);
        let auth = config
            .text(Opt::User)
            .or(parsed.auth.as_ref())
            .map(|auth| auth.split_once(":").unwrap_or_else(|| (auth.clone(), Word::new())));

        RequestUrl {
            original,
            url,
            parsed,
            url_without_query_list,
            query_list,
            query_dict,
            query_array,
            query_reads_file,
            method,
            auth,
            upload_file: node.upload.as_ref().map(|file| self.upload_file(file, warnings)),
            output: node.output.clone(),
            remote_name: node.use_remote,
        }
    }

    /// The method curl sends, in its own order of precedence.
    fn method(&self, node: &UrlNode, warnings: &mut Warnings) -> Word {
        let config = self.config;
        if let Some(method) = config.text(Opt::Request).filter(|m| **m != "null") {
            if let Known::Dynamic(token) = method.known() {
                warnings.push(
                    WarningCode::ShellExpansion,
                    format!(
                        "the request method is a {} and is sent as-is: {method}",
                        token.describe()
                    ),
                );
            }
            return method.clone();
        }
        let method = if config.is_on(Opt::Head) {
            "HEAD"
        } else if node.upload.is_some() {
            "PUT"
        } else if !config.is_on(Opt::Get) && (!config.data.is_empty() || !config.form.is_empty()) {
            "POST"
        } else {
            "GET"
        };
        Word::literal(method)
    }

    /// `-T -` and `-T .` read stdin, which the shell may have redirected.
    fn upload_file(&self, file: &Word, warnings: &mut Warnings) -> Word {
        if *file != "-" && *file != "." {
            return file.clone();
        }
        match self.stdin {
            Some(Stdin::File(path)) => path.clone(),
            Some(Stdin::Text(_)) => {
                warnings.push(
                    WarningCode::UploadFileWithStdinContent,
                    "--upload-file with stdin content is not supported",
                );
                file.clone()
            }
            None => file.clone(),
        }
    }
}

/// `scheme://host path [query] fragment`. Userinfo is reported separately.
fn render(parsed: &ParsedUrl, with_query: bool) -> Word {
    let mut url = parsed.scheme.clone() + "://";
    url.push_word(&parsed.host);
    url.push_word(&parsed.path);
    if with_query {
        url.push_word(&parsed.query);
    }
    url.push_word(&parsed.fragment);
    url
}

// =============================================================================
// Headers
// =============================================================================

/// An explicit `Cookie` header wins over `--cookie`. `--cookie` values
/// without `=` are files to read cookies from.
fn cookies(config: &OperationConfig, headers: &mut Headers) -> (Option<Cookies>, Vec<Word>) {
    match headers.get("cookie") {
        Some(Some(header)) => return (parse_cookies_strict(header), Vec::new()),
        Some(None) => return (None, Vec::new()),
        None => {}
    }

    let (strings, files): (Vec<&Word>, Vec<&Word>) =
        config.list(Opt::Cookie).iter().partition(|c| c.contains("="));
    let files = files.into_iter().cloned().collect();
    if strings.is_empty() {
        return (None, files);
    }
    let cookie = Word::join(strings, "; ");
    let parsed = parse_cookies(&cookie);
    headers.set_if_missing("Cookie", cookie);
    (parsed, files)
}

/// Headers implied by options. Returns whether `--referer` asked for
/// `;auto`.
fn derived_headers(config: &OperationConfig, headers: &mut Headers) -> bool {
    if let Some(agent) = config.text(Opt::UserAgent) {
        headers.set_if_missing("User-Agent", agent.clone());
    }

    let mut referer_auto = false;
    if let Some(referer) = config.text(Opt::Referer) {
        referer_auto = referer.contains(";auto");
        let referer = referer.strip_suffix(";auto").unwrap_or_else(|| referer.clone());
        if !referer.is_empty() {
            headers.set_if_missing("Referer", referer);
        }
    }

    if let Some(range) = config.text(Opt::Range) {
        let mut range = range.prepend("bytes=");
        if !range.contains("-") {
            range.push_str("-");
        }
        headers.set_if_missing("Range", range);
    }

    if let Some(cond) = config.text(Opt::TimeCond) {
        let (name, date) = match cond.first_char() {
            Some('-') => ("If-Unmodified-Since", cond.slice(1..).unwrap_or_default()),
            Some('=') => ("Last-Modified", cond.slice(1..).unwrap_or_default()),
            Some('+') => ("If-Modified-Since", cond.slice(1..).unwrap_or_default()),
            _ => ("If-Modified-Since", cond.clone()),
        };
        headers.set_if_missing(name, date);
    }
    referer_auto
}

// =============================================================================
// Transfer options
// =============================================================================

/// A timeout value, warning when curl would reject it as a number.
fn numeric(
    config: &OperationConfig,
    opt: Opt,
    code: WarningCode,
    warnings: &mut Warnings,
) -> Option<Word> {
    let value = config.text(opt)?;
    if let Known::Literal(text) = value.known() {
        if !NUMBER_PREFIX.is_match(text) {
            warnings.push(
                code,
                format!("option --{opt}: expected a proper numerical parameter: {text:?}"),
            );
        }
    }
    Some(value.clone())
}

/// `--cert file[:password]`. A colon may be escaped as `\:`; PKCS#11 URIs
/// are never split.
fn split_cert(cert: &Word) -> (Word, Option<Word>) {
    if cert.starts_with("pkcs11:") || !cert.contains(":") {
        return (cert.clone(), None);
    }
    let Some(text) = cert.as_literal() else {
        return match cert.split_once(":") {
            Some((file, password)) => (file, (!password.is_empty()).then_some(password)),
            None => (cert.clone(), None),
        };
    };

    let mut file = String::new();
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if text[i + 1..].starts_with(':') => {
                file.push(':');
                chars.next();
            }
            ':' => {
                let password = &text[i + 1..];
                let password = (!password.is_empty()).then(|| Word::literal(password));
                return (Word::literal(file), password);
            }
            c => file.push(c),
        }
    }
    (Word::literal(file), None)
}

fn cert_type(config: &OperationConfig, warnings: &mut Warnings) -> Option<Word> {
    let cert_type = config.text(Opt::CertType)?;
    if let Known::Literal(text) = cert_type.known() {
        let upper = text.to_uppercase();
        if !matches!(upper.as_str(), "PEM" | "DER" | "ENG" | "P12") {
            warnings.push(
                WarningCode::CertTypeUnknown,
                format!("not supported file type {text:?} for certificate"),
            );
        }
    }
    Some(cert_type.clone())
}

/// The proxy and its type. SOCKS options set both.
fn proxy(config: &OperationConfig) -> (Option<Word>, Option<ProxyType>) {
    let mut proxy = config.text(Opt::Proxy).cloned();
    let mut proxy_type = None;
    if config.is_on(Opt::ProxyHttp2) {
        proxy_type = Some(ProxyType::Http2);
    }
    for (opt, kind) in [
        (Opt::Proxy10, ProxyType::Http1),
        (Opt::Socks4, ProxyType::Socks4),
        (Opt::Socks4a, ProxyType::Socks4a),
        (Opt::Socks5, ProxyType::Socks5),
        (Opt::Socks5Hostname, ProxyType::Socks5Hostname),
    ] {
        if let Some(value) = config.text(opt) {
            proxy = Some(value.clone());
            proxy_type = Some(kind);
        }
    }
    (proxy, proxy_type)
}

fn netrc(config: &OperationConfig) -> Option<NetrcMode> {
    if config.is_on(Opt::NetrcOptional) {
        Some(NetrcMode::Optional)
    } else if config.is_on(Opt::Netrc) || config.contains(Opt::NetrcFile) {
        Some(NetrcMode::Required)
    } else if config.flag(Opt::Netrc) == Some(false) {
        Some(NetrcMode::Ignored)
    } else {
        None
    }
}

/// Options already reflected in a typed field of [`Request`] or
/// [`RequestUrl`].
fn is_consumed(opt: Opt) -> bool {
    matches!(
        opt,
        Opt::Url
            | Opt::Output
            | Opt::RemoteName
            | Opt::RemoteNameAll
            | Opt::UploadFile
            | Opt::Data
            | Opt::DataAscii
            | Opt::DataBinary
            | Opt::DataRaw
            | Opt::DataUrlencode
            | Opt::Json
            | Opt::UrlQuery
            | Opt::Form
            | Opt::FormString
            | Opt::Get
            | Opt::Head
            | Opt::Request
            | Opt::Header
            | Opt::ProxyHeader
            | Opt::Cookie
            | Opt::CookieJar
            | Opt::UserAgent
            | Opt::Referer
            | Opt::Range
            | Opt::TimeCond
            | Opt::User
            | Opt::Basic
            | Opt::Digest
            | Opt::Negotiate
            | Opt::Ntlm
            | Opt::NtlmWb
            | Opt::Anyauth
            | Opt::ProxyBasic
            | Opt::ProxyDigest
            | Opt::ProxyNegotiate
            | Opt::ProxyNtlm
            | Opt::ProxyAnyauth
            | Opt::AwsSigv4
            | Opt::Oauth2Bearer
            | Opt::Insecure
            | Opt::Compressed
            | Opt::Include
            | Opt::Location
            | Opt::LocationTrusted
            | Opt::MaxRedirs
            | Opt::MaxTime
            | Opt::ConnectTimeout
            | Opt::Expect100Timeout
            | Opt::Http10
            | Opt::Http11
            | Opt::Http2
            | Opt::Http2PriorKnowledge
            | Opt::Http3
            | Opt::Http3Only
            | Opt::Tlsv1
            | Opt::Tlsv10
            | Opt::Tlsv11
            | Opt::Tlsv12
            | Opt::Tlsv13
            | Opt::Cert
            | Opt::CertType
            | Opt::Key
            | Opt::Cacert
            | Opt::Capath
            | Opt::Proxy
            | Opt::Proxy10
            | Opt::ProxyHttp2
            | Opt::Socks4
            | Opt::Socks4a
            | Opt::Socks5
            | Opt::Socks5Hostname
            | Opt::ProxyUser
            | Opt::Resolve
            | Opt::ConnectTo
            | Opt::UnixSocket
            | Opt::AbstractUnixSocket
            | Opt::Netrc
            | Opt::NetrcOptional
            | Opt::NetrcFile
            | Opt::Quote
    )
}

fn passthrough(config: &OperationConfig) -> IndexMap<Opt, OptValue> {
    config
        .values()
        .filter(|(opt, _)| !is_consumed(*opt))
        .map(|(opt, value)| (opt, value.clone()))
        .collect()
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
