// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved option state: one [`OperationConfig`] per `--next`-separated
//! operation, plus the process-wide [`GlobalConfig`].

use crate::auth::AuthSet;
use crate::options::Opt;
use curlconv_shell::{Warnings, Word};
use indexmap::IndexMap;
use serde::Serialize;

/// How a `--data*`/`--json`/`--url-query` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// `--data`, `--data-ascii`; `@file` reads the file without newlines.
    Data,
    /// `--data-binary @file`.
    Binary,
    /// `--data-raw`; `@` has no special meaning.
    Raw,
    /// `--data-urlencode`, `--url-query`.
    Urlencode,
    /// `--json`.
    Json,
}

/// One data or query fragment, in command line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPart {
    pub kind: DataKind,
    pub value: Word,
}

impl DataPart {
    pub fn new(kind: DataKind, value: Word) -> Self {
        Self { kind, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// `-F`: `@` and `<` read files, `;type=` etc. are parsed.
    Form,
    /// `--form-string`: the value is taken literally.
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPart {
    pub kind: FormKind,
    pub value: Word,
}

/// `--http1.0` ... `--http3-only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVersion {
    V1_0,
    V1_1,
    V2,
    V2PriorKnowledge,
    V3,
    V3Only,
}

impl HttpVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVersion::V1_0 => "1.0",
            HttpVersion::V1_1 => "1.1",
            HttpVersion::V2 => "2",
            HttpVersion::V2PriorKnowledge => "2-prior-knowledge",
            HttpVersion::V3 => "3",
            HttpVersion::V3Only => "3-only",
        }
    }

    pub fn is_http2(self) -> bool {
        matches!(self, HttpVersion::V2 | HttpVersion::V2PriorKnowledge)
    }

    pub fn is_http3(self) -> bool {
        matches!(self, HttpVersion::V3 | HttpVersion::V3Only)
    }
}

impl Serialize for HttpVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `--tlsv1` ... `--tlsv1.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsVersion {
    V1,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
}

impl TlsVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            TlsVersion::V1 => "1",
            TlsVersion::V1_0 => "1.0",
            TlsVersion::V1_1 => "1.1",
            TlsVersion::V1_2 => "1.2",
            TlsVersion::V1_3 => "1.3",
        }
    }
}

impl Serialize for TlsVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value stored for an option without dedicated handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptValue {
    Flag(bool),
    Text(Word),
    List(Vec<Word>),
}

/// One target URL and the roles filled in for it.
///
/// `--url`, `-o`/`-O` and `-T` each fill the first node still missing that
/// role, so `curl -o a -o b u1 u2` pairs `a` with `u1` and `b` with `u2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlNode {
    pub url: Option<Word>,
    /// `-o` file name. `None` with `output_set` means `-O`.
    pub output: Option<Word>,
    /// Set once `-o`/`-O` has claimed this node.
    pub output_set: bool,
    pub upload: Option<Word>,
    /// Save under the remote file name (`-O`, `--remote-name-all`).
    pub use_remote: bool,
    /// `-T ""`: explicitly no upload for this URL.
    pub no_upload: bool,
}

impl UrlNode {
    fn new(use_remote: bool) -> Self {
        Self {
            use_remote,
            ..Self::default()
        }
    }
}

/// Options for one operation.
///
/// Options with special semantics get typed fields; every other option is
/// kept in `values`, keyed by its canonical [`Opt`] in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationConfig {
    pub urls: Vec<UrlNode>,
    /// `--remote-name-all`: default `use_remote` for new nodes.
    pub remote_name_all: bool,
    pub data: Vec<DataPart>,
    pub url_query: Vec<DataPart>,
    pub form: Vec<FormPart>,
    pub authtype: AuthSet,
    pub proxyauthtype: AuthSet,
    /// Set by `--json`.
    pub json: bool,
    pub http_version: Option<HttpVersion>,
    pub tls_version: Option<TlsVersion>,
    pub quote: Vec<Word>,
    pub prequote: Vec<Word>,
    pub postquote: Vec<Word>,
    values: IndexMap<Opt, OptValue>,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            remote_name_all: false,
            data: Vec::new(),
            url_query: Vec::new(),
            form: Vec::new(),
            authtype: AuthSet::BASIC,
            proxyauthtype: AuthSet::BASIC,
            json: false,
            http_version: None,
            tls_version: None,
            quote: Vec::new(),
            prequote: Vec::new(),
            postquote: Vec::new(),
            values: IndexMap::new(),
        }
    }
}

/// Options whose repeated values are all kept. Anything else keeps only
/// the last value once resolution is done.
pub fn is_repeatable(opt: Opt) -> bool {
    matches!(
        opt,
        Opt::ConnectTo
            | Opt::Cookie
            | Opt::Data
            | Opt::Form
            | Opt::Header
            | Opt::Hsts
            | Opt::MailRcpt
            | Opt::Output
            | Opt::ProxyHeader
            | Opt::Quote
            | Opt::Resolve
            | Opt::TelnetOption
            | Opt::UploadFile
            | Opt::UrlQuery
            | Opt::Url
    )
}

impl OperationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Generic option storage
    // -----------------------------------------------------------------------

    pub fn set_flag(&mut self, opt: Opt, on: bool) {
        self.values.insert(opt, OptValue::Flag(on));
    }

    /// Append a string value. Values accumulate until [`Self::collapse`].
    pub fn push_value(&mut self, opt: Opt, value: Word) {
        match self.values.get_mut(&opt) {
            Some(OptValue::List(list)) => list.push(value),
            _ => {
                self.values.insert(opt, OptValue::List(vec![value]));
            }
        }
    }

    /// Reduce every non-repeatable list to its last element.
    pub fn collapse(&mut self) {
        for (opt, value) in self.values.iter_mut() {
            if is_repeatable(*opt) {
                continue;
            }
            if let OptValue::List(list) = value {
                if let Some(last) = list.pop() {
                    *value = OptValue::Text(last);
                }
            }
        }
    }

    /// Flag state, or `None` if the flag never appeared.
    pub fn flag(&self, opt: Opt) -> Option<bool> {
        match self.values.get(&opt) {
            Some(OptValue::Flag(on)) => Some(*on),
            _ => None,
        }
    }

    /// True only when the flag was given and left on.
    pub fn is_on(&self, opt: Opt) -> bool {
        self.flag(opt) == Some(true)
    }

    /// The (last) string value of an option.
    pub fn text(&self, opt: Opt) -> Option<&Word> {
        match self.values.get(&opt)? {
            OptValue::Text(word) => Some(word),
            OptValue::List(list) => list.last(),
            OptValue::Flag(_) => None,
        }
    }

    /// Every string value of an option, oldest first.
    pub fn list(&self, opt: Opt) -> &[Word] {
        match self.values.get(&opt) {
            Some(OptValue::List(list)) => list,
            Some(OptValue::Text(word)) => std::slice::from_ref(word),
            _ => &[],
        }
    }

    pub fn contains(&self, opt: Opt) -> bool {
        self.values.contains_key(&opt)
    }

    pub fn values(&self) -> impl Iterator<Item = (Opt, &OptValue)> {
        self.values.iter().map(|(opt, value)| (*opt, value))
    }

    // -----------------------------------------------------------------------
    // URL nodes
    // -----------------------------------------------------------------------

    fn node_for(&mut self, free: impl Fn(&UrlNode) -> bool) -> &mut UrlNode {
        let index = match self.urls.iter().position(free) {
            Some(i) => i,
            None => {
                self.urls.push(UrlNode::new(self.remote_name_all));
                self.urls.len() - 1
            }
        };
        &mut self.urls[index]
    }

    pub fn add_url(&mut self, url: Word) {
        self.node_for(|n| n.url.is_none()).url = Some(url);
    }

    /// `-o file`.
    pub fn add_output(&mut self, file: Word) {
        let node = self.node_for(|n| !n.output_set);
        node.output = Some(file);
        node.output_set = true;
    }

    /// `-O` / `--no-remote-name`.
    pub fn add_remote_name(&mut self, on: bool) {
        let node = self.node_for(|n| !n.output_set);
        node.use_remote = on;
        node.output_set = true;
    }

    /// `-T file`; an empty name means "no upload" for that URL.
    pub fn add_upload(&mut self, file: Word) {
        let node = self.node_for(|n| n.upload.is_none() && !n.no_upload);
        if file.is_empty() {
            node.no_upload = true;
        } else {
            node.upload = Some(file);
        }
    }

    pub fn url_count(&self) -> usize {
        self.urls.iter().filter(|n| n.url.is_some()).count()
    }

    pub fn output_count(&self) -> usize {
        self.urls.iter().filter(|n| n.output_set).count()
    }

    pub fn upload_count(&self) -> usize {
        self.urls
            .iter()
            .filter(|n| n.upload.is_some() || n.no_upload)
            .count()
    }

    /// Whether `--next` may close this operation: it needs a URL and at
    /// least as many URLs as outputs and uploads.
    pub fn can_close(&self) -> bool {
        let urls = self.url_count();
        urls > 0 && urls >= self.upload_count() && urls >= self.output_count()
    }
}

/// Options that apply to the whole invocation, not one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalFlags {
    pub verbose: Option<bool>,
    pub version: Option<bool>,
    pub trace_time: Option<bool>,
    pub test_event: Option<bool>,
    pub progress_bar: Option<bool>,
    pub progress_meter: Option<bool>,
    pub fail_early: Option<bool>,
    pub styled_output: Option<bool>,
    pub help: Option<bool>,
    pub silent: Option<bool>,
    pub show_error: Option<bool>,
    pub parallel: Option<bool>,
    pub parallel_immediate: Option<bool>,

    pub trace: Option<Word>,
    pub trace_ascii: Option<Word>,
    pub stderr: Option<Word>,
    pub libcurl: Option<Word>,
    pub config: Option<Word>,
    pub parallel_max: Option<Word>,
}

impl GlobalFlags {
    /// Storage for a global boolean option.
    pub fn flag_mut(&mut self, opt: Opt) -> Option<&mut Option<bool>> {
        Some(match opt {
            Opt::Verbose => &mut self.verbose,
            Opt::Version => &mut self.version,
            Opt::TraceTime => &mut self.trace_time,
            Opt::TestEvent => &mut self.test_event,
            Opt::ProgressBar => &mut self.progress_bar,
            Opt::ProgressMeter => &mut self.progress_meter,
            Opt::FailEarly => &mut self.fail_early,
            Opt::StyledOutput => &mut self.styled_output,
            Opt::Help => &mut self.help,
            Opt::Silent => &mut self.silent,
            Opt::ShowError => &mut self.show_error,
            Opt::Parallel => &mut self.parallel,
            Opt::ParallelImmediate => &mut self.parallel_immediate,
            _ => return None,
        })
    }

    /// Storage for a global string option.
    pub fn text_mut(&mut self, opt: Opt) -> Option<&mut Option<Word>> {
        Some(match opt {
            Opt::Trace => &mut self.trace,
            Opt::TraceAscii => &mut self.trace_ascii,
            Opt::Stderr => &mut self.stderr,
            Opt::Libcurl => &mut self.libcurl,
            Opt::Config => &mut self.config,
            Opt::ParallelMax => &mut self.parallel_max,
            _ => return None,
        })
    }

    /// Whether `opt` is handled here rather than per operation.
    pub fn is_global(opt: Opt) -> bool {
        matches!(
            opt,
            Opt::Verbose
                | Opt::Version
                | Opt::TraceTime
                | Opt::TestEvent
                | Opt::ProgressBar
                | Opt::ProgressMeter
                | Opt::FailEarly
                | Opt::StyledOutput
                | Opt::Help
                | Opt::Silent
                | Opt::ShowError
                | Opt::Parallel
                | Opt::ParallelImmediate
                | Opt::Trace
                | Opt::TraceAscii
                | Opt::Stderr
                | Opt::Libcurl
                | Opt::Config
                | Opt::ParallelMax
        )
    }
}

/// How a command line spelled a resolved option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeenOption {
    pub opt: Opt,
    /// As typed: `--verb`, `-v`, or `--url` for positional URLs.
    pub spelling: String,
}

/// Everything the resolver produced for one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalConfig {
    pub flags: GlobalFlags,
    /// Never empty; the last one is the operation being filled.
    pub configs: Vec<OperationConfig>,
    pub seen: Vec<SeenOption>,
    pub warnings: Warnings,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            flags: GlobalFlags::default(),
            configs: vec![OperationConfig::default()],
            seen: Vec::new(),
            warnings: Warnings::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
