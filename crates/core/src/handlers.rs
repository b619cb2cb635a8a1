// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-option handlers, dispatched from one table.
//!
//! Operation handlers are pure: they take the operation being filled by
//! value and return the updated one. Global handlers write into
//! [`GlobalFlags`]. `--next` is the only option the resolver handles itself,
//! because it may start a new operation.

use crate::auth::AuthScheme;
use crate::config::{
    DataKind, DataPart, FormKind, FormPart, GlobalFlags, HttpVersion, OperationConfig, TlsVersion,
};
use crate::options::{Arity, Opt};
use curlconv_shell::{WarningCode, Warnings, Word};

pub type FlagHandler = fn(OperationConfig, Opt, bool, &mut Warnings) -> OperationConfig;
pub type ValueHandler = fn(OperationConfig, Opt, &Word, &mut Warnings) -> OperationConfig;
pub type GlobalFlagHandler = fn(&mut GlobalFlags, Opt, bool, &mut Warnings);
pub type GlobalValueHandler = fn(&mut GlobalFlags, Opt, &Word, &mut Warnings);

/// What to do with a resolved option.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Flag(FlagHandler),
    Value(ValueHandler),
    GlobalFlag(GlobalFlagHandler),
    GlobalValue(GlobalValueHandler),
    /// `--next`.
    Next,
}

/// The handler for `opt`.
pub fn handler(opt: Opt) -> Handler {
    match opt {
        Opt::Data
        | Opt::DataAscii
        | Opt::DataBinary
        | Opt::DataRaw
        | Opt::DataUrlencode
        | Opt::Json => Handler::Value(data),
        Opt::UrlQuery => Handler::Value(url_query),
        Opt::Form | Opt::FormString => Handler::Value(form),

        Opt::Url => Handler::Value(url),
        Opt::Output => Handler::Value(output),
        Opt::RemoteName => Handler::Flag(remote_name),
        Opt::RemoteNameAll => Handler::Flag(remote_name_all),
        Opt::UploadFile => Handler::Value(upload_file),

        Opt::Digest
        | Opt::Negotiate
        | Opt::Ntlm
        | Opt::NtlmWb
        | Opt::Basic
        | Opt::ProxyDigest
        | Opt::ProxyNegotiate
        | Opt::ProxyNtlm
        | Opt::ProxyBasic => Handler::Flag(auth_scheme),
        Opt::Anyauth | Opt::ProxyAnyauth => Handler::Flag(anyauth),
        Opt::AwsSigv4 | Opt::Oauth2Bearer => Handler::Value(auth_token),

        Opt::LocationTrusted => Handler::Flag(location_trusted),
        Opt::Http10
        | Opt::Http11
        | Opt::Http2
        | Opt::Http2PriorKnowledge
        | Opt::Http3
        | Opt::Http3Only => Handler::Flag(http_version),
        Opt::Tlsv1 | Opt::Tlsv10 | Opt::Tlsv11 | Opt::Tlsv12 | Opt::Tlsv13 => {
            Handler::Flag(tls_version)
        }
        Opt::Quote => Handler::Value(quote),
        Opt::Range => Handler::Value(range),

        Opt::Next => Handler::Next,

        _ if GlobalFlags::is_global(opt) => match opt.arity() {
            Arity::Flag => Handler::GlobalFlag(global_flag),
            Arity::String => Handler::GlobalValue(global_value),
        },
        _ => match opt.arity() {
            Arity::Flag => Handler::Flag(store_flag),
            Arity::String => Handler::Value(store_value),
        },
    }
}

// =============================================================================
// Request body and query
// =============================================================================

fn data(mut config: OperationConfig, opt: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    let kind = match opt {
        Opt::DataBinary if value.starts_with("@") => DataKind::Binary,
        Opt::DataRaw => DataKind::Raw,
        Opt::DataUrlencode => DataKind::Urlencode,
        Opt::Json => {
            config.json = true;
            DataKind::Json
        }
        _ => DataKind::Data,
    };
    config.data.push(DataPart::new(kind, value.clone()));
    config
}

/// `--url-query`: a leading `+` means "already encoded".
fn url_query(mut config: OperationConfig, _: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    let part = match value.strip_prefix("+") {
        Some(raw) => DataPart::new(DataKind::Raw, raw),
        None => DataPart::new(DataKind::Urlencode, value.clone()),
    };
    config.url_query.push(part);
    config
}

fn form(mut config: OperationConfig, opt: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    let kind = match opt {
        Opt::FormString => FormKind::String,
        _ => FormKind::Form,
    };
    config.form.push(FormPart {
        kind,
        value: value.clone(),
    });
    config
}

// =============================================================================
// URL nodes
// =============================================================================

fn url(mut config: OperationConfig, _: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    config.add_url(value.clone());
    config
}

fn output(mut config: OperationConfig, _: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    config.add_output(value.clone());
    config
}

fn remote_name(mut config: OperationConfig, _: Opt, on: bool, _: &mut Warnings) -> OperationConfig {
    config.add_remote_name(on);
    config
}

fn remote_name_all(
    mut config: OperationConfig,
    _: Opt,
    on: bool,
    _: &mut Warnings,
) -> OperationConfig {
    config.remote_name_all = on;
    config
}

fn upload_file(mut config: OperationConfig, _: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    config.add_upload(value.clone());
    config
}

// =============================================================================
// Authentication
// =============================================================================

fn auth_scheme(mut config: OperationConfig, opt: Opt, on: bool, _: &mut Warnings) -> OperationConfig {
    let (set, scheme) = match opt {
        Opt::Digest => (&mut config.authtype, AuthScheme::Digest),
        Opt::Negotiate => (&mut config.authtype, AuthScheme::Negotiate),
        Opt::Ntlm => (&mut config.authtype, AuthScheme::Ntlm),
        Opt::NtlmWb => (&mut config.authtype, AuthScheme::NtlmWb),
        Opt::ProxyDigest => (&mut config.proxyauthtype, AuthScheme::Digest),
        Opt::ProxyNegotiate => (&mut config.proxyauthtype, AuthScheme::Negotiate),
        Opt::ProxyNtlm => (&mut config.proxyauthtype, AuthScheme::Ntlm),
        Opt::ProxyBasic => (&mut config.proxyauthtype, AuthScheme::Basic),
        _ => (&mut config.authtype, AuthScheme::Basic),
    };
    set.set(scheme, on);
    config.set_flag(opt, on);
    config
}

/// `--anyauth` only ever widens; `--no-anyauth` leaves the set alone.
fn anyauth(mut config: OperationConfig, opt: Opt, on: bool, _: &mut Warnings) -> OperationConfig {
    if on {
        match opt {
            Opt::ProxyAnyauth => config.proxyauthtype = crate::auth::AuthSet::ANY,
            _ => config.authtype = crate::auth::AuthSet::ANY,
        }
    }
    config.set_flag(opt, on);
    config
}

/// `--aws-sigv4` and `--oauth2-bearer` enable their scheme and keep the value.
fn auth_token(mut config: OperationConfig, opt: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    let scheme = match opt {
        Opt::AwsSigv4 => AuthScheme::AwsSigV4,
        _ => AuthScheme::Bearer,
    };
    config.authtype.insert(scheme);
    config.push_value(opt, value.clone());
    config
}

// =============================================================================
// Protocol switches
// =============================================================================

fn location_trusted(
    mut config: OperationConfig,
    _: Opt,
    on: bool,
    _: &mut Warnings,
) -> OperationConfig {
    config.set_flag(Opt::Location, on);
    config.set_flag(Opt::LocationTrusted, on);
    config
}

fn http_version(mut config: OperationConfig, opt: Opt, _: bool, _: &mut Warnings) -> OperationConfig {
    let version = match opt {
        Opt::Http10 => HttpVersion::V1_0,
        Opt::Http11 => HttpVersion::V1_1,
        Opt::Http2PriorKnowledge => HttpVersion::V2PriorKnowledge,
        Opt::Http3 => HttpVersion::V3,
        Opt::Http3Only => HttpVersion::V3Only,
        _ => HttpVersion::V2,
    };
    config.http_version = Some(version);
    config
}

fn tls_version(mut config: OperationConfig, opt: Opt, _: bool, _: &mut Warnings) -> OperationConfig {
    let version = match opt {
        Opt::Tlsv10 => TlsVersion::V1_0,
        Opt::Tlsv11 => TlsVersion::V1_1,
        Opt::Tlsv12 => TlsVersion::V1_2,
        Opt::Tlsv13 => TlsVersion::V1_3,
        _ => TlsVersion::V1,
    };
    config.tls_version = Some(version);
    config
}

/// `-Q`: `-cmd` runs after the transfer, `+cmd` before the transfer
/// (after the change of directory).
fn quote(mut config: OperationConfig, _: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    if let Some(cmd) = value.strip_prefix("-") {
        config.postquote.push(cmd);
    } else if let Some(cmd) = value.strip_prefix("+") {
        config.prequote.push(cmd);
    } else {
        config.quote.push(value.clone());
    }
    config
}

fn range(mut config: OperationConfig, opt: Opt, value: &Word, warnings: &mut Warnings) -> OperationConfig {
    let numeric = value.first_char().is_some_and(|c| c.is_ascii_digit());
    if numeric && !value.contains("-") {
        warnings.push(
            WarningCode::Range,
            "A specified range MUST include at least one dash (-). Appending one for you!",
        );
        config.push_value(opt, value.clone() + "-");
    } else {
        config.push_value(opt, value.clone());
    }
    config
}

// =============================================================================
// Everything else
// =============================================================================

fn store_flag(mut config: OperationConfig, opt: Opt, on: bool, _: &mut Warnings) -> OperationConfig {
    config.set_flag(opt, on);
    config
}

fn store_value(mut config: OperationConfig, opt: Opt, value: &Word, _: &mut Warnings) -> OperationConfig {
    config.push_value(opt, value.clone());
    config
}

fn global_flag(flags: &mut GlobalFlags, opt: Opt, on: bool, warnings: &mut Warnings) {
    if opt == Opt::Verbose && on && (flags.trace.is_some() || flags.trace_ascii.is_some()) {
        warnings.push(
            WarningCode::TraceOverride,
            "-v, --verbose overrides an earlier trace/verbose option",
        );
        flags.trace = None;
        flags.trace_ascii = None;
    }
    if let Some(slot) = flags.flag_mut(opt) {
        *slot = Some(on);
    }
}

/// Only one of `--trace`, `--trace-ascii` and `--verbose` is in effect;
/// the last one given replaces the others.
fn global_value(flags: &mut GlobalFlags, opt: Opt, value: &Word, warnings: &mut Warnings) {
    let overridden = match opt {
        Opt::Trace => flags.trace_ascii.take().is_some() | (flags.verbose == Some(true)),
        Opt::TraceAscii => flags.trace.take().is_some() | (flags.verbose == Some(true)),
        _ => false,
    };
    if overridden {
        if flags.verbose == Some(true) {
            flags.verbose = Some(false);
        }
        warnings.push(
            WarningCode::TraceOverride,
            format!("--{opt} overrides an earlier trace/verbose option"),
        );
    }
    if let Some(slot) = flags.text_mut(opt) {
        *slot = Some(value.clone());
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
