// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP authentication scheme sets, mirroring curl's `CURLAUTH_*` bitmask.

use serde::{Serialize, Serializer};
use std::fmt;

/// One authentication scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    Basic,
    Digest,
    Negotiate,
    Ntlm,
    DigestIe,
    NtlmWb,
    Bearer,
    AwsSigV4,
}

impl AuthScheme {
    pub const ALL: [AuthScheme; 8] = [
        AuthScheme::Basic,
        AuthScheme::Digest,
        AuthScheme::Negotiate,
        AuthScheme::Ntlm,
        AuthScheme::DigestIe,
        AuthScheme::NtlmWb,
        AuthScheme::Bearer,
        AuthScheme::AwsSigV4,
    ];

    /// Order in which curl picks a scheme when several are allowed.
    const PRIORITY: [AuthScheme; 7] = [
        AuthScheme::Negotiate,
        AuthScheme::Bearer,
        AuthScheme::Digest,
        AuthScheme::Ntlm,
        AuthScheme::NtlmWb,
        AuthScheme::Basic,
        AuthScheme::AwsSigV4,
    ];

    const fn bit(self) -> u8 {
        match self {
            AuthScheme::Basic => 1 << 0,
            AuthScheme::Digest => 1 << 1,
            AuthScheme::Negotiate => 1 << 2,
            AuthScheme::Ntlm => 1 << 3,
            AuthScheme::DigestIe => 1 << 4,
            AuthScheme::NtlmWb => 1 << 5,
            AuthScheme::Bearer => 1 << 6,
            AuthScheme::AwsSigV4 => 1 << 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Basic => "basic",
            AuthScheme::Digest => "digest",
            AuthScheme::Negotiate => "negotiate",
            AuthScheme::Ntlm => "ntlm",
            AuthScheme::DigestIe => "digest-ie",
            AuthScheme::NtlmWb => "ntlm-wb",
            AuthScheme::Bearer => "bearer",
            AuthScheme::AwsSigV4 => "aws-sigv4",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AuthScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A set of allowed schemes. Defaults to Basic only, like curl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthSet(u8);

impl AuthSet {
    pub const NONE: AuthSet = AuthSet(0);
    pub const BASIC: AuthSet = AuthSet(AuthScheme::Basic.bit());
    /// Everything except the IE flavour of Digest.
    pub const ANY: AuthSet = AuthSet(!AuthScheme::DigestIe.bit());

    pub fn contains(self, scheme: AuthScheme) -> bool {
        self.0 & scheme.bit() != 0
    }

    /// OR the scheme in.
    pub fn insert(&mut self, scheme: AuthScheme) {
        self.0 |= scheme.bit();
    }

    /// AND-NOT the scheme out.
    pub fn remove(&mut self, scheme: AuthScheme) {
        self.0 &= !scheme.bit();
    }

    pub fn set(&mut self, scheme: AuthScheme, on: bool) {
        if on {
            self.insert(scheme);
        } else {
            self.remove(scheme);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Member schemes in bit order.
    pub fn iter(self) -> impl Iterator<Item = AuthScheme> {
        AuthScheme::ALL
            .into_iter()
            .filter(move |&scheme| self.contains(scheme))
    }

    /// The scheme curl would use first, or `None` for an empty set.
    pub fn pick(self) -> Option<AuthScheme> {
        AuthScheme::PRIORITY
            .into_iter()
            .find(|&scheme| self.contains(scheme))
    }
}

/// Serialized as the list of member scheme names.
impl Serialize for AuthSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Default for AuthSet {
    fn default() -> Self {
        AuthSet::BASIC
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
