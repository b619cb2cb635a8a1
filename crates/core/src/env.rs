// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the core crate.

use crate::version::CurlVersion;
use std::path::PathBuf;

/// Settings file override: CURLCONV_SETTINGS > config_dir/curlconv/settings.toml
pub fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CURLCONV_SETTINGS") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("curlconv").join("settings.toml"))
}

/// curl version override. Unparseable values are ignored.
pub fn curl_version() -> Option<CurlVersion> {
    std::env::var("CURLCONV_CURL_VERSION")
        .ok()
        .and_then(|s| s.parse().ok())
}
