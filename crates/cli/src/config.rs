// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration
//!
//! Resolution order: `--api-url` flag, `OW_API_URL` environment
//! variable, `./ow.toml`, then the user config dir, then the
//! scheduler's default port on localhost.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:7777/api/v2";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
    /// Default trailing window for ranged listings, in seconds. When
    /// unset, unranged listings let the scheduler pick its default.
    #[serde(default)]
    pub default_range_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_range_secs: None,
        }
    }
}

/// Resolve settings, with an explicit flag taking precedence over
/// everything else.
pub fn load(flag: Option<String>) -> anyhow::Result<Settings> {
    if let Some(api_url) = flag {
        return Ok(Settings {
            api_url,
            ..Settings::default()
        });
    }

    if let Ok(api_url) = std::env::var("OW_API_URL") {
        if !api_url.trim().is_empty() {
            return Ok(Settings {
                api_url,
                ..Settings::default()
            });
        }
    }

    for path in candidate_paths() {
        if path.exists() {
            tracing::debug!("loading settings from {}", path.display());
            return parse_file(&path);
        }
    }

    Ok(Settings::default())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("ow.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("ow").join("config.toml"));
    }
    paths
}

fn parse_file(path: &Path) -> anyhow::Result<Settings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config in {}", path.display()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
