// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./sened.toml` > `~/.config/sened/sened.toml` > `/etc/sened/sened.toml`,
//! with environment variable overrides via the `SENED_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SenedConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/sened/sened.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "sened.toml";

/// Per-user config file under the XDG config directory, if one can be resolved.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sened/sened.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sened/sened.toml`
/// 3. `~/.config/sened/sened.toml`
/// 4. `./sened.toml`
/// 5. `SENED_*` environment variables
pub fn load_config() -> Result<SenedConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
///
/// No files and no environment variables are consulted.
pub fn load_config_from_str(toml_content: &str) -> Result<SenedConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SenedConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env var overrides.
///
/// Unlike the hierarchy, a missing file is an error here.
pub fn load_config_from_path(path: &Path) -> Result<SenedConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SenedConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(SenedConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment variable provider mapping `SENED_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys themselves
/// contain underscores: `SENED_CLASSIFIER_CONFIDENCE_THRESHOLD` must become
/// `classifier.confidence_threshold`.
fn env_provider() -> Env {
    Env::prefixed("SENED_").map(|key| {
        let key_str = key.as_str();
        let mapped = ["logging", "classifier", "input"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or_else(|| key_str.to_string());
        mapped.into()
    })
}
