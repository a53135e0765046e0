// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading or validating debugger configuration.
//!
//! Section operations never fail, so configuration is the only place the
//! crate returns errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML.
    #[error("Unsupported config format for '{0}': expected .yaml, .yml or .toml")]
    UnsupportedFormat(PathBuf),

    #[error("Unknown divider style '{0}': expected one of thick, thin, underscore, star, blank")]
    UnknownDivider(String),

    #[error("Unknown banner mode '{0}': expected verbose or lean")]
    UnknownBannerMode(String),

    /// Parsed fine but a value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
