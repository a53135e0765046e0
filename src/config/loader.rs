// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
use crate::debugger::DividerStyle;
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Presentation settings for a [`Debugger`](crate::debugger::Debugger).
///
/// Every field has a default, so an empty file is a valid config.
///
/// # Fields
/// * `default_divider` - Divider used by `create_default` (defaults to `thick`)
/// * `banners` - Whether sections print the begin/complete lines (defaults to `verbose`)
/// * `indent_width` - Spaces per indentation step (defaults to 2, at most 16)
///
/// # Example
/// ```yaml
/// default_divider: thin
/// banners: lean
/// indent_width: 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebuggerConfig {
    #[serde(default)]
    pub default_divider: DividerStyle,
    #[serde(default)]
    pub banners: BannerMode,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            default_divider: DividerStyle::default(),
            banners: BannerMode::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl DebuggerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "indent_width {} exceeds maximum of {}",
                self.indent_width, MAX_INDENT_WIDTH
            )));
        }
        Ok(())
    }
}

/// How much a section prints when it opens and closes.
///
/// * `Verbose` - divider plus "Debugger Section beginning"/"complete" lines
/// * `Lean` - divider only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerMode {
    #[default]
    Verbose,
    Lean,
}

impl Display for BannerMode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            BannerMode::Verbose => f.write_str("verbose"),
            BannerMode::Lean => f.write_str("lean"),
        }
    }
}

impl FromStr for BannerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(BannerMode::Verbose),
            "lean" => Ok(BannerMode::Lean),
            _ => Err(ConfigError::UnknownBannerMode(s.to_string())),
        }
    }
}

/// Parse and validate a YAML config string.
pub fn parse_yaml(content: &str) -> Result<DebuggerConfig, ConfigError> {
    // serde_yaml rejects an empty document instead of using field defaults
    if content.trim().is_empty() {
        return Ok(DebuggerConfig::default());
    }
    let cfg: DebuggerConfig = serde_yaml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse and validate a TOML config string.
pub fn parse_toml(content: &str) -> Result<DebuggerConfig, ConfigError> {
    let cfg: DebuggerConfig = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load a config from a `.yaml`, `.yml` or `.toml` file.
///
/// The format is picked from the extension; anything else is
/// [`ConfigError::UnsupportedFormat`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DebuggerConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let parse: fn(&str) -> Result<DebuggerConfig, ConfigError> = match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml,
        Some("toml") => parse_toml,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse(&content)?;

    ConfigLoaded {
        path,
        default_divider: cfg.default_divider,
        banners: cfg.banners,
        indent_width: cfg.indent_width,
    }
    .log();

    Ok(cfg)
}
