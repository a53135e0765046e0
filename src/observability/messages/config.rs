// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::config::BannerMode;
use crate::debugger::DividerStyle;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// A config file was read and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub default_divider: DividerStyle,
    pub banners: BannerMode,
    pub indent_width: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded debugger config from '{}': default_divider={}, banners={}, indent_width={}",
            self.path.display(),
            self.default_divider,
            self.banners,
            self.indent_width
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            default_divider = self.default_divider.name(),
            banners = %self.banners,
            indent_width = self.indent_width,
            "{}", self
        );
    }
}
