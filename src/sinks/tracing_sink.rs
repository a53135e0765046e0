// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::TRACING_TARGET;
use crate::traits::{Level, Sink};

/// Sink that hands every line to the active `tracing` subscriber.
///
/// All events share the `section_debugger` target so they can be filtered
/// with `RUST_LOG=section_debugger=info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        TracingSink
    }
}

impl Sink for TracingSink {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Info => tracing::info!(target: TRACING_TARGET, "{}", line),
            Level::Warning => tracing::warn!(target: TRACING_TARGET, "{}", line),
            Level::Error => tracing::error!(target: TRACING_TARGET, "{}", line),
        }
    }
}
