// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for section lifecycle events.

use crate::debugger::DividerStyle;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A section was registered.
///
/// # Log Level
/// `debug!` - Internal bookkeeping
pub struct SectionCreated<'a> {
    pub name: &'a str,
    pub divider: DividerStyle,
    pub indentation: usize,
}

impl Display for SectionCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Section '{}' created: divider={}, indentation={}",
            self.name, self.divider, self.indentation
        )
    }
}

impl StructuredLog for SectionCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            section = self.name,
            divider = self.divider.name(),
            indentation = self.indentation,
            "{}", self
        );
    }
}

/// A section was created under a name that was already active.
///
/// # Log Level
/// `debug!` - Last writer wins; not a failure
///
/// # Example
/// ```
/// use section_debugger::observability::messages::debugger::SectionReplaced;
///
/// let msg = SectionReplaced { name: "parse" };
/// assert_eq!(msg.to_string(), "Section 'parse' replaced an active section with the same name");
/// ```
pub struct SectionReplaced<'a> {
    pub name: &'a str,
}

impl Display for SectionReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Section '{}' replaced an active section with the same name",
            self.name
        )
    }
}

impl StructuredLog for SectionReplaced<'_> {
    fn log(&self) {
        tracing::debug!(section = self.name, "{}", self);
    }
}

/// A section was finished and removed.
///
/// # Log Level
/// `debug!` - Internal bookkeeping
pub struct SectionFinished<'a> {
    pub name: &'a str,
    pub remaining: usize,
}

impl Display for SectionFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Section '{}' finished: {} section(s) still active",
            self.name, self.remaining
        )
    }
}

impl StructuredLog for SectionFinished<'_> {
    fn log(&self) {
        tracing::debug!(section = self.name, remaining = self.remaining, "{}", self);
    }
}

/// `finish` was called with a name that is not active.
///
/// # Log Level
/// `trace!` - Tolerated silently
pub struct UnknownSectionFinished<'a> {
    pub name: &'a str,
}

impl Display for UnknownSectionFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring finish for unknown section '{}'", self.name)
    }
}

impl StructuredLog for UnknownSectionFinished<'_> {
    fn log(&self) {
        tracing::trace!(section = self.name, "{}", self);
    }
}
