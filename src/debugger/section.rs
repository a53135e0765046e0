// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::debugger::{Debugger, DividerStyle};
use crate::traits::{Level, Sink};

/// A named scope of output bounded by opening and closing banners.
///
/// This is the registry's record of a section. Logging goes through an
/// [`ActiveSection`] handle, which borrows the owning [`Debugger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    divider: DividerStyle,
    indentation: usize,
}

impl Section {
    pub(crate) fn new(name: String, divider: DividerStyle, indentation: usize) -> Self {
        Self {
            name,
            divider,
            indentation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn divider(&self) -> DividerStyle {
        self.divider
    }

    /// Nesting depth: how many other sections were open when this one was
    /// created, minus one for each of them finished since.
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub(crate) fn outdent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }

    /// `"{indent}[name] message"`, with `indentation * indent_width` spaces.
    pub(crate) fn format_line(&self, indent_width: usize, message: &str) -> String {
        let mut line = " ".repeat(self.indentation.saturating_mul(indent_width));
        line.push('[');
        line.push_str(&self.name);
        line.push_str("] ");
        line.push_str(message);
        line
    }
}

/// Logging handle for one active section.
///
/// Holds the debugger mutably for as long as it lives, so the section it
/// names cannot be finished or replaced out from under it. Every leveled
/// call writes exactly one line, prefixed with `[name] `.
///
/// # Example
/// ```
/// use section_debugger::debugger::{Debugger, DividerStyle};
/// use section_debugger::sinks::CaptureSink;
///
/// let sink = CaptureSink::new();
/// let mut debugger = Debugger::new(sink.clone());
///
/// let section = debugger.create("load", DividerStyle::Thin);
/// section.info("reading manifest").warning("manifest is empty");
/// section.finish();
///
/// assert!(sink.texts().contains(&"[load] manifest is empty".to_string()));
/// assert!(debugger.section("load").is_none());
/// ```
pub struct ActiveSection<'a, S: Sink> {
    debugger: &'a mut Debugger<S>,
    name: String,
}

impl<'a, S: Sink> ActiveSection<'a, S> {
    pub(crate) fn new(debugger: &'a mut Debugger<S>, name: String) -> Self {
        Self { debugger, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn divider(&self) -> DividerStyle {
        self.record().divider()
    }

    pub fn indentation(&self) -> usize {
        self.record().indentation()
    }

    /// The registry entry behind this handle.
    pub fn record(&self) -> &Section {
        self.debugger.active(&self.name)
    }

    pub fn log(&self, message: &str) -> &Self {
        self.write(Level::Info, message)
    }

    pub fn info(&self, message: &str) -> &Self {
        self.write(Level::Info, message)
    }

    pub fn debug(&self, message: &str) -> &Self {
        self.write(Level::Info, message)
    }

    pub fn warning(&self, message: &str) -> &Self {
        self.write(Level::Warning, message)
    }

    pub fn error(&self, message: &str) -> &Self {
        self.write(Level::Error, message)
    }

    /// Print the closing banner and remove the section from the registry.
    pub fn finish(self) {
        self.debugger.finish(&self.name);
    }

    fn write(&self, level: Level, message: &str) -> &Self {
        self.debugger.write_in_section(&self.name, level, message);
        self
    }
}
