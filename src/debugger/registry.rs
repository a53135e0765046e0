// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::config::consts::{MAX_INDENT_WIDTH, SECTION_BEGIN_BANNER, SECTION_COMPLETE_BANNER};
use crate::config::{BannerMode, DebuggerConfig};
use crate::debugger::{ActiveSection, DividerStyle, Section};
use crate::observability::messages::debugger::{
    SectionCreated, SectionFinished, SectionReplaced, UnknownSectionFinished,
};
use crate::observability::messages::StructuredLog;
use crate::sinks::TracingSink;
use crate::traits::{Level, Sink};

/// Registry of named output sections writing through one sink.
///
/// Section names are unique at any point in time; creating a name that is
/// already active replaces it. Finishing an unknown name is a no-op.
///
/// Not thread-safe: all operations take `&self` or `&mut self` on a plain
/// map.
pub struct Debugger<S: Sink = TracingSink> {
    sink: S,
    sections: HashMap<String, Section>,
    config: DebuggerConfig,
}

impl Debugger<TracingSink> {
    /// Debugger writing to the active `tracing` subscriber.
    pub fn tracing() -> Self {
        Self::new(TracingSink::new())
    }
}

impl<S: Sink> Debugger<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, DebuggerConfig::default())
    }

    /// `indent_width` above the configured maximum is clamped, since the
    /// struct may not have gone through [`DebuggerConfig::validate`].
    pub fn with_config(sink: S, mut config: DebuggerConfig) -> Self {
        config.indent_width = config.indent_width.min(MAX_INDENT_WIDTH);
        Self {
            sink,
            sections: HashMap::new(),
            config,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Register a section and print its opening banner.
    ///
    /// The new section's indentation is the number of sections active at
    /// this moment, including one about to be replaced. Reusing an active
    /// name replaces that section without printing its closing banner.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        divider: DividerStyle,
    ) -> ActiveSection<'_, S> {
        let name = name.into();
        let indentation = self.sections.len();

        if self.sections.remove(&name).is_some() {
            SectionReplaced { name: &name }.log();
        }

        let section = Section::new(name.clone(), divider, indentation);
        SectionCreated {
            name: &name,
            divider,
            indentation: section.indentation(),
        }
        .log();

        self.write_line(&section, Level::Info, divider.banner());
        if self.config.banners == BannerMode::Verbose {
            self.write_line(&section, Level::Info, SECTION_BEGIN_BANNER);
        }
        self.sections.insert(name.clone(), section);

        ActiveSection::new(self, name)
    }

    /// [`create`](Self::create) with the configured default divider.
    pub fn create_default(&mut self, name: impl Into<String>) -> ActiveSection<'_, S> {
        let divider = self.config.default_divider;
        self.create(name, divider)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Logging handle for an active section, if there is one.
    pub fn section_mut(&mut self, name: &str) -> Option<ActiveSection<'_, S>> {
        if self.sections.contains_key(name) {
            Some(ActiveSection::new(self, name.to_string()))
        } else {
            None
        }
    }

    /// Print the closing banner for `name` and remove it.
    ///
    /// Every remaining section with positive indentation moves out one step.
    pub fn finish(&mut self, name: &str) {
        let Some(section) = self.sections.remove(name) else {
            UnknownSectionFinished { name }.log();
            return;
        };

        if self.config.banners == BannerMode::Verbose {
            self.write_line(&section, Level::Info, SECTION_COMPLETE_BANNER);
        }
        self.write_line(&section, Level::Info, section.divider().banner());

        for remaining in self.sections.values_mut() {
            remaining.outdent();
        }

        SectionFinished {
            name,
            remaining: self.sections.len(),
        }
        .log();
    }

    /// Finish every active section, innermost first.
    pub fn finish_all(&mut self) {
        let mut order: Vec<(usize, String)> = self
            .sections
            .values()
            .map(|s| (s.indentation(), s.name().to_string()))
            .collect();
        order.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        for (_, name) in order {
            self.finish(&name);
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Names of all active sections, sorted.
    pub fn active_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // Top-level output, outside any section.

    pub fn info(&self, message: &str) {
        self.sink.info(message);
    }

    pub fn warn(&self, message: &str) {
        self.sink.warning(message);
    }

    pub fn error(&self, message: &str) {
        self.sink.error(message);
    }

    pub fn divider(&self, style: DividerStyle) {
        self.sink.info(style.banner());
    }

    pub fn blank(&self) {
        self.divider(DividerStyle::Blank);
    }

    /// Registry entry for a name an [`ActiveSection`] holds.
    ///
    /// Handles are only built for live names and borrow the debugger
    /// mutably, so the entry is always present.
    pub(crate) fn active(&self, name: &str) -> &Section {
        &self.sections[name]
    }

    pub(crate) fn write_in_section(&self, name: &str, level: Level, message: &str) {
        self.write_line(self.active(name), level, message);
    }

    fn write_line(&self, section: &Section, level: Level, message: &str) {
        let line = section.format_line(self.config.indent_width, message);
        self.sink.write(level, &line);
    }
}
