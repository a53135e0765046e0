// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The output backend abstraction every debugger writes through.

use std::fmt::{Display, Formatter};

/// Severity of a single output line.
///
/// `Info` also covers the debug/log calls; the debugger never distinguishes
/// them once a line reaches a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives finished message strings.
///
/// Implementors only provide [`Sink::write`]; the leveled helpers route
/// through it. Sinks take `&self` so a debugger can hand out shared
/// references while it logs, which means any recording sink needs interior
/// mutability.
pub trait Sink {
    fn write(&self, level: Level, line: &str);

    fn info(&self, line: &str) {
        self.write(Level::Info, line);
    }

    fn debug(&self, line: &str) {
        self.write(Level::Info, line);
    }

    fn warning(&self, line: &str) {
        self.write(Level::Warning, line);
    }

    fn error(&self, line: &str) {
        self.write(Level::Error, line);
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line);
    }
}
