// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::io::{self, Write};

use crate::traits::{Level, Sink};

/// Writes `LEVEL line` to an `io::Write`.
///
/// Write errors are dropped.
pub struct WriterSink<W: Write> {
    out: RefCell<W>,
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&self, level: Level, line: &str) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{:<5} {}", level.as_str(), line);
    }
}
