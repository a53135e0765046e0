// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory sink that records every line it receives.

use std::cell::RefCell;
use std::rc::Rc;

use crate::traits::{Level, Sink};

/// One recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: Level,
    pub text: String,
}

/// Records lines in shared storage.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to a [`Debugger`](crate::debugger::Debugger). Not `Send`: the
/// debugger is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<CapturedLine>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.borrow().clone()
    }

    /// Just the text of every recorded line.
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|l| l.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drains the buffer, returning what it held.
    pub fn take(&self) -> Vec<CapturedLine> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Sink for CaptureSink {
    fn write(&self, level: Level, line: &str) {
        self.lines.borrow_mut().push(CapturedLine {
            level,
            text: line.to_string(),
        });
    }
}
