// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{Level, Sink};

type LineFn = Box<dyn Fn(&str)>;

/// Sink built from one callback per level.
///
/// Mirrors loggers that expose separate debug/warning/error methods: pass a
/// closure wrapping each of them.
///
/// # Example
/// ```
/// use section_debugger::sinks::FnSink;
/// use section_debugger::traits::Sink;
///
/// let sink = FnSink::new(
///     |line| println!("debug: {line}"),
///     |line| println!("warn: {line}"),
///     |line| eprintln!("error: {line}"),
/// );
/// sink.info("hello");
/// ```
pub struct FnSink {
    debug: LineFn,
    warning: LineFn,
    error: LineFn,
}

impl FnSink {
    pub fn new<D, W, E>(debug: D, warning: W, error: E) -> Self
    where
        D: Fn(&str) + 'static,
        W: Fn(&str) + 'static,
        E: Fn(&str) + 'static,
    {
        Self {
            debug: Box::new(debug),
            warning: Box::new(warning),
            error: Box::new(error),
        }
    }

    /// Same callback for every level.
    pub fn uniform<F>(f: F) -> Self
    where
        F: Fn(&str) + Clone + 'static,
    {
        Self::new(f.clone(), f.clone(), f)
    }
}

impl Sink for FnSink {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Info => (self.debug)(line),
            Level::Warning => (self.warning)(line),
            Level::Error => (self.error)(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_each_level_hits_its_callback() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let (d, w, e) = (seen.clone(), seen.clone(), seen.clone());
        let sink = FnSink::new(
            move |line| d.borrow_mut().push(format!("d:{line}")),
            move |line| w.borrow_mut().push(format!("w:{line}")),
            move |line| e.borrow_mut().push(format!("e:{line}")),
        );

        sink.debug("one");
        sink.warning("two");
        sink.error("three");

        assert_eq!(*seen.borrow(), vec!["d:one", "w:two", "e:three"]);
    }

    #[test]
    fn test_uniform_uses_one_callback() {
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let sink = FnSink::uniform(move |_| *c.borrow_mut() += 1);

        sink.info("a");
        sink.warning("b");
        sink.error("c");

        assert_eq!(*count.borrow(), 3);
    }
}
