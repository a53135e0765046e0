// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete [`Sink`](crate::traits::Sink) backends.
//!
//! * `tracing_sink` - forwards lines to the `tracing` macros
//! * `callback` - three caller-supplied closures, one per level
//! * `capture` - in-memory recording for tests and inspection
//! * `writer` - plain text to any `io::Write`, stderr by default

pub mod callback;
pub mod capture;
pub mod tracing_sink;
pub mod writer;

pub use callback::FnSink;
pub use capture::{CaptureSink, CapturedLine};
pub use tracing_sink::TracingSink;
pub use writer::WriterSink;
