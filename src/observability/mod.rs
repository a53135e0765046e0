// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the debugger's own diagnostics.
//!
//! Output written through a [`Sink`](crate::traits::Sink) is the user's
//! debugging text. What lives here is different: events about the debugger
//! itself (a section was replaced, an unknown name was finished, a config
//! file was loaded), always emitted through `tracing` and never through the
//! sink. Message types follow a struct-based pattern with `Display` to:
//!
//! * Keep message wording in one place instead of scattered format strings
//! * Attach structured fields alongside the human-readable text
//!
//! # Architecture
//!
//! * `messages::debugger` - section lifecycle events
//! * `messages::config` - configuration loading events
//! * `subscriber` - a ready-made `tracing-subscriber` setup
//!
//! # Usage
//!
//! ```rust
//! use section_debugger::observability::messages::debugger::UnknownSectionFinished;
//! use section_debugger::observability::messages::StructuredLog;
//!
//! UnknownSectionFinished { name: "never_created" }.log();
//! ```

pub mod messages;
pub mod subscriber;

pub use subscriber::init_tracing;
