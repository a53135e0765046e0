// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `debugger` - section create/replace/finish events
//! * `config` - configuration loading events

pub mod config;
pub mod debugger;

/// A message that knows its own level and fields.
///
/// `log` emits the message through `tracing` with the struct's fields
/// attached and its `Display` text as the event message.
pub trait StructuredLog: std::fmt::Display {
    fn log(&self);
}
