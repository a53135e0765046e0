// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // presentation settings + loader
pub mod debugger;      // section registry
pub mod errors;        // error handling
pub mod observability; // the debugger's own diagnostics
pub mod sinks;         // output backends
pub mod traits;        // sink abstraction

#[cfg(test)]
mod test_utils;

pub use config::{BannerMode, DebuggerConfig};
pub use debugger::{ActiveSection, Debugger, DividerStyle, Section};
pub use traits::{Level, Sink};
