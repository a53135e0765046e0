// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod divider;
mod registry;
mod section;

#[cfg(test)]
mod integration_tests;

pub use divider::DividerStyle;
pub use registry::Debugger;
pub use section::{ActiveSection, Section};
