// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::ConfigError;

const THICK: &str = "========================================";
const THIN: &str = "----------------------------------------";
const UNDERSCORE: &str = "________________________________________";
const STAR: &str = "****************************************";
const BLANK: &str = " ";

/// Decorative banner printed when a section opens and closes.
///
/// Every style maps to one fixed literal; the four line styles are
/// [`DIVIDER_WIDTH`](crate::config::consts::DIVIDER_WIDTH) characters wide
/// and `Blank` is a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    #[default]
    Thick,
    Thin,
    Underscore,
    Star,
    Blank,
}

impl DividerStyle {
    pub const ALL: [DividerStyle; 5] = [
        DividerStyle::Thick,
        DividerStyle::Thin,
        DividerStyle::Underscore,
        DividerStyle::Star,
        DividerStyle::Blank,
    ];

    pub fn banner(self) -> &'static str {
        match self {
            DividerStyle::Thick => THICK,
            DividerStyle::Thin => THIN,
            DividerStyle::Underscore => UNDERSCORE,
            DividerStyle::Star => STAR,
            DividerStyle::Blank => BLANK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DividerStyle::Thick => "thick",
            DividerStyle::Thin => "thin",
            DividerStyle::Underscore => "underscore",
            DividerStyle::Star => "star",
            DividerStyle::Blank => "blank",
        }
    }
}

impl Display for DividerStyle {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DividerStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DividerStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownDivider(s.to_string()))
    }
}
