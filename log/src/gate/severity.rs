/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use strum_macros::{Display, EnumCount, EnumIter};

use crate::log_flags;

/// Numeric priorities, the same ones that the platform log uses. [`Severity`] converts to
/// these, and [`crate::SimpleLogger`] thresholds are expressed in them.
pub mod priority {
    pub const VERBOSE: i32 = 2;
    pub const DEBUG: i32 = 3;
    pub const INFO: i32 = 4;
    pub const WARN: i32 = 5;
    pub const ERROR: i32 = 6;
    pub const ASSERT: i32 = 7;
}

/// How important a log message is. The ordering of the variants is the ordering of the
/// severities: `Verbose < Debug < Info < Warn < Error < Assert`.
///
/// `Assert` is what the `wtf` ("what a terrible failure") family of calls emit at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount,
)]
pub enum Severity {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl Severity {
    #[must_use]
    pub const fn priority(self) -> i32 { self as i32 }

    /// Exact match only. Anything outside `2..=7` is `None`.
    #[must_use]
    pub const fn from_priority(priority: i32) -> Option<Self> {
        match priority {
            priority::VERBOSE => Some(Self::Verbose),
            priority::DEBUG => Some(Self::Debug),
            priority::INFO => Some(Self::Info),
            priority::WARN => Some(Self::Warn),
            priority::ERROR => Some(Self::Error),
            priority::ASSERT => Some(Self::Assert),
            _ => None,
        }
    }

    /// Like [`Severity::from_priority`], but out of range priorities are clamped to the
    /// nearest severity.
    #[must_use]
    pub const fn from_priority_clamped(priority: i32) -> Self {
        match Self::from_priority(priority) {
            Some(it) => it,
            None if priority < priority::VERBOSE => Self::Verbose,
            None => Self::Assert,
        }
    }

    /// The bit for this severity in the [`log_flags`] masks.
    #[must_use]
    pub const fn log_flag(self) -> u32 {
        match self {
            Self::Verbose => log_flags::VERBOSE,
            Self::Debug => log_flags::DEBUG,
            Self::Info => log_flags::INFO,
            Self::Warn => log_flags::WARN,
            Self::Error => log_flags::ERROR,
            Self::Assert => log_flags::WTF,
        }
    }

    /// Single letter used in the platform log output, eg: `W` in `W/Sync: slow network`.
    #[must_use]
    pub const fn sigil(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Assert => 'A',
        }
    }

    /// [`tracing`] has no level above `ERROR`, so `Assert` shares it.
    #[must_use]
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Self::Verbose => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error | Self::Assert => tracing::Level::ERROR,
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self { severity.priority() }
}
