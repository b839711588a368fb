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

//! Module providing the [`RecordingSink`] implementation.

use std::{fmt::{Display, Formatter},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

use crate::{Cause, LogSink, Severity, compose_message};

/// One line that made it to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
}

impl LogLine {
    pub fn new(severity: Severity, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// Same shape as the platform log output, eg: `W/Sync: slow network`.
impl Display for LogLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}: {}", self.severity.sigil(), self.tag, self.message)
    }
}

/// A [`LogSink`] that keeps every line in memory. Clones share the same lines, so keep a
/// clone around to inspect what a logger wrote.
///
/// ```
/// use r3bl_android_log::{LogLine, Logger, RecordingSink, Severity, SimpleLogger};
///
/// let sink = RecordingSink::default();
/// let logger = SimpleLogger::with_sink(Severity::Verbose, sink.clone());
/// logger.i("Net", "connected");
/// assert_eq!(sink.lines(), vec![LogLine::new(Severity::Info, "Net", "connected")]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<LogLine>>>,
    supports_wtf: bool,
}

impl Default for RecordingSink {
    fn default() -> Self { Self::new(true) }
}

impl RecordingSink {
    /// `supports_wtf` stands in for the platform version check, see
    /// [`LogSink::supports_wtf`].
    #[must_use]
    pub fn new(supports_wtf: bool) -> Self {
        Self {
            lines: Arc::default(),
            supports_wtf,
        }
    }

    /// A copy of everything written so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<LogLine> { self.lock().clone() }

    /// Lines rendered w/ [`LogLine`]'s [`Display`] impl, joined w/ newlines.
    #[must_use]
    pub fn output(&self) -> String {
        self.lock()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&self) { self.lock().clear(); }

    /// A panic while the lock was held can't leave a `Vec` half written, so a poisoned
    /// lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<LogLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn write(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        let line = LogLine::new(severity, tag, compose_message(msg, cause));
        self.lock().push(line);
    }

    fn supports_wtf(&self) -> bool { self.supports_wtf }
}
