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

use std::{error::Error, fmt::Write};

use crate::Severity;

/// An optional error that is attached to a log call, along w/ its `source()` chain.
pub type Cause<'a> = &'a (dyn Error + 'static);

/// Where log calls end up once a gate lets them through. This is the platform log in
/// production and a [`crate::RecordingSink`] in tests.
///
/// A sink can have its own filtering (see [`LogSink::is_loggable`]). It composes with the
/// gates in this crate, which have no control over it.
pub trait LogSink {
    /// Write one message. `cause`, if any, is rendered w/ [`stack_trace_string`] and
    /// appended to `msg` (see [`compose_message`]).
    fn write(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>);

    /// Write one message at a raw `priority`. Priorities that don't map to a
    /// [`Severity`] are clamped to the nearest one.
    fn println(&self, priority: i32, tag: &str, msg: &str) {
        self.write(Severity::from_priority_clamped(priority), tag, msg, None);
    }

    /// Whether this sink can emit [`Severity::Assert`] messages at all. On the platform
    /// this depends on the OS version. It is checked on every `wtf` call, even when the
    /// gate has the `WTF` flag enabled.
    fn supports_wtf(&self) -> bool { true }

    /// The sink's own opinion on whether `level` would be written for `tag`.
    fn is_loggable(&self, _tag: &str, _level: i32) -> bool { true }
}

/// Renders `cause` and every error in its `source()` chain, one per line:
///
/// ```text
/// save failed
/// Caused by: disk full
/// ```
///
/// Returns an empty string when there is no cause.
#[must_use]
pub fn stack_trace_string(cause: Option<Cause<'_>>) -> String {
    let Some(cause) = cause else {
        return String::new();
    };

    let mut acc = cause.to_string();
    let mut current = cause.source();
    while let Some(it) = current {
        // Writing to a String can't fail.
        let _ = write!(acc, "\nCaused by: {it}");
        current = it.source();
    }
    acc
}

/// The text that a sink actually writes for `msg` + `cause`:
/// - no cause: `msg`.
/// - empty `msg`: the stack trace string of the cause.
/// - both: `msg`, a newline, then the stack trace string of the cause.
#[must_use]
pub fn compose_message(msg: &str, cause: Option<Cause<'_>>) -> String {
    match cause {
        None => msg.to_string(),
        Some(_) if msg.is_empty() => stack_trace_string(cause),
        Some(_) => format!("{msg}\n{}", stack_trace_string(cause)),
    }
}
