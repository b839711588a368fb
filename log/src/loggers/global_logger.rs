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

//! The process wide gating strategy. The free functions here write to [`TracingSink`]
//! and check [`global_log_gate`] on every call, so changing the gate at runtime (eg:
//! [`global_log_gate::switch_to_release_mode`]) takes effect immediately everywhere.
//!
//! ```
//! use r3bl_android_log::{global_log_gate, global_logger};
//!
//! global_log_gate::switch_to_release_mode();
//! global_logger::d("Sync", "not written, DEBUG is off");
//! global_logger::i("Sync", "written, if a subscriber is installed");
//! global_log_gate::reset();
//! ```

use crate::{Cause, LogSink, Logger, Severity, TracingSink, global_log_gate};

/// Run `severity` through [`global_log_gate`], and the `wtf` sink check, then write to
/// `sink`. All the free functions in this module, and [`GlobalLogger`], end up here.
pub fn emit_to(
    sink: &impl LogSink,
    severity: Severity,
    tag: &str,
    msg: &str,
    cause: Option<Cause<'_>>,
) {
    if !global_log_gate::allows(severity) {
        return;
    }
    if severity == Severity::Assert && !sink.supports_wtf() {
        return;
    }
    sink.write(severity, tag, msg, cause);
}

/// The sink's own filter. [`global_log_gate`] is **not** consulted, since the two
/// compose independently.
pub fn is_loggable(tag: &str, level: i32) -> bool { TracingSink.is_loggable(tag, level) }

/// See [`crate::stack_trace_string`].
pub fn stack_trace_string(cause: Option<Cause<'_>>) -> String {
    crate::stack_trace_string(cause)
}

pub fn v(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Verbose, tag, msg, None); }

pub fn v_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Verbose, tag, msg, cause);
}

pub fn d(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Debug, tag, msg, None); }

pub fn d_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Debug, tag, msg, cause);
}

pub fn i(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Info, tag, msg, None); }

pub fn i_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Info, tag, msg, cause);
}

pub fn w(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Warn, tag, msg, None); }

pub fn w_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Warn, tag, msg, cause);
}

pub fn w_cause(tag: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Warn, tag, "", cause);
}

pub fn e(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Error, tag, msg, None); }

pub fn e_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Error, tag, msg, cause);
}

pub fn wtf(tag: &str, msg: &str) { emit_to(&TracingSink, Severity::Assert, tag, msg, None); }

pub fn wtf_with(tag: &str, msg: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Assert, tag, msg, cause);
}

pub fn wtf_cause(tag: &str, cause: Option<Cause<'_>>) {
    emit_to(&TracingSink, Severity::Assert, tag, "", cause);
}

/// [`Logger`] on top of [`global_log_gate`], for code that wants a `dyn Logger` but
/// should still follow the process wide gate.
///
/// Its [`Logger::is_loggable`] asks both the gate and the sink, unlike the free
/// function [`is_loggable`] which only asks the sink.
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger<S = TracingSink> {
    sink: S,
}

impl<S: LogSink> GlobalLogger<S> {
    pub fn with_sink(sink: S) -> Self { Self { sink } }

    pub fn sink(&self) -> &S { &self.sink }
}

impl<S: LogSink> Logger for GlobalLogger<S> {
    fn is_loggable(&self, tag: &str, level: i32) -> bool {
        Severity::from_priority(level).is_some_and(global_log_gate::allows)
            && self.sink.is_loggable(tag, level)
    }

    fn emit(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        emit_to(&self.sink, severity, tag, msg, cause);
    }

    fn force_log(&self, level: i32, tag: &str, msg: &str) { self.sink.println(level, tag, msg); }
}
