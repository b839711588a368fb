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

use crate::{Cause, Severity, stack_trace_string};

/// Trait to have a common interface for every gating strategy: [`crate::GlobalLogger`],
/// [`crate::GatedLogger`], and [`crate::SimpleLogger`]. Pick one at start up and hand
/// out a `Box<dyn Logger>` or `&dyn Logger`.
///
/// Implementors provide the gate ([`Logger::is_loggable`] and [`Logger::emit`]) and the
/// unconditional path to the sink ([`Logger::force_log`]). Everything else has a default
/// implementation on top of those three.
///
/// The per severity methods come in 3 shapes, mirroring the platform log:
/// - `d(tag, msg)`
/// - `d_with(tag, msg, cause)`, where `cause` is an optional [`std::error::Error`]
/// - `w_cause(tag, cause)` and `wtf_cause(tag, cause)`, which only log the cause
pub trait Logger {
    /// Whether a message at `level` (a raw priority, see [`crate::priority`]) would be
    /// written for `tag`.
    fn is_loggable(&self, tag: &str, level: i32) -> bool;

    /// Run `severity` through this logger's gate and, if it passes, hand the message to
    /// the sink.
    fn emit(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>);

    /// Hand the message straight to the sink, w/out asking the gate.
    fn force_log(&self, level: i32, tag: &str, msg: &str);

    /// [`Logger::force_log`] if [`Logger::is_loggable`] says so.
    fn log(&self, level: i32, tag: &str, msg: &str) {
        if self.is_loggable(tag, level) {
            self.force_log(level, tag, msg);
        }
    }

    /// See [`stack_trace_string`].
    fn stack_trace_string(&self, cause: Option<Cause<'_>>) -> String {
        stack_trace_string(cause)
    }

    fn v(&self, tag: &str, msg: &str) { self.emit(Severity::Verbose, tag, msg, None); }

    fn v_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Verbose, tag, msg, cause);
    }

    fn d(&self, tag: &str, msg: &str) { self.emit(Severity::Debug, tag, msg, None); }

    fn d_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Debug, tag, msg, cause);
    }

    fn i(&self, tag: &str, msg: &str) { self.emit(Severity::Info, tag, msg, None); }

    fn i_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Info, tag, msg, cause);
    }

    fn w(&self, tag: &str, msg: &str) { self.emit(Severity::Warn, tag, msg, None); }

    fn w_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Warn, tag, msg, cause);
    }

    fn w_cause(&self, tag: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Warn, tag, "", cause);
    }

    fn e(&self, tag: &str, msg: &str) { self.emit(Severity::Error, tag, msg, None); }

    fn e_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Error, tag, msg, cause);
    }

    fn wtf(&self, tag: &str, msg: &str) { self.emit(Severity::Assert, tag, msg, None); }

    fn wtf_with(&self, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Assert, tag, msg, cause);
    }

    fn wtf_cause(&self, tag: &str, cause: Option<Cause<'_>>) {
        self.emit(Severity::Assert, tag, "", cause);
    }
}
