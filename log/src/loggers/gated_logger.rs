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

use crate::{Cause, LogGate, LogSink, Logger, Severity, TracingSink};

/// Gates on a [`LogGate`] that it owns, instead of the process wide one. Use this when
/// different parts of an app (or different tests) need different enabled sets.
///
/// - Each per severity method checks its own flag.
/// - `wtf` calls check [`crate::log_flags::WTF`] **and** [`LogSink::supports_wtf`].
/// - [`Logger::is_loggable`] maps the level to its flag. Levels that aren't one of the
///   six severities are never loggable.
#[derive(Debug, Clone)]
pub struct GatedLogger<S = TracingSink> {
    gate: LogGate,
    sink: S,
}

impl Default for GatedLogger {
    fn default() -> Self { Self::new(LogGate::default()) }
}

impl GatedLogger {
    /// A logger that writes to [`TracingSink`].
    #[must_use]
    pub fn new(gate: LogGate) -> Self { Self::with_sink(gate, TracingSink) }
}

impl<S: LogSink> GatedLogger<S> {
    pub fn with_sink(gate: LogGate, sink: S) -> Self { Self { gate, sink } }

    pub fn gate(&self) -> &LogGate { &self.gate }

    /// Change what is enabled, eg: `logger.gate_mut().switch_to_release_mode()`.
    pub fn gate_mut(&mut self) -> &mut LogGate { &mut self.gate }

    pub fn sink(&self) -> &S { &self.sink }
}

impl<S: LogSink> Logger for GatedLogger<S> {
    fn is_loggable(&self, _tag: &str, level: i32) -> bool {
        Severity::from_priority(level).is_some_and(|it| self.gate.allows(it))
    }

    fn emit(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        if !self.gate.allows(severity) {
            return;
        }
        if severity == Severity::Assert && !self.sink.supports_wtf() {
            return;
        }
        self.sink.write(severity, tag, msg, cause);
    }

    fn force_log(&self, level: i32, tag: &str, msg: &str) { self.sink.println(level, tag, msg); }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_android_core::CodedError;
    use serial_test::serial;

    use super::*;
    use crate::{LogLine, RecordingSink, global_log_gate, log_flags, priority};

    const TAG: &str = "GatedLogger";

    fn new_logger(enabled_logs: u32) -> (GatedLogger<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        (GatedLogger::with_sink(LogGate::new(enabled_logs), sink.clone()), sink)
    }

    #[test]
    fn test_default_gate() {
        assert_eq!(GatedLogger::default().gate(), &LogGate::new(log_flags::DEFAULT));
    }

    #[test]
    fn test_each_method_checks_its_flag() {
        let (logger, sink) = new_logger(log_flags::VERBOSE | log_flags::ERROR);

        logger.v(TAG, "v");
        logger.d(TAG, "d");
        logger.i(TAG, "i");
        logger.w(TAG, "w");
        logger.e(TAG, "e");
        logger.wtf(TAG, "wtf");

        assert_eq!(sink.output(), "V/GatedLogger: v\nE/GatedLogger: e");
    }

    #[test]
    fn test_wtf_needs_flag_and_sink_support() {
        let supported = RecordingSink::new(true);
        let unsupported = RecordingSink::new(false);
        let gate = LogGate::new(log_flags::WTF);

        GatedLogger::with_sink(gate, supported.clone()).wtf(TAG, "kept");
        GatedLogger::with_sink(gate, unsupported.clone()).wtf(TAG, "dropped");
        GatedLogger::with_sink(LogGate::new(log_flags::NONE), supported.clone())
            .wtf(TAG, "dropped");

        assert_eq!(supported.lines(), vec![LogLine::new(Severity::Assert, TAG, "kept")]);
        assert!(unsupported.lines().is_empty());
    }

    #[test]
    fn test_gate_mut() {
        let (mut logger, sink) = new_logger(log_flags::DEFAULT);

        logger.gate_mut().switch_to_release_mode();
        logger.d(TAG, "dropped");
        logger.i(TAG, "kept");

        assert_eq!(sink.lines(), vec![LogLine::new(Severity::Info, TAG, "kept")]);
    }

    #[test]
    fn test_is_loggable_and_log() {
        let (logger, sink) = new_logger(log_flags::WARN);

        assert!(logger.is_loggable(TAG, priority::WARN));
        assert!(!logger.is_loggable(TAG, priority::ERROR));
        assert!(!logger.is_loggable(TAG, 0));
        assert!(!logger.is_loggable(TAG, 99));

        logger.log(priority::ERROR, TAG, "dropped");
        logger.log(priority::WARN, TAG, "kept");
        logger.force_log(priority::DEBUG, TAG, "forced");

        assert_eq!(
            sink.lines(),
            vec![
                LogLine::new(Severity::Warn, TAG, "kept"),
                LogLine::new(Severity::Debug, TAG, "forced"),
            ]
        );
    }

    #[test]
    fn test_cause() {
        let (logger, sink) = new_logger(log_flags::ALL);
        logger.i_with(TAG, "retrying", Some(&CodedError::new(503, "busy")));
        assert_eq!(sink.output(), "I/GatedLogger: retrying\n[503] busy");
    }

    #[test]
    #[serial]
    fn test_from_global_is_a_snapshot() {
        global_log_gate::switch_to_release_mode();
        let mut logger = GatedLogger::with_sink(LogGate::from_global(), RecordingSink::default());
        global_log_gate::reset();

        assert_eq!(logger.gate().enabled_flags(), log_flags::RELEASE_MODE);

        logger.gate_mut().enable_all();
        assert_eq!(global_log_gate::enabled_flags(), log_flags::DEFAULT);
    }
}
