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

//! Module providing the [`SimpleLogger`] implementation.

use crate::{Cause, LogSink, Logger, Severity, TracingSink};

/// The [`SimpleLogger`] struct. Gates on a single threshold: a level is loggable iff it
/// is at or above `log_level`.
///
/// - The tag is not part of the decision.
/// - The threshold is a raw priority (see [`crate::priority`]). It is not validated, so
///   eg: a threshold of `8` turns everything but [`Logger::force_log`] off.
/// - `wtf` calls skip the threshold, and only depend on [`LogSink::supports_wtf`].
#[derive(Debug, Clone)]
pub struct SimpleLogger<S = TracingSink> {
    log_level: i32,
    sink: S,
}

impl SimpleLogger {
    /// A logger that writes to [`TracingSink`].
    pub fn new(log_level: impl Into<i32>) -> Self { Self::with_sink(log_level, TracingSink) }
}

impl<S: LogSink> SimpleLogger<S> {
    pub fn with_sink(log_level: impl Into<i32>, sink: S) -> Self {
        Self {
            log_level: log_level.into(),
            sink,
        }
    }

    pub fn set_log_level(&mut self, log_level: impl Into<i32>) {
        self.log_level = log_level.into();
    }

    #[must_use]
    pub fn log_level(&self) -> i32 { self.log_level }

    pub fn sink(&self) -> &S { &self.sink }
}

impl<S: LogSink> Logger for SimpleLogger<S> {
    fn is_loggable(&self, _tag: &str, level: i32) -> bool { self.log_level <= level }

    fn emit(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        let pass = match severity {
            Severity::Assert => self.sink.supports_wtf(),
            _ => self.is_loggable(tag, severity.priority()),
        };
        if pass {
            self.sink.write(severity, tag, msg, cause);
        }
    }

    fn force_log(&self, level: i32, tag: &str, msg: &str) { self.sink.println(level, tag, msg); }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_android_core::CodedError;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::{LogLine, RecordingSink, priority};

    const TAG: &str = "SimpleLogger";

    fn new_logger(level: impl Into<i32>) -> (SimpleLogger<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        (SimpleLogger::with_sink(level, sink.clone()), sink)
    }

    #[test]
    fn test_set_log_level() {
        let (mut logger, _) = new_logger(Severity::Verbose);
        assert_eq!(logger.log_level(), priority::VERBOSE);

        logger.set_log_level(Severity::Error);
        assert_eq!(logger.log_level(), priority::ERROR);

        logger.set_log_level(42);
        assert_eq!(logger.log_level(), 42);
    }

    #[test_case(Severity::Assert)]
    #[test_case(Severity::Error)]
    #[test_case(Severity::Warn)]
    #[test_case(Severity::Info)]
    #[test_case(Severity::Debug)]
    #[test_case(Severity::Verbose)]
    fn test_is_loggable_iff_at_or_above_threshold(threshold: Severity) {
        let (logger, _) = new_logger(threshold);
        for level in Severity::iter() {
            assert_eq!(
                logger.is_loggable(TAG, level.priority()),
                level >= threshold,
                "threshold: {threshold}, level: {level}"
            );
        }
    }

    #[test]
    fn test_threshold_warn() {
        let (logger, _) = new_logger(Severity::Warn);
        assert!(!logger.is_loggable(TAG, priority::VERBOSE));
        assert!(!logger.is_loggable(TAG, priority::DEBUG));
        assert!(!logger.is_loggable(TAG, priority::INFO));
        assert!(logger.is_loggable(TAG, priority::WARN));
        assert!(logger.is_loggable(TAG, priority::ERROR));
        assert!(logger.is_loggable(TAG, priority::ASSERT));
    }

    #[test]
    fn test_tag_is_ignored() {
        let (logger, _) = new_logger(Severity::Info);
        assert_eq!(
            logger.is_loggable("a", priority::INFO),
            logger.is_loggable("b", priority::INFO)
        );
    }

    #[test]
    fn test_emit_methods_are_gated() {
        let (logger, sink) = new_logger(Severity::Info);

        logger.v(TAG, "v");
        logger.d(TAG, "d");
        logger.i(TAG, "i");
        logger.w(TAG, "w");
        logger.e(TAG, "e");

        assert_eq!(
            sink.lines(),
            vec![
                LogLine::new(Severity::Info, TAG, "i"),
                LogLine::new(Severity::Warn, TAG, "w"),
                LogLine::new(Severity::Error, TAG, "e"),
            ]
        );
    }

    #[test]
    fn test_wtf_bypasses_threshold() {
        // Nothing at all is loggable at this threshold.
        let (logger, sink) = new_logger(priority::ASSERT + 1);

        logger.e(TAG, "dropped");
        logger.wtf(TAG, "kept");

        assert_eq!(sink.lines(), vec![LogLine::new(Severity::Assert, TAG, "kept")]);
    }

    #[test]
    fn test_wtf_needs_sink_support() {
        let sink = RecordingSink::new(false);
        let logger = SimpleLogger::with_sink(Severity::Verbose, sink.clone());

        logger.wtf(TAG, "dropped");
        logger.wtf_cause(TAG, Some(&CodedError::with_code(1)));

        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_cause_is_appended() {
        let (logger, sink) = new_logger(Severity::Verbose);
        let err = CodedError::new(404, "missing");

        logger.e_with(TAG, "load failed", Some(&err));
        logger.w_cause(TAG, Some(&err));
        logger.d_with(TAG, "no cause", None);

        assert_eq!(
            sink.lines(),
            vec![
                LogLine::new(Severity::Error, TAG, "load failed\n[404] missing"),
                LogLine::new(Severity::Warn, TAG, "[404] missing"),
                LogLine::new(Severity::Debug, TAG, "no cause"),
            ]
        );
    }

    #[test]
    fn test_log_checks_threshold_then_forces() {
        let (logger, sink) = new_logger(Severity::Warn);

        logger.log(priority::INFO, TAG, "dropped");
        logger.log(priority::ERROR, TAG, "kept");

        assert_eq!(sink.lines(), vec![LogLine::new(Severity::Error, TAG, "kept")]);
    }

    #[test]
    fn test_force_log_bypasses_threshold() {
        let (logger, sink) = new_logger(priority::ASSERT + 1);

        logger.force_log(priority::VERBOSE, TAG, "forced");

        assert_eq!(sink.lines(), vec![LogLine::new(Severity::Verbose, TAG, "forced")]);
    }

    #[test]
    fn test_stack_trace_string() {
        let (logger, _) = new_logger(Severity::Verbose);
        assert_eq!(logger.stack_trace_string(None), "");
        assert_eq!(
            logger.stack_trace_string(Some(&CodedError::new(5, "five"))),
            "[5] five"
        );
    }

    #[test]
    fn test_strategy_behind_dyn() {
        let sink = RecordingSink::default();
        let logger: Box<dyn Logger> =
            Box::new(SimpleLogger::with_sink(Severity::Error, sink.clone()));

        logger.w(TAG, "dropped");
        logger.e(TAG, "kept");

        assert_eq!(sink.output(), "E/SimpleLogger: kept");
    }
}
