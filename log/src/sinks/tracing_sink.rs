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

use crate::{Cause, LogSink, Severity, compose_message};

/// The default [`LogSink`]. Every message becomes a [`tracing`] event w/ a `tag` field.
///
/// Nothing is printed unless a subscriber is installed, eg: via
/// [`crate::try_initialize_logging_global`]. [`Severity::Assert`] is emitted at
/// [`tracing::Level::ERROR`] w/ an extra `wtf = true` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, severity: Severity, tag: &str, msg: &str, cause: Option<Cause<'_>>) {
        let message = compose_message(msg, cause);
        match severity {
            Severity::Verbose => tracing::trace!(tag, "{message}"),
            Severity::Debug => tracing::debug!(tag, "{message}"),
            Severity::Info => tracing::info!(tag, "{message}"),
            Severity::Warn => tracing::warn!(tag, "{message}"),
            Severity::Error => tracing::error!(tag, "{message}"),
            Severity::Assert => tracing::error!(tag, wtf = true, "{message}"),
        }
    }

    /// Asks the current subscriber whether it would record an event at `level`. The tag
    /// plays no part in it.
    fn is_loggable(&self, _tag: &str, level: i32) -> bool {
        match Severity::from_priority_clamped(level) {
            Severity::Verbose => tracing::enabled!(tracing::Level::TRACE),
            Severity::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Severity::Info => tracing::enabled!(tracing::Level::INFO),
            Severity::Warn => tracing::enabled!(tracing::Level::WARN),
            Severity::Error | Severity::Assert => tracing::enabled!(tracing::Level::ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{DisplayPreference, TracingConfig, WriterConfig};

    #[test]
    fn test_is_loggable_follows_subscriber() {
        let _guard = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: LevelFilter::WARN,
        }
        .install_thread_local()
        .unwrap();

        let sink = TracingSink;
        assert!(!sink.is_loggable("Tag", Severity::Debug.priority()));
        assert!(!sink.is_loggable("Tag", Severity::Info.priority()));
        assert!(sink.is_loggable("Tag", Severity::Warn.priority()));
        assert!(sink.is_loggable("Tag", Severity::Assert.priority()));
    }
}
