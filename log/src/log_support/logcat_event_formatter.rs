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

//! Renders [`tracing`] events the way the platform log prints them:
//!
//! ```text
//! W/Sync: slow network
//! E/Sync: upload failed
//! E/Sync: Caused by: disk full
//! ```
//!
//! Every line of a multi line message gets its own `<sigil>/<tag>: ` prefix. The tag is
//! the `tag` field that [`crate::TracingSink`] attaches to every event. Events from
//! anywhere else fall back to their target (module path) as the tag.

use std::fmt::{self, Write as _};

use tracing::{Event, Level, Subscriber, field::{Field, Visit}};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         registry::LookupSpan};

use crate::Severity;

pub mod logcat_event_formatter_constants {
    pub const TAG_FIELD: &str = "tag";
    pub const MESSAGE_FIELD: &str = "message";
    pub const WTF_FIELD: &str = "wtf";
}

use logcat_event_formatter_constants::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogcatEventFormatter;

impl LogcatEventFormatter {
    /// `wtf` marks an [`Severity::Assert`] event, since [`tracing`] has no such level.
    #[must_use]
    pub fn sigil(level: Level, wtf: bool) -> char {
        let severity = match level {
            Level::TRACE => Severity::Verbose,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            _ if wtf => Severity::Assert,
            _ => Severity::Error,
        };
        severity.sigil()
    }
}

impl<S, N> FormatEvent<S, N> for LogcatEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut f: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let metadata = event.metadata();
        let sigil = Self::sigil(*metadata.level(), fields.wtf);
        let tag = fields.tag.as_deref().unwrap_or_else(|| metadata.target());

        let mut lines = fields.message.lines().peekable();
        if lines.peek().is_none() {
            return writeln!(f, "{sigil}/{tag}: {}", fields.extra);
        }
        for (index, line) in lines.enumerate() {
            if index == 0 {
                writeln!(f, "{sigil}/{tag}: {line}{}", fields.extra)?;
            } else {
                writeln!(f, "{sigil}/{tag}: {line}")?;
            }
        }
        Ok(())
    }
}

/// Collects the fields of one event. Anything that isn't `message`, `tag`, or `wtf` is
/// appended to the first line as ` name=value`.
#[derive(Debug, Default)]
struct EventFields {
    message: String,
    tag: Option<String>,
    wtf: bool,
    extra: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            TAG_FIELD => self.tag = Some(value.to_string()),
            MESSAGE_FIELD => self.message = value.to_string(),
            name => {
                let _ = write!(self.extra, " {name}={value}");
            }
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == WTF_FIELD {
            self.wtf = value;
        } else {
            let _ = write!(self.extra, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            MESSAGE_FIELD => self.message = format!("{value:?}"),
            TAG_FIELD => self.tag = Some(format!("{value:?}")),
            name => {
                let _ = write!(self.extra, " {name}={value:?}");
            }
        }
    }
}
