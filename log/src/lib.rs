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

//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [Severities and log flags](#severities-and-log-flags)
//! - [Three ways to gate](#three-ways-to-gate)
//! - [Sinks](#sinks)
//! - [Configure tracing output](#configure-tracing-output)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! This crate answers one question for every log call: "is this severity loggable right
//! now?" and, if the answer is yes, forwards the call to a [`LogSink`]. The default sink
//! is [`TracingSink`], which turns every call into a [`tracing`] event.
//!
//! # Severities and log flags
//!
//! [`Severity`] is ordered `Verbose < Debug < Info < Warn < Error < Assert`, and each one
//! has the same numeric priority that the platform log uses (2 to 7). Each severity also
//! has a bit in [`log_flags`], so any subset of them can be enabled at once.
//!
//! # Three ways to gate
//!
//! All three implement the [`Logger`] trait, so the strategy can be chosen once at start
//! up and the rest of the app only sees a `dyn Logger`.
//!
//! 1. [`GlobalLogger`] (and the free functions in [`global_logger`]) checks the process
//!    wide bitmask in [`global_log_gate`]. Defaults to `DEBUG | INFO | WARN | ERROR`.
//! 2. [`GatedLogger`] holds its own [`LogGate`] bitmask. Same semantics, no global state.
//! 3. [`SimpleLogger`] holds an integer threshold. A level is loggable iff it is at or
//!    above the threshold. `wtf` calls skip the threshold.
//!
//! ```
//! use r3bl_android_log::{global_log_gate, log_flags, Logger, RecordingSink, SimpleLogger,
//!                        Severity};
//!
//! let sink = RecordingSink::default();
//! let logger = SimpleLogger::with_sink(Severity::Warn, sink.clone());
//! logger.d("Sync", "skipped");
//! logger.w("Sync", "slow network");
//! assert_eq!(sink.lines().len(), 1);
//!
//! global_log_gate::disable_all();
//! global_log_gate::enable(log_flags::VERBOSE);
//! assert!(global_log_gate::is_enabled(log_flags::VERBOSE));
//! assert!(!global_log_gate::is_enabled(log_flags::DEBUG));
//! global_log_gate::reset();
//! ```
//!
//! # Sinks
//!
//! - [`TracingSink`] forwards to [`tracing`].
//! - [`RecordingSink`] keeps every line in memory, which is handy in tests.
//!
//! # Configure tracing output
//!
//! When [`TracingSink`] is used, something has to install a [`tracing`] subscriber.
//! [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`] do that
//! w/ output that looks like the platform log, eg: `W/Sync: slow network`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod gate;
pub mod log_support;
pub mod loggers;
pub mod sinks;
#[cfg(test)]
mod test_fixtures;

// Re-export.
pub use gate::*;
pub use log_support::*;
pub use loggers::*;
pub use sinks::*;
