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

//! Binary under test for `tests/gated_log_test_bin_stdio.rs`. There is no easy way to
//! test [`DisplayPreference::Stdout`] and [`DisplayPreference::Stderr`] w/out spawning a
//! new process.
//!
//! Args (both optional, in any order):
//! - `stdout` or `stderr`: where the logs go. Defaults to `stdout`.
//! - `debug` or `release`: [`global_log_gate`] preset. Defaults to the default gate.
//!
//! Logs one message per severity w/ the `demo` tag, via [`global_logger`].

use r3bl_android_core::CommonResult;
use r3bl_android_log::{DisplayPreference, TracingConfig, WriterConfig, global_log_gate,
                       global_logger};
use tracing_core::LevelFilter;

const TAG: &str = "demo";

fn main() -> CommonResult<()> {
    let mut display_preference = DisplayPreference::Stdout;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "stdout" => display_preference = DisplayPreference::Stdout,
            "stderr" => display_preference = DisplayPreference::Stderr,
            "debug" => global_log_gate::switch_to_debug_mode(),
            "release" => global_log_gate::switch_to_release_mode(),
            other => miette::bail!("Unknown argument: {other}"),
        }
    }

    let default_guard = TracingConfig {
        writer_config: WriterConfig::Display(display_preference),
        level_filter: LevelFilter::TRACE,
    }
    .install_thread_local()?;

    global_logger::v(TAG, "verbose");
    global_logger::d(TAG, "debug");
    global_logger::i(TAG, "info");
    global_logger::w(TAG, "warn");
    global_logger::e(TAG, "error");
    global_logger::wtf(TAG, "wtf");

    drop(default_guard);
    Ok(())
}
