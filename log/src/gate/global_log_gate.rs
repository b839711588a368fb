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

//! The process wide set of enabled [`log_flags`]. It starts out as
//! [`log_flags::DEFAULT`] and any caller can change it at any time.
//!
//! # Thread safety
//!
//! The mask is a single [`AtomicU32`] and every function here is one atomic operation on
//! it, so concurrent `enable` and `disable` calls never lose each other's bits. What
//! callers can't rely on is the order in which two threads' changes land.
//!
//! # Testing support
//!
//! The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
//! module. In any test in which these functions are called, please use the `#[serial]`
//! attribute to annotate that test. Otherwise there will be flakiness in the test results
//! (tests are run in parallel using many threads).

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Severity, log_flags};

static ENABLED_LOGS: AtomicU32 = AtomicU32::new(log_flags::DEFAULT);

/// Back to [`log_flags::DEFAULT`]: `DEBUG | INFO | WARN | ERROR`.
pub fn reset() { ENABLED_LOGS.store(log_flags::DEFAULT, Ordering::Release); }

/// Enable output for `log_flag`, which is one of the [`log_flags`] or a combination of
/// them.
pub fn enable(log_flag: u32) { ENABLED_LOGS.fetch_or(log_flag, Ordering::AcqRel); }

/// Disable output for `log_flag`, which is one of the [`log_flags`] or a combination of
/// them.
pub fn disable(log_flag: u32) { ENABLED_LOGS.fetch_and(!log_flag, Ordering::AcqRel); }

pub fn enable_all() { ENABLED_LOGS.store(log_flags::ALL, Ordering::Release); }

pub fn disable_all() { ENABLED_LOGS.store(log_flags::NONE, Ordering::Release); }

/// `true` if **any** of the bits in `log_flag` is enabled.
#[must_use]
pub fn is_enabled(log_flag: u32) -> bool { enabled_flags() & log_flag != 0 }

/// `true` only if **every** bit in `log_flag` is enabled.
#[must_use]
pub fn is_enabled_all(log_flag: u32) -> bool { enabled_flags() & log_flag == log_flag }

/// Enable everything except [`log_flags::WTF`]. Whatever was enabled before is dropped.
pub fn switch_to_debug_mode() {
    ENABLED_LOGS.store(log_flags::DEBUG_MODE, Ordering::Release);
}

/// Enable only `INFO | WARN | ERROR`. Whatever was enabled before is dropped.
pub fn switch_to_release_mode() {
    ENABLED_LOGS.store(log_flags::RELEASE_MODE, Ordering::Release);
}

#[must_use]
pub fn enabled_flags() -> u32 { ENABLED_LOGS.load(Ordering::Acquire) }

#[must_use]
pub fn allows(severity: Severity) -> bool { is_enabled(severity.log_flag()) }
