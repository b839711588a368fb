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

use r3bl_android_core::Flags;

use crate::{Severity, global_log_gate};

/// Bits that enable or disable output for each [`Severity`]. Combine them w/ `|`.
pub mod log_flags {
    pub const NONE: u32 = 0;
    pub const VERBOSE: u32 = 1;
    pub const DEBUG: u32 = 1 << 1;
    pub const INFO: u32 = 1 << 2;
    pub const WARN: u32 = 1 << 3;
    pub const ERROR: u32 = 1 << 4;
    pub const WTF: u32 = 1 << 5;

    pub const ALL: u32 = VERBOSE | DEBUG | INFO | WARN | ERROR | WTF;

    /// Everything except [`WTF`].
    pub const DEBUG_MODE: u32 = ALL & !WTF;

    pub const RELEASE_MODE: u32 = INFO | WARN | ERROR;

    /// Enabled at start up and after a reset.
    pub const DEFAULT: u32 = DEBUG | INFO | WARN | ERROR;
}

/// A set of enabled [`log_flags`], owned by whoever holds it. This has the same
/// operations as the process wide [`global_log_gate`], w/out the global state. See
/// [`crate::GatedLogger`].
///
/// The enabled set is any subset of the severities. It does not have to be a threshold,
/// eg: `VERBOSE | ERROR` is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogGate {
    enabled_logs: Flags,
}

impl Default for LogGate {
    fn default() -> Self { Self::new(log_flags::DEFAULT) }
}

impl LogGate {
    #[must_use]
    pub const fn new(enabled_logs: u32) -> Self {
        Self {
            enabled_logs: Flags::new(enabled_logs),
        }
    }

    /// Snapshot of whatever the process wide gate currently allows.
    #[must_use]
    pub fn from_global() -> Self { Self::new(global_log_gate::enabled_flags()) }

    /// Back to [`log_flags::DEFAULT`].
    pub fn reset(&mut self) { self.enabled_logs = Flags::new(log_flags::DEFAULT); }

    pub fn enable(&mut self, log_flag: u32) { self.enabled_logs.add(log_flag); }

    pub fn disable(&mut self, log_flag: u32) { self.enabled_logs.remove(log_flag); }

    pub fn enable_all(&mut self) { self.enabled_logs = Flags::new(log_flags::ALL); }

    pub fn disable_all(&mut self) { self.enabled_logs.reset(); }

    /// `true` if **any** of the bits in `log_flag` is enabled.
    #[must_use]
    pub const fn is_enabled(&self, log_flag: u32) -> bool {
        self.enabled_logs.has(log_flag)
    }

    /// `true` only if **every** bit in `log_flag` is enabled.
    #[must_use]
    pub const fn is_enabled_all(&self, log_flag: u32) -> bool {
        self.enabled_logs.has_all(log_flag)
    }

    pub fn switch_to_debug_mode(&mut self) {
        self.enabled_logs = Flags::new(log_flags::DEBUG_MODE);
    }

    pub fn switch_to_release_mode(&mut self) {
        self.enabled_logs = Flags::new(log_flags::RELEASE_MODE);
    }

    #[must_use]
    pub const fn enabled_flags(&self) -> u32 { self.enabled_logs.get() }

    #[must_use]
    pub const fn allows(&self, severity: Severity) -> bool {
        self.is_enabled(severity.log_flag())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_and_reset() {
        let mut gate = LogGate::default();
        assert_eq!(gate.enabled_flags(), log_flags::DEFAULT);

        gate.enable_all();
        gate.reset();
        assert!(gate.is_enabled_all(
            log_flags::DEBUG | log_flags::INFO | log_flags::WARN | log_flags::ERROR
        ));
        assert!(!gate.is_enabled(log_flags::VERBOSE));
        assert!(!gate.is_enabled(log_flags::WTF));
    }

    #[test]
    fn test_enable_all_and_disable_all() {
        let mut gate = LogGate::new(log_flags::NONE);

        gate.enable_all();
        for it in Severity::iter() {
            assert!(gate.allows(it));
        }

        gate.disable_all();
        for it in Severity::iter() {
            assert!(!gate.allows(it));
        }
    }

    #[test]
    fn test_enable_single_flag() {
        let mut gate = LogGate::default();
        gate.disable_all();
        gate.enable(log_flags::VERBOSE);
        assert!(gate.is_enabled(log_flags::VERBOSE));
        assert!(!gate.is_enabled(log_flags::DEBUG));
    }

    #[test]
    fn test_disable_one_at_a_time() {
        let mut gate = LogGate::default();
        gate.enable_all();
        for it in Severity::iter() {
            gate.disable(it.log_flag());
            assert!(!gate.allows(it));
        }
        assert_eq!(gate.enabled_flags(), log_flags::NONE);
    }

    #[test]
    fn test_non_threshold_subset() {
        let gate = LogGate::new(log_flags::VERBOSE | log_flags::ERROR);
        assert!(gate.allows(Severity::Verbose));
        assert!(!gate.allows(Severity::Debug));
        assert!(!gate.allows(Severity::Warn));
        assert!(gate.allows(Severity::Error));
    }

    #[test]
    fn test_modes() {
        let mut gate = LogGate::default();

        gate.switch_to_debug_mode();
        assert!(gate.is_enabled_all(log_flags::ALL & !log_flags::WTF));
        assert!(!gate.is_enabled(log_flags::WTF));

        gate.switch_to_release_mode();
        assert_eq!(
            gate.enabled_flags(),
            log_flags::INFO | log_flags::WARN | log_flags::ERROR
        );
        assert!(!gate.is_enabled(log_flags::VERBOSE | log_flags::DEBUG | log_flags::WTF));
    }

    #[test]
    fn test_is_enabled_matches_any_bit() {
        let gate = LogGate::new(log_flags::INFO);
        assert!(gate.is_enabled(log_flags::INFO | log_flags::WTF));
        assert!(!gate.is_enabled_all(log_flags::INFO | log_flags::WTF));
    }
}
