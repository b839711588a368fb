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

use std::ops::Add;

use r3bl_android_core::ok;
use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig};

/// Instead of having lots of arguments, [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] both receive anything that implements
/// [`Into<TracingConfig>`]. Configs can also be merged w/ `+`.
///
/// ```no_run
/// use r3bl_android_log::{DisplayPreference, TracingConfig, WriterConfig,
///                        try_initialize_logging_global};
///
/// let level: TracingConfig = tracing::Level::INFO.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let file: TracingConfig = WriterConfig::File("sync.log".to_string()).into();
///
/// // INFO, written to stderr and `sync.log`.
/// try_initialize_logging_global(level + display + file).unwrap();
/// ```
pub mod tracing_config_options {
    use super::*;

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::None,
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::None,
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`]s. The more verbose level filter wins, and the writer
    /// configs are merged w/ [`WriterConfig`]'s `+`.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`]s. A display and a file merge into both. When both sides
    /// have a display (or a file), the `rhs` has higher specificity and clobbers the
    /// `lhs`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision.
                (None, it) | (it, None) => it,
                (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),

                // Collision, rhs wins.
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f))
                | (DisplayAndFile(_, f), Display(dp))
                | (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),
                (Display(_), Display(dp)) => Display(dp),
                (File(_), File(f)) => File(f),
            }
        }
    }

    /// A file next to the current working dir, named [`DEFAULT_LOG_FILE_NAME`].
    #[must_use]
    pub fn default_file() -> WriterConfig { WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()) }

    #[cfg(test)]
    mod tests {
        use pretty_assertions::assert_eq;
        use tracing_core::LevelFilter;

        use super::*;

        #[test]
        fn test_from() {
            assert_eq!(
                TracingConfig::from(tracing::Level::WARN),
                TracingConfig {
                    level_filter: LevelFilter::WARN,
                    writer_config: WriterConfig::None,
                }
            );
            assert_eq!(
                TracingConfig::from(DisplayPreference::Stdout),
                TracingConfig {
                    level_filter: LevelFilter::DEBUG,
                    writer_config: WriterConfig::Display(DisplayPreference::Stdout),
                }
            );
            assert_eq!(
                TracingConfig::from(default_file()).writer_config,
                WriterConfig::File("log.txt".to_string())
            );
        }

        #[test]
        fn test_add_tracing_configs() {
            let it = TracingConfig::from(LevelFilter::INFO)
                + TracingConfig::from(DisplayPreference::Stderr)
                + TracingConfig::from(LevelFilter::TRACE);

            assert_eq!(
                it,
                TracingConfig {
                    level_filter: LevelFilter::TRACE,
                    writer_config: WriterConfig::Display(DisplayPreference::Stderr),
                }
            );
        }

        #[test]
        fn test_add_writer_configs() {
            let fname = "log.txt".to_string();
            let other_fname = "other.txt".to_string();

            let none = WriterConfig::None;
            let stdout = WriterConfig::Display(DisplayPreference::Stdout);
            let stderr = WriterConfig::Display(DisplayPreference::Stderr);
            let file = WriterConfig::File(fname.clone());
            let other_file = WriterConfig::File(other_fname.clone());
            let stdout_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
            let stderr_and_file = WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname);
            let stdout_and_other_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, other_fname);

            // No collision.
            assert_eq!(none.clone() + none.clone(), none);
            assert_eq!(stdout.clone() + none.clone(), stdout);
            assert_eq!(none.clone() + file.clone(), file);
            assert_eq!(none.clone() + stdout_and_file.clone(), stdout_and_file);
            assert_eq!(stdout.clone() + file.clone(), stdout_and_file);
            assert_eq!(file.clone() + stdout.clone(), stdout_and_file);

            // Collision, rhs wins.
            assert_eq!(stdout.clone() + stderr.clone(), stderr);
            assert_eq!(file.clone() + other_file.clone(), other_file);
            assert_eq!(stdout.clone() + stderr_and_file.clone(), stderr_and_file);
            assert_eq!(file.clone() + stderr_and_file.clone(), stderr_and_file);
            assert_eq!(stderr_and_file.clone() + stdout.clone(), stdout_and_file);
            assert_eq!(stdout_and_file.clone() + other_file, stdout_and_other_file);
            assert_eq!(stdout_and_file + stderr_and_file.clone(), stderr_and_file);
        }
    }
}

/// Global default subscriber, which once set, can't be unset or changed. This is the one
/// to use in apps.
///
/// Logging is **disabled** by **default**. Passing a config w/
/// [`tracing_core::LevelFilter::OFF`] is a no-op, and nothing that goes through
/// [`crate::TracingSink`] (or the [`tracing`] macros) is printed.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == tracing_core::LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, until the returned guard is dropped. This is the one to use
/// in tests, since each test can have its own.
///
/// Returns `None` (and installs nothing) for a config w/
/// [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == tracing_core::LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
