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

use tracing::dispatcher;

use super::{TracingConfig, WriterConfig};

/// Both [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`]
/// accept anything that implements [`Into<TracingConfig>`]:
///
/// ```no_run
/// use grid_menu::{TracingConfig, WriterConfig, try_initialize_logging_global};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = WriterConfig::File("menu.log".to_string()).into();
///
/// try_initialize_logging_global(config_1 + config_2).ok();
/// ```
pub mod tracing_config_options {
    use super::{Add, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "grid_menu.log";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
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

    /// The more verbose level wins. For the writer, `rhs` clobbers `self` unless it is
    /// [`WriterConfig::None`].
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            match (self, rhs) {
                (lhs, WriterConfig::None) => lhs,
                (_, rhs) => rhs,
            }
        }
    }

}

/// Global default subscriber, which once set, can't be unset or changed. This is meant
/// for apps, like the `gm` binary.
///
/// Logging is **DISABLED** by **default**. Nothing is installed when the level filter is
/// [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, active until the returned guard is dropped. This is meant
/// for tests.
///
/// Logging is **DISABLED** by **default**. `Ok(None)` is returned when the level filter
/// is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
