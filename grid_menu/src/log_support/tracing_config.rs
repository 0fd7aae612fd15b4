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

use miette::IntoDiagnostic as _;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt as _,
                         util::SubscriberInitExt as _};

use super::rolling_file_appender_impl;

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Where log output goes. There is no display option: writing logs to stdout or stderr
/// would corrupt the menu while it is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    File(String /* log file path */),
}

/// Fields:
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging.
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install as the global default subscriber. This can only happen once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layer = self.try_create_layer()?;
        tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .into_diagnostic()
    }

    /// Install as the default subscriber for the current thread, until the returned
    /// guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layer = self.try_create_layer()?;
        let subscriber = tracing_subscriber::registry().with(layer);
        Ok(tracing::subscriber::set_default(subscriber))
    }

    /// Returns `None` when there is nowhere to write to.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn try_create_layer(&self) -> miette::Result<Option<Box<DynLayer<Registry>>>> {
        let WriterConfig::File(ref path) = self.writer_config else {
            return Ok(None);
        };

        let file_appender = rolling_file_appender_impl::try_create(path)?;

        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .with_thread_names(false)
            .with_writer(file_appender)
            .with_filter(self.level_filter);

        Ok(Some(Box::new(layer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_off() {
        let config = TracingConfig::default();
        assert_eq!(config.get_level_filter(), LevelFilter::OFF);
        assert_eq!(config.writer_config, WriterConfig::None);
    }

    #[test]
    fn test_no_layer_without_a_file() {
        let config = TracingConfig {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::None,
        };
        assert!(matches!(config.try_create_layer(), Ok(None)));
    }
}
