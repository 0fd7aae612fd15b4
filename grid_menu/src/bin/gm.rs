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

use std::{io::{BufRead, stdin},
          process::ExitCode};

use clap::{Parser, ValueEnum};
use grid_menu::{CrosstermTerminal, MenuConfig, MenuResult, StdinIsPipedResult,
                StyleSheet, TracingConfig, WriterConfig, is_stdin_piped, show_menu_on,
                try_initialize_logging_global};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "gm")]
#[command(
    about = "Pick one or more options from a grid menu. Options come from the arguments, or one per line from stdin 👉"
)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Options to choose from. When empty, they are read from stdin, one per line.
    #[arg(value_name = "option")]
    options: Vec<String>,

    /// Shown above the menu.
    #[arg(value_name = "title", long, short = 't', default_value = "")]
    title: String,

    /// Rows per column. Fits the terminal when not set.
    #[arg(value_name = "rows", long, short = 'H')]
    height: Option<usize>,

    /// Number of columns. Fits the terminal when not set.
    #[arg(value_name = "columns", long, short = 'c')]
    columns: Option<usize>,

    /// The option that is highlighted at first.
    #[arg(value_name = "option", long, short = 'd')]
    default: Option<String>,

    /// Choose many options with Space, confirm with Enter.
    #[arg(long, short = 'm')]
    multi_select: bool,

    /// Don't start a search when typing.
    #[arg(long)]
    no_search: bool,

    /// Leave the menu on screen after it closes.
    #[arg(long)]
    no_clear: bool,

    /// Only use bright text and inverse backgrounds, no colors.
    #[arg(long)]
    monochrome: bool,

    /// Log file, used when `--log-level` is not `off`.
    #[arg(value_name = "path", long)]
    log_file: Option<String>,

    /// How much to log.
    #[arg(value_name = "level", long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(it: LogLevel) -> Self {
        match it {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    fn tracing_config(&self) -> TracingConfig {
        let level: TracingConfig = LevelFilter::from(self.log_level).into();
        match &self.log_file {
            Some(path) => TracingConfig {
                writer_config: WriterConfig::File(path.clone()),
                ..level
            },
            None => level,
        }
    }

    fn into_menu_config(self, options: Vec<String>) -> MenuConfig {
        let mut config = MenuConfig::new(self.title, options)
            .with_multi_select(self.multi_select)
            .with_searchable(!self.no_search)
            .with_clear_on_exit(!self.no_clear);
        if self.monochrome {
            config = config.with_style(StyleSheet::monochrome());
        }
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        if let Some(columns) = self.columns {
            config = config.with_columns(columns);
        }
        if let Some(default) = self.default {
            config = config.with_default(default);
        }
        config
    }
}

/// Exits with `1` when nothing was chosen, so scripts can tell.
fn main() -> miette::Result<ExitCode> {
    let mut cli_args = CliArgs::parse();

    try_initialize_logging_global(cli_args.tracing_config())?;
    tracing::debug!(message = "start", cli_args = ?cli_args);

    let options = match (cli_args.options.is_empty(), is_stdin_piped()) {
        (true, StdinIsPipedResult::StdinIsPiped) => read_options_from_stdin()?,
        _ => std::mem::take(&mut cli_args.options),
    };

    // The menu goes to stderr so stdout only carries the choices.
    let config = cli_args.into_menu_config(options);
    let result = show_menu_on(config, CrosstermTerminal::new_stderr())?;
    tracing::debug!(message = "stop", result = ?result);

    let chosen = match result {
        MenuResult::Chosen(it) => vec![it],
        MenuResult::ChosenMany(it) => it,
        MenuResult::Cancelled => vec![],
    };

    if chosen.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    for it in chosen {
        println!("{it}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Blank lines are skipped.
fn read_options_from_stdin() -> miette::Result<Vec<String>> {
    let mut options = vec![];
    for line in stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if !line.trim().is_empty() {
            options.push(line);
        }
    }
    Ok(options)
}
