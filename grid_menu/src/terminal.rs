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

use std::io::{self, IsTerminal as _, Stderr, Stdout, Write};

use crossterm::{cursor::{Hide, MoveDown, MoveToColumn, MoveUp, RestorePosition,
                         SavePosition, Show},
                style::{Print, Stylize as _, style},
                terminal::{Clear, ClearType}};

use crate::MenuError;

/// Queue crossterm commands on a writer, mapping any failure to
/// [`MenuError::TerminalOutput`] and returning early.
macro_rules! queue_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue($writer, $command)
                .map_err(|source| $crate::MenuError::TerminalOutput { source })?;
        )*
    }}
}

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

/// The eight base colors. Combined with the `bright` flag of
/// [`TerminalDriver::colorize`] this covers the 16 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    #[must_use]
    pub fn to_crossterm(self, bright: bool) -> crossterm::style::Color {
        use crossterm::style::Color as C;
        match (self, bright) {
            (Color::Black, false) => C::Black,
            (Color::Black, true) => C::DarkGrey,
            (Color::Red, false) => C::DarkRed,
            (Color::Red, true) => C::Red,
            (Color::Green, false) => C::DarkGreen,
            (Color::Green, true) => C::Green,
            (Color::Yellow, false) => C::DarkYellow,
            (Color::Yellow, true) => C::Yellow,
            (Color::Blue, false) => C::DarkBlue,
            (Color::Blue, true) => C::Blue,
            (Color::Magenta, false) => C::DarkMagenta,
            (Color::Magenta, true) => C::Magenta,
            (Color::Cyan, false) => C::DarkCyan,
            (Color::Cyan, true) => C::Cyan,
            (Color::White, false) => C::Grey,
            (Color::White, true) => C::White,
        }
    }
}

/// Everything the menu needs from a terminal. Output operations may be buffered until
/// [`TerminalDriver::flush`] is called.
///
/// # Errors
///
/// Every fallible operation returns [`MenuError::TerminalOutput`], except
/// [`TerminalDriver::size`] which returns [`MenuError::TerminalQuery`].
pub trait TerminalDriver {
    /// Returns `text` wrapped in the escape sequences for the given colors. The `bright`
    /// flag applies to the foreground.
    fn colorize(&self, text: &str, fg: Color, bg: Option<Color>, bright: bool) -> String;

    fn print(&mut self, text: &str) -> Result<(), MenuError>;

    /// Ends the current line and moves to the start of the next one. This works in raw
    /// mode too.
    fn line_break(&mut self) -> Result<(), MenuError>;

    fn move_up(&mut self, lines: usize) -> Result<(), MenuError>;

    fn move_down(&mut self, lines: usize) -> Result<(), MenuError>;

    /// Clears the whole current line and moves to its first column.
    fn clear_line(&mut self) -> Result<(), MenuError>;

    fn clear_to_end_of_line(&mut self) -> Result<(), MenuError>;

    fn save_position(&mut self) -> Result<(), MenuError>;

    fn restore_position(&mut self) -> Result<(), MenuError>;

    fn hide_cursor(&mut self) -> Result<(), MenuError>;

    fn show_cursor(&mut self) -> Result<(), MenuError>;

    fn flush(&mut self) -> Result<(), MenuError>;

    fn size(&mut self) -> Result<Size, MenuError>;

    fn enable_raw_mode(&mut self) -> Result<(), MenuError>;

    fn disable_raw_mode(&mut self) -> Result<(), MenuError>;
}

/// [`TerminalDriver`] backed by crossterm commands queued on any [`Write`]r.
///
/// Use [`CrosstermTerminal::new_mock`] in tests: it reports a fixed size and leaves raw
/// mode alone.
#[derive(Debug)]
pub struct CrosstermTerminal<W: Write> {
    writer: W,
    fixed_size: Option<Size>,
    manage_raw_mode: bool,
}

impl CrosstermTerminal<Stdout> {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(io::stdout()) }
}

impl CrosstermTerminal<Stderr> {
    #[must_use]
    pub fn new_stderr() -> Self { Self::new(io::stderr()) }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fixed_size: None,
            manage_raw_mode: true,
        }
    }

    pub fn new_mock(writer: W, size: Size) -> Self {
        Self {
            writer,
            fixed_size: Some(size),
            manage_raw_mode: false,
        }
    }

    pub fn into_inner(self) -> W { self.writer }
}

impl<W: Write> TerminalDriver for CrosstermTerminal<W> {
    fn colorize(&self, text: &str, fg: Color, bg: Option<Color>, bright: bool) -> String {
        let styled = style(text).with(fg.to_crossterm(bright));
        match bg {
            Some(bg) => styled.on(bg.to_crossterm(false)).to_string(),
            None => styled.to_string(),
        }
    }

    fn print(&mut self, text: &str) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, Print(text));
        Ok(())
    }

    fn line_break(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, Print("\r\n"));
        Ok(())
    }

    fn move_up(&mut self, lines: usize) -> Result<(), MenuError> {
        // `CSI 0 A` moves one line on most terminals.
        if lines > 0 {
            queue_commands!(&mut self.writer, MoveUp(to_u16(lines)));
        }
        Ok(())
    }

    fn move_down(&mut self, lines: usize) -> Result<(), MenuError> {
        if lines > 0 {
            queue_commands!(&mut self.writer, MoveDown(to_u16(lines)));
        }
        Ok(())
    }

    fn clear_line(&mut self) -> Result<(), MenuError> {
        queue_commands!(
            &mut self.writer,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        );
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, Clear(ClearType::UntilNewLine));
        Ok(())
    }

    fn save_position(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, SavePosition);
        Ok(())
    }

    fn restore_position(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, RestorePosition);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, Hide);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), MenuError> {
        queue_commands!(&mut self.writer, Show);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MenuError> {
        self.writer
            .flush()
            .map_err(|source| MenuError::TerminalOutput { source })
    }

    fn size(&mut self) -> Result<Size, MenuError> {
        if let Some(size) = self.fixed_size {
            return Ok(size);
        }
        let (columns, rows) = crossterm::terminal::size()
            .map_err(|source| MenuError::TerminalQuery { source })?;
        Ok(Size {
            col_width: columns.into(),
            row_height: rows.into(),
        })
    }

    fn enable_raw_mode(&mut self) -> Result<(), MenuError> {
        if self.manage_raw_mode {
            crossterm::terminal::enable_raw_mode()
                .map_err(|source| MenuError::TerminalOutput { source })?;
        }
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), MenuError> {
        if self.manage_raw_mode {
            crossterm::terminal::disable_raw_mode()
                .map_err(|source| MenuError::TerminalOutput { source })?;
        }
        Ok(())
    }
}

fn to_u16(lines: usize) -> u16 { u16::try_from(lines).unwrap_or(u16::MAX) }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsNotInteractive`] if stdin, stdout, and stderr are *all*
/// uninteractive. This happens when `cargo test` runs, or in CI.
#[must_use]
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    let stdin_is_tty = io::stdin().is_terminal();
    let stdout_is_tty = io::stdout().is_terminal();
    let stderr_is_tty = io::stderr().is_terminal();
    if !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        TTYResult::IsNotInteractive
    } else {
        TTYResult::IsInteractive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

/// If you run `ls | gm` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}
