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

//! The event loop. The menu is drawn inline, below wherever the cursor is:
//!
//! ```text
//! Title               <- only when not empty
//!  a d                <- `height` grid rows
//!  b e
//!  c
//! /query              <- status line, the saved position
//! ```
//!
//! After every key the cursor goes back to the saved position, moves up `height` rows,
//! and the grid and status line are drawn again in full.

use crate::{DEVELOPMENT_MODE, EventLoopResult, KeyPress, KeyPressReader,
            MAX_ESC_ON_END_OF_INPUT, MenuBehavior, MenuConfig, MenuError, MenuResult,
            MenuState, Size, StyleSheet, TerminalDriver, Window, build_behavior_chain,
            paint_lines, render_lines};

#[derive(Debug)]
pub struct GridMenu {
    title: String,
    state: MenuState,
    behavior: Box<dyn MenuBehavior>,
    style_sheet: StyleSheet,
    clear_on_exit: bool,
}

impl GridMenu {
    /// Lays out the menu for a terminal of the given `size`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are empty, or don't fit.
    pub fn try_new(config: MenuConfig, size: Size) -> Result<Self, MenuError> {
        let geometry = config.try_compute_geometry(size)?;
        let len = config.options.len();
        let window = Window::new(geometry.selected, geometry.height, geometry.columns, len);

        tracing::debug!(
            message = "menu layout",
            options = len,
            height = geometry.height,
            columns = geometry.columns,
            selected = geometry.selected
        );

        Ok(Self {
            behavior: build_behavior_chain(config.searchable, config.multi_select),
            state: MenuState::new(config.options, window),
            title: config.title,
            style_sheet: config.style,
            clear_on_exit: config.clear_on_exit,
        })
    }

    #[must_use]
    pub fn state(&self) -> &MenuState { &self.state }

    /// Sends one key through the behaviors, without drawing anything.
    pub fn dispatch(&mut self, key: KeyPress) -> EventLoopResult {
        let result = self.behavior.handle_key(&mut self.state, key);

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "dispatch",
                key = ?key,
                window = ?self.state.window,
                result = ?result
            );
        });

        result
    }

    /// Shows the menu and blocks until an option is chosen, the menu is dismissed, or
    /// the keys run out (which counts as dismissing it).
    ///
    /// The terminal is restored on every way out of this function, including errors.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InputStream`] if a key can't be read, and
    /// [`MenuError::TerminalOutput`] if drawing fails.
    pub fn run(
        &mut self,
        terminal: &mut impl TerminalDriver,
        reader: &mut impl KeyPressReader,
    ) -> Result<MenuResult, MenuError> {
        let title_lines = usize::from(!self.title.is_empty());
        if title_lines > 0 {
            let style = self.style_sheet.title_style;
            let title = terminal.colorize(&self.title, style.fg, style.bg, style.bright);
            terminal.print(&title)?;
            terminal.clear_to_end_of_line()?;
            terminal.line_break()?;
        }

        let mut guard = TerminalGuard {
            terminal,
            grid_lines: self.state.window.height,
            title_lines,
            clear_on_exit: self.clear_on_exit,
            released: false,
        };

        self.paint(&mut *guard.terminal)?;
        guard.terminal.save_position()?;
        guard.terminal.hide_cursor()?;
        guard.terminal.enable_raw_mode()?;
        guard.terminal.flush()?;

        let result = loop {
            let Some(key) = reader.read_key_press()? else {
                tracing::debug!(message = "end of input, dismissing menu");
                break self.dismiss();
            };
            match self.dispatch(key) {
                EventLoopResult::ExitWithResult(result) => break result,
                EventLoopResult::ContinueAndRerender => {
                    guard.terminal.restore_position()?;
                    guard.terminal.move_up(self.state.window.height)?;
                    self.paint(&mut *guard.terminal)?;
                }
                EventLoopResult::Continue => {}
            }
        };

        guard.release()?;

        tracing::debug!(message = "menu closed", result = ?result);
        Ok(result)
    }

    /// Sends esc until some layer finishes, eg twice while a search is active.
    fn dismiss(&mut self) -> MenuResult {
        for _ in 0..MAX_ESC_ON_END_OF_INPUT {
            if let EventLoopResult::ExitWithResult(result) = self.dispatch(KeyPress::Esc) {
                return result;
            }
        }
        MenuResult::Cancelled
    }

    /// Draws the grid and the status line. Leaves the cursor at the start of the status
    /// line, or after the query while searching.
    fn paint(&self, terminal: &mut impl TerminalDriver) -> Result<(), MenuError> {
        let lines = render_lines(&self.state, self.behavior.as_ref(), &self.style_sheet);
        paint_lines(terminal, &lines)?;

        terminal.clear_line()?;
        if let Some(status_line) = self.behavior.status_line() {
            terminal.print(&status_line)?;
        }

        if self.behavior.wants_text_cursor() {
            terminal.show_cursor()?;
        } else {
            terminal.hide_cursor()?;
        }

        terminal.flush()
    }
}

/// Owns the terminal while the menu is on screen. Dropping it without calling
/// [`TerminalGuard::release`] (on `?` or a panic) still restores the terminal, logging
/// any failure.
struct TerminalGuard<'a, T: TerminalDriver> {
    terminal: &'a mut T,
    grid_lines: usize,
    title_lines: usize,
    clear_on_exit: bool,
    released: bool,
}

impl<T: TerminalDriver> TerminalGuard<'_, T> {
    fn release(mut self) -> Result<(), MenuError> {
        self.released = true;
        self.restore()
    }

    /// Every step is attempted, the first failure is returned.
    fn restore(&mut self) -> Result<(), MenuError> {
        let erased = self.erase();
        let cursor_shown = self.terminal.show_cursor();
        let raw_mode_disabled = self.terminal.disable_raw_mode();
        let flushed = self.terminal.flush();
        erased.and(cursor_shown).and(raw_mode_disabled).and(flushed)
    }

    /// The saved position is the status line, right below the grid.
    fn erase(&mut self) -> Result<(), MenuError> {
        let terminal = &mut *self.terminal;
        terminal.restore_position()?;

        if !self.clear_on_exit {
            return terminal.clear_line();
        }

        let lines = self.grid_lines + self.title_lines;
        terminal.move_up(lines)?;
        for _ in 0..lines {
            terminal.clear_line()?;
            terminal.move_down(1)?;
        }
        terminal.clear_line()?;
        terminal.move_up(lines)
    }
}

impl<T: TerminalDriver> Drop for TerminalGuard<'_, T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(error) = self.restore() {
            tracing::warn!(message = "could not restore the terminal", error = ?error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CrosstermTerminal,
                test_fixtures::{StdoutMock, TestVecKeyPressReader}};
    use pretty_assertions::assert_eq;

    const SHOW_CURSOR: &str = "\u{1b}[?25h";
    const HIDE_CURSOR: &str = "\u{1b}[?25l";

    fn run(
        config: MenuConfig,
        keys: impl Into<Vec<KeyPress>>,
    ) -> (Result<MenuResult, MenuError>, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let size = Size {
            col_width: 80,
            row_height: 24,
        };
        let mut terminal = CrosstermTerminal::new_mock(stdout_mock.clone(), size);
        let mut reader = TestVecKeyPressReader::new(keys);
        let result = GridMenu::try_new(config, size)
            .and_then(|mut menu| menu.run(&mut terminal, &mut reader));
        (result, stdout_mock)
    }

    fn letters(count: usize) -> MenuConfig {
        MenuConfig::new("Pick", ('a'..='z').take(count).map(String::from))
    }

    #[test]
    fn test_three_downs_then_enter() {
        let config = letters(5).with_height(3).with_columns(1);
        let (result, _) = run(
            config,
            [KeyPress::Down, KeyPress::Down, KeyPress::Down, KeyPress::Enter],
        );
        assert_eq!(result.unwrap(), MenuResult::Chosen("d".to_string()));
    }

    #[test]
    fn test_esc_cancels_and_restores_cursor() {
        let (result, stdout_mock) = run(letters(3), [KeyPress::Esc]);
        assert_eq!(result.unwrap(), MenuResult::Cancelled);

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains(HIDE_CURSOR));
        assert!(output.ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_first_paint_shows_title_and_grid() {
        let (_, stdout_mock) = run(letters(3), Vec::new());
        let output = stdout_mock
            .get_copy_of_buffer_as_string_strip_ansi()
            .replace('\r', "");
        assert!(output.starts_with("Pick\n a\n b\n c\n"));
    }

    #[test]
    fn test_end_of_input_leaves_search_then_cancels() {
        let config = letters(3).with_multi_select(true);
        let (result, _) = run(config, TestVecKeyPressReader::typed("b"));
        assert_eq!(result.unwrap(), MenuResult::ChosenMany(vec![]));
    }

    #[test]
    fn test_search_shows_status_line() {
        let config = MenuConfig::new("", ["apple", "buzz", "fizz", "grape"]);
        let mut keys = TestVecKeyPressReader::typed("z");
        keys.push(KeyPress::Enter);
        let (result, stdout_mock) = run(config, keys);
        assert_eq!(result.unwrap(), MenuResult::Chosen("buzz".to_string()));
        assert!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi().contains("/z"));
    }

    #[test]
    fn test_input_error_propagates_after_cleanup() {
        let stdout_mock = StdoutMock::default();
        let size = Size {
            col_width: 80,
            row_height: 24,
        };
        let mut terminal = CrosstermTerminal::new_mock(stdout_mock.clone(), size);
        let mut reader = TestVecKeyPressReader::failing_after([KeyPress::Down]);
        let mut menu = GridMenu::try_new(letters(3), size).unwrap();

        let result = menu.run(&mut terminal, &mut reader);

        assert!(matches!(result, Err(MenuError::InputStream { .. })));
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string()
                .ends_with(SHOW_CURSOR)
        );
    }

    #[test]
    fn test_configuration_error_draws_nothing() {
        let (result, stdout_mock) = run(MenuConfig::default(), [KeyPress::Enter]);
        assert!(matches!(result, Err(MenuError::EmptyOptions)));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_dispatch_without_terminal() {
        let size = Size {
            col_width: 80,
            row_height: 24,
        };
        let mut menu = GridMenu::try_new(letters(10).with_height(3), size).unwrap();
        menu.dispatch(KeyPress::Right);
        assert_eq!(menu.state().window.selected, 3);
        assert_eq!(
            menu.dispatch(KeyPress::Enter),
            EventLoopResult::ExitWithResult(MenuResult::Chosen("d".to_string()))
        );
    }
}
