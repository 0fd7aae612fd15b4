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

use std::io::Write;

use crate::{CrosstermKeyPressReader, CrosstermTerminal, GridMenu, KeyPressReader,
            MenuConfig, MenuResult, TTYResult, TerminalDriver,
            is_fully_uninteractive_terminal};

/// Shows a single select menu on stdout, and returns the chosen option. `None` means the
/// menu was dismissed.
///
/// If stdin, stdout, and stderr are all uninteractive (eg in `cargo test` or CI) nothing
/// is shown, and `None` is returned.
///
/// # Errors
///
/// Returns an error if the menu does not fit in the terminal, or the terminal fails.
pub fn show_menu(config: MenuConfig) -> miette::Result<Option<String>> {
    let config = config.with_multi_select(false);
    show_menu_on(config, CrosstermTerminal::new_stdout()).map(MenuResult::into_single)
}

/// Shows a multi select menu on stdout, and returns the chosen options, sorted. An empty
/// list means the menu was dismissed.
///
/// If stdin, stdout, and stderr are all uninteractive (eg in `cargo test` or CI) nothing
/// is shown, and an empty list is returned.
///
/// # Errors
///
/// Returns an error if the menu does not fit in the terminal, or the terminal fails.
pub fn show_multi_select_menu(config: MenuConfig) -> miette::Result<Vec<String>> {
    let config = config.with_multi_select(true);
    show_menu_on(config, CrosstermTerminal::new_stdout()).map(MenuResult::into_many)
}

/// Shows the menu on the given writer (eg stderr, so stdout can be piped), reading keys
/// from the terminal.
///
/// # Errors
///
/// Returns an error if there are no options, the menu does not fit in the terminal, or
/// the terminal fails. Empty options are reported even when the terminal is not
/// interactive.
pub fn show_menu_on<W: Write>(
    config: MenuConfig,
    mut terminal: CrosstermTerminal<W>,
) -> miette::Result<MenuResult> {
    config.try_validate()?;

    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        tracing::warn!(message = "terminal is not interactive, not showing the menu");
        return Ok(config.cancelled_result());
    }

    run_menu(config, &mut terminal, &mut CrosstermKeyPressReader)
}

/// Runs the menu with any terminal and key source. This is what the other functions in
/// this module use, and what tests use with
/// [`crate::test_fixtures::TestVecKeyPressReader`].
///
/// # Errors
///
/// Returns an error if the terminal size can't be read, the menu does not fit, or the
/// terminal or the key source fails.
pub fn run_menu(
    config: MenuConfig,
    terminal: &mut impl TerminalDriver,
    reader: &mut impl KeyPressReader,
) -> miette::Result<MenuResult> {
    let size = terminal.size()?;
    let mut menu = GridMenu::try_new(config, size)?;
    Ok(menu.run(terminal, reader)?)
}
