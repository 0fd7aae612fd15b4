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

use std::io;

/// Everything that can go wrong while building or running a [`crate::GridMenu`].
///
/// The first three variants are configuration errors and are returned before anything is
/// written to the terminal. The `io` backed variants are returned after the terminal
/// region owned by the menu has been restored.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum MenuError {
    #[error("The menu has no options to choose from")]
    #[diagnostic(
        code(grid_menu::empty_options),
        help("Pass at least one option, or pipe some lines into stdin")
    )]
    EmptyOptions,

    #[error("The terminal is too short ({terminal_height} rows) to display the menu")]
    #[diagnostic(
        code(grid_menu::no_room_for_height),
        help("The menu needs at least 3 rows: one for the grid, two for the margin")
    )]
    NoRoomForHeight { terminal_height: usize },

    #[error(
        "The terminal is too narrow ({terminal_width} columns) for options that are \
         {label_width} characters wide"
    )]
    #[diagnostic(code(grid_menu::no_room_for_columns))]
    NoRoomForColumns {
        terminal_width: usize,
        label_width: usize,
    },

    #[error("Could not query the terminal size")]
    #[diagnostic(code(grid_menu::terminal_query))]
    TerminalQuery {
        #[source]
        source: io::Error,
    },

    #[error("Could not read the next key press")]
    #[diagnostic(code(grid_menu::input_stream))]
    InputStream {
        #[source]
        source: io::Error,
    },

    #[error("Could not write to the terminal")]
    #[diagnostic(code(grid_menu::terminal_output))]
    TerminalOutput {
        #[source]
        source: io::Error,
    },
}

impl MenuError {
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            MenuError::EmptyOptions
                | MenuError::NoRoomForHeight { .. }
                | MenuError::NoRoomForColumns { .. }
        )
    }
}
