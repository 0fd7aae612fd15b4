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

/// Upper bound on the number of columns, whatever the terminal width.
pub const MAX_COLUMNS: usize = 5;

/// Rows of the terminal that the grid never uses: one for the title, one for the
/// status line below the grid.
pub const RESERVED_ROWS: usize = 2;

pub const COLUMN_SEPARATOR: &str = " ";

pub const LEFT_SCROLL_MARKER: &str = "^";

pub const RIGHT_SCROLL_MARKER: &str = "v";

/// Upper bound on the esc presses sent when the key stream ends. One per layer that can
/// claim esc without finishing is enough.
pub const MAX_ESC_ON_END_OF_INPUT: usize = 3;
