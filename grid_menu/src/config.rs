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

use crate::{MAX_COLUMNS, MenuError, RESERVED_ROWS, Size, StyleSheet};

/// Which option has the cursor when the menu opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultOption {
    /// The first option equal to this value, or the first option if there is none.
    Value(String),
    /// Wraps around the number of options.
    Index(usize),
}

/// Everything needed to build a [`crate::GridMenu`].
///
/// ```
/// use grid_menu::MenuConfig;
///
/// let config = MenuConfig::new("Pick a color", ["red", "green", "blue"])
///     .with_default("green")
///     .with_columns(3)
///     .with_multi_select(true);
/// assert_eq!(config.options.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Printed above the grid. Skipped when empty.
    pub title: String,
    pub options: Vec<String>,
    pub default: Option<DefaultOption>,
    /// Rows in the grid. `None` (or `0`) uses as many as the terminal allows.
    pub height: Option<usize>,
    /// Columns in the grid. `None` (or anything above [`MAX_COLUMNS`]) uses
    /// [`MAX_COLUMNS`].
    pub columns: Option<usize>,
    /// Erase the menu (and title) from the terminal when it closes.
    pub clear_on_exit: bool,
    pub multi_select: bool,
    /// Typing filters the options.
    pub searchable: bool,
    pub style: StyleSheet,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: vec![],
            default: None,
            height: None,
            columns: None,
            clear_on_exit: true,
            multi_select: false,
            searchable: true,
            style: StyleSheet::default(),
        }
    }
}

impl MenuConfig {
    pub fn new(
        title: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(DefaultOption::Value(value.into()));
        self
    }

    #[must_use]
    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default = Some(DefaultOption::Index(index));
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    #[must_use]
    pub fn with_clear_on_exit(mut self, clear_on_exit: bool) -> Self {
        self.clear_on_exit = clear_on_exit;
        self
    }

    #[must_use]
    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    #[must_use]
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    /// What to return when the menu can't be shown, or is dismissed.
    #[must_use]
    pub fn cancelled_result(&self) -> crate::MenuResult {
        if self.multi_select {
            crate::MenuResult::ChosenMany(vec![])
        } else {
            crate::MenuResult::Cancelled
        }
    }

    /// Checks what can be checked without a terminal.
    ///
    /// # Errors
    ///
    /// [`MenuError::EmptyOptions`] if there is nothing to show.
    pub fn try_validate(&self) -> Result<(), MenuError> {
        if self.options.is_empty() {
            return Err(MenuError::EmptyOptions);
        }
        Ok(())
    }

    /// Fits the grid into a terminal of the given `size`.
    ///
    /// # Errors
    ///
    /// - [`MenuError::EmptyOptions`] if there is nothing to show.
    /// - [`MenuError::NoRoomForHeight`] if the terminal has no rows for the grid.
    /// - [`MenuError::NoRoomForColumns`] if the widest option does not fit.
    pub fn try_compute_geometry(&self, size: Size) -> Result<Geometry, MenuError> {
        self.try_validate()?;
        let len = self.options.len();

        let label_width = self
            .options
            .iter()
            .map(|it| it.chars().count())
            .max()
            .unwrap_or(0);

        let max_height = size.row_height.saturating_sub(RESERVED_ROWS);
        let height = self
            .height
            .filter(|&it| it > 0)
            .unwrap_or(max_height)
            .min(max_height)
            .min(len);
        if height == 0 {
            return Err(MenuError::NoRoomForHeight {
                terminal_height: size.row_height,
            });
        }

        let columns = self
            .columns
            .unwrap_or(MAX_COLUMNS)
            .min(MAX_COLUMNS)
            .min(size.col_width / (label_width + 1));
        if columns == 0 {
            return Err(MenuError::NoRoomForColumns {
                terminal_width: size.col_width,
                label_width,
            });
        }

        let selected = match &self.default {
            Some(DefaultOption::Value(value)) => self
                .options
                .iter()
                .position(|it| it == value)
                .unwrap_or(0),
            Some(DefaultOption::Index(index)) => index % len,
            None => 0,
        };

        Ok(Geometry {
            height,
            columns,
            selected,
        })
    }
}

/// The shape of the grid, and where the cursor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub height: usize,
    pub columns: usize,
    pub selected: usize,
}
