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

//! The visible part of the option list is a page of `height` rows by `columns` columns,
//! starting at the item with index `first`. Items flow down each column first, so the
//! item in column `c` and row `r` has the index `first + c * height + r`.
//!
//! ```text
//! first = 3, height = 3, columns = 2
//!
//! ^d g      <- top_left() = 3, top_right() = 6
//!  e h
//!  f iv     <- bottom_left() = 5, bottom_right() = 8
//! ```
//!
//! All the functions here take the length of the (possibly filtered) list of visible
//! options as an argument, since the window itself does not own any options.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// Index of the highlighted item.
    pub selected: usize,
    /// Index of the item at the top left of the page.
    pub first: usize,
    pub height: usize,
    pub columns: usize,
}

impl Window {
    /// Starts on the page that contains `selected`, with `selected` at the top of its
    /// column.
    #[must_use]
    pub fn new(selected: usize, height: usize, columns: usize, len: usize) -> Self {
        let first = if height == 0 {
            0
        } else {
            selected - selected % height
        };
        let mut it = Self {
            selected,
            first,
            height,
            columns,
        };
        it.clamp(len);
        it
    }

    #[must_use]
    pub fn page_capacity(&self) -> usize { self.height * self.columns }

    #[must_use]
    pub fn items_in_page(&self, len: usize) -> usize { self.page_capacity().min(len) }

    #[must_use]
    pub fn top_left(&self) -> usize { self.first }

    #[must_use]
    pub fn bottom_left(&self) -> usize { (self.first + self.height).saturating_sub(1) }

    #[must_use]
    pub fn top_right(&self) -> usize {
        self.first + self.height * self.columns.saturating_sub(1)
    }

    #[must_use]
    pub fn bottom_right(&self) -> usize {
        (self.first + self.page_capacity()).saturating_sub(1)
    }

    /// Index of the item in `column` and `row` of the page, which may be past the end of
    /// the list.
    #[must_use]
    pub fn grid_index(&self, column: usize, row: usize) -> usize {
        self.first + column * self.height + row
    }

    /// The indices that are on the page.
    #[must_use]
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let end = (self.first + self.page_capacity()).min(len);
        self.first.min(end)..end
    }

    /// Restores the invariants `selected < len` and `first <= len - items_in_page`. Both
    /// are `0` for an empty list.
    pub fn clamp(&mut self, len: usize) {
        let items = self.items_in_page(len);
        self.selected = self.selected.min(len.saturating_sub(1));
        self.first = self.first.min(len - items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_corners() {
        let window = Window {
            selected: 4,
            first: 3,
            height: 3,
            columns: 2,
        };
        assert_eq!(window.top_left(), 3);
        assert_eq!(window.bottom_left(), 5);
        assert_eq!(window.top_right(), 6);
        assert_eq!(window.bottom_right(), 8);
        assert_eq!(window.grid_index(1, 2), 8);
        assert_eq!(window.page_range(20), 3..9);
        assert_eq!(window.page_range(7), 3..7);
    }

    #[test]
    fn test_single_column_corners_collapse() {
        let window = Window {
            selected: 0,
            first: 2,
            height: 4,
            columns: 1,
        };
        assert_eq!(window.top_left(), window.top_right());
        assert_eq!(window.bottom_left(), window.bottom_right());
    }

    #[test_case(0, 3, 2, 10 => (0, 0))]
    #[test_case(4, 3, 1, 10 => (4, 3))]
    #[test_case(9, 3, 1, 10 => (9, 7))]
    #[test_case(9, 3, 2, 10 => (9, 4))]
    #[test_case(7, 5, 5, 10 => (7, 0))]
    #[test_case(0, 3, 1, 0 => (0, 0))]
    fn test_new_starts_on_page_of_selected(
        selected: usize,
        height: usize,
        columns: usize,
        len: usize,
    ) -> (usize, usize) {
        let window = Window::new(selected, height, columns, len);
        (window.selected, window.first)
    }

    #[test]
    fn test_clamp_holds_invariants_for_all_shapes() {
        for height in 1..5 {
            for columns in 1..4 {
                for len in 0..15 {
                    let mut window = Window {
                        selected: 100,
                        first: 100,
                        height,
                        columns,
                    };
                    window.clamp(len);
                    let items = window.items_in_page(len);
                    assert!(window.selected < len.max(1));
                    assert!(window.first <= len.saturating_sub(items));
                }
            }
        }
    }
}
