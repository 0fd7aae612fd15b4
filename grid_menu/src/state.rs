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

use crate::{NavCommand, Window, navigate};

/// What the menu returns. An empty multi select and "nothing was chosen" are different
/// variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResult {
    Chosen(String),
    /// Sorted ascending. Empty when a multi select menu is dismissed with esc.
    ChosenMany(Vec<String>),
    Cancelled,
}

impl MenuResult {
    #[must_use]
    pub fn into_single(self) -> Option<String> {
        match self {
            MenuResult::Chosen(it) => Some(it),
            MenuResult::ChosenMany(it) => it.into_iter().next(),
            MenuResult::Cancelled => None,
        }
    }

    #[must_use]
    pub fn into_many(self) -> Vec<String> {
        match self {
            MenuResult::Chosen(it) => vec![it],
            MenuResult::ChosenMany(it) => it,
            MenuResult::Cancelled => vec![],
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { matches!(self, MenuResult::Cancelled) }
}

/// The options, and the projection of them that is currently visible. Without a search
/// the projection is the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    options: Vec<String>,
    /// `index_map[i]` is the index in `options` of the i-th visible item.
    index_map: Vec<usize>,
    pub window: Window,
    /// Widest option in chars, over all options, so the columns don't jump around while
    /// searching.
    label_width: usize,
}

impl MenuState {
    pub fn new(options: Vec<String>, window: Window) -> Self {
        let label_width = options
            .iter()
            .map(|it| it.chars().count())
            .max()
            .unwrap_or(0);
        let index_map = (0..options.len()).collect();
        let mut it = Self {
            options,
            index_map,
            window,
            label_width,
        };
        it.window.clamp(it.visible_len());
        it
    }

    #[must_use]
    pub fn options(&self) -> &[String] { &self.options }

    #[must_use]
    pub fn index_map(&self) -> &[usize] { &self.index_map }

    #[must_use]
    pub fn label_width(&self) -> usize { self.label_width }

    #[must_use]
    pub fn visible_len(&self) -> usize { self.index_map.len() }

    #[must_use]
    pub fn visible_option(&self, index: usize) -> Option<&str> {
        let original_index = *self.index_map.get(index)?;
        self.options.get(original_index).map(String::as_str)
    }

    pub fn visible_options(&self) -> impl Iterator<Item = &str> {
        self.index_map
            .iter()
            .filter_map(|&it| self.options.get(it).map(String::as_str))
    }

    /// The option under the cursor. `None` only when nothing is visible.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> { self.visible_option(self.window.selected) }

    /// Replaces the visible projection and moves the cursor back to the first item.
    pub fn set_index_map(&mut self, index_map: Vec<usize>) {
        self.index_map = index_map;
        self.window.selected = 0;
        self.window.first = 0;
        self.window.clamp(self.visible_len());
    }

    pub fn navigate(&mut self, command: NavCommand) {
        let len = self.visible_len();
        navigate(&mut self.window, command, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> MenuState {
        let options = ["apple", "buzz", "fizz", "grapefruit"]
            .map(String::from)
            .to_vec();
        MenuState::new(options, Window::new(2, 2, 1, 4))
    }

    #[test]
    fn test_projection() {
        let mut state = state();
        assert_eq!(state.label_width(), 10);
        assert_eq!(state.highlighted(), Some("fizz"));

        state.set_index_map(vec![1, 2]);
        assert_eq!(state.visible_options().collect::<Vec<_>>(), vec!["buzz", "fizz"]);
        assert_eq!(state.window.selected, 0);
        assert_eq!(state.window.first, 0);
        assert_eq!(state.highlighted(), Some("buzz"));
        assert_eq!(state.visible_option(2), None);

        state.set_index_map(vec![]);
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.label_width(), 10);
    }

    #[test]
    fn test_label_width_counts_chars() {
        let state = MenuState::new(vec!["née".to_string()], Window::new(0, 1, 1, 1));
        assert_eq!(state.label_width(), 3);
    }

    #[test]
    fn test_result_conversions() {
        assert_eq!(MenuResult::Cancelled.into_single(), None);
        assert_eq!(MenuResult::Cancelled.into_many(), Vec::<String>::new());
        assert_eq!(
            MenuResult::Chosen("a".to_string()).into_many(),
            vec!["a".to_string()]
        );
        assert!(!MenuResult::ChosenMany(vec![]).is_cancelled());
    }
}
