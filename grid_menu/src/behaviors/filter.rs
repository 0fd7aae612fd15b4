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

use crate::{DEVELOPMENT_MODE, EventLoopResult, KeyPress, MenuBehavior, MenuState,
            SpanStyle, StyleSheet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active: bool,
    pub query: String,
}

/// Incremental search. Typing any printable character starts a search, and the visible
/// items become the options that contain the query, ignoring case.
#[derive(Debug)]
pub struct Filter<N> {
    next: N,
    filter_state: FilterState,
}

impl<N: MenuBehavior> Filter<N> {
    pub fn new(next: N) -> Self {
        Self {
            next,
            filter_state: FilterState::default(),
        }
    }

    pub fn filter_state(&self) -> &FilterState { &self.filter_state }

    fn refilter(&self, state: &mut MenuState) {
        let index_map = if self.filter_state.active {
            matching_indices(state.options(), &self.filter_state.query)
        } else {
            (0..state.options().len()).collect()
        };

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "refilter",
                query = ?self.filter_state.query,
                matches = index_map.len()
            );
        });

        state.set_index_map(index_map);
    }
}

/// Indices of the options that contain `query`, ignoring case.
#[must_use]
pub fn matching_indices(options: &[String], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.to_lowercase().contains(&query))
        .map(|(index, _)| index)
        .collect()
}

impl<N: MenuBehavior> MenuBehavior for Filter<N> {
    fn handle_key(&mut self, state: &mut MenuState, key: KeyPress) -> EventLoopResult {
        match key {
            KeyPress::Char(character) => {
                if !self.filter_state.active {
                    self.filter_state.active = true;
                    self.filter_state.query.clear();
                }
                self.filter_state.query.push(character);
                self.refilter(state);
                EventLoopResult::ContinueAndRerender
            }
            KeyPress::Backspace => {
                if self.filter_state.active && self.filter_state.query.pop().is_some() {
                    self.refilter(state);
                    EventLoopResult::ContinueAndRerender
                } else {
                    EventLoopResult::Continue
                }
            }
            KeyPress::Enter => self.on_enter(state),
            KeyPress::Esc => self.on_esc(state),
            other => self.next.handle_key(state, other),
        }
    }

    fn on_enter(&mut self, state: &mut MenuState) -> EventLoopResult {
        self.next.on_enter(state)
    }

    fn on_esc(&mut self, state: &mut MenuState) -> EventLoopResult {
        if self.filter_state.active {
            self.filter_state = FilterState::default();
            self.refilter(state);
            EventLoopResult::ContinueAndRerender
        } else {
            self.next.on_esc(state)
        }
    }

    fn style_item(
        &self,
        state: &MenuState,
        index: usize,
        style_sheet: &StyleSheet,
    ) -> Option<SpanStyle> {
        self.next.style_item(state, index, style_sheet)
    }

    fn status_line(&self) -> Option<String> {
        if self.filter_state.active {
            Some(format!("/{}", self.filter_state.query))
        } else {
            self.next.status_line()
        }
    }

    fn wants_text_cursor(&self) -> bool {
        self.filter_state.active || self.next.wants_text_cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuResult, Navigator, Window};
    use pretty_assertions::assert_eq;

    const FRUITS: [&str; 4] = ["apple", "buzz", "fizz", "grape"];

    fn setup() -> (Filter<Navigator>, MenuState) {
        let options = FRUITS.map(String::from).to_vec();
        let state = MenuState::new(options, Window::new(3, 2, 1, 4));
        (Filter::new(Navigator), state)
    }

    fn type_text(filter: &mut Filter<Navigator>, state: &mut MenuState, text: &str) {
        for character in text.chars() {
            filter.handle_key(state, KeyPress::Char(character));
        }
    }

    #[test]
    fn test_query_narrows_visible_items_and_keeps_index_map() {
        let (mut filter, mut state) = setup();
        type_text(&mut filter, &mut state, "z");
        assert_eq!(
            state.visible_options().collect::<Vec<_>>(),
            vec!["buzz", "fizz"]
        );
        assert_eq!(state.index_map(), &[1, 2]);
        assert_eq!(filter.status_line(), Some("/z".to_string()));
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Enter),
            EventLoopResult::ExitWithResult(MenuResult::Chosen("buzz".to_string()))
        );
    }

    #[test]
    fn test_match_ignores_case() {
        let options = ["Apple", "BANANA", "cherry"].map(String::from);
        assert_eq!(matching_indices(&options, "aN"), vec![1]);
        assert_eq!(matching_indices(&options, "A"), vec![0, 1]);
        assert_eq!(matching_indices(&options, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_typing_then_deleting_restores_full_list() {
        let (mut filter, mut state) = setup();
        type_text(&mut filter, &mut state, "zz");
        assert_eq!(state.visible_len(), 2);
        state.navigate(crate::NavCommand::Down);
        assert_eq!(state.window.selected, 1);

        filter.handle_key(&mut state, KeyPress::Backspace);
        filter.handle_key(&mut state, KeyPress::Backspace);
        assert_eq!(state.visible_len(), 4);
        assert_eq!(state.window.selected, 0);
        assert_eq!(state.window.first, 0);
        assert!(filter.filter_state().active);
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Backspace),
            EventLoopResult::Continue
        );
    }

    #[test]
    fn test_no_match_renders_nothing_and_enter_is_ignored() {
        let (mut filter, mut state) = setup();
        type_text(&mut filter, &mut state, "xyz");
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.highlighted(), None);
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Down),
            EventLoopResult::ContinueAndRerender
        );
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Enter),
            EventLoopResult::Continue
        );
    }

    #[test]
    fn test_esc_stops_search_then_cancels() {
        let (mut filter, mut state) = setup();
        assert_eq!(state.highlighted(), Some("grape"));
        type_text(&mut filter, &mut state, "p");
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Esc),
            EventLoopResult::ContinueAndRerender
        );
        assert_eq!(filter.filter_state(), &FilterState::default());
        assert_eq!(filter.status_line(), None);
        assert_eq!(state.visible_len(), 4);
        assert_eq!(state.highlighted(), Some("apple"));
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Esc),
            EventLoopResult::ExitWithResult(MenuResult::Cancelled)
        );
    }

    #[test]
    fn test_backspace_without_search_is_ignored() {
        let (mut filter, mut state) = setup();
        assert_eq!(
            filter.handle_key(&mut state, KeyPress::Backspace),
            EventLoopResult::Continue
        );
        assert_eq!(state.highlighted(), Some("grape"));
    }
}
