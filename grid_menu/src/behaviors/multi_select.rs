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

use std::collections::BTreeSet;

use crate::{DEVELOPMENT_MODE, EventLoopResult, KeyPress, MenuBehavior, MenuResult,
            MenuState, SpanStyle, StyleSheet};

/// Space toggles the highlighted option and moves down. Options are tracked by value,
/// so duplicates are chosen together.
#[derive(Debug)]
pub struct MultiSelect<N> {
    next: N,
    chosen: BTreeSet<String>,
}

impl<N: MenuBehavior> MultiSelect<N> {
    pub fn new(next: N) -> Self {
        Self {
            next,
            chosen: BTreeSet::new(),
        }
    }

    pub fn chosen(&self) -> impl Iterator<Item = &str> {
        self.chosen.iter().map(String::as_str)
    }

    fn toggle_highlighted(&mut self, state: &MenuState) {
        let Some(option) = state.highlighted() else {
            return;
        };
        if !self.chosen.remove(option) {
            self.chosen.insert(option.to_string());
        }
        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "toggle", option = ?option, chosen = ?self.chosen);
        });
    }
}

impl<N: MenuBehavior> MenuBehavior for MultiSelect<N> {
    fn handle_key(&mut self, state: &mut MenuState, key: KeyPress) -> EventLoopResult {
        match key {
            KeyPress::Space => {
                self.toggle_highlighted(state);
                self.next.handle_key(state, KeyPress::Down);
                EventLoopResult::ContinueAndRerender
            }
            KeyPress::Enter => self.on_enter(state),
            KeyPress::Esc => self.on_esc(state),
            other => self.next.handle_key(state, other),
        }
    }

    fn on_enter(&mut self, state: &mut MenuState) -> EventLoopResult {
        if self.chosen.is_empty() {
            match state.highlighted() {
                Some(option) => {
                    self.chosen.insert(option.to_string());
                }
                None => return EventLoopResult::Continue,
            }
        }
        let chosen = self.chosen.iter().cloned().collect();
        EventLoopResult::ExitWithResult(MenuResult::ChosenMany(chosen))
    }

    fn on_esc(&mut self, state: &mut MenuState) -> EventLoopResult {
        // An inner layer may use esc for itself, eg to leave search mode.
        match self.next.on_esc(state) {
            EventLoopResult::ExitWithResult(_) => {
                EventLoopResult::ExitWithResult(MenuResult::ChosenMany(vec![]))
            }
            other => other,
        }
    }

    fn style_item(
        &self,
        state: &MenuState,
        index: usize,
        style_sheet: &StyleSheet,
    ) -> Option<SpanStyle> {
        let is_chosen = state
            .visible_option(index)
            .is_some_and(|option| self.chosen.contains(option));
        let has_cursor = index == state.window.selected;
        match (is_chosen, has_cursor) {
            (true, true) => Some(style_sheet.chosen_cursor_style),
            (true, false) => Some(style_sheet.chosen_style),
            (false, _) => self.next.style_item(state, index, style_sheet),
        }
    }

    fn status_line(&self) -> Option<String> { self.next.status_line() }

    fn wants_text_cursor(&self) -> bool { self.next.wants_text_cursor() }
}
