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

//! Behaviors are layered on top of each other. Each layer owns the next one, handles
//! the keys it cares about, and passes every other key down. The innermost layer is
//! always the [`crate::Navigator`].
//!
//! ```text
//! MultiSelect -> Filter -> Navigator
//! ```

// Attach sources.
pub mod filter;
pub mod multi_select;

// Re-export.
pub use filter::*;
pub use multi_select::*;

use std::fmt::Debug;

use crate::{KeyPress, MenuResult, MenuState, Navigator, SpanStyle, StyleSheet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    /// Nothing changed.
    Continue,
    ContinueAndRerender,
    ExitWithResult(MenuResult),
}

pub trait MenuBehavior: Debug {
    fn handle_key(&mut self, state: &mut MenuState, key: KeyPress) -> EventLoopResult;

    fn on_enter(&mut self, state: &mut MenuState) -> EventLoopResult;

    fn on_esc(&mut self, state: &mut MenuState) -> EventLoopResult;

    /// Style for the visible item at `index`, or `None` for plain text.
    fn style_item(
        &self,
        state: &MenuState,
        index: usize,
        style_sheet: &StyleSheet,
    ) -> Option<SpanStyle>;

    /// Extra line shown below the grid.
    fn status_line(&self) -> Option<String> { None }

    /// Whether the terminal cursor should be visible, eg while typing a search.
    fn wants_text_cursor(&self) -> bool { false }
}

impl<T: MenuBehavior + ?Sized> MenuBehavior for Box<T> {
    fn handle_key(&mut self, state: &mut MenuState, key: KeyPress) -> EventLoopResult {
        (**self).handle_key(state, key)
    }

    fn on_enter(&mut self, state: &mut MenuState) -> EventLoopResult {
        (**self).on_enter(state)
    }

    fn on_esc(&mut self, state: &mut MenuState) -> EventLoopResult {
        (**self).on_esc(state)
    }

    fn style_item(
        &self,
        state: &MenuState,
        index: usize,
        style_sheet: &StyleSheet,
    ) -> Option<SpanStyle> {
        (**self).style_item(state, index, style_sheet)
    }

    fn status_line(&self) -> Option<String> { (**self).status_line() }

    fn wants_text_cursor(&self) -> bool { (**self).wants_text_cursor() }
}

/// Stacks the optional layers on top of a [`Navigator`].
#[must_use]
pub fn build_behavior_chain(searchable: bool, multi_select: bool) -> Box<dyn MenuBehavior> {
    let mut chain: Box<dyn MenuBehavior> = Box::new(Navigator);
    if searchable {
        chain = Box::new(Filter::new(chain));
    }
    if multi_select {
        chain = Box::new(MultiSelect::new(chain));
    }
    chain
}
