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

use crate::{EventLoopResult, KeyPress, MenuBehavior, MenuResult, MenuState, SpanStyle,
            StyleSheet, Window};

/// Cursor movements. Every movement ends with [`Window::clamp`], so the rules below can
/// overshoot the ends of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

impl NavCommand {
    #[must_use]
    pub fn from_key(key: KeyPress) -> Option<Self> {
        match key {
            KeyPress::Up => Some(NavCommand::Up),
            KeyPress::Down => Some(NavCommand::Down),
            KeyPress::Left => Some(NavCommand::Left),
            KeyPress::Right => Some(NavCommand::Right),
            KeyPress::PageUp => Some(NavCommand::PageUp),
            KeyPress::PageDown => Some(NavCommand::PageDown),
            KeyPress::Home => Some(NavCommand::Home),
            KeyPress::End => Some(NavCommand::End),
            KeyPress::Enter
            | KeyPress::Esc
            | KeyPress::Backspace
            | KeyPress::Space
            | KeyPress::Char(_) => None,
        }
    }
}

/// Moves the cursor in `window` over a list of `len` visible items.
pub fn navigate(window: &mut Window, command: NavCommand, len: usize) {
    if len == 0 {
        window.clamp(len);
        return;
    }

    let items = window.items_in_page(len);
    let last_in_page = window.first + items - 1;

    match command {
        NavCommand::Down => {
            if window.selected == last_in_page {
                window.first += 1;
            }
            window.selected += 1;
        }
        NavCommand::Up => {
            if window.selected == window.first {
                window.first = window.first.saturating_sub(1);
            }
            window.selected = window.selected.saturating_sub(1);
        }
        NavCommand::Right => on_right(window),
        NavCommand::Left => on_left(window),
        NavCommand::PageDown => {
            if window.selected == last_in_page {
                window.first += items;
                window.selected += items;
            } else {
                window.selected = last_in_page;
            }
        }
        NavCommand::PageUp => {
            if window.selected == window.first {
                window.first = window.first.saturating_sub(items);
                window.selected = window.selected.saturating_sub(items);
            } else {
                window.selected = window.first;
            }
        }
        NavCommand::Home => {
            window.selected = 0;
            window.first = 0;
        }
        NavCommand::End => {
            window.selected = len - 1;
            window.first = len - items + 1;
        }
    }

    window.clamp(len);
}

fn on_right(window: &mut Window) {
    let top_right = window.top_right();
    let bottom_right = window.bottom_right();
    if window.selected >= top_right {
        if window.selected < bottom_right {
            window.selected = bottom_right;
        } else if window.selected == bottom_right {
            window.first += window.height;
            window.selected += window.height;
        }
    } else {
        window.selected += window.height;
    }
}

fn on_left(window: &mut Window) {
    let top_left = window.top_left();
    let bottom_left = window.bottom_left();
    if window.selected <= bottom_left {
        if window.selected > top_left {
            window.selected = top_left;
        } else if window.selected == top_left {
            window.first = window.first.saturating_sub(window.height);
            window.selected = window.selected.saturating_sub(window.height);
        }
    } else {
        window.selected = window.selected.saturating_sub(window.height);
    }
}

/// The innermost behavior: plain grid navigation. Enter picks the highlighted option,
/// esc cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Navigator;

impl MenuBehavior for Navigator {
    fn handle_key(&mut self, state: &mut MenuState, key: KeyPress) -> EventLoopResult {
        match key {
            KeyPress::Enter => self.on_enter(state),
            KeyPress::Esc => self.on_esc(state),
            other => match NavCommand::from_key(other) {
                Some(command) => {
                    state.navigate(command);
                    EventLoopResult::ContinueAndRerender
                }
                None => EventLoopResult::Continue,
            },
        }
    }

    fn on_enter(&mut self, state: &mut MenuState) -> EventLoopResult {
        match state.highlighted() {
            Some(option) => {
                EventLoopResult::ExitWithResult(MenuResult::Chosen(option.to_string()))
            }
            // Nothing to pick when a search matches nothing.
            None => EventLoopResult::Continue,
        }
    }

    fn on_esc(&mut self, _state: &mut MenuState) -> EventLoopResult {
        EventLoopResult::ExitWithResult(MenuResult::Cancelled)
    }

    fn style_item(
        &self,
        state: &MenuState,
        index: usize,
        style_sheet: &StyleSheet,
    ) -> Option<SpanStyle> {
        (index == state.window.selected).then_some(style_sheet.cursor_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn window(selected: usize, first: usize, height: usize, columns: usize) -> Window {
        Window {
            selected,
            first,
            height,
            columns,
        }
    }

    fn run(mut window: Window, len: usize, commands: &[NavCommand]) -> (usize, usize) {
        for command in commands {
            navigate(&mut window, *command, len);
        }
        (window.selected, window.first)
    }

    #[test]
    fn test_three_downs_scroll_a_single_column() {
        use NavCommand::Down;
        assert_eq!(run(window(0, 0, 3, 1), 5, &[Down, Down]), (2, 0));
        assert_eq!(run(window(0, 0, 3, 1), 5, &[Down, Down, Down]), (3, 1));
        assert_eq!(run(window(0, 0, 3, 1), 5, &[Down; 10]), (4, 2));
    }

    #[test]
    fn test_up_scrolls_back_and_stops_at_zero() {
        use NavCommand::Up;
        assert_eq!(run(window(3, 3, 3, 1), 10, &[Up]), (2, 2));
        assert_eq!(run(window(4, 3, 3, 1), 10, &[Up]), (3, 3));
        assert_eq!(run(window(0, 0, 3, 1), 10, &[Up, Up]), (0, 0));
    }

    // 10 items, 3 rows, 2 columns. Page 0 holds indices 0..6.
    #[test_case(window(0, 0, 3, 2), (3, 0) ; "top left moves one column right")]
    #[test_case(window(3, 0, 3, 2), (5, 0) ; "top right jumps to bottom right")]
    #[test_case(window(5, 0, 3, 2), (8, 3) ; "bottom right scrolls by a column")]
    #[test_case(window(9, 4, 3, 2), (9, 4) ; "bottom right of the last page stays put")]
    fn test_right(start: Window, expected: (usize, usize)) {
        assert_eq!(run(start, 10, &[NavCommand::Right]), expected);
    }

    #[test_case(window(4, 0, 3, 2), (1, 0) ; "second column moves one column left")]
    #[test_case(window(2, 0, 3, 2), (0, 0) ; "bottom left jumps to top left")]
    #[test_case(window(3, 3, 3, 2), (0, 0) ; "top left scrolls by a column")]
    #[test_case(window(4, 2, 3, 2), (2, 2) ; "inside first column jumps to top left")]
    fn test_left(start: Window, expected: (usize, usize)) {
        assert_eq!(run(start, 10, &[NavCommand::Left]), expected);
    }

    #[test]
    fn test_page_down_visits_every_item() {
        let mut window = window(0, 0, 3, 1);
        let mut visited = vec![];
        for _ in 0..6 {
            navigate(&mut window, NavCommand::PageDown, 10);
            visited.extend(window.page_range(10));
        }
        assert_eq!(window.selected, 9);
        assert_eq!(window.first, 7);
        for index in 0..10 {
            assert!(visited.contains(&index), "index {index} never shown");
        }
    }

    #[test]
    fn test_page_up() {
        use NavCommand::PageUp;
        assert_eq!(run(window(8, 6, 3, 1), 10, &[PageUp]), (6, 6));
        assert_eq!(run(window(8, 6, 3, 1), 10, &[PageUp, PageUp]), (3, 3));
        assert_eq!(run(window(1, 1, 3, 1), 10, &[PageUp]), (0, 0));
    }

    #[test]
    fn test_home_end_home() {
        use NavCommand::{End, Home};
        assert_eq!(run(window(4, 3, 3, 2), 20, &[End]), (19, 14));
        assert_eq!(run(window(4, 3, 3, 2), 20, &[Home, End, Home]), (0, 0));
        assert_eq!(run(window(0, 0, 5, 5), 4, &[End]), (3, 0));
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        for command in [
            NavCommand::Up,
            NavCommand::Down,
            NavCommand::Left,
            NavCommand::Right,
            NavCommand::PageUp,
            NavCommand::PageDown,
            NavCommand::Home,
            NavCommand::End,
        ] {
            assert_eq!(run(window(0, 0, 3, 2), 0, &[command]), (0, 0));
        }
    }

    #[test]
    fn test_unbound_keys_have_no_command() {
        assert_eq!(NavCommand::from_key(KeyPress::Space), None);
        assert_eq!(NavCommand::from_key(KeyPress::Char('j')), None);
        assert_eq!(
            NavCommand::from_key(KeyPress::PageDown),
            Some(NavCommand::PageDown)
        );
    }

    #[test]
    fn test_navigator_finalizes_on_enter_and_esc() {
        let options = ["a", "b", "c"].map(String::from).to_vec();
        let mut state = MenuState::new(options, Window::new(1, 3, 1, 3));
        let mut navigator = Navigator;

        assert_eq!(
            navigator.handle_key(&mut state, KeyPress::Char('x')),
            EventLoopResult::Continue
        );
        assert_eq!(
            navigator.handle_key(&mut state, KeyPress::Down),
            EventLoopResult::ContinueAndRerender
        );
        assert_eq!(
            navigator.handle_key(&mut state, KeyPress::Enter),
            EventLoopResult::ExitWithResult(MenuResult::Chosen("c".to_string()))
        );
        assert_eq!(
            navigator.handle_key(&mut state, KeyPress::Esc),
            EventLoopResult::ExitWithResult(MenuResult::Cancelled)
        );
    }
}
