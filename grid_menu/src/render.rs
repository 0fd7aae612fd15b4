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

use smallvec::SmallVec;

use crate::{COLUMN_SEPARATOR, LEFT_SCROLL_MARKER, MenuBehavior, MenuError, MenuState,
            RIGHT_SCROLL_MARKER, SpanStyle, StyleSheet, TerminalDriver};

/// Stack allocated for the common case of a handful of rows (or spans in a row).
pub type InlineVec<T> = SmallVec<[T; 8]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Option<SpanStyle>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: Option<SpanStyle>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
    pub spans: InlineVec<Span>,
}

impl RenderedLine {
    /// The text of the line without any styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }
}

/// Lays out one page of the grid: exactly `window.height` lines, even when the visible
/// list is shorter than the page (or empty).
pub fn render_lines(
    state: &MenuState,
    behavior: &dyn MenuBehavior,
    style_sheet: &StyleSheet,
) -> InlineVec<RenderedLine> {
    let window = state.window;
    let len = state.visible_len();
    let page = window.page_range(len);
    let label_width = state.label_width();

    (0..window.height)
        .map(|row| {
            let mut line = RenderedLine::default();
            for column in 0..window.columns {
                let index = window.grid_index(column, row);
                if !page.contains(&index) {
                    break;
                }
                let Some(option) = state.visible_option(index) else {
                    break;
                };

                if column > 0 {
                    line.push(Span::plain(COLUMN_SEPARATOR));
                }
                line.push(left_marker(state, index, style_sheet));
                line.push(Span::styled(
                    format!("{option:<label_width$}"),
                    behavior.style_item(state, index, style_sheet),
                ));
                line.push(right_marker(state, index, style_sheet));
            }
            line
        })
        .collect()
}

/// `^` on the top left item when there is something before the page. Other items in the
/// first column get a space so the columns line up.
fn left_marker(state: &MenuState, index: usize, style_sheet: &StyleSheet) -> Span {
    let window = state.window;
    if index > 0 && index == window.top_left() {
        Span::styled(LEFT_SCROLL_MARKER, Some(style_sheet.marker_style))
    } else if (window.top_left()..=window.bottom_left()).contains(&index) {
        Span::plain(" ")
    } else {
        Span::plain("")
    }
}

/// `v` on the bottom right item when there is something after the page.
fn right_marker(state: &MenuState, index: usize, style_sheet: &StyleSheet) -> Span {
    let window = state.window;
    if index + 1 < state.visible_len() && index == window.bottom_right() {
        Span::styled(RIGHT_SCROLL_MARKER, Some(style_sheet.marker_style))
    } else if (window.top_right()..=window.bottom_right()).contains(&index) {
        Span::plain(" ")
    } else {
        Span::plain("")
    }
}

/// Writes `lines` at the cursor, each one followed by clear to end of line and a line
/// break. The cursor ends up at the start of the line after the last one.
///
/// # Errors
///
/// Returns [`MenuError::TerminalOutput`] if writing fails.
pub fn paint_lines(
    terminal: &mut impl TerminalDriver,
    lines: &[RenderedLine],
) -> Result<(), MenuError> {
    for line in lines {
        for span in &line.spans {
            match span.style {
                Some(style) => {
                    let text =
                        terminal.colorize(&span.text, style.fg, style.bg, style.bright);
                    terminal.print(&text)?;
                }
                None => terminal.print(&span.text)?,
            }
        }
        terminal.clear_to_end_of_line()?;
        terminal.line_break()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyPress, Navigator, Window, build_behavior_chain};
    use pretty_assertions::assert_eq;

    fn state(count: usize, window: Window) -> MenuState {
        let options = ('a'..='z').take(count).map(String::from).collect();
        MenuState::new(options, window)
    }

    fn plain_lines(lines: &[RenderedLine]) -> Vec<String> {
        lines.iter().map(RenderedLine::plain_text).collect()
    }

    #[test]
    fn test_first_page_of_two_columns() {
        let state = state(5, Window::new(0, 3, 2, 5));
        let lines = render_lines(&state, &Navigator, &StyleSheet::default());
        assert_eq!(plain_lines(&lines), vec![" a d ", " b e ", " c"]);
    }

    #[test]
    fn test_scroll_markers_on_a_middle_page() {
        let state = state(10, Window::new(3, 3, 1, 10));
        let style_sheet = StyleSheet::default();
        let lines = render_lines(&state, &Navigator, &style_sheet);
        assert_eq!(plain_lines(&lines), vec!["^d ", " e ", " fv"]);

        let marker = &lines[0].spans[0];
        assert_eq!(marker.style, Some(style_sheet.marker_style));
        let cursor = &lines[0].spans[1];
        assert_eq!(cursor.text, "d");
        assert_eq!(cursor.style, Some(style_sheet.cursor_style));
    }

    #[test]
    fn test_last_page_has_no_down_marker() {
        let state = state(10, Window::new(9, 3, 1, 10));
        let lines = render_lines(&state, &Navigator, &StyleSheet::default());
        assert_eq!(plain_lines(&lines), vec!["^h ", " i ", " j "]);
    }

    #[test]
    fn test_labels_are_padded_to_widest_option() {
        let options = ["a", "abcd", "ab"].map(String::from).to_vec();
        let state = MenuState::new(options, Window::new(0, 1, 3, 3));
        let lines = render_lines(&state, &Navigator, &StyleSheet::default());
        assert_eq!(plain_lines(&lines), vec![" a    abcd ab   "]);
    }

    #[test]
    fn test_empty_search_result_renders_blank_page() {
        let mut state = state(4, Window::new(0, 2, 1, 4));
        let mut chain = build_behavior_chain(true, false);
        chain.handle_key(&mut state, KeyPress::Char('#'));
        let lines = render_lines(&state, chain.as_ref(), &StyleSheet::default());
        assert_eq!(plain_lines(&lines), vec!["", ""]);
    }

    #[test]
    fn test_paint_lines_clears_and_breaks_each_line() {
        use crate::{CrosstermTerminal, Size, test_fixtures::StdoutMock};

        let stdout_mock = StdoutMock::default();
        let mut terminal = CrosstermTerminal::new_mock(
            stdout_mock.clone(),
            Size {
                col_width: 20,
                row_height: 5,
            },
        );
        let state = state(2, Window::new(1, 2, 1, 2));
        let lines = render_lines(&state, &Navigator, &StyleSheet::default());
        paint_lines(&mut terminal, &lines).unwrap();
        terminal.flush().unwrap();

        assert_eq!(
            stdout_mock
                .get_copy_of_buffer_as_string_strip_ansi()
                .replace('\r', ""),
            " a \n b \n"
        );
        assert_eq!(
            stdout_mock
                .get_copy_of_buffer_as_string()
                .matches("\u{1b}[K")
                .count(),
            2
        );
    }
}
