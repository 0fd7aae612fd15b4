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

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanStyle {
    pub fg: Color,
    pub bg: Option<Color>,
    pub bright: bool,
}

impl SpanStyle {
    #[must_use]
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: None,
            bright: false,
        }
    }

    #[must_use]
    pub const fn fg_on_bg(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg: Some(bg),
            bright: false,
        }
    }

    #[must_use]
    pub const fn bright(self) -> Self {
        Self {
            bright: true,
            ..self
        }
    }
}

/// Styles for every part of the menu that is not plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub title_style: SpanStyle,
    /// The `^` and `v` scroll markers.
    pub marker_style: SpanStyle,
    pub cursor_style: SpanStyle,
    /// Multi select: chosen item that does not have the cursor.
    pub chosen_style: SpanStyle,
    /// Multi select: chosen item that has the cursor.
    pub chosen_cursor_style: SpanStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title_style: SpanStyle::fg(Color::White).bright(),
            marker_style: SpanStyle::fg(Color::White).bright(),
            cursor_style: SpanStyle::fg_on_bg(Color::Black, Color::White),
            chosen_style: SpanStyle::fg(Color::Red),
            chosen_cursor_style: SpanStyle::fg_on_bg(Color::Red, Color::White),
        }
    }
}

impl StyleSheet {
    /// A monochrome variant that only relies on bright text and inverse backgrounds.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            chosen_style: SpanStyle::fg(Color::White).bright(),
            chosen_cursor_style: SpanStyle::fg_on_bg(Color::Black, Color::White),
            ..Self::default()
        }
    }
}
