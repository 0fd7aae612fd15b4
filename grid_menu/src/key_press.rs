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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::MenuError;

/// Named key events that the menu understands. Anything else that the keyboard produces
/// is either mapped to one of these, or dropped by the [`KeyPressReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Esc,
    Backspace,
    Space,
    /// A printable character. Never a control character, never `' '`.
    Char(char),
}

impl KeyPress {
    /// Space is excluded, it is always [`KeyPress::Space`].
    #[must_use]
    pub fn is_printable(character: char) -> bool {
        !character.is_control() && character != ' '
    }
}

impl TryFrom<KeyEvent> for KeyPress {
    type Error = ();

    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        // Windows reports release events too.
        if key_event.kind != KeyEventKind::Press {
            return Err(());
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key_event.modifiers.contains(KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if ctrl => Ok(KeyPress::Esc),
            KeyCode::Char(_) if ctrl || alt => Err(()),
            KeyCode::Char(' ') => Ok(KeyPress::Space),
            KeyCode::Char(character) if KeyPress::is_printable(character) => {
                Ok(KeyPress::Char(character))
            }
            KeyCode::Up => Ok(KeyPress::Up),
            KeyCode::Down => Ok(KeyPress::Down),
            KeyCode::Left => Ok(KeyPress::Left),
            KeyCode::Right => Ok(KeyPress::Right),
            KeyCode::PageUp => Ok(KeyPress::PageUp),
            KeyCode::PageDown => Ok(KeyPress::PageDown),
            KeyCode::Home => Ok(KeyPress::Home),
            KeyCode::End => Ok(KeyPress::End),
            KeyCode::Enter => Ok(KeyPress::Enter),
            KeyCode::Esc => Ok(KeyPress::Esc),
            KeyCode::Backspace => Ok(KeyPress::Backspace),
            _ => Err(()),
        }
    }
}

impl TryFrom<Event> for KeyPress {
    type Error = ();

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) => KeyPress::try_from(key_event),
            _ => Err(()),
        }
    }
}

/// Source of key presses for the menu's event loop.
pub trait KeyPressReader {
    /// Blocks until the next key press is available.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InputStream`] if the underlying input can't be read.
    /// `Ok(None)` means the input has ended.
    fn read_key_press(&mut self) -> Result<Option<KeyPress>, MenuError>;
}

/// Reads key presses from the terminal using crossterm. Events that don't map to a
/// [`KeyPress`] (mouse, focus, resize, unbound keys) are skipped.
#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Result<Option<KeyPress>, MenuError> {
        loop {
            let event = crossterm::event::read()
                .map_err(|source| MenuError::InputStream { source })?;
            if let Ok(key_press) = KeyPress::try_from(event) {
                return Ok(Some(key_press));
            }
        }
    }
}
