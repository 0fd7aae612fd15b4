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

use std::io;

use crate::{KeyPress, KeyPressReader, MenuError};

/// Plays back a fixed list of key presses. Once they run out, it reports the end of
/// input, or an error if built with [`TestVecKeyPressReader::failing_after`].
#[derive(Debug, Clone, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: usize,
    pub fail_at_end: bool,
}

impl TestVecKeyPressReader {
    pub fn new(key_press_vec: impl Into<Vec<KeyPress>>) -> Self {
        Self {
            key_press_vec: key_press_vec.into(),
            ..Self::default()
        }
    }

    pub fn failing_after(key_press_vec: impl Into<Vec<KeyPress>>) -> Self {
        Self {
            fail_at_end: true,
            ..Self::new(key_press_vec)
        }
    }

    /// Key presses for every char of `text`, with `' '` as [`KeyPress::Space`].
    #[must_use]
    pub fn typed(text: &str) -> Vec<KeyPress> {
        text.chars()
            .map(|it| match it {
                ' ' => KeyPress::Space,
                _ => KeyPress::Char(it),
            })
            .collect()
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Result<Option<KeyPress>, MenuError> {
        if let Some(key_press) = self.key_press_vec.get(self.index) {
            self.index += 1;
            return Ok(Some(*key_press));
        }

        if self.fail_at_end {
            Err(MenuError::InputStream {
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "no more key presses"),
            })
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plays_back_then_ends() {
        let mut reader = TestVecKeyPressReader::new([KeyPress::Down, KeyPress::Enter]);
        assert_eq!(reader.read_key_press().unwrap(), Some(KeyPress::Down));
        assert_eq!(reader.read_key_press().unwrap(), Some(KeyPress::Enter));
        assert_eq!(reader.read_key_press().unwrap(), None);
        assert_eq!(reader.read_key_press().unwrap(), None);
    }

    #[test]
    fn test_failing_after() {
        let mut reader = TestVecKeyPressReader::failing_after([KeyPress::Up]);
        assert_eq!(reader.read_key_press().unwrap(), Some(KeyPress::Up));
        assert!(matches!(
            reader.read_key_press(),
            Err(MenuError::InputStream { .. })
        ));
    }

    #[test]
    fn test_typed() {
        assert_eq!(
            TestVecKeyPressReader::typed("a b"),
            vec![KeyPress::Char('a'), KeyPress::Space, KeyPress::Char('b')]
        );
    }
}
