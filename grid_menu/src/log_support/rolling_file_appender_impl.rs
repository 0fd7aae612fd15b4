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

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic as _;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Creates a file appender that never rotates. A bare file name is resolved against the
/// current working directory.
///
/// Wrapping this in [`tracing_appender::non_blocking`] loses lines when the process exits
/// right after the menu returns, so it is used as a blocking writer.
///
/// # Errors
///
/// Returns an error if the path has no file name component, or if the folder can't be
/// created or the file can't be opened.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use {} as a log file. It does not name a file.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_paths_without_a_file_name() {
        assert!(try_create("..").is_err());
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_creates_appender_in_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.log");
        let result = try_create(&path.display().to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_unusable_folder_is_an_error() {
        // A regular file can't be used as a folder.
        let not_a_dir = tempfile::NamedTempFile::new().unwrap();
        let path = not_a_dir.path().join("menu.log");
        assert!(try_create(&path.display().to_string()).is_err());
    }
}
