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

//! # grid_menu
//!
//! An interactive, keyboard driven menu for CLI apps. It is drawn inline (no alternate
//! screen) and lays out the options in a grid of rows and columns that pages through
//! long lists. This crate can be used in two ways:
//! 1. As a library, via [`show_menu`] and [`show_multi_select_menu`].
//! 1. As a binary called `gm`, which reads options from its arguments or from stdin,
//!    and prints the chosen ones to stdout.
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use grid_menu::{MenuConfig, show_menu, show_multi_select_menu};
//!
//! # fn main() -> miette::Result<()> {
//! let config = MenuConfig::new("Pick a fruit", ["apple", "banana", "cherry"])
//!     .with_default("banana");
//! match show_menu(config)? {
//!     Some(fruit) => println!("You picked {fruit}"),
//!     None => println!("You picked nothing"),
//! }
//!
//! let config = MenuConfig::new("Pick some", ["a", "b", "c", "d"]).with_columns(2);
//! let chosen: Vec<String> = show_multi_select_menu(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Keys
//!
//! | Key                         | Action                                             |
//! |-----------------------------|----------------------------------------------------|
//! | Up, Down, Left, Right       | Move the cursor, scrolling when needed             |
//! | Page Up, Page Down          | Move to the edge of the page, then by whole pages  |
//! | Home, End                   | First, last option                                 |
//! | Enter                       | Choose the highlighted option (or chosen options)  |
//! | Esc, Ctrl+C                 | Leave search, or dismiss the menu                  |
//! | Space                       | Multi select: toggle the highlighted option        |
//! | Any other character         | Search                                             |
//! | Backspace                   | Delete the last search character                   |
//!
//! ## How to use it as a binary?
//!
//! ```shell
//! ls | gm --title "Pick a file"
//! gm --multi-select --columns 3 one two three four five
//! ```
//!
//! ## Testing
//!
//! [`run_menu`] takes any [`TerminalDriver`] and [`KeyPressReader`]. The
//! [`test_fixtures`] module has an in memory terminal and a scripted keyboard.
//!
//! ## Logging
//!
//! The crate logs with [`tracing`]. Logging is off unless you call
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod behaviors;
pub mod config;
pub mod constants;
pub mod error;
pub mod key_press;
pub mod log_support;
pub mod navigation;
pub mod public_api;
pub mod render;
pub mod session;
pub mod state;
pub mod style;
pub mod terminal;
pub mod test_fixtures;
pub mod window;

// Re-export.
pub use behaviors::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use key_press::*;
pub use log_support::*;
pub use navigation::*;
pub use public_api::*;
pub use render::*;
pub use session::*;
pub use state::*;
pub use style::*;
pub use terminal::*;
pub use window::*;

/// Turns on the verbose per key press traces.
pub const DEVELOPMENT_MODE: bool = false;
