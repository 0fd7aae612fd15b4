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

//! Optional [`tracing`] setup for apps that use the menu. Logs only ever go to a file,
//! since the menu owns the terminal while it is displayed.
//!
//! Logging is **disabled** by default. Call [`try_initialize_logging_global`] (apps) or
//! [`try_initialize_logging_thread_local`] (tests) with anything that converts into a
//! [`TracingConfig`] to turn it on.

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
