// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of Quill: argument parsing, configuration
//! discovery, the interactive prompt and reply rendering.

mod cli;
mod cmd_generate_completion;
mod cmd_repl;
mod cmd_run;
mod config;
mod reply_formatter;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
pub use crate::reply_formatter::ReplyFormatter;
