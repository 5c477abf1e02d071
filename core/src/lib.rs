// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Quill core: tasks, the bounded task list, the line-command interpreter and
//! flat-file persistence.

mod command;
mod config;
mod date;
mod error;
mod parser;
mod session;
mod storage;
mod task;
mod task_list;

pub use crate::command::{Command, ExecOptions, Reply};
pub use crate::config::{APP_NAME, Config, DATA_FILE_NAME};
pub use crate::date::{format_display, format_iso, parse_date};
pub use crate::error::{ConfigError, RecordError, StorageError, TaskError};
pub use crate::parser::parse;
pub use crate::session::{Outcome, Session};
pub use crate::storage::{Storage, parse_record, parse_records};
pub use crate::task::{Task, TaskKind};
pub use crate::task_list::{MAX_TASKS, TaskList};
