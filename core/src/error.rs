// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// Errors surfaced to the user while interpreting a command.
///
/// Every variant is recoverable: the session reports it and keeps going, and the
/// failed command leaves the task list untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The input does not start with any known command keyword.
    #[error(
        "Unknown command '{0}'. Try: todo, deadline, event, list, mark, unmark, delete, find or bye"
    )]
    UnknownCommand(String),

    /// The arguments do not follow the command's grammar.
    #[error("Invalid format. Usage: {0}")]
    BadFormat(&'static str),

    /// A task would be created without a description.
    #[error("The description of a {0} cannot be empty")]
    EmptyDescription(&'static str),

    /// A required argument is missing.
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    /// A task number is not a valid number.
    #[error("'{0}' is not a valid task number")]
    InvalidNumber(String),

    /// A task number is outside the current list.
    #[error("Task {index} does not exist, the list has {size} task(s)")]
    InvalidIndex { index: usize, size: usize },

    /// The list is full.
    #[error("The task list is full, it holds at most {0} tasks")]
    CapacityExceeded(usize),

    /// A date is not in `yyyy-mm-dd` form or is not a real calendar date.
    #[error("Invalid date '{0}', please use yyyy-mm-dd (e.g. 2019-12-02)")]
    InvalidDate(String),

    /// An event would end before it starts.
    #[error("Event start date ({start}) cannot be after its end date ({end})")]
    InvalidDateRange { start: String, end: String },
}

/// Failures of the backing file. These never reach the command interpreter as
/// errors: the session logs them and carries on with its in-memory list.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read task file {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write task file {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single persisted line was rejected during load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    #[error("unknown task type '{0}'")]
    UnknownKind(String),

    #[error("unknown done flag '{0}'")]
    UnknownFlag(String),

    #[error("expected {expected} fields for type {kind}, found {found}")]
    FieldCount {
        kind: char,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Task(#[from] TaskError),
}

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("User-specific {0} directory not found")]
    MissingDir(&'static str),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}
