// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{ConfigError, StorageError};
use crate::{Config, ExecOptions, Reply, Storage, TaskError, TaskList, parse};

/// A running tracker: the task list, its backing file, and execution options.
///
/// Each input line is handled on its own; the session keeps no state between
/// lines other than the list itself.
#[derive(Debug)]
pub struct Session {
    tasks: TaskList,
    storage: Storage,
    options: ExecOptions,
}

/// What happened for one input line.
#[derive(Debug)]
pub struct Outcome {
    /// The reply of the command, or why it failed.
    pub result: Result<Reply, TaskError>,

    /// Set when the list changed but could not be written to disk.
    pub save_error: Option<StorageError>,
}

impl Outcome {
    /// Whether the caller should stop reading input.
    pub fn is_exit(&self) -> bool {
        matches!(self.result, Ok(Reply::Exit))
    }
}

impl Session {
    /// Opens a session for the given configuration, loading the task file.
    pub fn open(mut config: Config) -> Result<Self, ConfigError> {
        config.normalize()?;
        let options = config.exec_options();
        let path = config.data_path.ok_or(ConfigError::MissingDir("data"))?;
        Ok(Self::load(Storage::new(path), options))
    }

    /// Creates a session whose list is replayed from `storage`.
    pub fn load(storage: Storage, options: ExecOptions) -> Self {
        let tasks = TaskList::try_from(storage.load()).unwrap_or_else(|err| {
            tracing::error!(%err, "loaded more tasks than the list can hold");
            TaskList::new()
        });
        tracing::debug!(path = %storage.path().display(), count = tasks.len(), "session opened");

        Self {
            tasks,
            storage,
            options,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Parses and executes one line, then saves if the list changed.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let command = match parse(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(line, %err, "failed to parse command");
                return Outcome {
                    result: Err(err),
                    save_error: None,
                };
            }
        };

        let mutating = command.is_mutating();
        let result = command.execute(&mut self.tasks, &self.options);

        let save_error = match (&result, mutating) {
            (Ok(_), true) => self.save().err(),
            _ => None,
        };

        Outcome { result, save_error }
    }

    /// Writes the current list to disk.
    ///
    /// A failure is logged and returned; the in-memory list stays authoritative.
    pub fn save(&self) -> Result<(), StorageError> {
        self.storage.save(self.tasks.as_slice()).inspect_err(|err| {
            tracing::error!(%err, "failed to save tasks, keeping them in memory");
        })
    }
}
