// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RecordError, StorageError};
use crate::task_list::MAX_TASKS;
use crate::{Task, TaskError};

/// Separates the fields of a persisted record.
pub(crate) const FIELD_SEPARATOR: char = '|';

const ESCAPE: char = '\\';

/// Flat-file persistence of the task list, one record per line.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks from the file.
    ///
    /// A missing file is a first run and yields no tasks. Malformed lines are
    /// skipped one by one, and a file that cannot be read at all yields no tasks.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            tracing::info!("task file does not exist yet, starting with an empty list");
            return Vec::new();
        }

        match fs::read(&self.path) {
            Ok(content) => {
                let tasks = parse_records(&content);
                tracing::debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(source) => {
                let err = StorageError::ReadFailure {
                    path: self.path.clone(),
                    source,
                };
                tracing::error!(%err, "starting with an empty list");
                Vec::new()
            }
        }
    }

    /// Overwrites the file with one line per task, creating the parent
    /// directory when needed.
    #[tracing::instrument(skip_all, fields(path = %self.path.display(), count = tasks.len()))]
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let write_failure = |source: std::io::Error| StorageError::WriteFailure {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_failure)?;
            }
        }

        let content: String = tasks
            .iter()
            .map(|task| task.serialize() + "\n")
            .collect();
        fs::write(&self.path, content).map_err(write_failure)?;

        tracing::debug!("saved tasks");
        Ok(())
    }
}

/// Parses the content of a task file, logging and dropping bad lines.
///
/// Lines are decoded one by one, so a line that is not valid UTF-8 is dropped
/// like any other malformed record.
pub fn parse_records(content: impl AsRef<[u8]>) -> Vec<Task> {
    content
        .as_ref()
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.trim_ascii().is_empty())
        .fold(Vec::new(), |mut tasks, (i, line)| {
            if tasks.len() >= MAX_TASKS {
                tracing::warn!(
                    line = i + 1,
                    max = MAX_TASKS,
                    "task list is full, skipping record"
                );
                return tasks;
            }

            match decode_line(line).and_then(parse_record) {
                Ok(task) => tasks.push(task),
                Err(err) => tracing::warn!(line = i + 1, %err, "skipping malformed record"),
            }
            tasks
        })
}

fn decode_line(line: &[u8]) -> Result<&str, RecordError> {
    std::str::from_utf8(line).map_err(|_| RecordError::InvalidUtf8)
}

/// Parses one persisted line into a task.
pub fn parse_record(line: &str) -> Result<Task, RecordError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(RecordError::TooFewFields(fields.len()));
    }

    let done = match fields[1].as_str() {
        "1" => true,
        "0" => false,
        flag => return Err(RecordError::UnknownFlag(flag.to_string())),
    };

    let (code, name, expected) = match fields[0].as_str() {
        "T" => ('T', "todo", 3),
        "D" => ('D', "deadline", 4),
        "E" => ('E', "event", 5),
        kind => return Err(RecordError::UnknownKind(kind.to_string())),
    };
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            kind: code,
            expected,
            found: fields.len(),
        });
    }

    let description = unescape_field(&fields[2]);
    if description.is_empty() {
        return Err(TaskError::EmptyDescription(name).into());
    }

    let mut task = match code {
        'D' => Task::deadline(description, &fields[3])?,
        'E' => Task::event(description, &fields[3], &fields[4])?,
        _ => Task::todo(description),
    };
    task.set_done(done);
    Ok(task)
}

/// Escapes the separator and the escape character itself.
pub(crate) fn escape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == FIELD_SEPARATOR || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Reverses [`escape_field`]. An escape before any other character is kept
/// literally, so `C:\new` reads back unchanged.
fn unescape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let escaped = match c {
            ESCAPE => chars.next_if(|&n| n == FIELD_SEPARATOR || n == ESCAPE),
            _ => None,
        };
        out.push(escaped.unwrap_or(c));
    }
    out
}

/// Splits a line on unescaped separators. Fields are trimmed but still escaped.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            FIELD_SEPARATOR => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
