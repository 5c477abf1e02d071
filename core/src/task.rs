// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Date;

use crate::TaskError;
use crate::date::{format_display, format_iso, parse_date};
use crate::storage::{FIELD_SEPARATOR, escape_field};

/// A single trackable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

/// The variant of a task together with the dates it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain to-do without any date.
    ToDo,

    /// A task that must be done by a date.
    Deadline { due: Date },

    /// A task spanning a date range.
    Event { start: Date, end: Date },
}

impl TaskKind {
    /// The one-letter code used in display text and in the task file.
    pub fn code(&self) -> char {
        match self {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

impl Task {
    /// Creates a to-do.
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::ToDo)
    }

    /// Creates a deadline, parsing `by` as `yyyy-mm-dd`.
    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self, TaskError> {
        let due = parse_date(by)?;
        Ok(Self::new(description, TaskKind::Deadline { due }))
    }

    /// Creates an event, parsing `from` and `to` as `yyyy-mm-dd`.
    ///
    /// The order of the two dates is not checked here, see
    /// [`Task::check_date_range`].
    pub fn event(description: impl Into<String>, from: &str, to: &str) -> Result<Self, TaskError> {
        let start = parse_date(from)?;
        let end = parse_date(to)?;
        Ok(Self::new(description, TaskKind::Event { start, end }))
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub fn set_done(&mut self, done: bool) {
        if done {
            self.mark_done();
        } else {
            self.mark_not_done();
        }
    }

    /// Fails with [`TaskError::InvalidDateRange`] for an event that starts after it ends.
    pub fn check_date_range(&self) -> Result<(), TaskError> {
        match self.kind {
            TaskKind::Event { start, end } if start > end => Err(TaskError::InvalidDateRange {
                start: format_display(start),
                end: format_display(end),
            }),
            _ => Ok(()),
        }
    }

    /// Whether the description contains `keyword`, ignoring case.
    pub fn matches(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// The persisted line for this task, e.g. `D | 1 | submit report | 2024-03-15`.
    pub fn serialize(&self) -> String {
        let mut fields = vec![
            self.kind.code().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            escape_field(&self.description),
        ];
        match self.kind {
            TaskKind::ToDo => {}
            TaskKind::Deadline { due } => fields.push(format_iso(due)),
            TaskKind::Event { start, end } => {
                fields.push(format_iso(start));
                fields.push(format_iso(end));
            }
        }
        fields.join(&format!(" {FIELD_SEPARATOR} "))
    }
}

/// Display text, e.g. `[D][X] submit report (by: Mar 15 2024)`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.code(), status, self.description)?;
        match self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", format_display(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_display(start),
                format_display(end)
            ),
        }
    }
}
