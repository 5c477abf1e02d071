// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Task, TaskError, TaskList};

/// A validated instruction parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,

    /// Show every task.
    List,

    /// Show tasks whose description contains the keyword.
    Find(String),

    /// Mark the task at the 1-based position as done.
    Mark(usize),

    /// Mark the task at the 1-based position as not done.
    Unmark(usize),

    /// Add a to-do.
    AddTodo(String),

    /// Add a deadline. The date is validated on execution.
    AddDeadline { description: String, by: String },

    /// Add an event. The dates are validated on execution.
    AddEvent {
        description: String,
        from: String,
        to: String,
    },

    /// Delete the task at the 1-based position.
    Delete(usize),
}

/// Switches that change how commands execute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Reject events whose start date is after their end date.
    pub strict_event_range: bool,
}

/// The result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A task was added; `count` is the new size of the list.
    Added { task: Task, count: usize },

    /// A task's completion flag was set to `done`.
    Marked { task: Task, done: bool },

    /// A task was removed; `count` is the remaining size of the list.
    Deleted { task: Task, count: usize },

    /// All tasks, in list order.
    Listing(Vec<Task>),

    /// Tasks matching `keyword` with their positions in the full list.
    Found {
        keyword: String,
        matches: Vec<(usize, Task)>,
    },

    /// The session should end.
    Exit,
}

impl Command {
    /// Whether a successful run of this command changes the task list.
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Exit | Command::List | Command::Find(_) => false,
            Command::Mark(_)
            | Command::Unmark(_)
            | Command::AddTodo(_)
            | Command::AddDeadline { .. }
            | Command::AddEvent { .. }
            | Command::Delete(_) => true,
        }
    }

    /// Runs the command against the list. A failed command leaves the list unchanged.
    pub fn execute(self, tasks: &mut TaskList, options: &ExecOptions) -> Result<Reply, TaskError> {
        tracing::debug!(command = ?self, "executing command...");
        match self {
            Command::Exit => Ok(Reply::Exit),

            Command::List => Ok(Reply::Listing(tasks.iter().cloned().collect())),

            Command::Find(keyword) => {
                let matches = tasks
                    .find(&keyword)
                    .into_iter()
                    .map(|(n, task)| (n, task.clone()))
                    .collect();
                Ok(Reply::Found { keyword, matches })
            }

            Command::Mark(n) => mark(tasks, n, true),
            Command::Unmark(n) => mark(tasks, n, false),

            Command::AddTodo(description) => add(tasks, Task::todo(description)),

            Command::AddDeadline { description, by } => {
                add(tasks, Task::deadline(description, &by)?)
            }

            Command::AddEvent {
                description,
                from,
                to,
            } => {
                let task = Task::event(description, &from, &to)?;
                if options.strict_event_range {
                    task.check_date_range()?;
                }
                add(tasks, task)
            }

            Command::Delete(n) => {
                let task = tasks.delete(n)?;
                Ok(Reply::Deleted {
                    task,
                    count: tasks.len(),
                })
            }
        }
    }
}

fn add(tasks: &mut TaskList, task: Task) -> Result<Reply, TaskError> {
    tasks.add(task.clone())?;
    Ok(Reply::Added {
        task,
        count: tasks.len(),
    })
}

fn mark(tasks: &mut TaskList, n: usize, done: bool) -> Result<Reply, TaskError> {
    let task = tasks.mark(n, done)?.clone();
    Ok(Reply::Marked { task, done })
}
