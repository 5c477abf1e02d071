// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Task, TaskError};

/// The maximum number of tasks a list can hold.
pub const MAX_TASKS: usize = 100;

/// An ordered, bounded list of tasks addressed by 1-based positions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task to the end of the list.
    pub fn add(&mut self, task: Task) -> Result<(), TaskError> {
        if self.tasks.len() >= MAX_TASKS {
            return Err(TaskError::CapacityExceeded(MAX_TASKS));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Removes and returns the task at position `n`.
    pub fn delete(&mut self, n: usize) -> Result<Task, TaskError> {
        let idx = self.index_of(n)?;
        Ok(self.tasks.remove(idx))
    }

    /// Sets the completion flag of the task at position `n`.
    pub fn mark(&mut self, n: usize, done: bool) -> Result<&Task, TaskError> {
        let idx = self.index_of(n)?;
        let task = &mut self.tasks[idx];
        task.set_done(done);
        Ok(task)
    }

    pub fn get(&self, n: usize) -> Result<&Task, TaskError> {
        let idx = self.index_of(n)?;
        Ok(&self.tasks[idx])
    }

    /// Tasks whose description contains `keyword` case-insensitively, in list
    /// order, each with its 1-based position.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.iter()
            .enumerate()
            .filter(|(_, task)| task.matches(keyword))
            .map(|(i, task)| (i + 1, task))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn index_of(&self, n: usize) -> Result<usize, TaskError> {
        if (1..=self.tasks.len()).contains(&n) {
            Ok(n - 1)
        } else {
            Err(TaskError::InvalidIndex {
                index: n,
                size: self.tasks.len(),
            })
        }
    }
}

impl TryFrom<Vec<Task>> for TaskList {
    type Error = TaskError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        if tasks.len() > MAX_TASKS {
            return Err(TaskError::CapacityExceeded(MAX_TASKS));
        }
        Ok(Self { tasks })
    }
}
