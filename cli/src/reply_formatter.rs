// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Write as _};
use std::io;

use colored::Colorize;
use quill_core::{Outcome, Reply, Task};

/// Shown once when the prompt starts.
pub const GREETING: &str = "Hello! I'm Quill.\nWhat can I do for you?";

const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Renders command outcomes as the text shown to the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReplyFormatter;

impl ReplyFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the reply or error of one outcome, followed by a warning when
    /// the task file could not be updated.
    pub fn write(&self, w: &mut impl io::Write, outcome: &Outcome) -> io::Result<()> {
        match &outcome.result {
            Ok(reply) => writeln!(w, "{}", self.format(reply))?,
            Err(err) => writeln!(w, "{}", self.format_error(err))?,
        }
        if let Some(err) = &outcome.save_error {
            writeln!(
                w,
                "{} {err}. Changes are kept until the program exits.",
                "Warning:".yellow()
            )?;
        }
        Ok(())
    }

    pub fn format(&self, reply: &Reply) -> String {
        ReplyDisplay { reply }.to_string()
    }

    pub fn format_error(&self, err: &impl Display) -> String {
        format!("{} {err}", "Error:".red())
    }
}

struct ReplyDisplay<'a> {
    reply: &'a Reply,
}

impl Display for ReplyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reply {
            Reply::Added { task, count } => {
                writeln!(f, "Got it. I've added this task:")?;
                writeln!(f, "  {task}")?;
                write!(f, "Now you have {} in the list.", count_tasks(*count))
            }
            Reply::Marked { task, done: true } => {
                writeln!(f, "Nice! I've marked this task as done:")?;
                write!(f, "  {task}")
            }
            Reply::Marked { task, done: false } => {
                writeln!(f, "OK, I've marked this task as not done yet:")?;
                write!(f, "  {task}")
            }
            Reply::Deleted { task, count } => {
                writeln!(f, "Noted. I've removed this task:")?;
                writeln!(f, "  {task}")?;
                write!(f, "Now you have {} in the list.", count_tasks(*count))
            }
            Reply::Listing(tasks) if tasks.is_empty() => write!(f, "Your task list is empty."),
            Reply::Listing(tasks) => {
                let numbered = tasks.iter().enumerate().map(|(i, t)| (i + 1, t));
                write!(f, "Here are the tasks in your list:")?;
                write_numbered(f, numbered)
            }
            Reply::Found { keyword, matches } if matches.is_empty() => {
                write!(f, "No tasks match \"{keyword}\".")
            }
            Reply::Found { matches, .. } => {
                write!(f, "Here are the matching tasks in your list:")?;
                write_numbered(f, matches.iter().map(|(n, t)| (*n, t)))
            }
            Reply::Exit => write!(f, "{FAREWELL}"),
        }
    }
}

fn write_numbered<'a>(
    f: &mut fmt::Formatter<'_>,
    tasks: impl Iterator<Item = (usize, &'a Task)>,
) -> fmt::Result {
    for (n, task) in tasks {
        f.write_char('\n')?;
        write!(f, " {n}.{task}")?;
    }
    Ok(())
}

fn count_tasks(count: usize) -> String {
    match count {
        1 => "1 task".to_string(),
        n => format!("{n} tasks"),
    }
}
