// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::{Command, TaskError};

const USAGE_FIND: &str = "find <keyword>";
const USAGE_MARK: &str = "mark <task number>";
const USAGE_UNMARK: &str = "unmark <task number>";
const USAGE_DELETE: &str = "delete <task number>";
const USAGE_DEADLINE: &str = "deadline <description> /by <yyyy-mm-dd>";
const USAGE_EVENT: &str = "event <description> /from <yyyy-mm-dd> /to <yyyy-mm-dd>";
const USAGE_SINGLE_LINE: &str = "one command per line, without line breaks";

type ParseFn = fn(&str) -> Result<Command, TaskError>;

/// Keyword commands, tried in this order. `mark` must stay ahead of `unmark`.
const KEYWORDS: &[(&str, ParseFn)] = &[
    ("find", parse_find),
    ("mark", parse_mark),
    ("unmark", parse_unmark),
    ("todo", parse_todo),
    ("deadline", parse_deadline),
    ("event", parse_event),
    ("delete", parse_delete),
];

/// Parses one input line into a command.
///
/// `bye` and `list` match case-insensitively as whole lines; every other
/// command is recognized by its case-sensitive leading keyword. Line breaks
/// inside the input are rejected, as every task is stored on one line.
pub fn parse(input: &str) -> Result<Command, TaskError> {
    let input = input.trim();
    if input.contains(['\n', '\r']) {
        return Err(TaskError::BadFormat(USAGE_SINGLE_LINE));
    }
    if input.eq_ignore_ascii_case("bye") {
        return Ok(Command::Exit);
    }
    if input.eq_ignore_ascii_case("list") {
        return Ok(Command::List);
    }

    for (keyword, parse_args) in KEYWORDS {
        if let Some(rest) = strip_keyword(input, keyword) {
            return parse_args(rest);
        }
    }

    Err(TaskError::UnknownCommand(input.to_string()))
}

impl FromStr for Command {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Strips `keyword` when it is followed by whitespace or nothing at all.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    input
        .strip_prefix(keyword)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map(str::trim)
}

fn parse_find(rest: &str) -> Result<Command, TaskError> {
    if rest.is_empty() {
        return Err(TaskError::MissingArgument(USAGE_FIND));
    }
    Ok(Command::Find(rest.to_string()))
}

fn parse_mark(rest: &str) -> Result<Command, TaskError> {
    parse_task_number(rest, USAGE_MARK).map(Command::Mark)
}

fn parse_unmark(rest: &str) -> Result<Command, TaskError> {
    parse_task_number(rest, USAGE_UNMARK).map(Command::Unmark)
}

fn parse_delete(rest: &str) -> Result<Command, TaskError> {
    parse_task_number(rest, USAGE_DELETE).map(Command::Delete)
}

fn parse_todo(rest: &str) -> Result<Command, TaskError> {
    if rest.is_empty() {
        return Err(TaskError::EmptyDescription("todo"));
    }
    Ok(Command::AddTodo(rest.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, TaskError> {
    let (description, by) = rest
        .split_once(" /by ")
        .ok_or(TaskError::BadFormat(USAGE_DEADLINE))?;

    let description = non_empty_description(description, "deadline")?;
    let by = non_empty_argument(by, USAGE_DEADLINE)?;
    Ok(Command::AddDeadline { description, by })
}

fn parse_event(rest: &str) -> Result<Command, TaskError> {
    let (description, times) = rest
        .split_once(" /from ")
        .ok_or(TaskError::BadFormat(USAGE_EVENT))?;
    let (from, to) = times
        .split_once(" /to ")
        .ok_or(TaskError::BadFormat(USAGE_EVENT))?;

    let description = non_empty_description(description, "event")?;
    let from = non_empty_argument(from, USAGE_EVENT)?;
    let to = non_empty_argument(to, USAGE_EVENT)?;
    Ok(Command::AddEvent {
        description,
        from,
        to,
    })
}

/// Exactly one argument holding a non-negative decimal number.
fn parse_task_number(rest: &str, usage: &'static str) -> Result<usize, TaskError> {
    let mut args = rest.split_whitespace();
    let Some(arg) = args.next() else {
        return Err(TaskError::MissingArgument(usage));
    };
    if args.next().is_some() {
        return Err(TaskError::BadFormat(usage));
    }

    if !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TaskError::InvalidNumber(arg.to_string()));
    }
    arg.parse()
        .map_err(|_| TaskError::InvalidNumber(arg.to_string()))
}

fn non_empty_description(s: &str, kind: &'static str) -> Result<String, TaskError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TaskError::EmptyDescription(kind));
    }
    Ok(s.to_string())
}

fn non_empty_argument(s: &str, usage: &'static str) -> Result<String, TaskError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TaskError::MissingArgument(usage));
    }
    Ok(s.to_string())
}
