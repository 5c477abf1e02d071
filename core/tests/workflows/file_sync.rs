// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Task file round trips across sessions.

use quill_core::{MAX_TASKS, TaskError, TaskKind};

use crate::common::{descriptions, open_session, run_lines, setup_temp_dirs};

#[test]
fn tasks_survive_a_restart() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    {
        let mut session = open_session(&dirs.data_path());
        run_lines(
            &mut session,
            &[
                "todo read book",
                "deadline submit report /by 2024-03-15",
                "event trip /from 2024-12-01 /to 2024-12-05",
                "mark 2",
            ],
        );
    }

    // Act
    let session = open_session(&dirs.data_path());

    // Assert
    let shown: Vec<String> = session.tasks().iter().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        vec![
            "[T][ ] read book",
            "[D][X] submit report (by: Mar 15 2024)",
            "[E][ ] trip (from: Dec 01 2024 to: Dec 05 2024)",
        ]
    );
}

#[test]
fn separator_in_description_round_trips() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    {
        let mut session = open_session(&dirs.data_path());
        run_lines(
            &mut session,
            &[r"todo a | b \ c", "deadline x|y /by 2024-01-31"],
        );
    }

    // Act
    let session = open_session(&dirs.data_path());

    // Assert
    assert_eq!(descriptions(session.tasks()), vec![r"a | b \ c", "x|y"]);
    let deadline = session.tasks().get(2).unwrap();
    assert!(matches!(deadline.kind(), TaskKind::Deadline { .. }));
}

#[test]
fn unknown_type_code_line_is_skipped() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    dirs.write_tasks_file(
        "T | 0 | first\nX | 0 | mystery\nE | 1 | party | 2024-05-01 | 2024-05-02\n",
    )
    .unwrap();

    // Act
    let session = open_session(&dirs.data_path());

    // Assert
    assert_eq!(descriptions(session.tasks()), vec!["first", "party"]);
    assert!(session.tasks().get(2).unwrap().is_done());
}

#[test]
fn malformed_lines_are_dropped_on_next_save() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    dirs.write_tasks_file("T | 0 | keep\ngarbage\nD | 0 | bad date | tomorrow\n")
        .unwrap();
    let mut session = open_session(&dirs.data_path());

    // Act
    session.handle("todo new");

    // Assert
    assert_eq!(
        dirs.read_tasks_file().unwrap(),
        "T | 0 | keep\nT | 0 | new\n"
    );
}

#[test]
fn oversized_file_loads_first_records_only() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let content: String = (1..=MAX_TASKS + 1)
        .map(|i| format!("T | 0 | task {i}\n"))
        .collect();
    dirs.write_tasks_file(&content).unwrap();

    // Act
    let session = open_session(&dirs.data_path());

    // Assert
    assert_eq!(session.tasks().len(), MAX_TASKS);
    assert_eq!(
        session.tasks().get(MAX_TASKS).unwrap().description(),
        format!("task {MAX_TASKS}")
    );
}

#[test]
fn missing_file_starts_empty_and_is_created_on_first_change() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let path = dirs.data_dir.join("nested").join("tasks.txt");
    let mut session = open_session(&path);
    assert!(session.tasks().is_empty());
    assert!(!path.exists());

    // Act
    session.handle("todo first");

    // Assert
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "T | 0 | first\n");
}

#[test]
fn invalid_utf8_line_skips_only_that_line() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    std::fs::write(
        dirs.data_path(),
        b"T | 0 | keep one\nT | 0 | keep two\nT | 0 | bad \xff byte\n",
    )
    .unwrap();

    // Act
    let mut session = open_session(&dirs.data_path());
    session.handle("todo new");

    // Assert
    assert_eq!(descriptions(session.tasks()), vec!["keep one", "keep two", "new"]);
    assert_eq!(
        dirs.read_tasks_file().unwrap(),
        "T | 0 | keep one\nT | 0 | keep two\nT | 0 | new\n"
    );
}

#[test]
fn line_break_in_description_is_rejected_and_not_saved() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    session.handle("todo first");

    // Act
    let outcome = session.handle("todo second\nT | 1 | injected");

    // Assert
    assert!(matches!(outcome.result, Err(TaskError::BadFormat(_))));
    let reloaded = open_session(&dirs.data_path());
    assert_eq!(descriptions(reloaded.tasks()), vec!["first"]);
    assert_eq!(reloaded.tasks(), session.tasks());
}

#[test]
fn backslashes_from_older_files_load_literally() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    dirs.write_tasks_file("T | 0 | copy C:\\new\\tasks\n").unwrap();

    // Act
    let session = open_session(&dirs.data_path());

    // Assert
    assert_eq!(descriptions(session.tasks()), vec![r"copy C:\new\tasks"]);
}

#[test]
fn unreadable_task_file_starts_empty() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    std::fs::create_dir(dirs.data_path()).unwrap();

    // Act
    let mut session = open_session(&dirs.data_path());
    let outcome = session.handle("todo still usable");

    // Assert
    assert!(outcome.result.is_ok());
    assert!(outcome.save_error.is_some());
    assert_eq!(descriptions(session.tasks()), vec!["still usable"]);
}
