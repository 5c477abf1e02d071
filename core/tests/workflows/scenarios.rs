// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end command scenarios run through a session.

use quill_core::{MAX_TASKS, Reply, TaskError};

use crate::common::{descriptions, open_session, run_lines, setup_temp_dirs};

#[test]
fn todo_read_book_is_added_and_persisted() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());

    // Act
    let outcome = session.handle("todo read book");

    // Assert
    match outcome.result.unwrap() {
        Reply::Added { task, count } => {
            assert_eq!(task.to_string(), "[T][ ] read book");
            assert_eq!(count, 1);
        }
        reply => panic!("Expected Added reply, got {reply:?}"),
    }
    assert!(outcome.save_error.is_none());
    assert_eq!(dirs.read_tasks_file().unwrap(), "T | 0 | read book\n");
}

#[test]
fn deadline_then_mark_updates_display_and_record() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    session.handle("deadline submit report /by 2024-03-15");

    // Act
    let outcome = session.handle("mark 1");

    // Assert
    match outcome.result.unwrap() {
        Reply::Marked { task, done } => {
            assert!(done);
            assert_eq!(task.to_string(), "[D][X] submit report (by: Mar 15 2024)");
        }
        reply => panic!("Expected Marked reply, got {reply:?}"),
    }
    assert_eq!(
        dirs.read_tasks_file().unwrap(),
        "D | 1 | submit report | 2024-03-15\n"
    );
}

#[test]
fn event_then_find_reports_list_position() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    run_lines(
        &mut session,
        &["todo pack bags", "event trip /from 2024-12-01 /to 2024-12-05"],
    );

    // Act
    let outcome = session.handle("find trip");

    // Assert
    match outcome.result.unwrap() {
        Reply::Found { keyword, matches } => {
            assert_eq!(keyword, "trip");
            assert_eq!(matches.len(), 1);
            let (position, task) = &matches[0];
            assert_eq!(*position, 2);
            assert_eq!(
                task.to_string(),
                "[E][ ] trip (from: Dec 01 2024 to: Dec 05 2024)"
            );
        }
        reply => panic!("Expected Found reply, got {reply:?}"),
    }
}

#[test]
fn delete_out_of_range_changes_nothing() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    run_lines(&mut session, &["todo a", "todo b"]);
    let before = dirs.read_tasks_file().unwrap();

    // Act
    let outcome = session.handle("delete 5");

    // Assert
    assert_eq!(
        outcome.result,
        Err(TaskError::InvalidIndex { index: 5, size: 2 })
    );
    assert_eq!(descriptions(session.tasks()), vec!["a", "b"]);
    assert_eq!(dirs.read_tasks_file().unwrap(), before);
}

#[test]
fn adding_beyond_capacity_is_rejected() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    for i in 0..MAX_TASKS {
        let outcome = session.handle(&format!("todo task {i}"));
        assert!(outcome.result.is_ok(), "task {i} should be accepted");
    }

    // Act
    let outcome = session.handle("todo one too many");

    // Assert
    assert_eq!(outcome.result, Err(TaskError::CapacityExceeded(MAX_TASKS)));
    assert_eq!(session.tasks().len(), MAX_TASKS);
    assert_eq!(dirs.read_tasks_file().unwrap().lines().count(), MAX_TASKS);
}

#[test]
fn mark_and_unmark_are_idempotent() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    session.handle("todo water plants");

    // Act & Assert
    for _ in 0..2 {
        assert!(session.handle("mark 1").result.is_ok());
        assert!(session.tasks().get(1).unwrap().is_done());
    }
    for _ in 0..2 {
        assert!(session.handle("unmark 1").result.is_ok());
        assert!(!session.tasks().get(1).unwrap().is_done());
    }
    assert_eq!(dirs.read_tasks_file().unwrap(), "T | 0 | water plants\n");
}

#[test]
fn errors_do_not_stop_the_session() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());

    // Act
    let outcomes = run_lines(
        &mut session,
        &[
            "blah",
            "todo",
            "deadline x /by 2024-02-30",
            "mark one",
            "todo still works",
            "bye",
        ],
    );

    // Assert
    assert!(outcomes[..4].iter().all(|o| o.result.is_err()));
    assert!(outcomes[4].result.is_ok());
    assert!(outcomes[5].is_exit());
    assert_eq!(descriptions(session.tasks()), vec!["still works"]);
}

#[test]
fn delete_shifts_later_positions() {
    // Arrange
    let dirs = setup_temp_dirs().unwrap();
    let mut session = open_session(&dirs.data_path());
    run_lines(&mut session, &["todo a", "todo b", "todo c"]);

    // Act
    let outcome = session.handle("delete 2");

    // Assert
    match outcome.result.unwrap() {
        Reply::Deleted { task, count } => {
            assert_eq!(task.description(), "b");
            assert_eq!(count, 2);
        }
        reply => panic!("Expected Deleted reply, got {reply:?}"),
    }
    assert!(session.handle("mark 2").result.is_ok());
    assert_eq!(
        dirs.read_tasks_file().unwrap(),
        "T | 0 | a\nT | 1 | c\n"
    );
}
