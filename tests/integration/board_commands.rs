//! Integration tests for the board command surface.
//!
//! Covers default naming, cascade delete, reference checking and the
//! silent handling of missing ids.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;

use dragboard::BoardController;
use dragboard::board::{BoardError, IdGenerator, SequentialIds};
use dragboard::config::{BoardConfig, IdStrategy};
use dragboard_core::{ColumnId, TaskId};
use uuid::Uuid;

fn make_controller() -> BoardController {
    BoardController::with_id_generator(Box::new(SequentialIds::new()))
}

/// Always proposes the same UUID.
#[derive(Debug)]
struct Constant(u128);

impl IdGenerator for Constant {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::from_u128(self.0)
    }
}

// --- naming ---

#[test]
fn default_names_count_independently_of_deletes() {
    let mut ctl = make_controller();
    let c1 = ctl.add_column();
    let c2 = ctl.add_column();
    ctl.delete_column(c1.id);
    ctl.delete_column(c2.id);
    let c3 = ctl.add_column();
    assert_eq!(c3.title, "Column 3");

    let t1 = ctl.add_task(c3.id).unwrap();
    ctl.delete_task(t1.id);
    let t2 = ctl.add_task(c3.id).unwrap();
    assert_eq!(t1.content, "Task 1");
    assert_eq!(t2.content, "Task 2");
}

#[test]
fn cascade_delete_keeps_task_counter() {
    let mut ctl = make_controller();
    let a = ctl.add_column();
    ctl.add_task(a.id).unwrap();
    ctl.add_task(a.id).unwrap();
    ctl.delete_column(a.id);
    let b = ctl.add_column();
    assert_eq!(ctl.add_task(b.id).unwrap().content, "Task 3");
}

// --- cascade ---

#[test]
fn delete_column_removes_only_its_tasks() {
    let mut ctl = make_controller();
    let a = ctl.add_column();
    let b = ctl.add_column();
    for column in [a.id, b.id, a.id, b.id, a.id] {
        ctl.add_task(column).unwrap();
    }

    assert!(ctl.delete_column(a.id));
    let board = ctl.snapshot();
    assert!(board.tasks.iter().all(|t| t.column_id == b.id));
    assert_eq!(board.tasks.len(), 2);
    assert_eq!(board.check_invariants(), Ok(()));
}

// --- references ---

#[test]
fn add_task_to_missing_column_is_rejected() {
    let mut ctl = make_controller();
    let ghost = ColumnId::from_uuid(Uuid::from_u128(0xdead));
    assert_eq!(
        ctl.add_task(ghost).unwrap_err(),
        BoardError::InvalidReference(ghost)
    );
    assert!(ctl.snapshot().tasks.is_empty());
}

#[test]
fn add_task_to_deleted_column_is_rejected() {
    let mut ctl = make_controller();
    let a = ctl.add_column();
    ctl.delete_column(a.id);
    assert!(matches!(
        ctl.add_task(a.id),
        Err(BoardError::InvalidReference(_))
    ));
}

#[test]
fn invalid_reference_message_names_column() {
    let ghost = ColumnId::from_uuid(Uuid::from_u128(1));
    let message = BoardError::InvalidReference(ghost).to_string();
    assert!(message.contains(&ghost.to_string()));
}

// --- missing ids ---

#[test]
fn missing_ids_are_silent_noops() {
    let mut ctl = make_controller();
    let a = ctl.add_column();
    ctl.add_task(a.id).unwrap();
    let before = ctl.snapshot().clone();

    let ghost_column = ColumnId::from_uuid(Uuid::from_u128(0xbeef));
    let ghost_task = TaskId::from_uuid(Uuid::from_u128(0xbeef));
    assert!(!ctl.delete_column(ghost_column));
    assert!(!ctl.rename_column(ghost_column, "nope"));
    assert!(!ctl.delete_task(ghost_task));
    assert!(!ctl.update_task_content(ghost_task, "nope"));

    assert_eq!(*ctl.snapshot(), before);
}

// --- identifiers ---

#[test]
fn ids_unique_with_random_strategy() {
    let mut ctl = BoardConfig {
        id_strategy: IdStrategy::Random,
        ..Default::default()
    }
    .build_controller();
    let columns: Vec<ColumnId> = (0..50).map(|_| ctl.add_column().id).collect();
    let mut tasks = Vec::new();
    for &c in &columns {
        for _ in 0..4 {
            tasks.push(ctl.add_task(c).unwrap().id);
        }
    }
    assert_eq!(columns.iter().collect::<HashSet<_>>().len(), columns.len());
    assert_eq!(tasks.iter().collect::<HashSet<_>>().len(), tasks.len());
}

#[test]
fn ids_unique_even_with_constant_generator() {
    let mut ctl = BoardController::with_id_generator(Box::new(Constant(9)));
    let a = ctl.add_column();
    let b = ctl.add_column();
    let t1 = ctl.add_task(a.id).unwrap();
    let t2 = ctl.add_task(b.id).unwrap();
    assert_ne!(a.id, b.id);
    assert_ne!(t1.id, t2.id);
    assert_eq!(ctl.snapshot().check_invariants(), Ok(()));
}

// --- snapshot ---

#[test]
fn snapshot_reflects_edits() {
    let mut ctl = make_controller();
    let a = ctl.add_column();
    let t = ctl.add_task(a.id).unwrap();
    ctl.rename_column(a.id, "Doing");
    ctl.update_task_content(t.id, "Review PR");

    let board = ctl.snapshot();
    assert_eq!(board.column(a.id).unwrap().title, "Doing");
    assert_eq!(board.task(t.id).unwrap().content, "Review PR");
    assert_eq!(board.task_count(a.id), 1);
}
