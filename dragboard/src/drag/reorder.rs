//! Reorder engine: what a gesture event does to the board.
//!
//! Both handlers are pure. They read the current [`Board`], compute the
//! affected sequence on a copy, and hand back a [`Reorder`] for the store
//! to install. Unknown ids (an entity deleted mid-gesture) resolve to
//! [`Reorder::Unchanged`].

use dragboard_core::{Board, Column, ColumnId, EntityRef, Task, TaskId, relocate};

/// Result of a reorder computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reorder {
    /// Nothing to install.
    Unchanged,
    /// Replacement task sequence.
    Tasks(Vec<Task>),
    /// Replacement column sequence.
    Columns(Vec<Column>),
}

impl Reorder {
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Live update while `active` hovers over `over`.
///
/// Tasks move immediately; columns wait for [`on_drag_end`].
#[must_use]
pub fn on_drag_over(board: &Board, active: EntityRef, over: Option<EntityRef>) -> Reorder {
    let Some(over) = over else {
        return Reorder::Unchanged;
    };
    if active == over {
        return Reorder::Unchanged;
    }
    match (active, over) {
        (EntityRef::Column(_), _) => Reorder::Unchanged,
        (EntityRef::Task(active), EntityRef::Task(over)) => task_over_task(board, active, over),
        (EntityRef::Task(active), EntityRef::Column(column)) => {
            task_over_column(board, active, column)
        }
    }
}

/// Final update when the gesture is released over `over`.
///
/// Only column drags have an effect here; a task's placement was already
/// settled by the live updates.
#[must_use]
pub fn on_drag_end(board: &Board, active: EntityRef, over: Option<EntityRef>) -> Reorder {
    let Some(over) = over else {
        return Reorder::Unchanged;
    };
    if active == over {
        return Reorder::Unchanged;
    }
    match (active, over) {
        (EntityRef::Column(active), EntityRef::Column(over)) => {
            column_over_column(board, active, over)
        }
        _ => Reorder::Unchanged,
    }
}

/// Task hovering another task: adopt its column when they differ, then
/// relocate next to it.
fn task_over_task(board: &Board, active: TaskId, over: TaskId) -> Reorder {
    let (Some(ai), Some(oi)) = (board.task_index(active), board.task_index(over)) else {
        return Reorder::Unchanged;
    };
    let mut tasks = board.tasks.clone();
    let over_column = tasks[oi].column_id;

    let target = if tasks[ai].column_id == over_column {
        oi
    } else {
        tasks[ai].column_id = over_column;
        // Indices are taken before removal; stepping back one keeps the
        // moved task beside the one it hovers.
        if oi == 0 { oi } else { oi - 1 }
    };

    relocate(&mut tasks, ai, target);
    Reorder::Tasks(tasks)
}

/// Task hovering a column header: change membership, keep position.
fn task_over_column(board: &Board, active: TaskId, column: ColumnId) -> Reorder {
    if !board.has_column(column) {
        return Reorder::Unchanged;
    }
    let Some(ai) = board.task_index(active) else {
        return Reorder::Unchanged;
    };
    if board.tasks[ai].column_id == column {
        return Reorder::Unchanged;
    }
    let mut tasks = board.tasks.clone();
    tasks[ai].column_id = column;
    Reorder::Tasks(tasks)
}

fn column_over_column(board: &Board, active: ColumnId, over: ColumnId) -> Reorder {
    let (Some(ai), Some(oi)) = (board.column_index(active), board.column_index(over)) else {
        return Reorder::Unchanged;
    };
    let mut columns = board.columns.clone();
    relocate(&mut columns, ai, oi);
    Reorder::Columns(columns)
}
