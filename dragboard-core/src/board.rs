//! Columns, tasks, and the board that orders them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, TaskId};

/// A named group of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column identifier.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
}

/// A work item belonging to exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Column this task belongs to.
    pub column_id: ColumnId,
    /// Free-form task text.
    pub content: String,
}

/// A broken board invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A task points at a column that is not on the board.
    #[error("task {task} references missing column {column}")]
    DanglingColumnRef {
        /// The offending task.
        task: TaskId,
        /// The column it points at.
        column: ColumnId,
    },
    /// Two columns share an id.
    #[error("duplicate column id {0}")]
    DuplicateColumn(ColumnId),
    /// Two tasks share an id.
    #[error("duplicate task id {0}")]
    DuplicateTask(TaskId),
}

/// The full board state.
///
/// Position within `columns` and `tasks` is the display order. Tasks of one
/// column need not be contiguous in `tasks`; the per-column order is the
/// global order filtered by `column_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// All tasks in global order.
    pub tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a column in the column sequence.
    #[must_use]
    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Position of a task in the global task sequence.
    #[must_use]
    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns `true` if a column with this id is on the board.
    #[must_use]
    pub fn has_column(&self, id: ColumnId) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    /// Tasks of one column, in global order.
    pub fn tasks_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    /// Number of tasks in one column.
    #[must_use]
    pub fn task_count(&self, column_id: ColumnId) -> usize {
        self.tasks_in(column_id).count()
    }

    /// Checks id uniqueness and that every task references a present
    /// column.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut columns = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !columns.insert(column.id) {
                return Err(InvariantViolation::DuplicateColumn(column.id));
            }
        }

        let mut tasks = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !tasks.insert(task.id) {
                return Err(InvariantViolation::DuplicateTask(task.id));
            }
            if !columns.contains(&task.column_id) {
                return Err(InvariantViolation::DanglingColumnRef {
                    task: task.id,
                    column: task.column_id,
                });
            }
        }
        Ok(())
    }
}
