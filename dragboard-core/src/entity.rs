//! Typed references to draggable entities.

use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, TaskId};

/// Kind of a board entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A column.
    Column,
    /// A task.
    Task,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Task => write!(f, "task"),
        }
    }
}

/// A `(kind, id)` pair naming one column or one task.
///
/// Gesture events carry these for both the dragged entity and the entity
/// under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    /// Reference to a column.
    Column(ColumnId),
    /// Reference to a task.
    Task(TaskId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Column(_) => EntityKind::Column,
            Self::Task(_) => EntityKind::Task,
        }
    }
}

impl From<ColumnId> for EntityRef {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for EntityRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column(id) => write!(f, "column:{id}"),
            Self::Task(id) => write!(f, "task:{id}"),
        }
    }
}
