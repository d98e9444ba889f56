//! Drag session bookkeeping.

use dragboard_core::{ColumnId, EntityRef, TaskId};
use tracing::debug;

/// Which entity, if any, is currently being dragged.
///
/// Pure bookkeeping for the view's overlay; it never reorders anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A column is being dragged.
    DraggingColumn(ColumnId),
    /// A task is being dragged.
    DraggingTask(TaskId),
}

impl DragSession {
    /// Starts dragging `entity`.
    ///
    /// A start while already dragging replaces the session.
    pub fn begin(&mut self, entity: EntityRef) {
        if let Some(previous) = self.active() {
            debug!(%previous, next = %entity, "drag session overwritten");
        }
        *self = match entity {
            EntityRef::Column(id) => Self::DraggingColumn(id),
            EntityRef::Task(id) => Self::DraggingTask(id),
        };
    }

    /// Returns to [`DragSession::Idle`]. Safe to call when idle.
    pub const fn end(&mut self) {
        *self = Self::Idle;
    }

    /// The entity being dragged, if any.
    #[must_use]
    pub const fn active(&self) -> Option<EntityRef> {
        match *self {
            Self::Idle => None,
            Self::DraggingColumn(id) => Some(EntityRef::Column(id)),
            Self::DraggingTask(id) => Some(EntityRef::Task(id)),
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
