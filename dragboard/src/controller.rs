//! The board façade consumed by a view layer.
//!
//! `BoardController` owns one [`BoardStore`] and one [`DragSession`] and
//! exposes the command surface plus the three gesture events
//! (start, over, end). Events are handled synchronously, one at a time.

use dragboard_core::{Board, Column, ColumnId, EntityRef, Task, TaskId};
use tracing::{debug, trace};

use crate::board::{BoardError, BoardStore, IdGenerator};
use crate::drag::{self, DragSession, Reorder};

/// What the view should float under the pointer while dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// A dragged column, with its tasks in display order.
    Column {
        /// The dragged column.
        column: Column,
        /// Tasks currently in that column.
        tasks: Vec<Task>,
    },
    /// A dragged task.
    Task(Task),
}

/// Board state plus the drag session, driven by view events.
#[derive(Debug, Default)]
pub struct BoardController {
    store: BoardStore,
    session: DragSession,
}

impl BoardController {
    /// Creates an empty board with random identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board drawing identifiers from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: BoardStore::with_id_generator(ids),
            session: DragSession::Idle,
        }
    }

    // --- queries ---

    #[must_use]
    pub const fn snapshot(&self) -> &Board {
        self.store.snapshot()
    }

    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Current data of the dragged entity.
    ///
    /// `None` when idle or when the dragged entity no longer exists.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        let board = self.store.snapshot();
        match self.session.active()? {
            EntityRef::Column(id) => board.column(id).map(|column| Overlay::Column {
                column: column.clone(),
                tasks: board.tasks_in(id).cloned().collect(),
            }),
            EntityRef::Task(id) => board.task(id).cloned().map(Overlay::Task),
        }
    }

    // --- commands ---

    pub fn add_column(&mut self) -> Column {
        self.store.add_column()
    }

    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        self.store.delete_column(id)
    }

    pub fn rename_column(&mut self, id: ColumnId, title: &str) -> bool {
        self.store.rename_column(id, title)
    }

    /// # Errors
    ///
    /// Returns [`BoardError::InvalidReference`] if the column is missing.
    pub fn add_task(&mut self, column_id: ColumnId) -> Result<Task, BoardError> {
        self.store.add_task(column_id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.delete_task(id)
    }

    pub fn update_task_content(&mut self, id: TaskId, content: &str) -> bool {
        self.store.update_task_content(id, content)
    }

    // --- gesture events ---

    /// A drag gesture picked up `entity`.
    pub fn on_drag_start(&mut self, entity: EntityRef) {
        debug!(%entity, "drag start");
        self.session.begin(entity);
    }

    /// The pointer moved; `over` is the entity now beneath it.
    ///
    /// Returns `true` if the board changed.
    pub fn on_drag_over(&mut self, active: EntityRef, over: Option<EntityRef>) -> bool {
        let reorder = drag::on_drag_over(self.store.snapshot(), active, over);
        trace!(%active, ?over, changed = !reorder.is_unchanged(), "drag over");
        self.install(reorder)
    }

    /// The gesture was released over `over` (or over nothing).
    ///
    /// The session is cleared whatever the outcome. Returns `true` if the
    /// board changed.
    pub fn on_drag_end(&mut self, active: EntityRef, over: Option<EntityRef>) -> bool {
        self.session.end();
        let reorder = drag::on_drag_end(self.store.snapshot(), active, over);
        debug!(%active, ?over, changed = !reorder.is_unchanged(), "drag end");
        self.install(reorder)
    }

    fn install(&mut self, reorder: Reorder) -> bool {
        match reorder {
            Reorder::Unchanged => false,
            Reorder::Tasks(tasks) => {
                self.store.install_tasks(tasks);
                true
            }
            Reorder::Columns(columns) => {
                self.store.install_columns(columns);
                true
            }
        }
    }
}
