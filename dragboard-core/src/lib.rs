//! Shared board model for `Dragboard`.
//!
//! Columns and tasks live in two ordered sequences. Sequence position is
//! the display order; a task's column is decided only by its `column_id`.

pub mod board;
pub mod entity;
pub mod ids;
pub mod sequence;

pub use board::{Board, Column, InvariantViolation, Task};
pub use entity::{EntityKind, EntityRef};
pub use ids::{ColumnId, TaskId};
pub use sequence::relocate;
