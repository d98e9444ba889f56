//! Drag gestures: who is being dragged, and what hovering does.
//!
//! [`DragSession`] tracks the active entity for the view. The [`reorder`]
//! functions decide how the board changes for each gesture event.

pub mod reorder;
pub mod session;

pub use reorder::{Reorder, on_drag_end, on_drag_over};
pub use session::DragSession;
