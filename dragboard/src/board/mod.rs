//! Board state ownership for `Dragboard`.
//!
//! [`BoardStore`] owns the canonical column and task sequences together
//! with the counters used for default names. All mutations go through it.

pub mod ids;
pub mod store;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use store::BoardStore;

use dragboard_core::ColumnId;
use thiserror::Error;

/// Errors that can occur during board commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A task was requested for a column that is not on the board.
    #[error("column not found: {0}")]
    InvalidReference(ColumnId),
}
