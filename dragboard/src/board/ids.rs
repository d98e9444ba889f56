//! Identifier generation for new columns and tasks.
//!
//! Generators only propose values. [`BoardStore`](super::BoardStore) checks
//! every proposal against the ids already in use for that entity kind and
//! draws again on a collision, so uniqueness never depends on the
//! generator alone.

use uuid::Uuid;

/// Source of candidate identifiers.
pub trait IdGenerator: std::fmt::Debug {
    /// Returns the next candidate identifier.
    fn next_uuid(&mut self) -> Uuid;
}

/// Time-ordered random identifiers (UUID v7).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Strictly increasing identifiers, starting at 1.
///
/// Deterministic across runs.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_uuid(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
