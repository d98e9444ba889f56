//! The relocation primitive shared by column and task reordering.

/// Moves the element at `from` to `to`, shifting the elements in between
/// by one slot.
///
/// Elements outside `[min(from, to), max(from, to)]` keep their index and
/// all other relative orderings are preserved. This is a single-element
/// move, never a swap.
///
/// Returns `false` and leaves `items` untouched if either index is out of
/// bounds. `from == to` is a successful no-op.
pub fn relocate<T>(items: &mut [T], from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    true
}
