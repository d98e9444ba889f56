//! Property tests for the relocation primitive.
//!
//! Uses proptest to verify:
//! 1. The moved element lands exactly at the target index.
//! 2. Elements outside the moved range keep their index.
//! 3. The relative order of every other element is preserved.
//! 4. Moving there and back restores the original sequence.

use dragboard_core::relocate;
use proptest::prelude::*;

/// Strategy for a non-empty sequence plus two valid indices into it.
fn arb_move() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..64).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn moved_element_lands_at_target((items, from, to) in arb_move()) {
        let mut moved = items.clone();
        prop_assert!(relocate(&mut moved, from, to));
        prop_assert_eq!(moved[to], items[from]);
        prop_assert_eq!(moved.len(), items.len());
    }

    #[test]
    fn elements_outside_range_untouched((items, from, to) in arb_move()) {
        let mut moved = items.clone();
        relocate(&mut moved, from, to);
        let (lo, hi) = (from.min(to), from.max(to));
        for i in (0..lo).chain(hi + 1..items.len()) {
            prop_assert_eq!(moved[i], items[i]);
        }
    }

    #[test]
    fn others_keep_relative_order((items, from, to) in arb_move()) {
        let mut moved = items.clone();
        relocate(&mut moved, from, to);

        let mut expected = items.clone();
        expected.remove(from);
        let mut actual = moved.clone();
        actual.remove(to);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn move_back_restores((items, from, to) in arb_move()) {
        let mut moved = items.clone();
        relocate(&mut moved, from, to);
        relocate(&mut moved, to, from);
        prop_assert_eq!(moved, items);
    }

    #[test]
    fn out_of_range_never_panics(
        items in prop::collection::vec(any::<u8>(), 0..16),
        from in 0usize..32,
        to in 0usize..32,
    ) {
        let mut moved = items.clone();
        let ok = relocate(&mut moved, from, to);
        if !ok {
            prop_assert_eq!(moved, items);
        }
    }
}
