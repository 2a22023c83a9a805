//! Property-based tests for tiling and aggregation
//!
//! Uses proptest to check the layout and summation invariants over
//! arbitrary inputs.

use proptest::prelude::*;
use walletview::{Accumulator, OptionalQuantity, Quantity, TilesError, aggregate, chunk};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Quantities small enough that sums of a few hundred never overflow
fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    (-1_000_000_000_000_000_000_000_000i128..1_000_000_000_000_000_000_000_000i128)
        .prop_map(Quantity::from_mantissa)
}

/// Present or absent entries, weighted toward present
fn entry_strategy() -> impl Strategy<Value = OptionalQuantity> {
    prop_oneof![
        3 => quantity_strategy().prop_map(Some),
        1 => Just(None),
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<OptionalQuantity>> {
    prop::collection::vec(entry_strategy(), 0..64)
}

/// Entries spanning the whole mantissa range, so partial sums can wrap
fn wide_entries_strategy() -> impl Strategy<Value = Vec<OptionalQuantity>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<i128>().prop_map(|m| Some(Quantity::from_mantissa(m))),
            1 => Just(None),
        ],
        0..16,
    )
}

// ============================================================================
// Chunker
// ============================================================================

proptest! {
    /// Row count is ceil(n / c) and every row but the last is full
    #[test]
    fn chunk_row_shape(n in 0usize..200, c in 1i64..20) {
        let items: Vec<usize> = (0..n).collect();
        let partition = chunk(items, c).unwrap();
        let width = c as usize;

        prop_assert_eq!(partition.row_count(), n.div_ceil(width));

        let rows = partition.rows();
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.index(), i);
            if i + 1 < rows.len() {
                prop_assert_eq!(row.len(), width);
            } else {
                prop_assert!(row.len() >= 1 && row.len() <= width);
            }
        }
    }

    /// Flattening the partition reproduces the input in order
    #[test]
    fn chunk_is_lossless(items in prop::collection::vec(any::<u32>(), 0..200), c in 1i64..20) {
        let partition = chunk(items.clone(), c).unwrap();
        let flat: Vec<u32> = partition.flatten().into_iter().copied().collect();
        prop_assert_eq!(&flat, &items);
        prop_assert_eq!(partition.into_items(), items);
    }

    /// Non-positive column counts are always rejected
    #[test]
    fn chunk_rejects_non_positive(items in prop::collection::vec(any::<u8>(), 0..20), c in i64::MIN..=0) {
        prop_assert_eq!(chunk(items, c), Err(TilesError::InvalidArgument { columns: c }));
    }

    /// Every cell key points at the item at row * columns + column
    #[test]
    fn cell_keys_match_positions(n in 0usize..100, c in 1i64..12) {
        let items: Vec<usize> = (0..n).collect();
        let partition = chunk(items, c).unwrap();
        for (key, item) in partition.cells() {
            prop_assert_eq!(*item, key.row * c as usize + key.column);
        }
    }
}

// ============================================================================
// Aggregator
// ============================================================================

proptest! {
    /// Total is absent exactly when no entry is present
    #[test]
    fn aggregate_absent_iff_all_absent(entries in entries_strategy()) {
        let total = aggregate(entries.clone()).unwrap();
        prop_assert_eq!(total.is_absent(), entries.iter().all(Option::is_none));
    }

    /// Reversing the entries does not change the total
    #[test]
    fn aggregate_is_order_independent(entries in entries_strategy()) {
        let forward = aggregate(entries.clone()).unwrap();
        let mut reversed = entries;
        reversed.reverse();
        prop_assert_eq!(forward, aggregate(reversed).unwrap());
    }

    /// Order independence holds even when partial sums leave the range
    #[test]
    fn aggregate_order_independent_at_range_limits(entries in wide_entries_strategy()) {
        let forward = aggregate(entries.clone());
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &aggregate(reversed));

        let exact: Option<i128> = entries
            .iter()
            .flatten()
            .try_fold(0i128, |acc, q| acc.checked_add(q.mantissa()));
        // No partial sum left the range, so the exact sum is representable
        if let Some(sum) = exact {
            let total = forward.unwrap();
            if entries.iter().any(Option::is_some) {
                prop_assert_eq!(total.quantity().map(Quantity::mantissa), Some(sum));
            }
        }
    }

    /// Splitting the input into two groups gives the same total
    #[test]
    fn split_accumulation_matches_combined(entries in entries_strategy(), split in 0usize..64) {
        let split = split.min(entries.len());
        let (head, tail) = entries.split_at(split);

        let mut acc = Accumulator::new();
        acc.extend(head.iter().copied());
        acc.extend(tail.iter().copied());

        prop_assert_eq!(acc.finish(), aggregate(entries.clone()));
    }

    /// The total equals the mantissa sum of the present entries
    #[test]
    fn aggregate_matches_integer_sum(entries in entries_strategy()) {
        let expected: i128 = entries.iter().flatten().map(|q| q.mantissa()).sum();
        let total = aggregate(entries.clone()).unwrap();
        if let Some(value) = total.quantity() {
            prop_assert_eq!(value.mantissa(), expected);
        }
    }

    /// Rendering a total and parsing it back yields the same quantity
    #[test]
    fn total_display_is_exact(entries in entries_strategy()) {
        let total = aggregate(entries).unwrap();
        if let Some(value) = total.quantity() {
            let parsed: Quantity = total.display_or("-").parse().unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
