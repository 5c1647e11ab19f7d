//! Batch application of an edit script to a concrete row sequence.
//!
//! Deletes carry old-sequence indices and inserts carry new-sequence
//! indices, so application runs in two phases: deletes first, against the
//! old layout in descending index order, then inserts against the new
//! layout in ascending order. This matches how list/table renderers consume
//! a batch of row changes.

use crate::change::{Change, RowDiff};

impl RowDiff {
    /// Apply this edit script to `old`, splicing inserted rows from `new`.
    ///
    /// [`Change::Update`] retains the row in place (same identity; the
    /// consumer refreshes its content). [`Change::Move`] is never emitted by
    /// the engine and is ignored here.
    ///
    /// The result is identity-equivalent, position for position, to the
    /// `new` sequence the script was computed against.
    pub fn apply_to<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<T> {
        let mut deletions: Vec<usize> = Vec::new();
        let mut insertions: Vec<usize> = Vec::new();
        for change in &self.changes {
            match change {
                Change::Delete { index } => deletions.push(*index),
                Change::Insert { index } => insertions.push(*index),
                Change::Update { .. } | Change::Move { .. } => {}
            }
        }

        // Descending for deletes so earlier removals don't shift later ones;
        // ascending for inserts so each lands at its final position.
        deletions.sort_unstable_by(|a, b| b.cmp(a));
        insertions.sort_unstable();

        let mut rows = old.to_vec();
        for index in deletions {
            rows.remove(index);
        }
        for index in insertions {
            rows.insert(index, new[index].clone());
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::row_diff::diff_rows;
    use crate::RowDiff;

    fn diff_ids(old: &[u8], new: &[u8]) -> RowDiff {
        diff_rows(old, new, |a, b| a == b, |a, b| a == b)
    }

    #[test]
    fn round_trip_mixed_edit() {
        let old = vec![1u8, 2, 3, 4, 5];
        let new = vec![1u8, 3, 5, 6];
        let diff = diff_ids(&old, &new);
        assert_eq!(diff.apply_to(&old, &new), new);
    }

    #[test]
    fn round_trip_reorder() {
        let old = vec![1u8, 2];
        let new = vec![2u8, 1];
        let diff = diff_ids(&old, &new);
        assert_eq!(diff.apply_to(&old, &new), new);
    }

    #[test]
    fn round_trip_disjoint() {
        let old = vec![1u8, 2];
        let new = vec![3u8, 4];
        let diff = diff_ids(&old, &new);
        assert_eq!(diff.apply_to(&old, &new), new);
    }

    #[test]
    fn update_leaves_position_untouched() {
        let old = vec![(1u32, "stale")];
        let new = vec![(1u32, "fresh")];
        let diff = diff_rows(&old, &new, |a, b| a.0 == b.0, |a, b| a.1 == b.1);
        assert_eq!(diff.updates(), 1);

        // The retained row stays where it is; content refresh is the
        // consumer's job.
        let applied = diff.apply_to(&old, &new);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, 1);
    }

    proptest! {
        #[test]
        fn applying_the_script_reproduces_the_new_rows(
            old in proptest::collection::vec(0u8..6, 0..8),
            new in proptest::collection::vec(0u8..6, 0..8),
        ) {
            let diff = diff_ids(&old, &new);
            prop_assert!(diff.edit_distance() <= old.len() + new.len());
            // Identity doubles as content here, so no updates can appear.
            prop_assert_eq!(diff.updates(), 0);
            prop_assert_eq!(diff.apply_to(&old, &new), new);
        }
    }
}
