//! Change representation: tagged edit operations and the change set
//! returned by the diff entry points.

use serde::{Deserialize, Serialize};

/// A single edit operation, carrying zero-based indices.
///
/// `Insert` indices are new-sequence positions and `Delete` indices are
/// old-sequence positions; consumers apply them in separate phases (deletes
/// against the old layout, inserts against the new). `Update` carries the
/// old-sequence position of a retained row whose content changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// A new row appears at `index` in the new sequence.
    Insert { index: usize },
    /// The row at `index` in the old sequence is removed.
    Delete { index: usize },
    /// The row at `index` (old-sequence position) is retained but its
    /// content changed.
    Update { index: usize },
    /// A matching delete/insert pair consolidated into a reposition.
    ///
    /// Reserved for consumers that animate row moves; the engine never
    /// emits this variant.
    Move { from_index: usize, to_index: usize },
}

/// The result of diffing two row sequences: an ordered edit script.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiff {
    /// The changes, in application order.
    pub changes: Vec<Change>,
}

impl RowDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two sequences were identical.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of inserted rows.
    pub fn insertions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Insert { .. }))
            .count()
    }

    /// Number of deleted rows.
    pub fn deletions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Delete { .. }))
            .count()
    }

    /// Number of retained rows whose content changed.
    pub fn updates(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Update { .. }))
            .count()
    }

    /// The edit-distance cost of this script: inserts plus deletes.
    /// Updates ride along identity matches and cost nothing.
    pub fn edit_distance(&self) -> usize {
        self.insertions() + self.deletions()
    }
}
