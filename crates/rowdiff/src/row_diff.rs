//! Row-level diff: shortest edit script between two ordered sequences.
//!
//! Myers' algorithm, framed as a breadth-first shortest-path search over the
//! edit graph of the two sequences. Nodes are position pairs `(x, y)`,
//! diagonal edges are identity matches, horizontal/vertical edges are
//! deletes/inserts. Each diagonal keeps its own accumulated change list, so
//! time and auxiliary space are `O(D * (old_len + new_len))` -- fine for
//! UI-sized row lists, which is what this crate targets.

use tracing::trace;

use crate::change::{Change, RowDiff};

/// Caller-defined notion of "same logical row", independent of content
/// equality. Two rows with the same identity but different content are
/// reported as an [`Change::Update`].
///
/// Identities should be stable and unique within each sequence for
/// well-defined results.
pub trait RowIdentity {
    fn same_identity(&self, other: &Self) -> bool;
}

/// Compute the edit script from `old` to `new` using the type's own notions
/// of identity and content equality.
pub fn diff<T>(old: &[T], new: &[T]) -> RowDiff
where
    T: RowIdentity + PartialEq,
{
    diff_rows(old, new, |a, b| a.same_identity(b), |a, b| a == b)
}

/// Compute the edit script from `old` to `new` with an identity predicate
/// only. Without a content predicate every retained row is conservatively
/// reported as an [`Change::Update`], so consumers reload rows they keep.
pub fn diff_rows_by_identity<T>(
    old: &[T],
    new: &[T],
    same_identity: impl Fn(&T, &T) -> bool,
) -> RowDiff {
    diff_rows(old, new, same_identity, |_, _| false)
}

/// Compute the edit script from `old` to `new`.
///
/// `same_identity` decides whether two rows are the same logical row;
/// `content_equal` decides whether an identity-matched pair is
/// indistinguishable. Both must be pure and deterministic. Either slice may
/// be empty.
///
/// The returned script is minimal under insert/delete cost 1 with respect to
/// the identity predicate; updates are free. Applying the script (deletes
/// against old indices, inserts against new indices; see
/// [`RowDiff::apply_to`]) reproduces the new sequence identity-for-identity,
/// position-for-position.
pub fn diff_rows<T>(
    old: &[T],
    new: &[T],
    same_identity: impl Fn(&T, &T) -> bool,
    content_equal: impl Fn(&T, &T) -> bool,
) -> RowDiff {
    let max = old.len() + new.len();
    if max == 0 {
        return RowDiff::new();
    }

    let slot = |k: isize| (k + max as isize) as usize;

    // v[slot(k)] holds the furthest-reaching x on diagonal k = x - y,
    // together with the change list accumulated along that path.
    let mut v: Vec<(usize, Vec<Change>)> = vec![(0, Vec::new()); 2 * max + 1];

    for d in 0..=max {
        let d = d as isize;
        for k in (-d..=d).step_by(2) {
            // Which neighboring diagonal the furthest-reaching path extends.
            // Ties go to the insertion branch; this selects which of several
            // equally-minimal scripts is produced and must stay as-is.
            let from_insertion = k == -d || (k != d && v[slot(k - 1)].0 < v[slot(k + 1)].0);

            let (mut x, mut changes) = if from_insertion {
                let (x, mut changes) = v[slot(k + 1)].clone();
                if d != 0 {
                    // x - k - 1 is the new-sequence index of the inserted row.
                    changes.push(Change::Insert {
                        index: (x as isize - k - 1) as usize,
                    });
                }
                (x, changes)
            } else {
                let (prev_x, mut changes) = v[slot(k - 1)].clone();
                let x = prev_x + 1;
                changes.push(Change::Delete { index: x - 1 });
                (x, changes)
            };

            // Greedily extend along the diagonal while identities match.
            // A matched pair that differs in content rides along as a free
            // Update at its old-sequence position.
            let mut y = (x as isize - k) as usize;
            while x < old.len() && y < new.len() && same_identity(&old[x], &new[y]) {
                if !content_equal(&old[x], &new[y]) {
                    changes.push(Change::Update { index: x });
                }
                x += 1;
                y += 1;
            }

            if x >= old.len() && y >= new.len() {
                trace!(distance = d, changes = changes.len(), "edit script found");
                return RowDiff { changes };
            }
            v[slot(k)] = (x, changes);
        }
    }

    // max bounds the worst case (delete everything, insert everything), so
    // a path must terminate within the loop above.
    unreachable!("edit script search exceeded its bound of {max}")
}
