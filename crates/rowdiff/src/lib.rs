//! Edit-script engine for list and table reconciliation.
//!
//! Computes the shortest edit script between an old and a new ordered row
//! sequence, producing insert/delete/update changes with positional indices
//! that a list or table renderer can apply as a batch. Identity ("same
//! logical row") and content equality are supplied by the caller, so the
//! engine never inspects row fields itself.
//!
//! # Key Types
//!
//! - [`Change`] / [`RowDiff`] -- The edit operations and the ordered change set
//! - [`RowIdentity`] -- Caller-defined "same logical row" notion
//! - [`diff`] / [`diff_rows`] / [`diff_rows_by_identity`] -- Entry points

pub mod apply;
pub mod change;
pub mod row_diff;

pub use change::{Change, RowDiff};
pub use row_diff::{diff, diff_rows, diff_rows_by_identity, RowIdentity};
