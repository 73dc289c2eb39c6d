//! Sortable-table core (pure view logic).
//!
//! This crate orders row collections for display. It holds no rows of its
//! own: callers pass their collection and the current sort selection in, and
//! get a reordered borrowed view back. Nothing here performs IO or renders
//! anything.

pub mod column;
pub mod sort;

pub use column::{Column, TableSpec};
pub use sort::{next_sort_state, SortDirection, SortRequest, SortValue};
