//! Sort state machine and cell-value ordering.

use core::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of an active sort.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// An active sort selection: which column, which direction.
///
/// `Option<SortRequest<K>>` is the full sort state; `None` means unsorted.
/// The caller threads this value through each header interaction -- there is
/// no stateful sorter object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortRequest<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// Advance the sort state for an activation of `clicked`.
///
/// Repeated activation of the same key cycles ascending -> descending ->
/// unsorted; activating a different key starts over at ascending. This is
/// the complete state machine.
pub fn next_sort_state<K: PartialEq>(
    current: Option<SortRequest<K>>,
    clicked: K,
) -> Option<SortRequest<K>> {
    match current {
        Some(SortRequest {
            key,
            direction: SortDirection::Ascending,
        }) if key == clicked => Some(SortRequest::descending(key)),
        Some(SortRequest {
            key,
            direction: SortDirection::Descending,
        }) if key == clicked => None,
        _ => Some(SortRequest::ascending(clicked)),
    }
}

/// A cell value as seen by the sorter.
///
/// Column extractors map each row to exactly one of these, which fixes the
/// value domain of a column at construction time. Ordering rules:
///
/// - `Missing` sorts after any present value regardless of direction.
/// - `Text` compares lexicographically by Unicode scalar value (not locale
///   collation; extractors can case-fold if they need it).
/// - `Number` compares numerically; incomparable pairs (NaN) are equal.
/// - A `Text`/`Number` pairing has no defined order and compares equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Missing,
}

impl SortValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    /// Pairwise ordering under `direction`.
    ///
    /// The `Missing`-last rule is applied before the direction, so missing
    /// values end up at the bottom of both ascending and descending views.
    pub fn ordering(&self, other: &SortValue, direction: SortDirection) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::Missing, _) => Ordering::Greater,
            (_, SortValue::Missing) => Ordering::Less,
            (SortValue::Text(a), SortValue::Text(b)) => direction.apply(a.cmp(b)),
            (SortValue::Number(a), SortValue::Number(b)) => {
                direction.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_owned())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        // ISO-8601 text orders chronologically.
        SortValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SortValue::Missing,
        }
    }
}
