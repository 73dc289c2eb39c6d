//! Column descriptors and the table-level sorting surface.

use crate::sort::{next_sort_state, SortRequest, SortValue};

/// Describes one column of a table.
///
/// The extractor fixes what the sorter sees for this column; rendering is
/// the caller's concern. Columns are sortable unless opted out.
#[derive(Debug)]
pub struct Column<R, K> {
    key: K,
    label: &'static str,
    sortable: bool,
    value: fn(&R) -> SortValue,
}

impl<R, K: Copy + PartialEq> Column<R, K> {
    pub fn new(key: K, label: &'static str, value: fn(&R) -> SortValue) -> Self {
        Self {
            key,
            label,
            sortable: true,
            value,
        }
    }

    /// Exclude this column from sorting interaction (it is still rendered).
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn sortable(&self) -> bool {
        self.sortable
    }

    /// Extract the sortable value of `row` for this column.
    pub fn value_of(&self, row: &R) -> SortValue {
        (self.value)(row)
    }
}

/// A table's column set plus its sorting behavior.
///
/// Holds no rows. `activate` advances the sort state for a header
/// interaction; `sorted` produces an ordered borrowed view of the caller's
/// rows for the current state.
#[derive(Debug)]
pub struct TableSpec<R, K> {
    columns: Vec<Column<R, K>>,
}

impl<R, K: Copy + PartialEq> TableSpec<R, K> {
    pub fn new(columns: Vec<Column<R, K>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column<R, K>] {
        &self.columns
    }

    fn column(&self, key: K) -> Option<&Column<R, K>> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Advance the sort state for an activation of `clicked`'s header.
    ///
    /// Activating an unknown key or a column opted out of sorting is a
    /// no-op: the current state comes back unchanged.
    pub fn activate(
        &self,
        current: Option<SortRequest<K>>,
        clicked: K,
    ) -> Option<SortRequest<K>> {
        match self.column(clicked) {
            Some(column) if column.sortable() => next_sort_state(current, clicked),
            _ => current,
        }
    }

    /// Order `rows` per the current sort state.
    ///
    /// With no active sort (or a key no column claims) the view keeps the
    /// original order. The input is never mutated; the view borrows. Equal
    /// keys keep their original relative order (the underlying sort is
    /// stable), though callers should not build on that beyond display.
    pub fn sorted<'a>(&self, rows: &'a [R], sort: Option<&SortRequest<K>>) -> Vec<&'a R> {
        let Some(request) = sort else {
            return rows.iter().collect();
        };
        let Some(column) = self.column(request.key) else {
            return rows.iter().collect();
        };

        let mut keyed: Vec<(SortValue, &R)> =
            rows.iter().map(|row| (column.value_of(row), row)).collect();
        keyed.sort_by(|(a, _), (b, _)| a.ordering(b, request.direction));
        keyed.into_iter().map(|(_, row)| row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: Option<&'static str>,
        count: u32,
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    enum Key {
        Name,
        Count,
        Actions,
    }

    fn spec() -> TableSpec<Row, Key> {
        TableSpec::new(vec![
            Column::new(Key::Name, "Name", |r: &Row| {
                r.name.map(SortValue::from).unwrap_or(SortValue::Missing)
            }),
            Column::new(Key::Count, "Count", |r: &Row| SortValue::from(r.count)),
            Column::new(Key::Actions, "Actions", |_: &Row| SortValue::Missing).not_sortable(),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: Some("B"),
                count: 2,
            },
            Row {
                name: Some("A"),
                count: 9,
            },
            Row {
                name: None,
                count: 5,
            },
        ]
    }

    #[test]
    fn missing_values_sort_last_regardless_of_direction() {
        let spec = spec();
        let rows = rows();

        let ascending = spec.sorted(&rows, Some(&SortRequest::ascending(Key::Name)));
        let names: Vec<_> = ascending.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![Some("A"), Some("B"), None]);

        let descending = spec.sorted(&rows, Some(&SortRequest::descending(Key::Name)));
        let names: Vec<_> = descending.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![Some("B"), Some("A"), None]);
    }

    #[test]
    fn unsorted_view_keeps_original_order_and_input_intact() {
        let spec = spec();
        let rows = rows();
        let saved = rows.clone();

        let view = spec.sorted(&rows, None);
        let names: Vec<_> = view.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![Some("B"), Some("A"), None]);
        assert_eq!(rows, saved);
    }

    #[test]
    fn sorting_does_not_mutate_the_input() {
        let spec = spec();
        let rows = rows();
        let saved = rows.clone();

        let _ = spec.sorted(&rows, Some(&SortRequest::ascending(Key::Count)));
        assert_eq!(rows, saved);
    }

    #[test]
    fn numeric_column_sorts_numerically() {
        let spec = spec();
        let rows = rows();

        let view = spec.sorted(&rows, Some(&SortRequest::descending(Key::Count)));
        let counts: Vec<_> = view.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![9, 5, 2]);
    }

    #[test]
    fn sorting_an_already_sorted_view_is_idempotent() {
        let spec = spec();
        let rows = rows();
        let request = SortRequest::ascending(Key::Count);

        let once: Vec<Row> = spec
            .sorted(&rows, Some(&request))
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Row> = spec
            .sorted(&once, Some(&request))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn activating_a_sortable_header_cycles_tri_state() {
        let spec = spec();

        let first = spec.activate(None, Key::Name);
        assert_eq!(first, Some(SortRequest::ascending(Key::Name)));

        let second = spec.activate(first, Key::Name);
        assert_eq!(second, Some(SortRequest::descending(Key::Name)));

        let third = spec.activate(second, Key::Name);
        assert_eq!(third, None);
    }

    #[test]
    fn activating_a_non_sortable_header_is_a_no_op() {
        let spec = spec();
        let current = Some(SortRequest::ascending(Key::Name));

        assert_eq!(spec.activate(current, Key::Actions), current);
        assert_eq!(spec.activate(None, Key::Actions), None);
    }

    #[test]
    fn sorting_by_an_unclaimed_key_keeps_original_order() {
        let columns = vec![Column::new(Key::Count, "Count", |r: &Row| {
            SortValue::from(r.count)
        })];
        let spec: TableSpec<Row, Key> = TableSpec::new(columns);
        let rows = rows();

        let view = spec.sorted(&rows, Some(&SortRequest::ascending(Key::Name)));
        let names: Vec<_> = view.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![Some("B"), Some("A"), None]);
    }

    #[test]
    fn equal_keys_keep_their_original_relative_order() {
        let spec = spec();
        let rows = vec![
            Row {
                name: Some("same"),
                count: 1,
            },
            Row {
                name: Some("same"),
                count: 2,
            },
            Row {
                name: Some("same"),
                count: 3,
            },
        ];

        let view = spec.sorted(&rows, Some(&SortRequest::ascending(Key::Name)));
        let counts: Vec<_> = view.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_row() -> impl Strategy<Value = Row> {
            let names = prop_oneof![
                Just(None),
                Just(Some("amoxicillin")),
                Just(Some("ibuprofen")),
                Just(Some("paracetamol")),
                Just(Some("zinc")),
            ];
            (names, 0u32..500).prop_map(|(name, count)| Row { name, count })
        }

        proptest! {
            /// Sorting only reorders: the view is a permutation of the input.
            #[test]
            fn sorted_view_is_a_permutation(
                rows in proptest::collection::vec(arb_row(), 0..50),
                descending in any::<bool>(),
            ) {
                let spec = spec();
                let request = if descending {
                    SortRequest::descending(Key::Count)
                } else {
                    SortRequest::ascending(Key::Count)
                };

                let view = spec.sorted(&rows, Some(&request));
                prop_assert_eq!(view.len(), rows.len());

                let mut original: Vec<u32> = rows.iter().map(|r| r.count).collect();
                let mut seen: Vec<u32> = view.iter().map(|r| r.count).collect();
                original.sort_unstable();
                seen.sort_unstable();
                prop_assert_eq!(original, seen);
            }

            /// Identical inputs give identical views.
            #[test]
            fn sorting_is_deterministic(
                rows in proptest::collection::vec(arb_row(), 0..50),
            ) {
                let spec = spec();
                let request = SortRequest::ascending(Key::Name);

                let first: Vec<Row> = spec
                    .sorted(&rows, Some(&request))
                    .into_iter()
                    .cloned()
                    .collect();
                let second: Vec<Row> = spec
                    .sorted(&rows, Some(&request))
                    .into_iter()
                    .cloned()
                    .collect();
                prop_assert_eq!(first, second);
            }

            /// Rows with a missing cell always trail the present ones.
            #[test]
            fn missing_cells_always_trail(
                rows in proptest::collection::vec(arb_row(), 0..50),
                descending in any::<bool>(),
            ) {
                let spec = spec();
                let request = if descending {
                    SortRequest::descending(Key::Name)
                } else {
                    SortRequest::ascending(Key::Name)
                };

                let view = spec.sorted(&rows, Some(&request));
                let first_missing = view.iter().position(|r| r.name.is_none());
                if let Some(at) = first_missing {
                    prop_assert!(view[at..].iter().all(|r| r.name.is_none()));
                }
            }
        }
    }
}
