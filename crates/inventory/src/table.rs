//! Catalog table wiring: the medicine column set for the sortable table.

use serde::{Deserialize, Serialize};

use medsync_table::{Column, SortValue, TableSpec};

use crate::medicine::Medicine;

/// Keys of the catalog table columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicineColumn {
    Name,
    Category,
    Quantity,
    ExpiryDate,
    Status,
    Actions,
}

/// The catalog's column set.
///
/// Status and Actions are rendered but never sortable; the status badge is
/// derived per row and the actions cell holds no value at all.
pub fn medicine_columns() -> TableSpec<Medicine, MedicineColumn> {
    TableSpec::new(vec![
        Column::new(MedicineColumn::Name, "Name", |m: &Medicine| {
            SortValue::from(m.name())
        }),
        Column::new(MedicineColumn::Category, "Category", |m: &Medicine| {
            SortValue::from(m.category())
        }),
        Column::new(MedicineColumn::Quantity, "Quantity", |m: &Medicine| {
            SortValue::from(m.quantity())
        }),
        Column::new(MedicineColumn::ExpiryDate, "Expiry Date", |m: &Medicine| {
            SortValue::from(m.expiry_date())
        }),
        Column::new(MedicineColumn::Status, "Status", |_: &Medicine| {
            SortValue::Missing
        })
        .not_sortable(),
        Column::new(MedicineColumn::Actions, "Actions", |_: &Medicine| {
            SortValue::Missing
        })
        .not_sortable(),
    ])
}
