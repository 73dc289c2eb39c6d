//! Medicine catalog domain.
//!
//! This crate contains the business rules for the medicine inventory,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): the catalog aggregate, derived stock status, dashboard counts,
//! search, and the catalog's table column set.

pub mod medicine;
pub mod search;
pub mod status;
pub mod summary;
pub mod table;

pub use medicine::{
    AddMedicine, Medicine, MedicineCommand, MedicineDetails, MedicineDraft, MedicineEvent,
    MedicineAdded, MedicineRemoved, MedicineUpdated, RemoveMedicine, UpdateMedicine,
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_UNIT,
};
pub use search::search;
pub use status::{StockStatus, EXPIRING_SOON_WINDOW_DAYS};
pub use summary::InventorySummary;
pub use table::{medicine_columns, MedicineColumn};
