//! Aggregate counts behind the dashboard cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::medicine::Medicine;
use crate::status::StockStatus;

/// Catalog-wide counts: total plus the three attention buckets.
///
/// Buckets are mutually exclusive because they follow classifier precedence;
/// the remainder (`in_stock`) is derived.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl InventorySummary {
    /// Classify every medicine once against `today` and tally the counts.
    pub fn of<'a, I>(medicines: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Medicine>,
    {
        let mut summary = Self::default();
        for medicine in medicines {
            summary.total += 1;
            match medicine.status(today) {
                StockStatus::Expired => summary.expired += 1,
                StockStatus::ExpiringSoon => summary.expiring_soon += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::InStock => {}
            }
        }
        summary
    }

    /// Records in none of the attention buckets.
    pub fn in_stock(&self) -> usize {
        self.total - self.expired - self.expiring_soon - self.low_stock
    }
}
