//! Derived stock status (the table badge and dashboard buckets).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days ahead of today still counted as expiring soon (inclusive).
pub const EXPIRING_SOON_WINDOW_DAYS: u64 = 30;

/// Mutually exclusive status of a catalog record, recomputed on demand.
///
/// Precedence is fixed and total: expiry dominates stock level. A record is
/// never stored with a status; callers classify against "today".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Expired,
    ExpiringSoon,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a record's stock level and expiry against `today`.
    ///
    /// - expiry strictly before today -> `Expired`
    /// - expiry within the next [`EXPIRING_SOON_WINDOW_DAYS`] days
    ///   (inclusive, starting today) -> `ExpiringSoon`
    /// - otherwise quantity at or below the threshold -> `LowStock`
    /// - otherwise -> `InStock`
    ///
    /// An absent expiry date skips the expiry rules entirely.
    pub fn classify(
        quantity: u32,
        low_stock_threshold: u32,
        expiry_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let horizon = today
            .checked_add_days(Days::new(EXPIRING_SOON_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);

        if let Some(expiry) = expiry_date {
            if expiry < today {
                return StockStatus::Expired;
            }
            if expiry <= horizon {
                return StockStatus::ExpiringSoon;
            }
        }

        if quantity <= low_stock_threshold {
            return StockStatus::LowStock;
        }

        StockStatus::InStock
    }

    /// Display text as shown on the badge.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Expired => "Expired",
            StockStatus::ExpiringSoon => "Expiring Soon",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}
