//! Case-insensitive catalog search.

use crate::medicine::Medicine;

/// Filter medicines whose name, category, or description contains `query`.
///
/// Matching is case-insensitive; an empty query matches everything. Input
/// order is preserved and the catalog is never mutated (the result borrows).
pub fn search<'a>(medicines: &'a [Medicine], query: &str) -> Vec<&'a Medicine> {
    let needle = query.to_lowercase();
    medicines
        .iter()
        .filter(|medicine| matches(medicine, &needle))
        .collect()
}

fn matches(medicine: &Medicine, needle: &str) -> bool {
    medicine.name().to_lowercase().contains(needle)
        || medicine
            .category()
            .is_some_and(|c| c.to_lowercase().contains(needle))
        || medicine
            .description()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}
