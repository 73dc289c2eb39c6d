//! Projection of catalog events into activity entries.

use medsync_core::ActivityId;
use medsync_inventory::MedicineEvent;

use crate::entry::{ActivityAction, ActivityEntry};

const ENTITY_MEDICINE: &str = "medicine";

/// Append-only activity feed.
///
/// Applying the same event sequence yields the same descriptions in the
/// same order (entry ids are freshly minted per application).
#[derive(Debug, Default, Clone)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one catalog event as an activity entry.
    pub fn apply(&mut self, event: &MedicineEvent) {
        let entry = match event {
            MedicineEvent::MedicineAdded(e) => ActivityEntry {
                id: ActivityId::new(),
                user_id: Some(e.actor),
                action: ActivityAction::Create,
                entity_type: ENTITY_MEDICINE.to_string(),
                entity_id: Some(e.medicine_id),
                description: Some(format!("Added {}", e.details.name)),
                occurred_at: e.occurred_at,
            },
            MedicineEvent::MedicineUpdated(e) => ActivityEntry {
                id: ActivityId::new(),
                user_id: Some(e.actor),
                action: ActivityAction::Update,
                entity_type: ENTITY_MEDICINE.to_string(),
                entity_id: Some(e.medicine_id),
                description: Some(format!("Updated {}", e.details.name)),
                occurred_at: e.occurred_at,
            },
            MedicineEvent::MedicineRemoved(e) => ActivityEntry {
                id: ActivityId::new(),
                user_id: Some(e.actor),
                action: ActivityAction::Delete,
                entity_type: ENTITY_MEDICINE.to_string(),
                entity_id: Some(e.medicine_id),
                description: Some(format!("Deleted {}", e.name)),
                occurred_at: e.occurred_at,
            },
        };
        self.entries.push(entry);
    }

    /// The newest `limit` entries, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<&ActivityEntry> {
        let mut view: Vec<&ActivityEntry> = self.entries.iter().collect();
        view.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        view.truncate(limit);
        view
    }
}
