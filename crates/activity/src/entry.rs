use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medsync_core::{ActivityId, MedicineId, UserId};

/// What a user did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
}

impl ActivityAction {
    /// Stable wire/storage name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityAction::Create => "create",
            ActivityAction::Update => "update",
            ActivityAction::Delete => "delete",
        }
    }
}

/// One line of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: ActivityId,
    pub user_id: Option<UserId>,
    pub action: ActivityAction,
    pub entity_type: String,
    pub entity_id: Option<MedicineId>,
    pub description: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
