use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use medsync_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Event, MedicineId, UserId,
};

use crate::status::StockStatus;

/// Unit recorded when the form leaves it blank.
pub const DEFAULT_UNIT: &str = "pieces";

/// Low-stock threshold recorded when the form leaves it blank.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Validated, normalized medicine payload.
///
/// Optional string fields are either absent or non-blank; `unit` and
/// `low_stock_threshold` always carry a value. Price is in the smallest
/// currency unit (e.g., cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineDetails {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub batch_number: Option<String>,
    pub price_cents: Option<u64>,
    pub low_stock_threshold: u32,
}

/// Raw form payload, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: u32,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub batch_number: Option<String>,
    pub price_cents: Option<u64>,
    pub low_stock_threshold: Option<u32>,
}

impl MedicineDraft {
    /// Normalize a raw form payload into a validated details value.
    ///
    /// Trims the name and rejects it when blank; collapses blank optional
    /// fields to `None`; falls back to [`DEFAULT_UNIT`] and
    /// [`DEFAULT_LOW_STOCK_THRESHOLD`] when unit/threshold are absent.
    pub fn into_details(self) -> DomainResult<MedicineDetails> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let unit = self
            .unit
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_owned());

        Ok(MedicineDetails {
            name,
            description: none_if_blank(self.description),
            category: none_if_blank(self.category),
            quantity: self.quantity,
            unit,
            expiry_date: self.expiry_date,
            supplier: none_if_blank(self.supplier),
            batch_number: none_if_blank(self.batch_number),
            price_cents: self.price_cents,
            low_stock_threshold: self
                .low_stock_threshold
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
        })
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Aggregate root: Medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medicine {
    id: MedicineId,
    details: MedicineDetails,
    version: u64,
    created: bool,
    removed: bool,
}

impl Medicine {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: MedicineId) -> Self {
        Self {
            id,
            details: MedicineDetails {
                name: String::new(),
                description: None,
                category: None,
                quantity: 0,
                unit: String::new(),
                expiry_date: None,
                supplier: None,
                batch_number: None,
                price_cents: None,
                low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            },
            version: 0,
            created: false,
            removed: false,
        }
    }

    /// Materialize a medicine from already-persisted details (read side).
    pub fn from_details(id: MedicineId, details: MedicineDetails) -> Self {
        Self {
            id,
            details,
            version: 1,
            created: true,
            removed: false,
        }
    }

    pub fn id_typed(&self) -> MedicineId {
        self.id
    }

    pub fn details(&self) -> &MedicineDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.details.category.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.details.quantity
    }

    pub fn unit(&self) -> &str {
        &self.details.unit
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.details.expiry_date
    }

    pub fn supplier(&self) -> Option<&str> {
        self.details.supplier.as_deref()
    }

    pub fn batch_number(&self) -> Option<&str> {
        self.details.batch_number.as_deref()
    }

    pub fn price_cents(&self) -> Option<u64> {
        self.details.price_cents
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.details.low_stock_threshold
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Derived status of this record against `today`.
    pub fn status(&self, today: NaiveDate) -> StockStatus {
        StockStatus::classify(
            self.details.quantity,
            self.details.low_stock_threshold,
            self.details.expiry_date,
            today,
        )
    }
}

impl AggregateRoot for Medicine {
    type Id = MedicineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddMedicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMedicine {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub details: MedicineDetails,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateMedicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMedicine {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub details: MedicineDetails,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveMedicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveMedicine {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicineCommand {
    AddMedicine(AddMedicine),
    UpdateMedicine(UpdateMedicine),
    RemoveMedicine(RemoveMedicine),
}

/// Event: MedicineAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineAdded {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub details: MedicineDetails,
    pub occurred_at: DateTime<Utc>,
}

/// Event: MedicineUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineUpdated {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub details: MedicineDetails,
    pub occurred_at: DateTime<Utc>,
}

/// Event: MedicineRemoved.
///
/// Carries the name so downstream consumers (the activity feed) don't need
/// the pre-removal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRemoved {
    pub medicine_id: MedicineId,
    pub actor: UserId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicineEvent {
    MedicineAdded(MedicineAdded),
    MedicineUpdated(MedicineUpdated),
    MedicineRemoved(MedicineRemoved),
}

impl Event for MedicineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MedicineEvent::MedicineAdded(_) => "inventory.medicine.added",
            MedicineEvent::MedicineUpdated(_) => "inventory.medicine.updated",
            MedicineEvent::MedicineRemoved(_) => "inventory.medicine.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            MedicineEvent::MedicineAdded(e) => e.occurred_at,
            MedicineEvent::MedicineUpdated(e) => e.occurred_at,
            MedicineEvent::MedicineRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Medicine {
    type Command = MedicineCommand;
    type Event = MedicineEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            MedicineEvent::MedicineAdded(e) => {
                self.id = e.medicine_id;
                self.details = e.details.clone();
                self.created = true;
                self.removed = false;
            }
            MedicineEvent::MedicineUpdated(e) => {
                // The form submits every field; updates replace the payload.
                self.details = e.details.clone();
            }
            MedicineEvent::MedicineRemoved(_) => {
                self.removed = true;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            MedicineCommand::AddMedicine(cmd) => self.handle_add(cmd),
            MedicineCommand::UpdateMedicine(cmd) => self.handle_update(cmd),
            MedicineCommand::RemoveMedicine(cmd) => self.handle_remove(cmd),
        }
    }
}

impl Medicine {
    fn ensure_medicine_id(&self, medicine_id: MedicineId) -> DomainResult<()> {
        if self.id != medicine_id {
            return Err(DomainError::invariant("medicine_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddMedicine) -> DomainResult<Vec<MedicineEvent>> {
        if self.created {
            return Err(DomainError::conflict("medicine already exists"));
        }
        if cmd.details.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(vec![MedicineEvent::MedicineAdded(MedicineAdded {
            medicine_id: cmd.medicine_id,
            actor: cmd.actor,
            details: cmd.details.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update(&self, cmd: &UpdateMedicine) -> DomainResult<Vec<MedicineEvent>> {
        if !self.created || self.removed {
            return Err(DomainError::not_found());
        }
        self.ensure_medicine_id(cmd.medicine_id)?;

        if cmd.details.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(vec![MedicineEvent::MedicineUpdated(MedicineUpdated {
            medicine_id: cmd.medicine_id,
            actor: cmd.actor,
            details: cmd.details.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveMedicine) -> DomainResult<Vec<MedicineEvent>> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        if self.removed {
            return Err(DomainError::conflict("medicine already removed"));
        }
        self.ensure_medicine_id(cmd.medicine_id)?;

        Ok(vec![MedicineEvent::MedicineRemoved(MedicineRemoved {
            medicine_id: cmd.medicine_id,
            actor: cmd.actor,
            name: self.details.name.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
