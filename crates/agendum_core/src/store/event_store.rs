//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical event collection.
//! - Assign fresh, never-reused identity on create.
//!
//! # Invariants
//! - Write paths call `EventDraft::validate()` before mutating state.
//! - Listing order is insertion order, preserved for deterministic output.
//! - Identity is generated here; callers never choose an `id`.

use crate::model::event::{EventDraft, EventId, EventRecord, EventValidationError};
use log::{info, warn};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for event collection operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(EventValidationError),
    NotFound(EventId),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for event CRUD operations.
///
/// The controller is generic over this trait so the interaction machine can
/// be tested against the in-memory store and later backed by something else
/// without changing its transitions.
pub trait EventRepository {
    /// Validates and inserts a new record with a freshly assigned id.
    fn create(&mut self, draft: &EventDraft) -> StoreResult<EventRecord>;
    /// Validates and replaces the record at `id` wholesale; id unchanged.
    fn update(&mut self, id: EventId, draft: &EventDraft) -> StoreResult<EventRecord>;
    /// Removes the record at `id`.
    fn delete(&mut self, id: EventId) -> StoreResult<()>;
    /// Looks up one record by id.
    fn get(&self, id: EventId) -> Option<EventRecord>;
    /// Snapshot of all records in insertion order.
    fn list(&self) -> Vec<EventRecord>;
}

/// In-memory event store owned by a single UI session.
///
/// Explicitly constructed and injected into the controller; there is no
/// process-wide singleton. A `Vec` keeps insertion order, which is all the
/// rendering widget needs (it re-derives temporal order itself).
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: Vec<EventRecord>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with seed records.
    ///
    /// Seeds arriving with a duplicate id are dropped after the first
    /// occurrence so the uniqueness invariant holds from the start.
    pub fn with_seed(seed: Vec<EventRecord>) -> Self {
        let mut store = Self::new();
        for record in seed {
            if store.position(record.id).is_some() {
                warn!(
                    "event=store_seed module=store status=skipped reason=duplicate_id id={}",
                    record.id
                );
                continue;
            }
            store.events.push(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Generates an id not held by any live record.
    ///
    /// v4 collisions are not a practical concern, but the check keeps the
    /// never-collide contract explicit.
    fn fresh_id(&self) -> EventId {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}

impl EventRepository for MemoryEventStore {
    fn create(&mut self, draft: &EventDraft) -> StoreResult<EventRecord> {
        draft.validate()?;

        let record = EventRecord {
            id: self.fresh_id(),
            title: draft.title.clone(),
            start: draft.start,
            end: draft.end,
            meeting_link: draft.meeting_link.clone(),
        };
        self.events.push(record.clone());
        info!(
            "event=store_create module=store status=ok id={} total={}",
            record.id,
            self.events.len()
        );
        Ok(record)
    }

    fn update(&mut self, id: EventId, draft: &EventDraft) -> StoreResult<EventRecord> {
        draft.validate()?;

        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let record = EventRecord {
            id,
            title: draft.title.clone(),
            start: draft.start,
            end: draft.end,
            meeting_link: draft.meeting_link.clone(),
        };
        self.events[index] = record.clone();
        info!("event=store_update module=store status=ok id={id}");
        Ok(record)
    }

    fn delete(&mut self, id: EventId) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.events.remove(index);
        info!(
            "event=store_delete module=store status=ok id={id} total={}",
            self.events.len()
        );
        Ok(())
    }

    fn get(&self, id: EventId) -> Option<EventRecord> {
        self.position(id).map(|index| self.events[index].clone())
    }

    fn list(&self) -> Vec<EventRecord> {
        self.events.clone()
    }
}
