//! Store layer: the canonical in-memory event collection.
//!
//! # Responsibility
//! - Define the use-case oriented repository contract for event CRUD.
//! - Keep collection bookkeeping (identity, order) behind that contract.
//!
//! # Invariants
//! - Store writes must pass `EventDraft::validate()` before mutating.
//! - Store APIs return semantic errors (`NotFound`) rather than panicking.
//! - The collection never holds two records with the same `id`.

pub mod event_store;
