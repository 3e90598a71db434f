//! Domain model for calendar events.
//!
//! # Responsibility
//! - Define the canonical event record, its draft counterpart, and the
//!   validation rules applied before any store mutation.
//! - Normalize raw form input (datetime-local strings) into canonical
//!   timestamps.
//!
//! # Invariants
//! - Every committed event is identified by a stable `EventId`.
//! - A draft carries no identity; insert-vs-replace is decided by the
//!   controller's compose mode, never by the draft itself.

pub mod event;
