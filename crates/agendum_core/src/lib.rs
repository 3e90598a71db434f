//! Core domain logic for Agendum.
//! This crate is the single source of truth for calendar invariants.

pub mod controller;
pub mod logging;
pub mod model;
pub mod store;
pub mod surface;

pub use controller::interaction::{ComposeMode, ComposeState, FieldError, InteractionController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    parse_timestamp, EventDraft, EventId, EventRecord, EventValidationError, TimestampParseError,
};
pub use store::event_store::{
    EventRepository, MemoryEventStore, StoreError, StoreResult,
};
pub use surface::calendar_surface::{
    agenda_entries, on_navigate, on_select_event, on_select_slot, snapshot, SurfaceSnapshot,
    ViewMode, DEFAULT_VIEW, VIEW_MODES,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
