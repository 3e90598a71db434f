//! FFI use-case API for the widget-facing runtime.
//!
//! # Responsibility
//! - Expose the calendar session to the rendering widget via sync FRB
//!   calls: gestures in, render snapshots out.
//! - Keep error semantics simple at the boundary: response envelopes and
//!   strings, never panics.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One session per process; all calls serialize on its lock.

use agendum_core::{
    agenda_entries, core_version as core_version_inner, init_logging as init_logging_inner,
    snapshot, ComposeMode, ComposeState, EventRepository, InteractionController, MemoryEventStore,
};
use chrono::{Local, NaiveDate};
use log::warn;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<InteractionController<MemoryEventStore>>> = OnceLock::new();

const NAV_DATE_FORMAT: &str = "%Y-%m-%d";

fn with_session<T>(f: impl FnOnce(&mut InteractionController<MemoryEventStore>) -> T) -> T {
    let session = SESSION.get_or_init(|| {
        Mutex::new(InteractionController::new(
            MemoryEventStore::new(),
            Local::now().date_naive(),
        ))
    });
    // A poisoned lock only means a previous caller panicked mid-gesture;
    // the state itself is still coherent, so keep serving.
    let mut guard = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

/// Generic gesture response envelope for the widget runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureResponse {
    /// Whether the gesture was accepted.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl GestureResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Render snapshot envelope: JSON payload plus diagnostics message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotResponse {
    /// Serialized `SurfaceSnapshot`, empty on failure.
    pub json: String,
    /// Human-readable message, empty on success.
    pub message: String,
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Widget gesture: an empty slot range was selected on the grid.
///
/// Timestamps arrive as the widget's datetime-local strings.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn select_slot(start: String, end: String) -> GestureResponse {
    let start = match agendum_core::parse_timestamp(&start) {
        Ok(value) => value,
        Err(err) => return GestureResponse::failure(format!("select_slot failed: {err}")),
    };
    let end = match agendum_core::parse_timestamp(&end) {
        Ok(value) => value,
        Err(err) => return GestureResponse::failure(format!("select_slot failed: {err}")),
    };
    with_session(|session| {
        session.select_slot(start, end);
        GestureResponse::success("Composing new event.")
    })
}

/// Widget gesture: a rendered event was clicked.
///
/// The canonical record is looked up by id in the store, so a stale click
/// on an already-deleted event is reported rather than acted on.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn select_event(event_id: String) -> GestureResponse {
    let id = match Uuid::parse_str(event_id.trim()) {
        Ok(id) => id,
        Err(err) => return GestureResponse::failure(format!("select_event failed: {err}")),
    };
    with_session(|session| match session.store().get(id) {
        Some(record) => {
            session.select_event(&record);
            GestureResponse::success("Composing event edit.")
        }
        None => {
            warn!("event=select_event module=ffi status=stale id={id}");
            GestureResponse::failure(format!("select_event failed: event not found: {id}"))
        }
    })
}

/// Toolbar gesture: the "+ Add Event" button.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn open_blank() -> GestureResponse {
    let now = Local::now().naive_local();
    with_session(|session| {
        session.open_blank(now);
        GestureResponse::success("Composing new event.")
    })
}

/// Form gesture: one field of the open draft changed.
///
/// Field names: `title`, `start`, `end`, `meeting_link`. Timestamp values
/// are normalized before landing on the draft; on failure the draft keeps
/// its previous value.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_field(name: String, value: String) -> GestureResponse {
    with_session(|session| match session.edit_field(&name, &value) {
        Ok(()) => GestureResponse::success(""),
        Err(err) => GestureResponse::failure(format!("edit_field failed: {err}")),
    })
}

/// Commits the open draft (insert or replace per compose mode).
///
/// A validation failure keeps the modal open; the message is meant for
/// display next to the form.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn save_event() -> GestureResponse {
    with_session(|session| match session.save() {
        Ok(()) => GestureResponse::success("Event saved."),
        Err(err) => GestureResponse::failure(err.to_string()),
    })
}

/// Deletes the record under edit; already-gone targets are fine.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_event() -> GestureResponse {
    with_session(|session| {
        session.delete();
        GestureResponse::success("Event deleted.")
    })
}

/// Discards the open draft without committing.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn cancel_compose() -> GestureResponse {
    with_session(|session| {
        session.cancel();
        GestureResponse::success("Composition discarded.")
    })
}

/// Widget gesture: the visible date changed.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn navigate(date: String) -> GestureResponse {
    match NaiveDate::parse_from_str(date.trim(), NAV_DATE_FORMAT) {
        Ok(parsed) => with_session(|session| {
            session.navigate(parsed);
            GestureResponse::success("")
        }),
        Err(err) => GestureResponse::failure(format!("navigate failed: {err}")),
    }
}

/// Current render snapshot as JSON.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
/// - Returns deterministic envelope; `json` is empty only on serialization
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn session_snapshot() -> SnapshotResponse {
    with_session(|session| match serde_json::to_string(&snapshot(session)) {
        Ok(json) => SnapshotResponse {
            json,
            message: String::new(),
        },
        Err(err) => SnapshotResponse {
            json: String::new(),
            message: format!("session_snapshot failed: {err}"),
        },
    })
}

/// Agenda listing rows in store order.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_rows() -> Vec<String> {
    with_session(|session| agenda_entries(session))
}

/// Whether the composing modal should be visible.
///
/// Visibility is a pure function of controller state.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn modal_visible() -> bool {
    with_session(|session| session.is_composing())
}

/// Compose mode for the open modal: `closed`, `creating` or `editing`.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn compose_mode() -> String {
    with_session(|session| match session.compose() {
        ComposeState::Closed => "closed".to_string(),
        ComposeState::Composing {
            mode: ComposeMode::Creating,
            ..
        } => "creating".to_string(),
        ComposeState::Composing {
            mode: ComposeMode::Editing(_),
            ..
        } => "editing".to_string(),
    })
}
