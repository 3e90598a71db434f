//! Interaction controller state machine.
//!
//! # Responsibility
//! - Own the compose state (`Closed | Composing`) and the focused date.
//! - Pre-fill drafts from gestures, apply field edits, and commit or
//!   discard drafts against the injected store.
//!
//! # Invariants
//! - A failed validation keeps the modal open with the draft intact.
//! - `NotFound` from the store during save or delete is benign: the
//!   canonical list is the source of truth and an already-gone target is
//!   not an error for the user.
//! - Navigation never cancels an open composition.

use crate::model::event::{
    parse_timestamp, EventDraft, EventId, EventRecord, EventValidationError, TimestampParseError,
};
use crate::store::event_store::{EventRepository, StoreError};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether a save commits a fresh record or replaces an existing one.
///
/// The id of the record being edited lives here, not on the draft, so a
/// creating draft can never carry a stale identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeMode {
    Creating,
    Editing(EventId),
}

/// Modal state: hidden, or open over an uncommitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeState {
    Closed,
    Composing { mode: ComposeMode, draft: EventDraft },
}

/// Field-level edit rejection; the draft is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    BadTimestamp(TimestampParseError),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown event field `{name}`"),
            Self::BadTimestamp(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownField(_) => None,
            Self::BadTimestamp(err) => Some(err),
        }
    }
}

impl From<TimestampParseError> for FieldError {
    fn from(value: TimestampParseError) -> Self {
        Self::BadTimestamp(value)
    }
}

/// Session-lived interaction machine.
///
/// Owns the store instance outright (explicit injection, no shared
/// singleton) together with the compose state and the focused date the
/// surface reports to the widget.
pub struct InteractionController<R: EventRepository> {
    store: R,
    compose: ComposeState,
    focused: NaiveDate,
}

impl<R: EventRepository> InteractionController<R> {
    /// Creates a controller over an injected store, starting `Closed` and
    /// focused on the given date.
    pub fn new(store: R, initial_focus: NaiveDate) -> Self {
        Self {
            store,
            compose: ComposeState::Closed,
            focused: initial_focus,
        }
    }

    /// Current compose state; modal visibility derives from this alone.
    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.compose, ComposeState::Composing { .. })
    }

    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    /// Snapshot of the canonical event list, insertion order.
    pub fn events(&self) -> Vec<EventRecord> {
        self.store.list()
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Mutable store access for the session owner (seeding, reconciling).
    pub fn store_mut(&mut self) -> &mut R {
        &mut self.store
    }

    /// Grid gesture: the user selected an empty slot.
    ///
    /// Opens the create modal over a blank draft spanning the slot. Ignored
    /// while a composition is already open (the modal blocks the grid).
    pub fn select_slot(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        if self.is_composing() {
            warn!("event=select_slot module=controller status=ignored reason=composing");
            return;
        }
        self.compose = ComposeState::Composing {
            mode: ComposeMode::Creating,
            draft: EventDraft::for_slot(start, end),
        };
        info!("event=select_slot module=controller status=ok mode=creating");
    }

    /// Grid gesture: the user clicked a rendered event.
    ///
    /// Opens the edit modal over a copy of the record's fields; the stored
    /// record itself is untouched until save.
    pub fn select_event(&mut self, record: &EventRecord) {
        if self.is_composing() {
            warn!("event=select_event module=controller status=ignored reason=composing");
            return;
        }
        self.compose = ComposeState::Composing {
            mode: ComposeMode::Editing(record.id),
            draft: EventDraft::from_record(record),
        };
        info!(
            "event=select_event module=controller status=ok mode=editing id={}",
            record.id
        );
    }

    /// Toolbar gesture: the "+ Add Event" button.
    ///
    /// Same as selecting a zero-length slot at `now`.
    pub fn open_blank(&mut self, now: NaiveDateTime) {
        self.select_slot(now, now);
    }

    /// Form gesture: one field changed in the open modal.
    ///
    /// Timestamps are normalized through [`parse_timestamp`]; a parse
    /// failure or an unknown field name leaves the draft untouched. Ignored
    /// when no modal is open.
    pub fn edit_field(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        let draft = match &mut self.compose {
            ComposeState::Composing { draft, .. } => draft,
            ComposeState::Closed => {
                warn!("event=edit_field module=controller status=ignored reason=closed");
                return Ok(());
            }
        };
        match name {
            "title" => draft.title = raw.to_string(),
            "start" => draft.start = parse_timestamp(raw)?,
            "end" => draft.end = parse_timestamp(raw)?,
            "meeting_link" => {
                draft.meeting_link = if raw.trim().is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                };
            }
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Commits the open draft.
    ///
    /// Creating mode inserts; editing mode replaces under the captured id.
    /// On success the modal closes. On validation failure the modal stays
    /// open with the draft intact and the error is returned for display.
    /// A `NotFound` during an edit-save means the record was deleted out
    /// from under the modal; the modal closes and nothing is committed.
    pub fn save(&mut self) -> Result<(), EventValidationError> {
        let (mode, draft) = match &self.compose {
            ComposeState::Composing { mode, draft } => (*mode, draft.clone()),
            ComposeState::Closed => {
                warn!("event=save module=controller status=ignored reason=closed");
                return Ok(());
            }
        };

        let outcome = match mode {
            ComposeMode::Creating => self.store.create(&draft).map(|_| ()),
            ComposeMode::Editing(id) => self.store.update(id, &draft).map(|_| ()),
        };

        match outcome {
            Ok(()) => {
                self.compose = ComposeState::Closed;
                info!("event=save module=controller status=ok");
                Ok(())
            }
            Err(StoreError::NotFound(id)) => {
                warn!("event=save module=controller status=stale id={id}");
                self.compose = ComposeState::Closed;
                Ok(())
            }
            Err(StoreError::Validation(err)) => {
                warn!("event=save module=controller status=invalid reason={err}");
                Err(err)
            }
        }
    }

    /// Deletes the record under edit and closes the modal.
    ///
    /// Always succeeds from the caller's point of view: a store `NotFound`
    /// means the record is already gone. Unreachable from creating mode by
    /// construction; a stray call there is ignored.
    pub fn delete(&mut self) {
        let id = match &self.compose {
            ComposeState::Composing {
                mode: ComposeMode::Editing(id),
                ..
            } => *id,
            _ => {
                warn!("event=delete module=controller status=ignored reason=no_target");
                return;
            }
        };

        if let Err(StoreError::NotFound(_)) = self.store.delete(id) {
            info!("event=delete module=controller status=already_gone id={id}");
        }
        self.compose = ComposeState::Closed;
    }

    /// Discards the open draft without touching the store.
    pub fn cancel(&mut self) {
        if self.is_composing() {
            info!("event=cancel module=controller status=ok");
        }
        self.compose = ComposeState::Closed;
    }

    /// Moves the surface's focused date; valid in any state and never
    /// cancels an open composition.
    pub fn navigate(&mut self, date: NaiveDate) {
        self.focused = date;
    }
}
