//! Event record, draft, validation and timestamp normalization.
//!
//! # Responsibility
//! - Define the canonical record rendered by the calendar widget.
//! - Provide the draft type edited inside the composing modal.
//! - Validate drafts before they reach the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another event in the session.
//! - A valid draft has a non-empty title after trimming.
//! - A valid draft has `start <= end`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a committed calendar event.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Form values arrive as datetime-local strings from the widget's pickers,
/// or as a bare date for all-day slots.
const TS_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";
const TS_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const TS_FORMAT_DATE: &str = "%Y-%m-%d";

/// Validation failure for a draft about to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Event window ends before it starts.
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::InvalidWindow { start, end } => {
                write!(f, "event window ends before it starts: {start} > {end}")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Raw timestamp text that matched none of the accepted form layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParseError {
    pub raw: String,
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized timestamp `{}`; expected YYYY-MM-DD[THH:MM[:SS]]",
            self.raw
        )
    }
}

impl Error for TimestampParseError {}

/// Canonical committed calendar event.
///
/// Timestamps are naive wall-clock values; time-zone conversion is out of
/// scope, so local wall time is the canonical precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Stable ID assigned by the store on create, never by callers.
    pub id: EventId,
    /// Display title, non-empty after trimming.
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Optional meeting URL; accepted as-is, no format validation.
    pub meeting_link: Option<String>,
}

/// Uncommitted event fields edited in the composing modal.
///
/// Deliberately carries no `id`: whether a save inserts or replaces is held
/// by the controller's compose mode, which makes a creating draft with a
/// stale identity unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub meeting_link: Option<String>,
}

impl EventDraft {
    /// Blank draft for a slot the user selected on the grid.
    pub fn for_slot(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: String::new(),
            start,
            end,
            meeting_link: None,
        }
    }

    /// Draft pre-filled from a committed record opened for editing.
    ///
    /// Copies field values only; the record itself is never mutated by
    /// opening it for edit.
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            title: record.title.clone(),
            start: record.start,
            end: record.end,
            meeting_link: record.meeting_link.clone(),
        }
    }

    /// Checks commit-readiness of this draft.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    /// - `InvalidWindow` when `end < start`.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.end < self.start {
            return Err(EventValidationError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Normalizes raw form text into a canonical timestamp.
///
/// Accepted layouts, tried in order: `YYYY-MM-DDTHH:MM`,
/// `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD` (midnight).
///
/// # Errors
/// Returns `TimestampParseError` when no layout matches; callers keep the
/// previous draft value in that case.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampParseError> {
    let trimmed = raw.trim();
    for layout in [TS_FORMAT_MINUTES, TS_FORMAT_SECONDS] {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(value);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, TS_FORMAT_DATE) {
        if let Some(value) = date.and_hms_opt(0, 0, 0) {
            return Ok(value);
        }
    }
    Err(TimestampParseError {
        raw: trimmed.to_string(),
    })
}
