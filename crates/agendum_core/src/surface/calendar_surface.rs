//! Calendar surface: widget-facing projection and callback routing.
//!
//! # Responsibility
//! - Expose the event list, focused date and view-mode set in the shape
//!   the rendering widget consumes.
//! - Forward `onSelectSlot` / `onSelectEvent` / `onNavigate` callbacks
//!   into controller transitions, nothing more.

use crate::controller::interaction::InteractionController;
use crate::model::event::EventRecord;
use crate::store::event_store::EventRepository;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display layouts the widget may switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Month,
    Week,
    Day,
    Agenda,
}

/// View modes offered to the widget, in toolbar order.
pub const VIEW_MODES: [ViewMode; 4] = [
    ViewMode::Month,
    ViewMode::Week,
    ViewMode::Day,
    ViewMode::Agenda,
];

/// View the widget starts in.
pub const DEFAULT_VIEW: ViewMode = ViewMode::Month;

const AGENDA_TS_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Everything the widget needs to render one frame.
///
/// Events are in store (insertion) order; the widget re-derives temporal
/// order itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub events: Vec<EventRecord>,
    pub focused: NaiveDate,
    pub views: Vec<ViewMode>,
    pub default_view: ViewMode,
}

/// Derives the current render snapshot.
pub fn snapshot<R: EventRepository>(controller: &InteractionController<R>) -> SurfaceSnapshot {
    SurfaceSnapshot {
        events: controller.events(),
        focused: controller.focused(),
        views: VIEW_MODES.to_vec(),
        default_view: DEFAULT_VIEW,
    }
}

/// Agenda listing rows, one per event in store order.
///
/// Shape matches the list modal of the UI: "title - start to end".
pub fn agenda_entries<R: EventRepository>(controller: &InteractionController<R>) -> Vec<String> {
    controller
        .events()
        .iter()
        .map(|event| {
            format!(
                "{} - {} to {}",
                event.title,
                event.start.format(AGENDA_TS_FORMAT),
                event.end.format(AGENDA_TS_FORMAT)
            )
        })
        .collect()
}

/// Widget callback: an empty slot range was selected.
pub fn on_select_slot<R: EventRepository>(
    controller: &mut InteractionController<R>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) {
    controller.select_slot(start, end);
}

/// Widget callback: a rendered event was clicked.
pub fn on_select_event<R: EventRepository>(
    controller: &mut InteractionController<R>,
    record: &EventRecord,
) {
    controller.select_event(record);
}

/// Widget callback: the visible date changed.
pub fn on_navigate<R: EventRepository>(controller: &mut InteractionController<R>, date: NaiveDate) {
    controller.navigate(date);
}
