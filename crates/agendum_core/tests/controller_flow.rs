use agendum_core::{
    ComposeMode, ComposeState, EventDraft, EventRepository, EventValidationError, FieldError,
    InteractionController, MemoryEventStore,
};
use chrono::NaiveDate;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn focus() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn controller() -> InteractionController<MemoryEventStore> {
    InteractionController::new(MemoryEventStore::new(), focus())
}

fn controller_with_standup() -> InteractionController<MemoryEventStore> {
    let mut store = MemoryEventStore::new();
    let mut draft = EventDraft::for_slot(ts(2025, 3, 26, 10, 0), ts(2025, 3, 26, 10, 15));
    draft.title = "Standup".to_string();
    store.create(&draft).unwrap();
    InteractionController::new(store, focus())
}

#[test]
fn starts_closed_and_focused() {
    let controller = controller();

    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert!(!controller.is_composing());
    assert_eq!(controller.focused(), focus());
    assert!(controller.events().is_empty());
}

#[test]
fn select_slot_opens_creating_with_blank_title() {
    let mut controller = controller();

    controller.select_slot(ts(2025, 3, 26, 14, 0), ts(2025, 3, 26, 15, 0));

    match controller.compose() {
        ComposeState::Composing { mode, draft } => {
            assert_eq!(*mode, ComposeMode::Creating);
            assert_eq!(draft.title, "");
            assert_eq!(draft.start, ts(2025, 3, 26, 14, 0));
            assert_eq!(draft.end, ts(2025, 3, 26, 15, 0));
        }
        ComposeState::Closed => panic!("slot selection should open the modal"),
    }
}

#[test]
fn create_from_slot_grows_list_with_fresh_id() {
    let mut controller = controller_with_standup();
    let existing_ids: Vec<_> = controller.events().iter().map(|event| event.id).collect();

    controller.select_slot(ts(2025, 3, 27, 9, 0), ts(2025, 3, 27, 10, 0));
    controller.edit_field("title", "Review").unwrap();
    controller.save().unwrap();

    let events = controller.events();
    assert_eq!(events.len(), 2);
    let created = &events[1];
    assert_eq!(created.title, "Review");
    assert_eq!(created.start, ts(2025, 3, 27, 9, 0));
    assert_eq!(created.end, ts(2025, 3, 27, 10, 0));
    assert!(!existing_ids.contains(&created.id));
    assert_eq!(*controller.compose(), ComposeState::Closed);
}

#[test]
fn edit_title_replaces_record_in_place() {
    let mut controller = controller_with_standup();
    let original = controller.events()[0].clone();

    controller.select_event(&original);
    controller.edit_field("title", "Daily Standup").unwrap();
    controller.save().unwrap();

    let events = controller.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, original.id);
    assert_eq!(events[0].title, "Daily Standup");
    assert_eq!(events[0].start, original.start);
    assert_eq!(events[0].end, original.end);
}

#[test]
fn empty_title_save_keeps_modal_open_and_store_unchanged() {
    let mut controller = controller_with_standup();
    let before = controller.events();

    controller.select_slot(ts(2025, 3, 27, 9, 0), ts(2025, 3, 27, 10, 0));
    controller.edit_field("title", "   ").unwrap();
    let err = controller.save().unwrap_err();

    assert_eq!(err, EventValidationError::EmptyTitle);
    assert!(controller.is_composing());
    assert_eq!(controller.events(), before);

    // The draft is intact; fixing the title makes the same save succeed.
    controller.edit_field("title", "Planning").unwrap();
    controller.save().unwrap();
    assert_eq!(controller.events().len(), before.len() + 1);
}

#[test]
fn select_then_cancel_leaves_record_untouched() {
    let mut controller = controller_with_standup();
    let before = controller.events()[0].clone();

    controller.select_event(&before);
    controller.edit_field("title", "scribble").unwrap();
    controller.cancel();

    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert_eq!(controller.store().get(before.id).unwrap(), before);
}

#[test]
fn delete_removes_record_and_stale_delete_is_benign() {
    let mut controller = controller_with_standup();
    let target = controller.events()[0].clone();

    controller.select_event(&target);
    controller.delete();
    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert!(controller.events().is_empty());

    // The widget can still hold the stale record; a second delete through
    // it must not be fatal.
    controller.select_event(&target);
    controller.delete();
    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert!(controller.events().is_empty());
}

#[test]
fn save_on_stale_edit_closes_without_committing() {
    let mut controller = controller_with_standup();
    let target = controller.events()[0].clone();

    controller.select_event(&target);
    // The record disappears out from under the open modal.
    controller.store_mut().delete(target.id).unwrap();
    controller.edit_field("title", "Renamed").unwrap();
    controller.save().unwrap();

    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert!(controller.events().is_empty());
}

#[test]
fn delete_is_unreachable_while_creating() {
    let mut controller = controller_with_standup();

    controller.select_slot(ts(2025, 3, 27, 9, 0), ts(2025, 3, 27, 10, 0));
    controller.delete();

    // No target id exists, so nothing is deleted and the modal stays open.
    assert!(controller.is_composing());
    assert_eq!(controller.events().len(), 1);
}

#[test]
fn navigate_updates_focus_without_cancelling_composition() {
    let mut controller = controller();

    controller.navigate(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(controller.focused(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());

    controller.select_slot(ts(2025, 4, 2, 9, 0), ts(2025, 4, 2, 10, 0));
    controller.edit_field("title", "Offsite").unwrap();
    controller.navigate(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

    assert!(controller.is_composing());
    assert_eq!(controller.focused(), NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
    controller.save().unwrap();
    assert_eq!(controller.events().len(), 1);
}

#[test]
fn open_blank_composes_zero_length_slot() {
    let mut controller = controller();
    let now = ts(2025, 3, 15, 12, 30);

    controller.open_blank(now);

    match controller.compose() {
        ComposeState::Composing { mode, draft } => {
            assert_eq!(*mode, ComposeMode::Creating);
            assert_eq!(draft.start, now);
            assert_eq!(draft.end, now);
        }
        ComposeState::Closed => panic!("open_blank should open the modal"),
    }
}

#[test]
fn grid_selection_is_ignored_while_composing() {
    let mut controller = controller_with_standup();
    let record = controller.events()[0].clone();

    controller.select_slot(ts(2025, 3, 27, 9, 0), ts(2025, 3, 27, 10, 0));
    controller.edit_field("title", "kept draft").unwrap();

    controller.select_slot(ts(2025, 3, 28, 9, 0), ts(2025, 3, 28, 10, 0));
    controller.select_event(&record);

    match controller.compose() {
        ComposeState::Composing { mode, draft } => {
            assert_eq!(*mode, ComposeMode::Creating);
            assert_eq!(draft.title, "kept draft");
            assert_eq!(draft.start, ts(2025, 3, 27, 9, 0));
        }
        ComposeState::Closed => panic!("open composition must survive grid gestures"),
    }
}

#[test]
fn edit_field_parses_timestamps_and_keeps_draft_on_failure() {
    let mut controller = controller();
    controller.select_slot(ts(2025, 3, 26, 10, 0), ts(2025, 3, 26, 11, 0));

    controller.edit_field("start", "2025-03-26T09:30").unwrap();
    let err = controller.edit_field("end", "whenever").unwrap_err();
    assert!(matches!(err, FieldError::BadTimestamp(_)));

    match controller.compose() {
        ComposeState::Composing { draft, .. } => {
            assert_eq!(draft.start, ts(2025, 3, 26, 9, 30));
            assert_eq!(draft.end, ts(2025, 3, 26, 11, 0));
        }
        ComposeState::Closed => panic!("modal should still be open"),
    }
}

#[test]
fn edit_field_rejects_unknown_names() {
    let mut controller = controller();
    controller.select_slot(ts(2025, 3, 26, 10, 0), ts(2025, 3, 26, 11, 0));

    let err = controller.edit_field("location", "room 4").unwrap_err();
    assert_eq!(err, FieldError::UnknownField("location".to_string()));
}

#[test]
fn meeting_link_sets_and_clears() {
    let mut controller = controller();
    controller.select_slot(ts(2025, 3, 26, 10, 0), ts(2025, 3, 26, 11, 0));
    controller.edit_field("title", "Sync").unwrap();

    controller
        .edit_field("meeting_link", "https://meet.example.com/xyz")
        .unwrap();
    controller.save().unwrap();
    let saved = controller.events()[0].clone();
    assert_eq!(
        saved.meeting_link.as_deref(),
        Some("https://meet.example.com/xyz")
    );

    controller.select_event(&saved);
    controller.edit_field("meeting_link", "  ").unwrap();
    controller.save().unwrap();
    assert_eq!(controller.events()[0].meeting_link, None);
}

#[test]
fn reversed_window_save_is_rejected_with_modal_open() {
    let mut controller = controller();
    controller.select_slot(ts(2025, 3, 26, 10, 0), ts(2025, 3, 26, 11, 0));
    controller.edit_field("title", "Backwards").unwrap();
    controller.edit_field("end", "2025-03-26T09:00").unwrap();

    let err = controller.save().unwrap_err();
    assert!(matches!(err, EventValidationError::InvalidWindow { .. }));
    assert!(controller.is_composing());
    assert!(controller.events().is_empty());
}

#[test]
fn gestures_on_closed_modal_are_benign() {
    let mut controller = controller();

    controller.edit_field("title", "nobody home").unwrap();
    controller.save().unwrap();
    controller.delete();
    controller.cancel();

    assert_eq!(*controller.compose(), ComposeState::Closed);
    assert!(controller.events().is_empty());
}
