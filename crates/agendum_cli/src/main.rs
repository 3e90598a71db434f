//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `agendum_core` linkage.
//! - Drive a scripted create/edit interaction and print the agenda, so the
//!   session flow can be sanity-checked without the widget runtime.
//! - Keep output deterministic for quick local checks.

use agendum_core::{
    agenda_entries, snapshot, EventRepository, InteractionController, MemoryEventStore,
};
use chrono::NaiveDate;

fn main() {
    println!("agendum_core version={}", agendum_core::core_version());

    let focus = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
    let mut controller = InteractionController::new(MemoryEventStore::new(), focus);

    // Seed the demo events the widget ships with.
    for (title, start, end) in [
        ("Meeting with Team", "2025-03-26T10:00", "2025-03-26T11:00"),
        ("Deadline", "2025-04-10", "2025-04-10"),
        ("Conference", "2025-05-15", "2025-05-15"),
    ] {
        let start = match agendum_core::parse_timestamp(start) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("seed skipped: {err}");
                continue;
            }
        };
        let end = match agendum_core::parse_timestamp(end) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("seed skipped: {err}");
                continue;
            }
        };
        controller.select_slot(start, end);
        if let Err(err) = controller.edit_field("title", title) {
            eprintln!("seed edit failed: {err}");
        }
        if let Err(err) = controller.save() {
            eprintln!("seed save failed: {err}");
        }
    }

    // Edit the first seeded event through the same gesture path the
    // widget uses.
    if let Some(first) = controller.events().first().cloned() {
        controller.select_event(&first);
        if let Err(err) = controller.edit_field("meeting_link", "https://meet.example.com/xyz") {
            eprintln!("edit failed: {err}");
        }
        if let Err(err) = controller.save() {
            eprintln!("save failed: {err}");
        }
    }

    let view = snapshot(&controller);
    println!(
        "focused={} default_view={:?} events={}",
        view.focused,
        view.default_view,
        view.events.len()
    );
    for row in agenda_entries(&controller) {
        println!("agenda: {row}");
    }
    for event in controller.store().list() {
        if let Some(link) = &event.meeting_link {
            println!("join {}: {link}", event.title);
        }
    }
}
