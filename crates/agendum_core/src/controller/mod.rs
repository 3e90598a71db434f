//! Interaction machine between the widget, the store and the modal.
//!
//! # Responsibility
//! - Translate user gestures into compose-state transitions.
//! - Keep modal visibility a pure function of controller state.
//!
//! # Invariants
//! - Exactly one of {no modal, composing modal} is derivable at any time.
//! - Delete is only reachable while editing a committed record.

pub mod interaction;
