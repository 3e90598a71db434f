//! Surface projection toward the rendering widget.
//!
//! # Responsibility
//! - Re-derive, on demand, the data shape the external calendar widget
//!   consumes from controller + store state.
//! - Route widget callbacks onto controller transitions.
//!
//! # Invariants
//! - The surface holds no state of its own; every value is derived.

pub mod calendar_surface;
