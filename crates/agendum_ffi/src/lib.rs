//! FFI shell for the calendar widget runtime.

pub mod api;
