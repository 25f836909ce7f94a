//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state that
//! views observe through an `Entity` handle.

pub mod language_state;
