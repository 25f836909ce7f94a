//! UI Components
//!
//! Reusable views built on GPUI and gpui-component.

pub mod language_toggle;
