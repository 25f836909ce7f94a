//! Lang-Switch Library
//!
//! A native GPUI window whose display language toggles between Serbian and
//! English through a button pinned to the top-right corner.

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod theme;
