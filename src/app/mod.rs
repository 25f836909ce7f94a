//! Application Layer
//!
//! Contains app initialization, window management, and the workspace view.

pub mod application;
pub mod workspace;
