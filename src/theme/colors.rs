//! Colors - Lang-Switch Theme Colors

use gpui::{rgb, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct AppColors;

impl AppColors {
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content card background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }

    /// Background behind the language toggle
    pub fn toggle_bg() -> Rgba { rgb(0x2cb3b8) }
}
