//! Embedded assets for Lang-Switch
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Custom icon names for Lang-Switch
pub enum CustomIconName {
    /// Languages icon
    Languages,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Languages => "icons/languages.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_icon_is_embedded() {
        let path = CustomIconName::Languages.path();
        assert!(Assets::get(&path).is_some());
    }

    #[test]
    fn only_svg_icons_are_embedded() {
        let files: Vec<_> = Assets::iter().collect();
        assert!(!files.is_empty());
        assert!(files.iter().all(|p| p.starts_with("icons/") && p.ends_with(".svg")));
    }

    #[test]
    fn empty_path_loads_nothing() {
        assert!(matches!(Assets.load(""), Ok(None)));
    }
}
