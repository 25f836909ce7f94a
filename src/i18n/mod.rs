//! i18n - Display Language Model
//!
//! The application supports exactly two display languages.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    /// Serbian
    #[default]
    Serbian,
    /// English
    English,
}

impl Language {
    /// Both languages, in toggle order
    pub const ALL: [Language; 2] = [Language::Serbian, Language::English];

    /// Two-letter code shown on the toggle button
    pub fn code(self) -> &'static str {
        match self {
            Language::Serbian => "SR",
            Language::English => "EN",
        }
    }

    /// Lowercase tag used in config files
    pub fn tag(self) -> &'static str {
        match self {
            Language::Serbian => "sr",
            Language::English => "en",
        }
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Serbian => "Srpski",
            Language::English => "English",
        }
    }

    /// The language that is not `self`
    pub fn other(self) -> Language {
        match self {
            Language::Serbian => Language::English,
            Language::English => Language::Serbian,
        }
    }

    /// Map a BCP 47 style tag such as `sr-Latn-RS` or `en_US.UTF-8` to a language.
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let primary = tag
            .split(['-', '_', '.'])
            .next()?
            .trim()
            .to_ascii_lowercase();

        match primary.as_str() {
            "sr" => Some(Language::Serbian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Detect the language from the operating system locale
    pub fn from_system_locale() -> Option<Language> {
        let current = locale_config::Locale::current().to_string();
        // The user's preferred tag comes first in a comma separated list
        let tag = current.split(',').next()?;
        Language::from_locale_tag(tag)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| value.eq_ignore_ascii_case(lang.tag()))
            .ok_or_else(|| Error::UnknownLanguage {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
