//! LanguageState - Shared Display Language State

use tracing::info;

use crate::i18n::Language;

/// Read/write access to the active display language.
///
/// Views receive an implementation of this trait instead of looking the
/// language up through a global, so they can be exercised with a test double.
pub trait LanguageContext {
    /// Current display language
    fn language(&self) -> Language;

    /// Replace the display language
    fn set_language(&mut self, language: Language);
}

/// State for the display language, held in an `Entity<LanguageState>`
#[derive(Debug, Clone, Default)]
pub struct LanguageState {
    language: Language,
}

impl LanguageState {
    /// Create the state with an initial language
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl LanguageContext for LanguageState {
    fn language(&self) -> Language {
        self.language
    }

    fn set_language(&mut self, language: Language) {
        info!(from = %self.language, to = %language, "Display language changed");
        self.language = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_given_language() {
        assert_eq!(LanguageState::new(Language::English).language(), Language::English);
        assert_eq!(LanguageState::default().language(), Language::Serbian);
    }

    #[test]
    fn set_language_replaces_value() {
        let mut state = LanguageState::new(Language::Serbian);
        state.set_language(Language::English);
        assert_eq!(state.language(), Language::English);
        state.set_language(Language::English);
        assert_eq!(state.language(), Language::English);
    }
}
