//! Language Toggle
//!
//! A compact button that shows the code of the inactive language and switches
//! to it when clicked.

use gpui::{ClickEvent, Context, Entity, IntoElement, Render, Window};
use gpui_component::{
    Sizable,
    button::{Button, ButtonVariants},
};
use tracing::debug;

use crate::assets::CustomIconName;
use crate::i18n::Language;
use crate::state::language_state::{LanguageContext, LanguageState};

/// Toggle rules, independent of any view
pub struct LanguageToggle;

impl LanguageToggle {
    /// The language a click switches to
    pub fn target(context: &impl LanguageContext) -> Language {
        context.language().other()
    }

    /// Button label: the code of the language that is not active
    pub fn label(context: &impl LanguageContext) -> &'static str {
        Self::target(context).code()
    }

    /// Switch the context to the other language
    pub fn activate(context: &mut impl LanguageContext) {
        let next = Self::target(context);
        debug!(next = %next, "Language toggle activated");
        context.set_language(next);
    }
}

/// View rendering the toggle for an injected language entity
pub struct LanguageToggleButton {
    language: Entity<LanguageState>,
}

impl LanguageToggleButton {
    pub fn new(language: Entity<LanguageState>, cx: &mut Context<Self>) -> Self {
        cx.observe(&language, |_this, _, cx| cx.notify()).detach();

        Self { language }
    }

    fn toggle(&mut self, cx: &mut Context<Self>) {
        self.language.update(cx, |state, cx| {
            LanguageToggle::activate(state);
            cx.notify();
        });
    }
}

impl Render for LanguageToggleButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let label = LanguageToggle::label(self.language.read(cx));

        Button::new("language-toggle")
            .icon(CustomIconName::Languages)
            .label(label)
            .small()
            .ghost()
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.toggle(cx);
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Context double that records every value handed to the setter
    struct RecordingContext {
        current: Language,
        writes: Vec<Language>,
    }

    impl RecordingContext {
        fn new(current: Language) -> Self {
            Self {
                current,
                writes: Vec::new(),
            }
        }
    }

    impl LanguageContext for RecordingContext {
        fn language(&self) -> Language {
            self.current
        }

        fn set_language(&mut self, language: Language) {
            self.writes.push(language);
            self.current = language;
        }
    }

    #[test]
    fn single_activation_switches_to_other_language() {
        for start in Language::ALL {
            let mut ctx = RecordingContext::new(start);
            LanguageToggle::activate(&mut ctx);
            assert_eq!(ctx.language(), start.other());
            assert_eq!(ctx.writes, vec![start.other()]);
        }
    }

    #[test]
    fn two_activations_return_to_start() {
        for start in Language::ALL {
            let mut ctx = RecordingContext::new(start);
            LanguageToggle::activate(&mut ctx);
            LanguageToggle::activate(&mut ctx);
            assert_eq!(ctx.language(), start);
            assert_eq!(ctx.writes.len(), 2);
        }
    }

    #[test]
    fn label_names_the_inactive_language() {
        assert_eq!(LanguageToggle::label(&RecordingContext::new(Language::Serbian)), "EN");
        assert_eq!(LanguageToggle::label(&RecordingContext::new(Language::English)), "SR");
    }

    #[test]
    fn serbian_start_scenario() {
        let mut ctx = RecordingContext::new(Language::Serbian);
        assert_eq!(LanguageToggle::label(&ctx), "EN");

        LanguageToggle::activate(&mut ctx);
        assert_eq!(ctx.language(), Language::English);
        assert_eq!(LanguageToggle::label(&ctx), "SR");
    }

    #[test]
    fn english_start_scenario() {
        let mut ctx = RecordingContext::new(Language::English);
        LanguageToggle::activate(&mut ctx);
        assert_eq!(ctx.language(), Language::Serbian);
    }

    #[test]
    fn setter_only_receives_supported_languages() {
        let mut ctx = RecordingContext::new(Language::English);
        for _ in 0..7 {
            LanguageToggle::activate(&mut ctx);
        }
        assert_eq!(ctx.writes.len(), 7);
        assert!(ctx.writes.iter().all(|lang| Language::ALL.contains(lang)));
        // Writes alternate starting from the language that was not active
        for (i, lang) in ctx.writes.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Language::Serbian
            } else {
                Language::English
            };
            assert_eq!(*lang, expected);
        }
    }

    #[test]
    fn toggle_drives_language_state() {
        let mut state = LanguageState::new(Language::Serbian);
        LanguageToggle::activate(&mut state);
        assert_eq!(state.language(), Language::English);
        assert_eq!(LanguageToggle::label(&state), "SR");
    }
}
