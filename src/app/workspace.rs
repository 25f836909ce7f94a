//! Workspace - Main Window Content
//!
//! Shows the active language and layers the language toggle over the top-right
//! corner of the window.

use gpui::{
    Context, Entity, FontWeight, IntoElement, ParentElement, Render, Styled, Window, deferred,
    div, prelude::*, px,
};

use crate::components::language_toggle::LanguageToggleButton;
use crate::i18n::Language;
use crate::state::language_state::{LanguageContext, LanguageState};
use crate::theme::colors::AppColors;

/// Paint order for the toggle, above regular content
const TOGGLE_LAYER_PRIORITY: usize = 1;

/// Main workspace containing the application layout
pub struct Workspace {
    language: Entity<LanguageState>,
    toggle: Entity<LanguageToggleButton>,
}

impl Workspace {
    pub fn new(language: Entity<LanguageState>, cx: &mut Context<Self>) -> Self {
        let toggle = cx.new(|cx| LanguageToggleButton::new(language.clone(), cx));

        cx.observe(&language, |_this, _, cx| cx.notify()).detach();

        Self { language, toggle }
    }

    fn greeting(language: Language) -> &'static str {
        match language {
            Language::Serbian => "Dobro došli",
            Language::English => "Welcome",
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let language = self.language.read(cx).language();

        div()
            .id("workspace")
            .relative()
            .size_full()
            .bg(AppColors::background())
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_2()
                    .px_8()
                    .py_6()
                    .rounded_lg()
                    .border_1()
                    .border_color(AppColors::border())
                    .bg(AppColors::content_bg())
                    .child(
                        div()
                            .text_color(AppColors::text_primary())
                            .text_size(px(24.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(Self::greeting(language)),
                    )
                    .child(
                        div()
                            .text_color(AppColors::text_secondary())
                            .text_size(px(14.0))
                            .child(language.display_name()),
                    ),
            )
            // Fixed top-right, painted after the content
            .child(
                deferred(
                    div()
                        .absolute()
                        .top_3()
                        .right_3()
                        .rounded_md()
                        .bg(AppColors::toggle_bg())
                        .child(self.toggle.clone()),
                )
                .with_priority(TOGGLE_LAYER_PRIORITY),
            )
    }
}
