//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::config::AppConfig;
use crate::state::language_state::LanguageState;

actions!(lang_switch, [Quit]);

const WINDOW_TITLE: &str = "Lang Switch";

/// Run the Lang-Switch application
pub fn run_app(config: AppConfig) {
    let language = config.initial_language();
    let window = config.window.clamped();
    info!(language = %language, width = window.width, height = window.height, "Launching window");

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Shared language state, injected into the views that need it
        let language_state = cx.new(|_| LanguageState::new(language));

        let bounds = Bounds::centered(None, size(px(window.width), px(window.height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(language_state.clone(), cx));
            let view: AnyView = workspace.into();
            cx.new(|cx| Root::new(view, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::Action;

    #[test]
    fn quit_action_is_namespaced() {
        assert_eq!(Quit.name(), "lang_switch::Quit");
    }
}
